//! Registration status resolution for camp records.
//!
//! Upstream stores an editor-maintained "Registration Status" alongside a
//! "Registration Opens Date". The stored status goes stale the day a camp's
//! registration opens, so display code reconciles it against the date: a
//! stored "Coming Soon" with an opens date in the past becomes "Open Now".
//! An explicit "Not Updated" is never overridden.

use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Normalized registration status. These three strings are the only values
/// display code ever sees, whatever the upstream column contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegistrationStatus {
    #[serde(rename = "Open Now")]
    OpenNow,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    #[serde(rename = "Not Updated")]
    NotUpdated,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::OpenNow => "Open Now",
            RegistrationStatus::ComingSoon => "Coming Soon",
            RegistrationStatus::NotUpdated => "Not Updated",
        }
    }

    /// Parse the stored column value; anything outside the enumeration is
    /// treated as absent.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "Open Now" => Some(RegistrationStatus::OpenNow),
            "Coming Soon" => Some(RegistrationStatus::ComingSoon),
            "Not Updated" => Some(RegistrationStatus::NotUpdated),
            _ => None,
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the display status for today's local date.
pub fn resolve_status(stored: Option<&str>, opens_date: Option<&str>) -> RegistrationStatus {
    resolve_status_on(stored, opens_date, Local::now().date_naive())
}

/// Resolve the display status relative to a given calendar day.
///
/// Stale-correction first: an opens date strictly before `today` forces
/// "Open Now" unless the stored value is an explicit "Not Updated". After
/// that the stored value wins when it is one of the three valid strings,
/// and the date alone decides for records with no usable stored status.
pub fn resolve_status_on(
    stored: Option<&str>,
    opens_date: Option<&str>,
    today: NaiveDate,
) -> RegistrationStatus {
    let raw_date = opens_date.map(str::trim).filter(|s| !s.is_empty());
    let parsed = raw_date.and_then(parse_opens_date);

    if let Some(date) = parsed {
        if date < today && stored != Some("Not Updated") {
            return RegistrationStatus::OpenNow;
        }
    }

    if let Some(status) = stored.and_then(RegistrationStatus::from_stored) {
        return status;
    }

    if raw_date.is_none() {
        return RegistrationStatus::NotUpdated;
    }

    match parsed {
        Some(date) if date < today => RegistrationStatus::OpenNow,
        Some(_) => RegistrationStatus::ComingSoon,
        None => RegistrationStatus::NotUpdated,
    }
}

/// Strict `YYYY-MM-DD` parse. Exactly three numeric dash-separated parts,
/// and the parts must name a real calendar date.
fn parse_opens_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format the opens date for display: `"Feb 2, 2026"`, with `" at 7am"`
/// appended when an opens time is present. The time string is opaque
/// display text and is never parsed. Returns `None` for a missing, blank,
/// or unparsable date.
pub fn format_registration_date(date: Option<&str>, time: Option<&str>) -> Option<String> {
    let raw = date.map(str::trim).filter(|s| !s.is_empty())?;
    let parsed = parse_opens_date(raw)?;
    let mut formatted = parsed.format("%b %-d, %Y").to_string();
    if let Some(t) = time.map(str::trim).filter(|s| !s.is_empty()) {
        formatted.push_str(" at ");
        formatted.push_str(t);
    }
    Some(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stale_coming_soon_becomes_open_now() {
        let status = resolve_status_on(Some("Coming Soon"), Some("2026-06-01"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::OpenNow);
    }

    #[test]
    fn not_updated_is_never_overridden() {
        let status = resolve_status_on(Some("Not Updated"), Some("2026-06-01"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::NotUpdated);
    }

    #[test]
    fn stored_status_wins_for_future_dates() {
        let status = resolve_status_on(Some("Open Now"), Some("2026-09-01"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::OpenNow);

        let status = resolve_status_on(Some("Coming Soon"), Some("2026-09-01"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::ComingSoon);
    }

    #[test]
    fn opens_today_is_not_yet_open() {
        // Strictly-before comparison: the opens day itself still reads as
        // the stored status / Coming Soon.
        let status = resolve_status_on(Some("Coming Soon"), Some("2026-06-15"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::ComingSoon);
    }

    #[test]
    fn unknown_stored_value_falls_through_to_date() {
        let status = resolve_status_on(Some("Opening soonish"), Some("2026-01-01"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::OpenNow);

        let status = resolve_status_on(Some("Opening soonish"), Some("2026-09-01"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::ComingSoon);
    }

    #[test]
    fn missing_date_and_status_is_not_updated() {
        assert_eq!(resolve_status_on(None, None, day(2026, 6, 15)), RegistrationStatus::NotUpdated);
        assert_eq!(
            resolve_status_on(None, Some("   "), day(2026, 6, 15)),
            RegistrationStatus::NotUpdated
        );
    }

    #[test]
    fn malformed_date_is_not_updated() {
        assert_eq!(
            resolve_status_on(None, Some("June 1st"), day(2026, 6, 15)),
            RegistrationStatus::NotUpdated
        );
        assert_eq!(
            resolve_status_on(None, Some("2026-02-30"), day(2026, 6, 15)),
            RegistrationStatus::NotUpdated
        );
        assert_eq!(
            resolve_status_on(None, Some("2026-02-02-01"), day(2026, 6, 15)),
            RegistrationStatus::NotUpdated
        );
    }

    #[test]
    fn malformed_date_does_not_shadow_stored_status() {
        let status = resolve_status_on(Some("Open Now"), Some("garbage"), day(2026, 6, 15));
        assert_eq!(status, RegistrationStatus::OpenNow);
    }

    #[test]
    fn status_is_always_one_of_three_values() {
        let stored = [None, Some(""), Some("Open Now"), Some("Not Updated"), Some("???")];
        let dates = [None, Some(""), Some("2020-01-01"), Some("2099-01-01"), Some("bad")];
        for s in stored {
            for d in dates {
                let status = resolve_status_on(s, d, day(2026, 6, 15));
                assert!(matches!(
                    status,
                    RegistrationStatus::OpenNow
                        | RegistrationStatus::ComingSoon
                        | RegistrationStatus::NotUpdated
                ));
            }
        }
    }

    #[test]
    fn formats_date_with_and_without_time() {
        assert_eq!(
            format_registration_date(Some("2026-02-02"), None).as_deref(),
            Some("Feb 2, 2026")
        );
        assert_eq!(
            format_registration_date(Some("2026-02-02"), Some("7am")).as_deref(),
            Some("Feb 2, 2026 at 7am")
        );
        assert_eq!(format_registration_date(Some(""), Some("7am")), None);
        assert_eq!(format_registration_date(None, Some("7am")), None);
        assert_eq!(format_registration_date(Some("not-a-date"), None), None);
    }

    #[test]
    fn serializes_to_display_strings() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::OpenNow).unwrap(),
            "\"Open Now\""
        );
        assert_eq!(RegistrationStatus::ComingSoon.to_string(), "Coming Soon");
    }
}
