//! Saved-camps (favorites) persistence for authenticated users.

pub mod store;

pub use store::FavoritesStore;
