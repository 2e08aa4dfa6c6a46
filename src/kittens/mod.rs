//! Kittens Module
//! Mission: The owned-resource collection behind the auth layer

pub mod api;
pub mod models;
pub mod store;

pub use models::{Kitten, KittenView, NewKitten};
pub use store::KittenStore;
