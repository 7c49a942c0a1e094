//! Foodboard Core Library
//!
//! Menu models and the synchronizer that mirrors a REST food collection.

pub mod collection;
pub mod models;
pub mod store;
pub mod sync;

pub use collection::FoodCollection;
pub use models::{Food, FoodDraft, FoodEdit, FoodId, NewFood, DEFAULT_AVAILABLE};
pub use store::{FoodStore, HttpFoodStore, StoreError};
pub use sync::{ErrorPolicy, FoodSynchronizer, Operation, SyncError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
