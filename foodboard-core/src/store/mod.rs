//! Access to the remote food collection.
//!
//! The backend exposes a plain JSON resource at `/foods`:
//!
//! - `GET /foods` returns every food
//! - `POST /foods` creates one and returns it with its assigned `id`
//! - `PUT /foods/{id}` replaces one and returns the stored record
//! - `DELETE /foods/{id}` removes one; the body is ignored

mod error;
mod http;

pub use error::StoreError;
pub use http::HttpFoodStore;

use crate::models::{Food, FoodId, NewFood};

/// A remote collection of foods.
///
/// Every call is a single request: no retries and no caching.
#[allow(async_fn_in_trait)]
pub trait FoodStore {
    async fn list(&self) -> Result<Vec<Food>, StoreError>;

    async fn create(&self, food: &NewFood) -> Result<Food, StoreError>;

    async fn update(&self, id: FoodId, food: &Food) -> Result<Food, StoreError>;

    async fn delete(&self, id: FoodId) -> Result<(), StoreError>;
}
