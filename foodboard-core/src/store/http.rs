//! JSON-over-HTTP food store.

use reqwest::Response;

use super::{FoodStore, StoreError};
use crate::models::{Food, FoodId, NewFood};

/// [`FoodStore`] backed by a REST server.
#[derive(Debug, Clone)]
pub struct HttpFoodStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFoodStore {
    /// Creates a store for the server at `base_url` (e.g. "http://localhost:3333").
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a store that sends requests through an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    pub(crate) fn item_url(&self, id: FoodId) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }

    fn ensure_success(
        method: &'static str,
        url: String,
        resp: Response,
    ) -> Result<Response, StoreError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(StoreError::Status {
                method,
                url,
                status,
            })
        }
    }
}

impl FoodStore for HttpFoodStore {
    async fn list(&self) -> Result<Vec<Food>, StoreError> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let foods = Self::ensure_success("GET", url, resp)?
            .json::<Vec<Food>>()
            .await?;
        Ok(foods)
    }

    async fn create(&self, food: &NewFood) -> Result<Food, StoreError> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);

        let resp = self.client.post(&url).json(food).send().await?;
        let created = Self::ensure_success("POST", url, resp)?
            .json::<Food>()
            .await?;
        Ok(created)
    }

    async fn update(&self, id: FoodId, food: &Food) -> Result<Food, StoreError> {
        let url = self.item_url(id);
        tracing::debug!("PUT {}", url);

        let resp = self.client.put(&url).json(food).send().await?;
        let updated = Self::ensure_success("PUT", url, resp)?
            .json::<Food>()
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: FoodId) -> Result<(), StoreError> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);

        let resp = self.client.delete(&url).send().await?;
        Self::ensure_success("DELETE", url, resp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_base() {
        let store = HttpFoodStore::new("http://localhost:3333");
        assert_eq!(store.collection_url(), "http://localhost:3333/foods");
        assert_eq!(store.item_url(4), "http://localhost:3333/foods/4");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let store = HttpFoodStore::new("https://api.example.com/v1/");
        assert_eq!(store.base_url(), "https://api.example.com/v1");
        assert_eq!(store.item_url(12), "https://api.example.com/v1/foods/12");
    }
}
