//! Keeps a local food collection in step with a remote store.

use super::error::SyncError;
use super::policy::{ErrorPolicy, Operation};
use crate::collection::FoodCollection;
use crate::models::{Food, FoodDraft, FoodEdit, FoodId, NewFood};
use crate::store::{FoodStore, StoreError};

/// Owns the local collection and mirrors each successful remote call into it.
///
/// Mutations take `&mut self`, so one operation finishes (including its
/// network round trip) before the next one on the same synchronizer starts.
pub struct FoodSynchronizer<S> {
    store: S,
    foods: FoodCollection,
    policy: ErrorPolicy,
}

impl<S: FoodStore> FoodSynchronizer<S> {
    /// Creates a synchronizer with an empty collection and the default policy.
    pub fn new(store: S) -> Self {
        Self {
            store,
            foods: FoodCollection::new(),
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn foods(&self) -> &FoodCollection {
        &self.foods
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the local collection with the store's full list.
    ///
    /// Returns the number of foods loaded.
    pub async fn load(&mut self) -> Result<Option<usize>, SyncError> {
        let result = self.store.list().await;
        let Some(foods) = self.settle(Operation::Load, result)? else {
            return Ok(None);
        };

        let count = foods.len();
        self.foods.replace_all(foods);
        tracing::debug!("Loaded {} food(s)", count);
        Ok(Some(count))
    }

    /// Creates a food from `draft`, always marked available, and appends the
    /// stored record.
    pub async fn create(&mut self, draft: FoodDraft) -> Result<Option<Food>, SyncError> {
        let body = NewFood::from(draft);
        let result = self.store.create(&body).await;
        let Some(created) = self.settle(Operation::Create, result)? else {
            return Ok(None);
        };

        self.foods.append(created.clone());
        tracing::debug!("Created food {}", created.id);
        Ok(Some(created))
    }

    /// Sends `edit` merged over `target` and swaps in the stored record.
    ///
    /// The local entry is matched by the id in the store's response.
    pub async fn update(
        &mut self,
        target: &Food,
        edit: FoodEdit,
    ) -> Result<Option<Food>, SyncError> {
        let merged = target.merged(&edit);
        self.put(Operation::Update, target.id, &merged).await
    }

    /// Like [`update`](Self::update), with the target taken from the local collection.
    pub async fn update_by_id(
        &mut self,
        id: FoodId,
        edit: FoodEdit,
    ) -> Result<Option<Food>, SyncError> {
        let target = self.foods.get(id).cloned().ok_or(SyncError::NotFound(id))?;
        self.update(&target, edit).await
    }

    /// Deletes `id` remotely, then drops every local food with that id.
    ///
    /// Returns the number of local entries removed.
    pub async fn delete(&mut self, id: FoodId) -> Result<Option<usize>, SyncError> {
        let result = self.store.delete(id).await;
        if self.settle(Operation::Delete, result)?.is_none() {
            return Ok(None);
        }

        let removed = self.foods.remove(id);
        tracing::debug!("Deleted food {} ({} local entries)", id, removed);
        Ok(Some(removed))
    }

    /// Stores the food with its `available` flag set as given.
    pub async fn set_availability(
        &mut self,
        id: FoodId,
        available: bool,
    ) -> Result<Option<Food>, SyncError> {
        let target = self.foods.get(id).ok_or(SyncError::NotFound(id))?;
        let body = target.with_availability(available);
        self.put(Operation::SetAvailability, id, &body).await
    }

    /// Flips the `available` flag of a food.
    pub async fn toggle_availability(&mut self, id: FoodId) -> Result<Option<Food>, SyncError> {
        let available = self
            .foods
            .get(id)
            .map(|f| f.available)
            .ok_or(SyncError::NotFound(id))?;
        self.set_availability(id, !available).await
    }

    async fn put(
        &mut self,
        operation: Operation,
        id: FoodId,
        body: &Food,
    ) -> Result<Option<Food>, SyncError> {
        let result = self.store.update(id, body).await;
        let Some(updated) = self.settle(operation, result)? else {
            return Ok(None);
        };

        let replaced = self.foods.replace(&updated);
        tracing::debug!("Updated food {} ({} local entries)", updated.id, replaced);
        Ok(Some(updated))
    }

    fn settle<T>(
        &self,
        operation: Operation,
        result: Result<T, StoreError>,
    ) -> Result<Option<T>, SyncError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if self.policy.recovers(operation) => {
                tracing::warn!("Failed to {} food: {}", operation, e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
