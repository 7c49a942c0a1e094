//! Local collection synchronization.
//!
//! [`FoodSynchronizer`] owns the in-memory list of foods and applies each
//! successful remote call to it:
//!
//! 1. `load` replaces the list with `GET /foods`
//! 2. `create` appends the record returned by `POST /foods`
//! 3. `update` swaps in the record returned by `PUT /foods/{id}`
//! 4. `delete` removes every entry with the requested id after `DELETE /foods/{id}`
//!
//! Failures are either returned or logged and dropped, per [`ErrorPolicy`].

mod error;
mod policy;
mod synchronizer;

pub use error::SyncError;
pub use policy::{ErrorPolicy, Operation};
pub use synchronizer::FoodSynchronizer;
