mod food;

pub use food::{Food, FoodDraft, FoodEdit, FoodId, NewFood, DEFAULT_AVAILABLE};
