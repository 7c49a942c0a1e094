use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the remote store.
pub type FoodId = i64;

/// Availability sent with every newly created food.
pub const DEFAULT_AVAILABLE: bool = true;

/// A menu item as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: String, // kept verbatim, never parsed
    pub image: String,
    pub available: bool,
}

impl Food {
    /// Returns a copy of this food with every field set in `edit` replaced.
    pub fn merged(&self, edit: &FoodEdit) -> Food {
        let mut food = self.clone();
        if let Some(name) = &edit.name {
            food.name = name.clone();
        }
        if let Some(description) = &edit.description {
            food.description = description.clone();
        }
        if let Some(price) = &edit.price {
            food.price = price.clone();
        }
        if let Some(image) = &edit.image {
            food.image = image.clone();
        }
        food
    }

    pub fn with_availability(&self, available: bool) -> Food {
        Food {
            available,
            ..self.clone()
        }
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("#{} {}", self.id, self.name);
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", "=".repeat(title.len()))?;
        writeln!(f, "Price: {}", self.price)?;
        writeln!(
            f,
            "Status: {}",
            if self.available {
                "available"
            } else {
                "unavailable"
            }
        )?;

        if !self.image.is_empty() {
            writeln!(f, "Image: {}", self.image)?;
        }

        if !self.description.is_empty() {
            writeln!(f, "\n{}", self.description)?;
        }

        Ok(())
    }
}

/// Caller-supplied fields for a new food. The store assigns `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl FoodDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Request body for `POST /foods`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewFood {
    #[serde(flatten)]
    pub draft: FoodDraft,
    pub available: bool,
}

impl From<FoodDraft> for NewFood {
    fn from(draft: FoodDraft) -> Self {
        Self {
            draft,
            available: DEFAULT_AVAILABLE,
        }
    }
}

/// Edited values for an existing food. `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FoodEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl From<FoodDraft> for FoodEdit {
    fn from(draft: FoodDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            image: Some(draft.image),
        }
    }
}
