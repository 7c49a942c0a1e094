//! Ordered in-memory list of foods.

use crate::models::{Food, FoodId};

/// The local copy of the remote collection, in insertion order.
///
/// Ids are not checked for uniqueness here; that is the store's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodCollection {
    foods: Vec<Food>,
}

impl FoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Food> {
        self.foods.iter()
    }

    pub fn as_slice(&self) -> &[Food] {
        &self.foods
    }

    /// First food with the given id.
    pub fn get(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn ids(&self) -> Vec<FoodId> {
        self.foods.iter().map(|f| f.id).collect()
    }

    /// Discards the current contents.
    pub fn replace_all(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    pub fn append(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Replaces every food whose id matches `food.id`, keeping positions.
    ///
    /// Returns the number of replaced entries.
    pub fn replace(&mut self, food: &Food) -> usize {
        let mut replaced = 0;
        for slot in self.foods.iter_mut().filter(|f| f.id == food.id) {
            *slot = food.clone();
            replaced += 1;
        }
        replaced
    }

    /// Removes every food with the given id. Returns how many were removed.
    pub fn remove(&mut self, id: FoodId) -> usize {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        before - self.foods.len()
    }
}

impl From<Vec<Food>> for FoodCollection {
    fn from(foods: Vec<Food>) -> Self {
        Self { foods }
    }
}

impl<'a> IntoIterator for &'a FoodCollection {
    type Item = &'a Food;
    type IntoIter = std::slice::Iter<'a, Food>;

    fn into_iter(self) -> Self::IntoIter {
        self.foods.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: FoodId, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: String::new(),
            price: "10.00".to_string(),
            image: String::new(),
            available: true,
        }
    }

    fn names(collection: &FoodCollection) -> Vec<&str> {
        collection.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let collection = FoodCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut collection = FoodCollection::new();
        collection.append(food(2, "B"));
        collection.append(food(1, "A"));
        collection.append(food(3, "C"));
        assert_eq!(collection.ids(), vec![2, 1, 3]);
    }

    #[test]
    fn test_replace_all_with_empty_clears() {
        let mut collection = FoodCollection::from(vec![food(1, "A"), food(2, "B")]);
        collection.replace_all(Vec::new());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_replace_keeps_position_and_others() {
        let mut collection =
            FoodCollection::from(vec![food(1, "A"), food(2, "B"), food(3, "C")]);
        let replaced = collection.replace(&food(2, "B2"));

        assert_eq!(replaced, 1);
        assert_eq!(names(&collection), vec!["A", "B2", "C"]);
        assert_eq!(collection.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut collection = FoodCollection::from(vec![food(1, "A")]);
        assert_eq!(collection.replace(&food(9, "Z")), 0);
        assert_eq!(names(&collection), vec!["A"]);
    }

    #[test]
    fn test_remove_all_matches() {
        let mut collection = FoodCollection::from(vec![
            food(1, "A"),
            food(2, "B"),
            food(1, "A again"),
            food(3, "C"),
        ]);
        assert_eq!(collection.remove(1), 2);
        assert_eq!(names(&collection), vec!["B", "C"]);
        assert_eq!(collection.remove(42), 0);
    }

    #[test]
    fn test_get_by_id() {
        let collection = FoodCollection::from(vec![food(1, "A"), food(2, "B")]);
        assert_eq!(collection.get(2).map(|f| f.name.as_str()), Some("B"));
        assert!(collection.get(5).is_none());
    }
}
