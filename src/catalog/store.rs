use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::FoodItem;

/// Minimum similarity for a fuzzy name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Immutable, name-indexed food catalog.
///
/// Constructed once at startup and shared read-only; item order is the file
/// order, which also decides score ties in the selector.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog, validating invariants and deduplicating by lowercase
    /// name. On a duplicate the last occurrence wins but keeps the first
    /// occurrence's position, so ordering stays deterministic.
    pub fn new(items: Vec<FoodItem>) -> Result<Self> {
        let mut deduped: Vec<FoodItem> = Vec::with_capacity(items.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for item in items {
            if !item.is_valid() {
                return Err(PlanError::InvalidCatalog(item.food.clone()));
            }
            match index.get(&item.key()) {
                Some(&pos) => deduped[pos] = item,
                None => {
                    index.insert(item.key(), deduped.len());
                    deduped.push(item);
                }
            }
        }

        if deduped.is_empty() {
            return Err(PlanError::EmptyCatalog);
        }

        Ok(Self {
            items: deduped,
            index,
        })
    }

    /// Get a food by name (case-insensitive), O(1).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.index.get(&name.to_lowercase()).map(|&i| &self.items[i])
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Fuzzy-find foods by name, best matches first.
    pub fn find_fuzzy(&self, query: &str) -> Vec<(&FoodItem, f64)> {
        let query = query.to_lowercase();
        let mut matches: Vec<(&FoodItem, f64)> = self
            .items
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        matches
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(name: &str, waste_factor: f64) -> FoodItem {
        FoodItem {
            food: name.to_string(),
            calories: 100.0,
            protein: 5.0,
            carbs: 10.0,
            fat: 2.0,
            category: vec![],
            meal_time: vec!["all".to_string()],
            shelf_life_days: 7,
            storage: "Fridge".to_string(),
            color: "#FFFFFF".to_string(),
            waste_factor,
            typical_pack: 500.0,
        }
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = FoodCatalog::new(vec![make_food("Oats", 0.02)]).unwrap();
        assert!(catalog.get("oats").is_some());
        assert!(catalog.get("OATS").is_some());
        assert!(catalog.get("rice").is_none());
    }

    #[test]
    fn test_dedup_last_wins_keeps_position() {
        let catalog = FoodCatalog::new(vec![
            make_food("Oats", 0.02),
            make_food("Rice", 0.03),
            make_food("oats", 0.10),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        // Last occurrence's value, first occurrence's position.
        assert_eq!(catalog.items()[0].waste_factor, 0.10);
        assert_eq!(catalog.items()[1].food, "Rice");
    }

    #[test]
    fn test_invalid_item_rejected() {
        let mut bad = make_food("Oats", 0.02);
        bad.typical_pack = 0.0;
        assert!(FoodCatalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            FoodCatalog::new(vec![]),
            Err(PlanError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_find_fuzzy() {
        let catalog =
            FoodCatalog::new(vec![make_food("Broccoli", 0.2), make_food("Rice", 0.03)]).unwrap();

        let matches = catalog.find_fuzzy("brocoli");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].0.food, "Broccoli");

        assert!(catalog.find_fuzzy("xyzzy").is_empty());
    }
}
