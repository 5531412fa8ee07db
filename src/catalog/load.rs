use std::fs;
use std::path::Path;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::FoodItem;

/// Load the catalog from a JSON file (array of food items).
///
/// Validation and name deduplication happen in `FoodCatalog::new`; a bad
/// entry is a startup error, never a per-request one.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    let items: Vec<FoodItem> = serde_json::from_str(&content)?;
    FoodCatalog::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG_JSON: &str = r##"[
        {
            "food": "Oats", "calories": 389, "protein": 16.9, "carbs": 66.3, "fat": 6.9,
            "category": ["Grains"], "meal_time": ["breakfast"],
            "shelf_life_days": 365, "storage": "Pantry", "color": "#D2B48C",
            "waste_factor": 0.02, "typical_pack": 500
        },
        {
            "food": "oats", "calories": 380, "protein": 16.0, "carbs": 65.0, "fat": 6.5,
            "category": ["Grains"], "meal_time": ["breakfast"],
            "shelf_life_days": 365, "storage": "Pantry", "color": "#D2B48C",
            "waste_factor": 0.02, "typical_pack": 500
        }
    ]"##;

    #[test]
    fn test_load_deduplicates_by_name() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        // Last occurrence wins.
        assert_eq!(catalog.get("oats").unwrap().calories, 380.0);
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(load_catalog("/nonexistent/catalog.json").is_err());
    }

    #[test]
    fn test_load_malformed_json_errors() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(load_catalog(file.path()).is_err());
    }
}
