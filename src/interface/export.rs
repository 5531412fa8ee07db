use std::path::Path;

use crate::error::Result;
use crate::models::ShoppingLine;

/// Write the shopping list to a CSV file.
pub fn write_shopping_csv(lines: &[ShoppingLine], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "food",
        "buy_grams",
        "typical_grams",
        "saved_grams",
        "use_by",
        "urgency",
        "storage",
        "cost_usd",
        "meal_time",
    ])?;

    for line in lines {
        wtr.write_record([
            line.food.clone(),
            line.buy_ai.to_string(),
            format!("{:.0}", line.buy_typical),
            format!("{:.0}", line.saved_grams),
            line.use_by.clone(),
            line.urgency.as_str().to_string(),
            line.storage.clone(),
            line.cost.clone(),
            line.meal_time.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
