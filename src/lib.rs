pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod server;

pub use catalog::FoodCatalog;
pub use error::{PlanError, Result};
pub use models::{FoodItem, PlanResponse, Profile};
