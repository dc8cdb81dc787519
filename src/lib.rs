// DofusDB item lookup library
// Thin async client over the public DofusDB REST API

pub mod models;
pub mod client;
pub mod config;
pub mod display;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    item::ItemSummary,
    recipe::{Recipe, Ingredient, IngredientValues, craft_cost},
};

pub use client::{DofusDbClient, LookupError};
pub use config::DofusDbConfig;

// Constants
pub const API_BASE_URL: &str = "https://api.dofusdb.fr";
pub const DEFAULT_LANGUAGE: &str = "pt";
pub const DEFAULT_ITEM_NAME: &str = "potente menor";
pub const CONFIG_FILE: &str = "dofusdb.toml";
