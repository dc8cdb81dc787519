// Models module - item, recipe and API response shapes

pub mod item;
pub mod recipe;
pub mod responses;

// Re-export all models for easier imports
pub use item::*;
pub use recipe::*;
pub use responses::*;
