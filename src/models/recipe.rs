use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "ingredientIds", default)]
    pub ingredient_ids: Vec<u64>,
    #[serde(default)]
    pub quantities: Vec<i64>,
}

/// Name and unit price of a single ingredient item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientValues {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: i64,
    pub price: i64,
}

impl Ingredient {
    pub fn new(values: IngredientValues, quantity: i64) -> Self {
        Self {
            name: values.name,
            quantity,
            price: values.price,
        }
    }

    pub fn cost(&self) -> i64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// Total estimated kamas needed to buy every ingredient
pub fn craft_cost(ingredients: &[Ingredient]) -> i64 {
    ingredients.iter().map(Ingredient::cost).fold(0, i64::saturating_add)
}
