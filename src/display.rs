// Terminal rendering of a single item card
use crate::client::{DofusDbClient, LookupError};
use crate::models::{craft_cost, Ingredient, ItemSummary};
use crate::{v_error, v_summary};

const RULE_WIDTH: usize = 40;

/// What is known about how an item is crafted
#[derive(Debug, Clone, PartialEq)]
pub enum CraftInfo {
    NotCraftable,
    RecipeNotFound,
    Ingredients(Vec<Ingredient>),
}

/// Format kamas with `.` as thousands separator, e.g. `1.234.567`
pub fn format_kamas(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn render_item(item: &ItemSummary, craft: &CraftInfo) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let level = item.level.map_or_else(|| "?".to_string(), |level| level.to_string());

    let mut lines = vec![
        String::new(),
        rule.clone(),
        format!("  Item:   {}", item.name),
        format!("  Nível:  {}", level),
        format!("  Preço:  {} kamas (estimado)", format_kamas(item.price)),
    ];

    match craft {
        CraftInfo::NotCraftable => lines.push("  Craft:  Não".to_string()),
        CraftInfo::RecipeNotFound => {
            lines.push(String::new());
            lines.push("  Receita de Craft:".to_string());
            lines.push("    Receita não encontrada.".to_string());
        }
        CraftInfo::Ingredients(ingredients) => {
            lines.push(String::new());
            lines.push("  Receita de Craft:".to_string());
            for ingredient in ingredients {
                lines.push(format!(
                    "    • {}x  {} Preço: {} kamas (estimado)",
                    ingredient.quantity,
                    ingredient.name,
                    format_kamas(ingredient.price)
                ));
            }
            lines.push(format!("  Custo:  {} kamas (estimado)", format_kamas(craft_cost(ingredients))));
        }
    }

    lines.push(rule);
    lines.push(String::new());
    lines.join("\n")
}

/// Fetch an item by name and build its card, resolving the craft recipe if it has one.
///
/// Returns `Ok(None)` when no item matches the name.
pub async fn item_card(client: &DofusDbClient, name: &str) -> Result<Option<String>, LookupError> {
    let Some(item) = client.fetch_item(name).await? else {
        return Ok(None);
    };
    let summary = ItemSummary::from_value(&item, client.language());

    let craft = match summary.id.filter(|_| summary.is_craftable()) {
        None => CraftInfo::NotCraftable,
        Some(item_id) => match client.fetch_recipe(item_id).await {
            Ok(None) => CraftInfo::RecipeNotFound,
            Err(LookupError::Status { status }) => {
                v_error!("Erro ao buscar receita: {}", status);
                CraftInfo::RecipeNotFound
            }
            Err(e) => return Err(e),
            Ok(Some(recipe)) => {
                v_summary!("  Buscando {} ingrediente(s)...", recipe.ingredient_ids.len());
                let ingredients = client
                    .fetch_ingredients(&recipe.ingredient_ids, &recipe.quantities)
                    .await?;
                CraftInfo::Ingredients(ingredients)
            }
        },
    };

    Ok(Some(render_item(&summary, &craft)))
}
