use dofusdb_lookup::client::{build_query, encode_uri_component};
use dofusdb_lookup::display::{format_kamas, render_item, CraftInfo};
use dofusdb_lookup::models::{craft_cost, first_data_entry, Ingredient, IngredientValues, ItemSummary, Recipe};
use dofusdb_lookup::verbosity::{get_verbosity_level, is_enabled, set_verbosity_level, MAX_VERBOSITY};
use dofusdb_lookup::{DofusDbConfig, API_BASE_URL};
use serde_json::json;

#[test]
fn test_encode_uri_component() {
    assert_eq!(encode_uri_component("potente menor"), "potente%20menor");
    assert_eq!(encode_uri_component("poção"), "po%C3%A7%C3%A3o");
    assert_eq!(encode_uri_component("a+b&c=d/e?"), "a%2Bb%26c%3Dd%2Fe%3F");
    assert_eq!(encode_uri_component("keep-_.!~*'()"), "keep-_.!~*'()");
    assert_eq!(encode_uri_component(""), "");
}

#[test]
fn test_build_query_encodes_keys_and_values() {
    assert_eq!(
        build_query(&[("slug.pt", "potente menor"), ("$limit", "1")]),
        "slug.pt=potente%20menor&%24limit=1"
    );
    assert_eq!(build_query(&[("$select[]", "quantities")]), "%24select%5B%5D=quantities");
}

#[test]
fn test_item_summary_reads_fields() {
    let item = json!({
        "id": 123,
        "name": {"pt": "Potente Menor", "fr": "Potion Mineure"},
        "level": 10,
        "price": 1500.0,
        "hasRecipe": true
    });

    let summary = ItemSummary::from_value(&item, "pt");
    assert_eq!(summary.id, Some(123));
    assert_eq!(summary.name, "Potente Menor");
    assert_eq!(summary.level, Some(10));
    assert_eq!(summary.price, 1500);
    assert!(summary.is_craftable());

    assert_eq!(ItemSummary::from_value(&item, "fr").name, "Potion Mineure");
}

#[test]
fn test_item_summary_defaults() {
    let summary = ItemSummary::from_value(&json!({}), "pt");
    assert_eq!(summary.id, None);
    assert_eq!(summary.name, "Desconhecido");
    assert_eq!(summary.level, None);
    assert_eq!(summary.price, 0);
    assert!(!summary.is_craftable());
}

#[test]
fn test_first_data_entry() {
    assert_eq!(first_data_entry(&json!({"data": [{"id": 1}, {"id": 2}]})), Some(json!({"id": 1})));
    assert_eq!(first_data_entry(&json!({"data": []})), None);
    assert_eq!(first_data_entry(&json!({"total": 0})), None);
    assert_eq!(first_data_entry(&json!([1, 2])), None);
}

#[test]
fn test_recipe_deserializes_camel_case() {
    let recipe: Recipe = serde_json::from_value(json!({"ingredientIds": [1, 2], "quantities": [5, 1]})).unwrap();
    assert_eq!(recipe.ingredient_ids, vec![1, 2]);
    assert_eq!(recipe.quantities, vec![5, 1]);
}

#[test]
fn test_craft_cost() {
    let ingredients = vec![
        Ingredient::new(IngredientValues { name: "Trigo".to_string(), price: 10 }, 3),
        Ingredient::new(IngredientValues::default(), 4),
        Ingredient::new(IngredientValues { name: "Água".to_string(), price: 2 }, 1000),
    ];
    assert_eq!(ingredients[0].cost(), 30);
    assert_eq!(craft_cost(&ingredients), 2030);
    assert_eq!(craft_cost(&[]), 0);
}

#[test]
fn test_format_kamas() {
    assert_eq!(format_kamas(0), "0");
    assert_eq!(format_kamas(999), "999");
    assert_eq!(format_kamas(1000), "1.000");
    assert_eq!(format_kamas(1234567), "1.234.567");
    assert_eq!(format_kamas(-45000), "-45.000");
}

#[test]
fn test_render_not_craftable() {
    let summary = ItemSummary {
        id: Some(1),
        name: "Pedra".to_string(),
        level: Some(1),
        price: 12,
        has_recipe: false,
    };

    let card = render_item(&summary, &CraftInfo::NotCraftable);
    let rule = "=".repeat(40);
    let expected = format!(
        "\n{rule}\n  Item:   Pedra\n  Nível:  1\n  Preço:  12 kamas (estimado)\n  Craft:  Não\n{rule}\n"
    );
    assert_eq!(card, expected);
}

#[test]
fn test_config_defaults_and_partial_toml() {
    let config = DofusDbConfig::default();
    assert_eq!(config.api.base_url, API_BASE_URL);
    assert_eq!(config.api.language, "pt");
    assert_eq!(config.logging.verbosity, 0);
    assert!(config.logging.api_log_file.is_none());
    assert!(config.validate().is_ok());

    let partial = DofusDbConfig::from_toml("[logging]\napi_log_file = \"api_debug.log\"\n").unwrap();
    assert_eq!(partial.api, config.api);
    assert_eq!(partial.logging.api_log_file.as_deref(), Some("api_debug.log"));
}

#[test]
fn test_config_validation() {
    let mut config = DofusDbConfig::default();
    config.api.base_url = "ftp://api.dofusdb.fr".to_string();
    assert!(config.validate().is_err());

    let mut config = DofusDbConfig::default();
    config.api.base_url = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = DofusDbConfig::default();
    config.api.language = "p1".to_string();
    assert!(config.validate().is_err());

    let mut config = DofusDbConfig::default();
    config.logging.verbosity = 3;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let path = std::env::temp_dir().join("dofusdb_lookup_missing_config.toml");
    let _ = std::fs::remove_file(&path);

    let config = DofusDbConfig::load_or_default(path.to_str().unwrap()).unwrap();
    assert_eq!(config, DofusDbConfig::default());
    assert!(!path.exists(), "loading must not create the file");
}

#[test]
fn test_verbosity_level_is_clamped() {
    set_verbosity_level(7);
    assert_eq!(get_verbosity_level(), MAX_VERBOSITY);
    assert!(is_enabled(2));

    set_verbosity_level(0);
    assert!(is_enabled(0));
    assert!(!is_enabled(1));
}

#[test]
fn test_craft_cost_saturates_on_huge_prices() {
    let huge = Ingredient::new(IngredientValues { name: "Dofus".to_string(), price: i64::MAX }, 2);
    assert_eq!(huge.cost(), i64::MAX);

    let ingredients = vec![
        huge,
        Ingredient::new(IngredientValues { name: "Trigo".to_string(), price: 10 }, 3),
    ];
    assert_eq!(craft_cost(&ingredients), i64::MAX);
}
