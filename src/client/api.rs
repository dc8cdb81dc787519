use serde_json::Value;
use crate::client::error::LookupError;
use crate::client::query::build_query;
use crate::models::*;
use crate::{API_BASE_URL, DEFAULT_LANGUAGE, v_debug, v_error, v_summary};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

#[derive(Clone)]
pub struct DofusDbClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
    api_log_file: Option<PathBuf>,
}

impl Default for DofusDbClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl DofusDbClient {
    pub fn new(base_url: &str) -> Self {
        DofusDbClient {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            api_log_file: None,
        }
    }

    pub fn from_config(config: &crate::config::DofusDbConfig) -> Self {
        let mut client = Self::new(&config.api.base_url);
        client.set_language(&config.api.language);
        client.set_api_log_file(config.logging.api_log_file.clone().map(PathBuf::from));
        client
    }

    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
    }

    pub fn set_api_log_file(&mut self, path: Option<PathBuf>) {
        self.api_log_file = path;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn slug_param(&self) -> String {
        format!("slug.{}", self.language)
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_body: Option<&str>) {
        let Some(path) = &self.api_log_file else {
            return;
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: {method}\n\
             URL: {url}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
            response_body = response_body.unwrap_or("Not captured")
        );

        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(log_entry.as_bytes()));
        if let Err(e) = written {
            v_debug!("⚠️ Could not write API log {}: {}", path.display(), e);
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, LookupError> {
        v_debug!("🌐 API: GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", url, status, Some(&error_body));
            return Err(LookupError::Status { status });
        }

        let response_text = response.text().await?;
        self.log_api_call("GET", url, status, Some(&response_text));

        Ok(serde_json::from_str(&response_text)?)
    }

    // Item search
    pub fn search_url(&self, name: &str) -> String {
        let slug = self.slug_param();
        format!("{}/items?{}", self.base_url, build_query(&[(slug.as_str(), name)]))
    }

    /// Look up items by localized slug and return the raw response body
    pub async fn try_search_items(&self, name: &str) -> Result<Value, LookupError> {
        let url = self.search_url(name);
        self.get_json(&url).await
    }

    /// Look up items by localized slug, printing the result.
    ///
    /// Failures are logged to stderr and swallowed.
    pub async fn search_items(&self, name: &str) -> Option<Value> {
        match self.try_search_items(name).await {
            Ok(data) => {
                v_summary!("{:#}", data);
                Some(data)
            }
            Err(e) => {
                v_error!("❌ Item lookup for '{}' failed: {}", name, e);
                None
            }
        }
    }

    /// First item whose slug matches the lowercased name
    pub async fn fetch_item(&self, name: &str) -> Result<Option<Value>, LookupError> {
        let slug = self.slug_param();
        let lowered = name.to_lowercase();
        let url = format!(
            "{}/items?{}",
            self.base_url,
            build_query(&[(slug.as_str(), lowered.as_str()), ("$limit", "1")])
        );

        let body = self.get_json(&url).await?;
        Ok(first_data_entry(&body))
    }

    // Recipe operations
    pub async fn fetch_recipe(&self, item_id: u64) -> Result<Option<Recipe>, LookupError> {
        let item_id = item_id.to_string();
        let url = format!(
            "{}/recipes?{}",
            self.base_url,
            build_query(&[
                ("resultId", item_id.as_str()),
                ("$select[]", "ingredientIds"),
                ("$select[]", "quantities"),
            ])
        );

        let body = self.get_json(&url).await?;
        let recipes: RecipesResponse = serde_json::from_value(body)?;
        Ok(recipes.data.into_iter().next())
    }

    /// Name and price of an ingredient; a non-2xx answer yields empty values
    pub async fn fetch_ingredient(&self, ingredient_id: u64) -> Result<IngredientValues, LookupError> {
        let url = format!("{}/items/{}", self.base_url, ingredient_id);

        let item = match self.get_json(&url).await {
            Ok(item) => item,
            Err(LookupError::Status { status }) => {
                v_debug!("⚠️ Ingredient #{} lookup returned {}", ingredient_id, status);
                return Ok(IngredientValues::default());
            }
            Err(e) => return Err(e),
        };

        let name = localized_str(&item, "name", &self.language)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Ingrediente #{}", ingredient_id));
        let price = number_field(&item, "price").unwrap_or(0);

        Ok(IngredientValues { name, price })
    }

    /// Resolve each ingredient id in turn, pairing it with its quantity
    pub async fn fetch_ingredients(&self, ingredient_ids: &[u64], quantities: &[i64]) -> Result<Vec<Ingredient>, LookupError> {
        let mut ingredients = Vec::with_capacity(ingredient_ids.len().min(quantities.len()));

        for (&ingredient_id, &quantity) in ingredient_ids.iter().zip(quantities) {
            let values = self.fetch_ingredient(ingredient_id).await?;
            ingredients.push(Ingredient::new(values, quantity));
        }

        Ok(ingredients)
    }
}
