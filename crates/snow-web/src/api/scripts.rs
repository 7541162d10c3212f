use serde::{Deserialize, Serialize};

use super::http::fetch_json;
use crate::config::{AJAX_HEADER, CONFIG};

/// The two ServiceNow onChange client scripts produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPayload {
    /// Filters category choices by the selected subcategory.
    pub category_based_on_subcat_script: String,
    /// Filters subcategory choices by the selected category.
    pub subcat_based_on_category_script: String,
}

/// Ask our own server for freshly generated scripts (browser side).
pub async fn fetch_generated_scripts() -> Result<ScriptPayload, String> {
    fetch_json(CONFIG.endpoints.generate_scripts, &[AJAX_HEADER]).await
}

/// Ask the backend directly (server side, used by the relay).
#[cfg(feature = "ssr")]
pub async fn request_generated_scripts(client: &reqwest::Client, backend_url: &str) -> anyhow::Result<ScriptPayload> {
    let url = format!("{}{}", backend_url, CONFIG.endpoints.generate_scripts);
    super::http::get_json(client, &url, &[AJAX_HEADER]).await
}
