//! HTTP plumbing for both sides of the app.
//! reqwest on the server (relay to the script backend), gloo-net in the browser.

use serde::de::DeserializeOwned;

#[cfg(feature = "ssr")]
mod ssr {
    use super::*;
    use anyhow::{Context, Result, bail};
    use std::time::Duration;

    /// Client used by the relay. Redirects are never followed so the backend's
    /// `Location` can be handed back to the browser.
    pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(5)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to create HTTP client")
    }

    pub async fn get_json<T: DeserializeOwned>(
        client: &reqwest::Client,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = client.get(url).header("Accept", "application/json");
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {}", url))?;

        if !response.status().is_success() {
            bail!("HTTP error for {}: {}", url, response.status());
        }

        response
            .json()
            .await
            .with_context(|| format!("JSON parse error for {}", url))
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;

/// Browser-side GET decoding a JSON body.
#[cfg(feature = "hydrate")]
pub async fn fetch_json<T: DeserializeOwned>(url: &str, headers: &[(&str, &str)]) -> Result<T, String> {
    let mut request = gloo_net::http::Request::get(url).header("Accept", "application/json");
    for (name, value) in headers {
        request = request.header(name, value);
    }

    let response = request.send().await.map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

// Server and `cargo check` builds never issue browser requests
#[cfg(not(feature = "hydrate"))]
pub async fn fetch_json<T: DeserializeOwned>(_url: &str, _headers: &[(&str, &str)]) -> Result<T, String> {
    Err("browser requests need the hydrate feature".to_string())
}
