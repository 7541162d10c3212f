//! Site constants shared by server rendering and the hydrated client,
//! plus the server-only runtime config for reaching the script backend.

/// Element ids the components render and look up at runtime.
pub struct DomIds {
    pub subcategories_container: &'static str,
    pub combo_table_body: &'static str,
    pub combo_form: &'static str,
    pub generate_form: &'static str,
    pub category_script_textarea: &'static str,
    pub subcategory_script_textarea: &'static str,
}

/// Form field names posted to the backend.
pub struct FieldNames {
    pub category: &'static str,
    pub subcategories: &'static str,
    pub all_combos: &'static str,
}

pub struct Endpoints {
    /// Where the combo form posts (relayed to the backend).
    pub submit_combos: &'static str,
    /// JSON endpoint returning both generated scripts.
    pub generate_scripts: &'static str,
    pub generate_page: &'static str,
}

/// Copy button look before and after a successful clipboard write.
pub struct CopyFeedback {
    pub idle_label: &'static str,
    pub idle_background: &'static str,
    pub copied_label: &'static str,
    pub copied_background: &'static str,
    pub duration_ms: u32,
}

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub dom: DomIds,
    pub fields: FieldNames,
    pub endpoints: Endpoints,
    pub copy: CopyFeedback,
}

/// Header the backend uses to recognise the script fetch as an AJAX call.
pub const AJAX_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

pub static CONFIG: SiteConfig = SiteConfig {
    name: "ServiceNow Script Generator",
    tagline: "Map categories to subcategories, then generate the onChange client scripts.",
    dom: DomIds {
        subcategories_container: "subcategories-container",
        combo_table_body: "combo-table-body",
        combo_form: "combo-form",
        generate_form: "generate-form",
        category_script_textarea: "category-script-textarea",
        subcategory_script_textarea: "subcategory-script-textarea",
    },
    fields: FieldNames {
        category: "category",
        subcategories: "subcategories[]",
        all_combos: "all_combos",
    },
    endpoints: Endpoints {
        submit_combos: "/",
        generate_scripts: "/generate_scripts/",
        generate_page: "/generate_scripts_page",
    },
    copy: CopyFeedback {
        idle_label: "\u{1F4CB}",
        idle_background: "#0078d7",
        copied_label: "\u{2714}\u{FE0F} Copied!",
        copied_background: "#28a745",
        duration_ms: 1500,
    },
};

#[cfg(feature = "ssr")]
mod ssr {
    use anyhow::{Context, Result, bail};
    use serde::Deserialize;
    use std::path::Path;
    use std::time::Duration;

    const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    // ── TOML shape ────────────────────────────────────────────────────────────

    #[derive(Debug, Deserialize)]
    struct FileConfig {
        backend: BackendSection,
    }

    #[derive(Debug, Deserialize)]
    struct BackendSection {
        url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    }

    fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    // ── Public config ─────────────────────────────────────────────────────────

    /// Where the relay finds the script-generating backend.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ServerConfig {
        /// Backend origin, always without a trailing slash.
        pub backend_url: String,
        pub request_timeout: Duration,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                backend_url: DEFAULT_BACKEND_URL.to_string(),
                request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            }
        }
    }

    impl ServerConfig {
        /// Parse the contents of a `config.toml`.
        pub fn parse(content: &str) -> Result<Self> {
            let file: FileConfig = toml::from_str(content).context("Failed to parse backend config")?;
            Ok(Self {
                backend_url: normalize_backend_url(&file.backend.url)?,
                request_timeout: Duration::from_secs(file.backend.timeout_secs),
            })
        }

        /// Load config from a TOML file (typically `$DATA_DIR/config.toml`).
        pub fn load(path: &Path) -> Result<Self> {
            let content =
                std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
            Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
        }

        /// `$DATA_DIR/config.toml` if it exists, then `BACKEND_URL` on top.
        pub fn from_env() -> Result<Self> {
            let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
            let path = Path::new(&data_dir).join("config.toml");

            let mut config = if path.exists() {
                println!("[config] Loading {}", path.display());
                Self::load(&path)?
            } else {
                Self::default()
            };

            if let Ok(url) = std::env::var("BACKEND_URL") {
                config.backend_url = normalize_backend_url(&url).context("Invalid BACKEND_URL")?;
            }

            println!("[config] Script backend at {}", config.backend_url);
            Ok(config)
        }
    }

    fn normalize_backend_url(raw: &str) -> Result<String> {
        let url = raw.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("backend url must start with http:// or https://, got {:?}", raw);
        }
        Ok(url.to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_full_config() {
            let config = ServerConfig::parse(
                r#"
                [backend]
                url = "https://snow-tools.internal/"
                timeout_secs = 3
                "#,
            )
            .unwrap();
            assert_eq!(config.backend_url, "https://snow-tools.internal");
            assert_eq!(config.request_timeout, Duration::from_secs(3));
        }

        #[test]
        fn test_parse_defaults_timeout() {
            let config = ServerConfig::parse("[backend]\nurl = \"http://localhost:8000\"\n").unwrap();
            assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        }

        #[test]
        fn test_rejects_non_http_url() {
            assert!(ServerConfig::parse("[backend]\nurl = \"ftp://example.com\"\n").is_err());
            assert!(ServerConfig::parse("[backend]\n").is_err());
        }
    }
}

#[cfg(feature = "ssr")]
pub use ssr::ServerConfig;
