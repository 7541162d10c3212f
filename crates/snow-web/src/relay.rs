//! Same-origin relay to the script backend.
//!
//! The browser only ever talks to this server. Script fetches and the combo
//! form POST are forwarded to the backend configured in [`ServerConfig`];
//! the backend owns generation and persistence.
//!
//! [`ServerConfig`]: crate::config::ServerConfig

#[cfg(feature = "ssr")]
mod ssr {
    use anyhow::{Context, Result};
    use axum::Router;
    use axum::body::{Body, Bytes};
    use axum::extract::{FromRef, State};
    use axum::response::{IntoResponse, Json, Response};
    use axum::routing::{get, post};
    use http::{HeaderMap, HeaderValue, StatusCode, header};
    use leptos::config::LeptosOptions;

    use crate::api::{ScriptPayload, http::build_client, request_generated_scripts};
    use crate::config::{CONFIG, ServerConfig};

    /// Backend location plus the pooled client used to reach it.
    #[derive(Clone)]
    pub struct Relay {
        client: reqwest::Client,
        backend_url: String,
    }

    /// Cookie the backend's CSRF middleware issues, and the form field it
    /// expects to carry the same token on every POST.
    const CSRF_COOKIE: &str = "csrftoken";
    const CSRF_FIELD: &str = "csrfmiddlewaretoken";

    /// Backend answer handed back to the browser as-is (apart from `Location`).
    #[derive(Debug)]
    pub struct RelayedResponse {
        pub status: StatusCode,
        pub location: Option<String>,
        pub content_type: Option<HeaderValue>,
        pub set_cookies: Vec<HeaderValue>,
        pub body: Bytes,
    }

    impl Relay {
        pub fn new(config: &ServerConfig) -> Result<Self> {
            Ok(Self {
                client: build_client(config.request_timeout)?,
                backend_url: config.backend_url.clone(),
            })
        }

        /// Relative redirects point at the backend, not at us.
        fn absolute_location(&self, location: &str) -> String {
            if location.starts_with('/') {
                format!("{}{}", self.backend_url, location)
            } else {
                location.to_string()
            }
        }

        pub async fn fetch_scripts(&self) -> Result<ScriptPayload> {
            request_generated_scripts(&self.client, &self.backend_url).await
        }

        /// Ask the backend's form page for a CSRF cookie. `None` when the
        /// backend does not issue one.
        async fn issue_csrf_token(&self) -> Result<Option<(String, HeaderValue)>> {
            let url = format!("{}{}", self.backend_url, CONFIG.endpoints.submit_combos);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .with_context(|| format!("HTTP GET failed for {}", url))?;

            Ok(response.headers().get_all(header::SET_COOKIE).iter().find_map(|value| {
                let token = set_cookie_value(value.to_str().ok()?, CSRF_COOKIE)?;
                is_token(token).then(|| (token.to_string(), value.clone()))
            }))
        }

        /// Forward the combo form to the backend along with the browser's
        /// cookies and a CSRF token, fetching one first if the browser has none.
        pub async fn forward_combos(&self, headers: &HeaderMap, body: Bytes) -> Result<RelayedResponse> {
            let url = format!("{}{}", self.backend_url, CONFIG.endpoints.submit_combos);

            let browser_cookies = joined_cookies(headers);
            let mut set_cookies = Vec::new();
            let token = match browser_cookies
                .as_deref()
                .and_then(|c| cookie_value(c, CSRF_COOKIE))
                .filter(|t| is_token(t))
            {
                Some(token) => Some(token.to_string()),
                None => match self.issue_csrf_token().await? {
                    Some((token, cookie)) => {
                        set_cookies.push(cookie);
                        Some(token)
                    }
                    None => {
                        println!("[relay] Backend issued no CSRF cookie; posting without a token");
                        None
                    }
                },
            };

            let content_type = headers.get(header::CONTENT_TYPE);
            let body = match (&token, content_type) {
                (Some(token), Some(ct)) if is_urlencoded(ct) => with_csrf_field(&body, token),
                _ => body,
            };

            let mut request = self
                .client
                .post(&url)
                .header(header::REFERER, format!("{}/", self.backend_url));
            if let Some(content_type) = content_type {
                request = request.header(header::CONTENT_TYPE, content_type.clone());
            }
            if let Some(cookie) = backend_cookie_header(browser_cookies.as_deref(), token.as_deref()) {
                request = request.header(header::COOKIE, cookie);
            }

            let response = request
                .body(body)
                .send()
                .await
                .with_context(|| format!("HTTP POST failed for {}", url))?;

            let status = response.status();
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(|v| self.absolute_location(v));
            let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
            set_cookies.extend(response.headers().get_all(header::SET_COOKIE).iter().cloned());
            let body = response
                .bytes()
                .await
                .with_context(|| format!("Failed to read response body from {}", url))?;

            Ok(RelayedResponse {
                status,
                location,
                content_type,
                set_cookies,
                body,
            })
        }
    }

    // ── Cookie and form helpers ───────────────────────────────────────────────

    fn joined_cookies(headers: &HeaderMap) -> Option<String> {
        let parts: Vec<&str> = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        (!parts.is_empty()).then(|| parts.join("; "))
    }

    /// Value of `name` in a `Cookie` request header.
    fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
        cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Value of `name` in a `Set-Cookie` response header, ignoring attributes.
    fn set_cookie_value<'a>(set_cookie: &'a str, name: &str) -> Option<&'a str> {
        let (key, value) = set_cookie.split(';').next()?.trim().split_once('=')?;
        (key == name).then_some(value)
    }

    /// Tokens go into a form body unescaped, so only plain alphanumerics pass.
    fn is_token(value: &str) -> bool {
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric())
    }

    fn is_urlencoded(content_type: &HeaderValue) -> bool {
        content_type
            .to_str()
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false)
    }

    /// Browser cookies with any stale CSRF cookie replaced by `token`.
    fn backend_cookie_header(browser: Option<&str>, token: Option<&str>) -> Option<String> {
        let mut pairs: Vec<String> = browser
            .into_iter()
            .flat_map(|c| c.split(';'))
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split_once('=').map(|(key, _)| key) != Some(CSRF_COOKIE))
            .map(str::to_string)
            .collect();
        if let Some(token) = token {
            pairs.push(format!("{}={}", CSRF_COOKIE, token));
        }
        (!pairs.is_empty()).then(|| pairs.join("; "))
    }

    /// Append the CSRF field unless the form already carries one.
    fn with_csrf_field(body: &[u8], token: &str) -> Bytes {
        let existing = String::from_utf8_lossy(body);
        let already_set = existing
            .split('&')
            .any(|pair| pair.split_once('=').map_or(pair, |(key, _)| key) == CSRF_FIELD);
        if already_set {
            return Bytes::copy_from_slice(body);
        }

        let mut out = body.to_vec();
        if !out.is_empty() {
            out.push(b'&');
        }
        out.extend_from_slice(format!("{}={}", CSRF_FIELD, token).as_bytes());
        Bytes::from(out)
    }

    impl IntoResponse for RelayedResponse {
        fn into_response(self) -> Response {
            let mut builder = http::Response::builder().status(self.status);
            if let Some(location) = self.location {
                builder = builder.header(header::LOCATION, location);
            }
            if let Some(content_type) = self.content_type {
                builder = builder.header(header::CONTENT_TYPE, content_type);
            }
            for cookie in self.set_cookies {
                builder = builder.header(header::SET_COOKIE, cookie);
            }
            builder.body(Body::from(self.body)).unwrap_or_else(|e| {
                eprintln!("[relay] Could not rebuild backend response: {}", e);
                StatusCode::BAD_GATEWAY.into_response()
            })
        }
    }

    /// `GET /generate_scripts/`
    pub async fn generate_scripts(State(relay): State<Relay>) -> Response {
        match relay.fetch_scripts().await {
            Ok(payload) => Json(payload).into_response(),
            Err(e) => {
                eprintln!("[relay] Script generation failed: {:#}", e);
                StatusCode::BAD_GATEWAY.into_response()
            }
        }
    }

    /// `POST /` from the combo form's native submit.
    pub async fn submit_combos(State(relay): State<Relay>, headers: HeaderMap, body: Bytes) -> Response {
        println!("[relay] Forwarding {} byte combo submission", body.len());

        match relay.forward_combos(&headers, body).await {
            Ok(relayed) => {
                println!("[relay] Backend answered {}", relayed.status);
                relayed.into_response()
            }
            Err(e) => {
                eprintln!("[relay] Combo submission failed: {:#}", e);
                StatusCode::BAD_GATEWAY.into_response()
            }
        }
    }

    /// Relay routes for any router state that can hand out a [`Relay`].
    pub fn routes<S>() -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
        Relay: FromRef<S>,
    {
        Router::new()
            .route(CONFIG.endpoints.submit_combos, post(submit_combos))
            .route(CONFIG.endpoints.generate_scripts, get(generate_scripts))
    }

    /// Router state for the full server.
    #[derive(Clone)]
    pub struct AppState {
        pub leptos_options: LeptosOptions,
        pub relay: Relay,
    }

    impl FromRef<AppState> for LeptosOptions {
        fn from_ref(state: &AppState) -> Self {
            state.leptos_options.clone()
        }
    }

    impl FromRef<AppState> for Relay {
        fn from_ref(state: &AppState) -> Self {
            state.relay.clone()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::time::Duration;

        fn relay() -> Relay {
            Relay::new(&ServerConfig {
                backend_url: "http://backend.test:8000".to_string(),
                request_timeout: Duration::from_secs(1),
            })
            .unwrap()
        }

        #[test]
        fn test_relative_location_points_at_backend() {
            assert_eq!(relay().absolute_location("/add_to_snow/"), "http://backend.test:8000/add_to_snow/");
        }

        #[test]
        fn test_absolute_location_untouched() {
            assert_eq!(
                relay().absolute_location("https://elsewhere.test/done"),
                "https://elsewhere.test/done"
            );
        }

        #[test]
        fn test_cookie_lookup() {
            assert_eq!(cookie_value("sessionid=s1; csrftoken=abc", "csrftoken"), Some("abc"));
            assert_eq!(cookie_value("sessionid=s1", "csrftoken"), None);
            assert_eq!(
                set_cookie_value("csrftoken=tok123; expires=Sat, 17 Oct 2027 10:00:00 GMT; Path=/", "csrftoken"),
                Some("tok123")
            );
            assert_eq!(set_cookie_value("messages=ok; Path=/", "csrftoken"), None);
            assert!(is_token("tok123"));
            assert!(!is_token("tok;123"));
            assert!(!is_token(""));
        }

        #[test]
        fn test_backend_cookie_replaces_stale_token() {
            assert_eq!(
                backend_cookie_header(Some("csrftoken=old; sessionid=s1"), Some("new")).as_deref(),
                Some("sessionid=s1; csrftoken=new")
            );
            assert_eq!(backend_cookie_header(None, Some("new")).as_deref(), Some("csrftoken=new"));
            assert_eq!(backend_cookie_header(None, None), None);
        }

        #[test]
        fn test_csrf_field_appended_once() {
            assert_eq!(
                with_csrf_field(b"all_combos=%5B%5D", "tok123"),
                Bytes::from_static(b"all_combos=%5B%5D&csrfmiddlewaretoken=tok123")
            );
            assert_eq!(with_csrf_field(b"", "tok123"), Bytes::from_static(b"csrfmiddlewaretoken=tok123"));
            assert_eq!(
                with_csrf_field(b"csrfmiddlewaretoken=mine&all_combos=%5B%5D", "tok123"),
                Bytes::from_static(b"csrfmiddlewaretoken=mine&all_combos=%5B%5D")
            );
        }
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;
