use leptos::hydration::{AutoReload, HydrationScripts};
use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::CONFIG;
use crate::pages::{GeneratePage, HomePage};

/// Full HTML document rendered by the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=CONFIG.tagline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/generate_scripts_page") view=GeneratePage />
            </Routes>
        </Router>
    }
}

/// `/generate_scripts_page/` is the backend's historical spelling of the page
/// URL; send it to the route the router actually serves.
#[cfg(feature = "ssr")]
pub fn page_aliases<S>() -> axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    use axum::response::Redirect;
    use axum::routing::get;

    let page = CONFIG.endpoints.generate_page;
    axum::Router::new().route(&format!("{}/", page), get(move || async move { Redirect::permanent(page) }))
}
