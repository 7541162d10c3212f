#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use snow_web::app::{App, page_aliases, shell};
    use snow_web::config::ServerConfig;
    use snow_web::relay::{self, AppState, Relay};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;

    let conf = get_configuration(None).map_err(|e| {
        eprintln!("Failed to load Leptos configuration: {}", e);
        e
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let server_config = ServerConfig::from_env().map_err(|e| {
        eprintln!("Failed to load server configuration: {:#}", e);
        e
    })?;
    let relay = Relay::new(&server_config)?;

    let site_root = leptos_options.site_root.clone();
    let state = AppState {
        leptos_options: leptos_options.clone(),
        relay,
    };

    let app = relay::routes::<AppState>()
        .merge(page_aliases())
        .leptos_routes(&state, routes, {
            let options = leptos_options.clone();
            move || shell(options.clone())
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        eprintln!("Failed to bind to {}: {}", addr, e);
        e
    })?;

    println!("Listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        eprintln!("Server error: {}", e);
        e
    })?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry point is `snow_web::hydrate`, loaded as wasm
}
