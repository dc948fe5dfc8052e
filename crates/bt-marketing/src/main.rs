//! BlockTrace Marketing Site
//!
//! A Leptos SSR marketing website.

use axum::Router;
use bt_core::{SiteConfig, SiteError, SiteResult};
use bt_marketing::app::App;
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = SiteConfig::from_env();

    let filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| bt_core::config::DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match config {
        Ok(config) => serve(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(error = %e, "Marketing site stopped");
        std::process::exit(1);
    }
}

async fn serve(config: SiteConfig) -> SiteResult<()> {
    let conf = get_configuration(None)
        .await
        .map_err(|e| SiteError::Config(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(addr) = config.addr {
        leptos_options.site_addr = addr;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/images", ServeDir::new(&config.asset_dir))
        .fallback(leptos_axum::file_and_error_handler(App))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    for asset in config.missing_assets() {
        warn!(asset = %asset, dir = %config.asset_dir.display(), "Bundled image not found");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Marketing site listening on http://{} (images from {})",
        addr,
        config.asset_dir.display()
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
