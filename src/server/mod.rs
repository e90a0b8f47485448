//! HTTP 入口：路由對應到 [`BeerCatalog`] 的查詢。

pub mod error;
pub mod handlers;

use crate::adapters::PunkApiClient;
use crate::core::{BeerCatalog, BeerSource, ConfigProvider};
use crate::utils::error::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router<S: BeerSource + 'static>(catalog: Arc<BeerCatalog<S>>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/beers", get(handlers::list_all::<S>))
        .route("/beers/random", get(handlers::random::<S>))
        .route("/beers/:id", get(handlers::by_id::<S>))
        .route("/beers/name/:name", get(handlers::by_name::<S>))
        .route("/beers/abv/below/:abv", get(handlers::abv_below::<S>))
        .route("/beers/abv/above/:abv", get(handlers::abv_above::<S>))
        .route("/beers/malt/:malt", get(handlers::by_malt::<S>))
        .route("/beers/hops/:hops", get(handlers::by_hops::<S>))
        .route("/beers/yeast/:yeast", get(handlers::by_yeast::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

/// 依設定建立 Punk API client 並開始服務，直到收到 Ctrl-C
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let client = PunkApiClient::from_config(config);
    tracing::info!("🔗 Upstream Punk API: {}", client.base_url());

    let app = router(Arc::new(BeerCatalog::new(client)));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // 無法監聽訊號時就一直執行下去
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
