//! Religiousness Assessment HTTP service.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use religiousness_assessment::adapters::{
    assessment_router, build_classifier, AssessmentAppState, InMemorySessionStore,
};
use religiousness_assessment::config::{AppConfig, ServerConfig, SessionConfig};
use religiousness_assessment::domain::insights::CategoryPredictor;
use religiousness_assessment::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let classifier = build_classifier(&config.insights);
    info!(
        algorithm = classifier.name(),
        sample_count = config.insights.sample_count,
        data_seed = ?config.insights.data_seed,
        "Category predictor configured"
    );
    if config.insights.data_seed.is_none() {
        info!("No data seed configured, insights are drawn from fresh randomness on every request");
    }

    let predictor = CategoryPredictor::new(classifier, config.insights.predictor_settings());
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    spawn_idle_sweep(store.clone(), &config.session);
    let state = AssessmentAppState::new(store, predictor);

    let app = assessment_router()
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn spawn_idle_sweep(store: Arc<dyn SessionStore>, config: &SessionConfig) {
    let idle_timeout = config.idle_timeout();
    let mut ticker = tokio::time::interval(config.sweep_interval());
    info!(
        idle_timeout_secs = config.idle_timeout_secs,
        sweep_interval_secs = config.sweep_interval_secs,
        "Session idle sweep scheduled"
    );

    tokio::spawn(async move {
        loop {
            ticker.tick().await;
            match store.evict_idle(idle_timeout).await {
                Ok(0) => {}
                Ok(evicted) => debug!(evicted, "Evicted idle sessions"),
                Err(e) => warn!(error = %e, "Session idle sweep failed"),
            }
        }
    });
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
