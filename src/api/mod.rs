pub mod ask;
pub mod dashboard;
pub mod dexs;
pub mod digest;
pub mod fees;
pub mod health;
pub mod narratives;
pub mod yields;

use crate::assistant::Assistant;
use crate::config::Config;
use crate::datasource::MetricsSource;
use crate::notify::Mailer;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn MetricsSource>,
    pub config: Config,
    pub mailer: Arc<Mailer>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(source: Arc<dyn MetricsSource>, config: Config) -> Self {
        let mailer = Arc::new(Mailer::new(config.mail.clone()));
        let assistant = Arc::new(Assistant::new(&config));
        Self {
            source,
            config,
            mailer,
            assistant,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/fees", get(fees::get_fees))
        .route("/v1/dexs", get(dexs::get_dexs))
        .route("/v1/yields", get(yields::get_yields))
        .route("/v1/narratives", get(narratives::get_narratives))
        .route("/v1/digest", post(digest::send_digest));

    // The assistant is hidden entirely in hosted deployments.
    if !state.config.hosted {
        router = router.route("/v1/ask", post(ask::ask));
    }

    router.layer(cors).with_state(state)
}
