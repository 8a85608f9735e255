//! itemhub Server - HTTP surfaces over the in-memory item store
//!
//! One process serves one surface:
//! - `rest`: GET/POST /items, GET/PUT /items/{id}
//! - `pseudo-graphql`: /query, literal signature dispatch
//! - `graphql`: GET / (playground), /query (schema-driven GraphQL)

use axum::Router;
use itemhub_core::dispatch::FileIntrospection;
use itemhub_core::dispatch::IntrospectionSource;
use itemhub_core::{Dispatcher, ItemStore};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod config;
pub mod middleware;

use config::{Config, Surface};

/// State shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// The item store
    pub store: Arc<ItemStore>,
    /// Literal query dispatcher for the pseudo-GraphQL surface
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create state around an existing store and dispatcher
    pub fn new(store: Arc<ItemStore>, dispatcher: Dispatcher) -> Self {
        Self {
            store,
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Fresh store with the built-in item operations and no introspection
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(ItemStore::new()),
            Dispatcher::with_item_operations(),
        )
    }

    /// State for a configured process
    ///
    /// The pseudo-GraphQL surface needs its introspection document; it is
    /// probed here so a missing or malformed file stops startup instead of
    /// failing the first `__schema` request.
    pub fn from_config(config: &Config) -> itemhub_core::Result<Self> {
        let mut dispatcher = Dispatcher::with_item_operations();

        if config.surface == Surface::PseudoGraphql {
            let source = FileIntrospection::new(config.introspection_path.clone());
            source.load()?;
            tracing::info!(
                "Introspection document: {}",
                config.introspection_path.display()
            );
            dispatcher = dispatcher.with_introspection(source);
        }

        Ok(Self::new(Arc::new(ItemStore::new()), dispatcher))
    }
}

/// Build the router for the configured surface with tracing and CORS layers
pub fn build_router(config: &Config, state: AppState) -> Router {
    let app = match config.surface {
        Surface::Rest => api::items::router(state),
        Surface::PseudoGraphql => api::query::router(state),
        Surface::Graphql => api::graphql::router(state),
    };

    let app = if config.cors_enabled {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http())
}
