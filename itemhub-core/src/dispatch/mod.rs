//! Literal query dispatcher
//!
//! The pseudo-GraphQL endpoint does not parse queries. It strips whitespace
//! from the query text and looks the result up in a table of literal
//! signatures, each bound to a resolver closure. Queries containing
//! [`INTROSPECTION_MARKER`] are answered with a static document instead.
//!
//! ```rust,ignore
//! use itemhub_core::{Dispatcher, ItemStore, QueryRequest};
//!
//! let store = ItemStore::new();
//! let dispatcher = Dispatcher::with_item_operations();
//! let response = dispatcher.dispatch(&store, &QueryRequest::new("query { GetItems }"))?;
//! ```

mod envelope;
mod introspection;
pub mod operations;

pub use envelope::{QueryError, QueryRequest, QueryResponse, Variables};
pub use introspection::{
    FileIntrospection, INTROSPECTION_MARKER, IntrospectionSource, StaticIntrospection,
};

use crate::store::ItemStore;
use crate::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Resolver bound to a signature; returns the `data` payload
pub type Resolver = Arc<dyn Fn(&ItemStore, &Variables) -> Result<Value> + Send + Sync>;

/// ASCII whitespace only (`\t \n \f \r` and space)
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("whitespace pattern is valid"));

/// Strip all whitespace from a query
pub fn normalize(query: &str) -> String {
    WHITESPACE.replace_all(query, "").into_owned()
}

/// Table of normalized signatures and their resolvers
pub struct Dispatcher {
    routes: HashMap<String, Resolver>,
    introspection: Option<Arc<dyn IntrospectionSource>>,
}

impl Dispatcher {
    /// Dispatcher with no signatures and no introspection document
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            introspection: None,
        }
    }

    /// Dispatcher with the four item operations registered
    pub fn with_item_operations() -> Self {
        Self::new()
            .route(operations::GET_ITEMS, operations::get_items)
            .route(operations::GET_ITEM, operations::get_item)
            .route(operations::CREATE_ITEM, operations::create_item)
            .route(operations::UPDATE_ITEM, operations::update_item)
    }

    /// Bind `signature` to `resolver`, replacing any previous binding
    ///
    /// The signature is stored verbatim. Since queries are normalized before
    /// lookup, a signature that itself contains whitespace never matches.
    pub fn route<F>(mut self, signature: impl Into<String>, resolver: F) -> Self
    where
        F: Fn(&ItemStore, &Variables) -> Result<Value> + Send + Sync + 'static,
    {
        self.routes.insert(signature.into(), Arc::new(resolver));
        self
    }

    /// Serve `__schema` queries from `source`
    pub fn with_introspection(mut self, source: impl IntrospectionSource + 'static) -> Self {
        self.introspection = Some(Arc::new(source));
        self
    }

    /// Registered signatures, sorted
    pub fn signatures(&self) -> Vec<&str> {
        let mut signatures: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        signatures.sort_unstable();
        signatures
    }

    /// Whether `query` normalizes to a registered signature
    pub fn recognizes(&self, query: &str) -> bool {
        self.routes.contains_key(&normalize(query))
    }

    /// Resolve a request against `store`
    ///
    /// Domain failures (bad variables, unknown ids, unknown queries) come
    /// back inside the envelope. `Err` is reserved for infrastructure
    /// failures such as an unreadable introspection document.
    pub fn dispatch(&self, store: &ItemStore, request: &QueryRequest) -> Result<QueryResponse> {
        let normalized = normalize(&request.query);

        if normalized.contains(INTROSPECTION_MARKER) {
            return match &self.introspection {
                Some(source) => Ok(QueryResponse::data(source.load()?)),
                None => {
                    tracing::warn!("introspection requested but no document is configured");
                    Ok(QueryResponse::error(Error::UnsupportedOperation.to_string()))
                }
            };
        }

        let Some(resolver) = self.routes.get(&normalized) else {
            tracing::warn!(query = %normalized, "unsupported operation");
            return Ok(QueryResponse::error(Error::UnsupportedOperation.to_string()));
        };

        tracing::debug!(query = %normalized, "dispatching operation");
        match resolver(store, &request.variables) {
            Ok(data) => Ok(QueryResponse::data(data)),
            Err(e) if e.is_client_error() => Ok(QueryResponse::error(e.to_string())),
            Err(e) => Err(e),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("signatures", &self.signatures())
            .field("introspection", &self.introspection.is_some())
            .finish()
    }
}
