//! itemhub Core - In-memory item store and literal query dispatcher
//!
//! This crate holds everything the HTTP surfaces share:
//! - [`Item`] records with store-assigned integer identifiers
//! - [`ItemStore`], a mutex-guarded map that owns identifier allocation
//! - [`Dispatcher`], a table of whitespace-normalized query signatures bound
//!   to resolver closures, answering in a `{data?, errors?}` envelope
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐   ┌──────────────────────────────┐
//! │   REST handlers    │   │   pseudo-GraphQL endpoint    │
//! └─────────┬──────────┘   └──────────────┬───────────────┘
//!           │                             │
//!           │              ┌──────────────┴───────────────┐
//!           │              │ Dispatcher (normalize, match)│
//!           │              └──────────────┬───────────────┘
//!           │                             │
//! ┌─────────┴─────────────────────────────┴───────────────┐
//! │        ItemStore (Mutex<BTreeMap<ItemId, Item>>)       │
//! └────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod error;
pub mod item;
pub mod store;

pub use dispatch::{Dispatcher, QueryError, QueryRequest, QueryResponse, Variables};
pub use error::{Error, Result};
pub use item::{Item, ItemFields, ItemId};
pub use store::ItemStore;
