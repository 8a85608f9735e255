//! Middleware modules

pub mod logging;

pub use logging::{MAX_LOGGED_BODY, log_exchange};
