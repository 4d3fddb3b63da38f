//! # Bird Semantic Search - Infrastructure Layer
//!
//! Cross-cutting concerns and composition:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `AppConfig` and the figment-based [`ConfigLoader`](config::ConfigLoader) |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | [`ErrorContext`](error_ext::ErrorContext) for foreign errors |
//! | [`di`] | provider factories and the [`AppContext`](di::AppContext) composition root |
//! | [`constants`] | configuration defaults |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
