//! Source attribution adapters
//!
//! [`CatalogSourceAttributor`] ranks a static catalogue of reference sites
//! against the synthesized answer. With the `web-tools` feature the ranked
//! URLs can also be probed with HTTP HEAD before they are returned.

mod catalog;
mod topics;
#[cfg(feature = "web-tools")]
mod validator;

pub use catalog::{CatalogEntry, CatalogSourceAttributor, DEFAULT_MAX_SOURCES, builtin_catalog};
pub use topics::{MAX_TOPICS, extract_topics};
#[cfg(feature = "web-tools")]
pub use validator::UrlValidator;
