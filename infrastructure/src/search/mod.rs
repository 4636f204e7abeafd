//! Search enhancement adapters
//!
//! | Adapter | Decision | Context | Feature |
//! |---------|----------|---------|---------|
//! | [`HeuristicSearchEnhancer`] | keyword heuristic | none | always |
//! | `DuckDuckGoSearchEnhancer` | keyword heuristic | DuckDuckGo Instant Answer API | `web-tools` |

#[cfg(feature = "web-tools")]
mod duckduckgo;
mod heuristic;

#[cfg(feature = "web-tools")]
pub use duckduckgo::DuckDuckGoSearchEnhancer;
pub use heuristic::HeuristicSearchEnhancer;
