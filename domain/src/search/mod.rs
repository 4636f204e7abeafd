//! Search enhancement domain
//!
//! Value objects exchanged with the search-enhancement collaborator, plus
//! the pure pieces of that collaborator that need no I/O: the keyword
//! fallback decision and search-context formatting.

mod context;
mod decision;

pub use context::{MAX_CONTEXT_HITS, SearchHit, format_search_context};
pub use decision::{SearchDecision, SearchType, decide_by_keywords};
