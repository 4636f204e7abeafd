//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated query to pose to the council
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: substring keyword matching used by scoring and specialists

pub mod error;
pub mod query;
pub mod string;
