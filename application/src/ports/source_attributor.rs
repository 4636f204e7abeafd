//! Source attribution port

use super::collaborator::CollaboratorError;
use async_trait::async_trait;
use council_domain::SourceReference;

/// Source-attribution collaborator.
///
/// Given the final answer text and the expertise labels involved, returns
/// ordered `(title, url)` sources. Errors yield an empty source list.
#[async_trait]
pub trait SourceAttributor: Send + Sync {
    async fn attribute(
        &self,
        text: &str,
        domains: &[String],
    ) -> Result<Vec<SourceReference>, CollaboratorError>;
}

/// Attribution disabled
pub struct NoSources;

#[async_trait]
impl SourceAttributor for NoSources {
    async fn attribute(
        &self,
        _text: &str,
        _domains: &[String],
    ) -> Result<Vec<SourceReference>, CollaboratorError> {
        Ok(Vec::new())
    }
}
