//! Specialist registry

use super::builtin::{AnalystSpecialist, DataScientistSpecialist, ResearcherSpecialist};
use super::capability::{Specialist, SpecialistDescriptor, SpecialistId, SpecialistRole};
use crate::core::error::DomainError;
use std::sync::Arc;

/// Process-wide catalogue of specialists.
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
/// Registration order is the iteration order used when dispatching and
/// when merging insights and recommendations.
#[derive(Clone, Default)]
pub struct SpecialistRegistry {
    specialists: Vec<Arc<dyn Specialist>>,
}

impl SpecialistRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three built-in specialists
    pub fn with_builtins() -> Self {
        let specialists: Vec<Arc<dyn Specialist>> = vec![
            Arc::new(AnalystSpecialist::new()),
            Arc::new(DataScientistSpecialist::new()),
            Arc::new(ResearcherSpecialist::new()),
        ];
        Self { specialists }
    }

    /// Register a specialist, rejecting duplicate ids
    pub fn register(&mut self, specialist: Arc<dyn Specialist>) -> Result<(), DomainError> {
        if self.contains(specialist.id()) {
            return Err(DomainError::DuplicateSpecialist(
                specialist.id().to_string(),
            ));
        }
        self.specialists.push(specialist);
        Ok(())
    }

    /// Builder-style registration
    pub fn with(mut self, specialist: Arc<dyn Specialist>) -> Result<Self, DomainError> {
        self.register(specialist)?;
        Ok(self)
    }

    pub fn get(&self, id: &SpecialistId) -> Option<&Arc<dyn Specialist>> {
        self.specialists.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: &SpecialistId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Specialist>> {
        self.specialists.iter()
    }

    /// Specialists registered under a role, in registration order
    pub fn by_role(&self, role: SpecialistRole) -> impl Iterator<Item = &Arc<dyn Specialist>> {
        self.specialists
            .iter()
            .filter(move |s| s.descriptor().role == role)
    }

    pub fn descriptors(&self) -> Vec<SpecialistDescriptor> {
        self.specialists
            .iter()
            .map(|s| s.descriptor().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.specialists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialists.is_empty()
    }
}

impl std::fmt::Debug for SpecialistRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialistRegistry")
            .field(
                "specialists",
                &self.specialists.iter().map(|s| s.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
