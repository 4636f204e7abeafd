//! Deterministic rule engine for specialist selection

use crate::requirement::RequirementProfile;
use crate::specialist::{Specialist, SpecialistRegistry, SpecialistRole};
use std::sync::Arc;

/// `data_focus` above this selects the data-focused specialist
pub const DATA_FOCUS_THRESHOLD: f64 = 0.3;
/// `complexity` above this selects the data-focused specialist
pub const COMPLEXITY_DATA_THRESHOLD: f64 = 0.5;
/// `research_focus` above this selects the research-focused specialist
pub const RESEARCH_FOCUS_THRESHOLD: f64 = 0.2;
/// `complexity` above this selects the research-focused specialist
pub const COMPLEXITY_RESEARCH_THRESHOLD: f64 = 0.6;

/// Pure, total selection rules.
///
/// 1. General specialists are always selected.
/// 2. Data-focused iff `data_focus > 0.3 || requires_modeling || complexity > 0.5`.
/// 3. Research-focused iff `research_focus > 0.2 || complexity > 0.6`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialistSelector;

impl SpecialistSelector {
    pub fn new() -> Self {
        Self
    }

    /// Whether a role is wanted for this profile
    pub fn includes(&self, role: SpecialistRole, profile: &RequirementProfile) -> bool {
        match role {
            SpecialistRole::General => true,
            SpecialistRole::DataFocused => {
                profile.data_focus > DATA_FOCUS_THRESHOLD
                    || profile.requires_modeling
                    || profile.complexity > COMPLEXITY_DATA_THRESHOLD
            }
            SpecialistRole::ResearchFocused => {
                profile.research_focus > RESEARCH_FOCUS_THRESHOLD
                    || profile.complexity > COMPLEXITY_RESEARCH_THRESHOLD
            }
        }
    }

    /// Select the active specialists, in registry order.
    ///
    /// The result is empty only when the registry has no general specialist;
    /// callers treat that as a configuration error.
    pub fn select(
        &self,
        profile: &RequirementProfile,
        registry: &SpecialistRegistry,
    ) -> Vec<Arc<dyn Specialist>> {
        registry
            .iter()
            .filter(|s| self.includes(s.descriptor().role, profile))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::RequirementScorer;

    fn selected_ids(profile: RequirementProfile) -> Vec<String> {
        SpecialistSelector::new()
            .select(&profile, &SpecialistRegistry::with_builtins())
            .iter()
            .map(|s| s.id().to_string())
            .collect()
    }

    #[test]
    fn test_default_always_selected() {
        assert_eq!(selected_ids(RequirementProfile::default()), vec!["analyst"]);
    }

    #[test]
    fn test_data_focus_boundary() {
        let at = RequirementProfile::default().with_data_focus(0.3);
        let above = RequirementProfile::default().with_data_focus(0.31);
        assert_eq!(selected_ids(at), vec!["analyst"]);
        assert_eq!(selected_ids(above), vec!["analyst", "data_scientist"]);
    }

    #[test]
    fn test_modeling_flag_selects_data() {
        let profile = RequirementProfile::default().with_modeling(true);
        assert_eq!(selected_ids(profile), vec!["analyst", "data_scientist"]);
    }

    #[test]
    fn test_complexity_data_boundary() {
        let at = RequirementProfile::default().with_complexity(0.5);
        let above = RequirementProfile::default().with_complexity(0.51);
        assert_eq!(selected_ids(at), vec!["analyst"]);
        assert_eq!(selected_ids(above), vec!["analyst", "data_scientist"]);
    }

    #[test]
    fn test_research_focus_boundary() {
        let at = RequirementProfile::default().with_research_focus(0.2);
        let above = RequirementProfile::default().with_research_focus(0.21);
        assert_eq!(selected_ids(at), vec!["analyst"]);
        assert_eq!(selected_ids(above), vec!["analyst", "researcher"]);
    }

    #[test]
    fn test_complexity_research_boundary() {
        let at = RequirementProfile::default().with_complexity(0.6);
        let above = RequirementProfile::default().with_complexity(0.61);
        // 0.6 is past the data threshold but not the research one
        assert_eq!(selected_ids(at), vec!["analyst", "data_scientist"]);
        assert_eq!(
            selected_ids(above),
            vec!["analyst", "data_scientist", "researcher"]
        );
    }

    #[test]
    fn test_comparison_and_optimization_flags_do_not_select() {
        let profile = RequirementProfile::default()
            .with_comparison(true)
            .with_optimization(true);
        assert_eq!(selected_ids(profile), vec!["analyst"]);
    }

    #[test]
    fn test_scenario_compare_models_selects_two() {
        let profile = RequirementScorer::new()
            .score_text("Compare machine learning models to optimize prediction accuracy");
        assert_eq!(selected_ids(profile), vec!["analyst", "data_scientist"]);
    }

    #[test]
    fn test_empty_registry_selects_nothing() {
        let selected = SpecialistSelector::new()
            .select(&RequirementProfile::default(), &SpecialistRegistry::new());
        assert!(selected.is_empty());
    }
}
