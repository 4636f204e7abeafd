//! Data scientist: selected for data-heavy or modeling queries.

use super::owned;
use crate::core::string::{contains_any, normalize};
use crate::specialist::capability::{
    ConfidenceCell, Specialist, SpecialistDescriptor, SpecialistRole, append_search_context,
    keyword_relevance,
};

pub const DATA_SCIENTIST_ID: &str = "data_scientist";

const KEYWORDS: &[&str] = &[
    "data",
    "analysis",
    "statistics",
    "model",
    "algorithm",
    "machine learning",
    "prediction",
    "correlation",
    "regression",
    "classification",
    "clustering",
    "pattern",
    "trend",
    "distribution",
    "dataset",
    "feature",
    "training",
    "validation",
    "accuracy",
];

const INSIGHTS: &[&str] = &[
    "Data quality is crucial - invest time in cleaning and validation",
    "Always validate model assumptions and check for bias",
    "Feature engineering often has more impact than algorithm selection",
    "Visualize data distributions before applying statistical methods",
];

const RECOMMENDATIONS: &[&str] = &[
    "Start with exploratory data analysis to understand the data structure",
    "Use cross-validation to get reliable performance estimates",
    "Document your methodology for reproducibility",
    "Consider the business context when interpreting statistical results",
];

pub struct DataScientistSpecialist {
    descriptor: SpecialistDescriptor,
    confidence: ConfidenceCell,
}

impl DataScientistSpecialist {
    pub fn new() -> Self {
        Self {
            descriptor: SpecialistDescriptor::new(
                DATA_SCIENTIST_ID,
                "Data Scientist",
                "Data Science & Machine Learning",
                SpecialistRole::DataFocused,
            ),
            confidence: ConfidenceCell::new(),
        }
    }
}

impl Default for DataScientistSpecialist {
    fn default() -> Self {
        Self::new()
    }
}

impl Specialist for DataScientistSpecialist {
    fn descriptor(&self) -> &SpecialistDescriptor {
        &self.descriptor
    }

    fn relevance(&self, query: &str) -> f64 {
        let relevance = keyword_relevance(query, KEYWORDS);
        self.confidence.set(relevance);
        relevance
    }

    fn respond(&self, query: &str, search_context: &str) -> String {
        let lowered = normalize(query);

        let base = if contains_any(&lowered, &["predict", "forecast", "model"]) {
            "From a data science perspective, predictive modeling requires careful \
             feature selection, appropriate algorithm choice, and rigorous validation. \
             Consider ensemble methods, cross-validation, and feature engineering to \
             improve model performance. Always evaluate models using appropriate metrics \
             and test for overfitting."
        } else if contains_any(&lowered, &["pattern", "trend", "analyze"]) {
            "Data analysis should follow a systematic approach: exploratory data analysis, \
             statistical testing, and visualization. Look for patterns in the data distribution, \
             identify outliers, and consider both correlation and causation. Use appropriate \
             statistical tests and visualizations to communicate findings effectively."
        } else if contains_any(&lowered, &["correlation", "relationship"]) {
            "When examining relationships in data, distinguish between correlation and \
             causation. Use scatter plots, correlation matrices, and statistical tests \
             to identify relationships. Consider confounding variables and apply \
             appropriate controls in your analysis."
        } else {
            "From a data science perspective, this problem requires systematic data \
             collection, cleaning, analysis, and interpretation. Apply statistical \
             rigor, validate assumptions, and use appropriate visualization techniques \
             to communicate insights effectively."
        };

        append_search_context(
            base.to_string(),
            "Based on recent developments:",
            search_context,
        )
    }

    fn insights(&self, _query: &str) -> Vec<String> {
        owned(INSIGHTS)
    }

    fn recommendations(&self, _query: &str) -> Vec<String> {
        owned(RECOMMENDATIONS)
    }

    fn last_confidence(&self) -> f64 {
        self.confidence.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevance_for_modeling_query() {
        let ds = DataScientistSpecialist::new();
        // model, machine learning, prediction, accuracy: 4 / 19 * 2
        let relevance =
            ds.relevance("Compare machine learning models to optimize prediction accuracy");
        assert!((relevance - 8.0 / 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_respond_modeling_branch_first() {
        let ds = DataScientistSpecialist::new();
        // "model" wins over "trend"
        let text = ds.respond("model the trend", "");
        assert!(text.contains("predictive modeling"));
    }

    #[test]
    fn test_respond_with_context() {
        let ds = DataScientistSpecialist::new();
        let text = ds.respond("find the correlation", "1. Paper");
        assert!(text.starts_with("When examining relationships"));
        assert!(text.ends_with("Based on recent developments:\n1. Paper"));
    }
}
