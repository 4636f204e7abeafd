//! Built-in specialists registered at startup.

mod analyst;
mod data_scientist;
mod researcher;

pub use analyst::{ANALYST_ID, AnalystSpecialist};
pub use data_scientist::{DATA_SCIENTIST_ID, DataScientistSpecialist};
pub use researcher::{RESEARCHER_ID, ResearcherSpecialist};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
