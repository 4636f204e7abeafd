//! Output formatting for coordinated answers

pub mod console;
pub mod formatter;
