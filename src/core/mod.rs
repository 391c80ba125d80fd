pub mod config;
pub mod git;
pub mod guidance;
pub mod outcome;
pub mod style;
