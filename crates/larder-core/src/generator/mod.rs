//! Pluggable external meal sources and the ordered fallback chain that
//! queries them.

pub mod chain;
pub mod staples;
pub mod trait_def;

pub use chain::GeneratorChain;
pub use staples::StaplesGenerator;
pub use trait_def::MealGenerator;
