//! Core data types for LogiQuote

pub mod breakdown;
pub mod quote;
pub mod tiers;
