pub mod calculator;
pub mod models;

pub use calculator::QuoteCalculator;
pub use models::{
    ComparisonSummary, PartKind, PartLine, PlasmaComparison, PlasmaUnit, PricingOptions, PricingRates,
    QuoteResult,
};
