use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Pricing policy: unit rates, area-based profit and plasma add-on costs.
///
/// Lengths are feet and areas square feet, matching `MachineConfiguration`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingRates {
    /// Cost per foot of extrusion stock
    #[serde(default = "default_extrusion_rate")]
    pub extrusion_rate: f64,

    /// Cost per foot of steel tube
    #[serde(default = "default_steel_rate")]
    pub steel_rate: f64,

    /// Profit per square foot of nominal working area
    #[serde(default = "default_profit_rate")]
    pub profit_rate: f64,

    /// Flat cost of the default plasma unit
    #[serde(default = "default_plasma_unit_cost")]
    pub plasma_unit_cost: f64,

    /// Flat profit added to every machine regardless of size
    #[serde(default)]
    pub base_profit: f64,

    /// Named plasma units, listed as `[[pricing.plasma_units]]` tables
    #[serde(default)]
    pub plasma_units: Vec<PlasmaUnit>,
}

/// A named plasma cutting unit with a flat cost
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlasmaUnit {
    pub name: String,
    pub cost: f64,
}

impl PlasmaUnit {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            extrusion_rate: default_extrusion_rate(),
            steel_rate: default_steel_rate(),
            profit_rate: default_profit_rate(),
            plasma_unit_cost: default_plasma_unit_cost(),
            base_profit: 0.0,
            plasma_units: Vec::new(),
        }
    }
}

fn default_extrusion_rate() -> f64 {
    3.25
}

fn default_steel_rate() -> f64 {
    5.75
}

fn default_profit_rate() -> f64 {
    45.0
}

fn default_plasma_unit_cost() -> f64 {
    350.0
}

impl PricingRates {
    /// Reject non-positive rates and a negative base profit
    pub fn validate(&self) -> Result<(), QuoteError> {
        let rates = [
            ("extrusion_rate", self.extrusion_rate),
            ("steel_rate", self.steel_rate),
            ("profit_rate", self.profit_rate),
            ("plasma_unit_cost", self.plasma_unit_cost),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value <= 0.0 {
                return Err(QuoteError::InvalidInput(format!(
                    "Rate '{}' must be positive, got {}",
                    name, value
                )));
            }
        }

        if !self.base_profit.is_finite() || self.base_profit < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "base_profit cannot be negative, got {}",
                self.base_profit
            )));
        }

        let mut seen = HashSet::new();
        for unit in &self.plasma_units {
            if unit.name.trim().is_empty() {
                return Err(QuoteError::InvalidInput(
                    "Plasma unit name cannot be empty".to_string(),
                ));
            }
            if !unit.cost.is_finite() || unit.cost <= 0.0 {
                return Err(QuoteError::InvalidInput(format!(
                    "Plasma unit '{}' must have a positive cost, got {}",
                    unit.name, unit.cost
                )));
            }
            if !seen.insert(unit.name.as_str()) {
                return Err(QuoteError::InvalidInput(format!(
                    "Duplicate plasma unit: {}",
                    unit.name
                )));
            }
        }

        Ok(())
    }

    /// Look up a named plasma unit; names are matched exactly
    pub fn plasma_unit(&self, name: &str) -> Option<&PlasmaUnit> {
        self.plasma_units.iter().find(|unit| unit.name == name)
    }
}

/// Per-quote option toggles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingOptions {
    pub include_plasma: bool,
    /// Named plasma unit; `None` uses `PricingRates::plasma_unit_cost`
    pub plasma_unit: Option<String>,
}

impl PricingOptions {
    pub fn with_plasma() -> Self {
        Self {
            include_plasma: true,
            plasma_unit: None,
        }
    }

    pub fn with_plasma_unit(name: impl Into<String>) -> Self {
        Self {
            include_plasma: true,
            plasma_unit: Some(name.into()),
        }
    }
}

/// How `compute_all_quotes` treats the plasma add-on across rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlasmaComparison {
    /// Plasma off for every row
    Excluded,
    /// Plasma on for capable machines, off for the rest
    WhereSupported { plasma_unit: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    Extrusion,
    Steel,
    PlasmaUnit,
}

/// One priced line of a quote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartLine {
    pub kind: PartKind,
    pub name: String,
    pub quantity: f64,
    pub unit: &'static str,
    pub unit_cost: f64,
    pub line_cost: f64,
}

/// Cost breakdown and parts list for one machine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub config_id: String,
    pub area: f64,
    pub extrusion_cost: f64,
    pub steel_cost: f64,
    pub plasma_cost: Option<f64>,
    pub material_subtotal: f64,
    pub profit: f64,
    pub total: f64,
    pub parts: Vec<PartLine>,
}

impl QuoteResult {
    /// Profit as a percentage of the total price
    pub fn margin_percent(&self) -> f64 {
        if self.total > 0.0 {
            self.profit / self.total * 100.0
        } else {
            0.0
        }
    }

    pub fn includes_plasma(&self) -> bool {
        self.plasma_cost.is_some()
    }
}

/// Lowest, highest and average total across a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub lowest: f64,
    pub highest: f64,
    pub average: f64,
}

impl ComparisonSummary {
    /// Returns `None` for an empty comparison
    pub fn from_quotes(quotes: &[QuoteResult]) -> Option<Self> {
        if quotes.is_empty() {
            return None;
        }

        let lowest = quotes.iter().map(|q| q.total).fold(f64::INFINITY, f64::min);
        let highest = quotes
            .iter()
            .map(|q| q.total)
            .fold(f64::NEG_INFINITY, f64::max);
        let average = quotes.iter().map(|q| q.total).sum::<f64>() / quotes.len() as f64;

        Some(Self {
            lowest,
            highest,
            average,
        })
    }
}
