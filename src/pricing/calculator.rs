use crate::catalog::{Catalog, MachineConfiguration};
use crate::error::QuoteError;
use crate::pricing::models::{
    PartKind, PartLine, PlasmaComparison, PricingOptions, PricingRates, QuoteResult,
};
use tracing::debug;

const PLASMA_OPTION: &str = "plasma";

/// Calculator for machine quotes under an area-based profit policy
///
/// Holds only immutable rates, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct QuoteCalculator {
    rates: PricingRates,
}

impl QuoteCalculator {
    /// Create a new quote calculator
    pub fn new(rates: PricingRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }

    /// Compute the quote for one machine
    ///
    /// Inputs are validated before any cost is computed; on error nothing is
    /// returned.
    pub fn compute_quote(
        &self,
        config: &MachineConfiguration,
        options: &PricingOptions,
    ) -> Result<QuoteResult, QuoteError> {
        config.validate()?;
        self.rates.validate()?;

        let plasma = if options.include_plasma {
            Some(self.resolve_plasma_unit(config, options.plasma_unit.as_deref())?)
        } else {
            None
        };

        let area = config.area();
        let extrusion_cost = config.extrusion_length * self.rates.extrusion_rate;
        let steel_cost = config.steel_quantity * self.rates.steel_rate;
        let plasma_cost = plasma.as_ref().map(|(_, cost)| *cost);

        let material_subtotal = extrusion_cost + steel_cost + plasma_cost.unwrap_or(0.0);
        let profit = self.rates.base_profit + area * self.rates.profit_rate;
        let total = material_subtotal + profit;

        let mut parts = vec![
            PartLine {
                kind: PartKind::Extrusion,
                name: "Extrusion".to_string(),
                quantity: config.extrusion_length,
                unit: "ft",
                unit_cost: self.rates.extrusion_rate,
                line_cost: extrusion_cost,
            },
            PartLine {
                kind: PartKind::Steel,
                name: "Steel frame".to_string(),
                quantity: config.steel_quantity,
                unit: "ft",
                unit_cost: self.rates.steel_rate,
                line_cost: steel_cost,
            },
        ];

        if let Some((name, cost)) = plasma {
            parts.push(PartLine {
                kind: PartKind::PlasmaUnit,
                name,
                quantity: 1.0,
                unit: "ea",
                unit_cost: cost,
                line_cost: cost,
            });
        }

        debug!(
            config = %config.id,
            area,
            material_subtotal,
            profit,
            total,
            "Computed quote"
        );

        Ok(QuoteResult {
            config_id: config.id.clone(),
            area,
            extrusion_cost,
            steel_cost,
            plasma_cost,
            material_subtotal,
            profit,
            total,
            parts,
        })
    }

    /// Compute one quote per catalog entry, preserving catalog order
    ///
    /// Fails as a whole if any row fails.
    pub fn compute_all_quotes(
        &self,
        catalog: &Catalog,
        comparison: &PlasmaComparison,
    ) -> Result<Vec<QuoteResult>, QuoteError> {
        catalog
            .list_configurations()
            .iter()
            .map(|config| {
                let options = match comparison {
                    PlasmaComparison::WhereSupported { plasma_unit } if config.plasma_capable => {
                        PricingOptions {
                            include_plasma: true,
                            plasma_unit: plasma_unit.clone(),
                        }
                    }
                    _ => PricingOptions::default(),
                };
                self.compute_quote(config, &options)
            })
            .collect()
    }

    /// Display name and flat cost of the plasma unit to add
    fn resolve_plasma_unit(
        &self,
        config: &MachineConfiguration,
        unit: Option<&str>,
    ) -> Result<(String, f64), QuoteError> {
        if !config.plasma_capable {
            return Err(QuoteError::UnsupportedOption {
                config: config.id.clone(),
                option: PLASMA_OPTION.to_string(),
            });
        }

        match unit {
            None => Ok(("Plasma unit".to_string(), self.rates.plasma_unit_cost)),
            Some(name) => self
                .rates
                .plasma_unit(name)
                .map(|unit| (format!("Plasma unit: {}", unit.name), unit.cost))
                .ok_or_else(|| QuoteError::NotFound(format!("Unknown plasma unit: {}", name))),
        }
    }
}
