//! Fixed catalog of machine sizes.
//!
//! The standard catalog is built once on first use and never mutated; every
//! caller shares the same `&'static Catalog`.

use crate::error::QuoteError;
use crate::frame::{FrameCutList, INCHES_PER_FOOT};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

static STANDARD_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let configs = STANDARD_SIZES
        .iter()
        .map(|&(id, width_in, length_in, plasma_capable)| {
            MachineConfiguration::from_work_area(id, width_in, length_in, plasma_capable)
        })
        .collect();
    debug!("Built standard catalog with {} entries", STANDARD_SIZES.len());
    Catalog { configs }
});

/// (id, nominal X inches, nominal Y inches, plasma capable)
const STANDARD_SIZES: [(&str, f64, f64, bool); 10] = [
    // too small to clear a torch holder
    ("400 x 400 mm", 15.75, 15.75, false),
    ("400 x 2 ft", 15.75, 24.0, true),
    ("400 x 3 ft", 15.75, 36.0, true),
    ("400 x 4 ft", 15.75, 48.0, true),
    ("2 x 2 ft", 24.0, 24.0, true),
    ("2 x 3 ft", 24.0, 36.0, true),
    ("2 x 4 ft", 24.0, 48.0, true),
    ("3 x 3 ft", 36.0, 36.0, true),
    ("3 x 4 ft", 36.0, 48.0, true),
    ("4 x 4 ft", 48.0, 48.0, true),
];

/// One predefined machine size and its material requirements.
///
/// Dimensions are feet: `width` x `length` is the nominal working area,
/// `extrusion_length` the extrusion stock and `steel_quantity` the steel tube
/// needed to build the frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineConfiguration {
    pub id: String,
    pub width: f64,
    pub length: f64,
    pub extrusion_length: f64,
    pub steel_quantity: f64,
    pub plasma_capable: bool,
}

impl MachineConfiguration {
    /// Derive a configuration from a nominal working area given in inches.
    pub fn from_work_area(id: &str, width_in: f64, length_in: f64, plasma_capable: bool) -> Self {
        let cut_list = FrameCutList::for_work_area(width_in, length_in);
        Self {
            id: id.to_string(),
            width: width_in / INCHES_PER_FOOT,
            length: length_in / INCHES_PER_FOOT,
            extrusion_length: cut_list.extrusion_length_ft(),
            steel_quantity: cut_list.steel_length_ft(),
            plasma_capable,
        }
    }

    /// Nominal working area in square feet
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Frame cut list for this machine's nominal working area
    pub fn cut_list(&self) -> FrameCutList {
        FrameCutList::for_work_area(self.width * INCHES_PER_FOOT, self.length * INCHES_PER_FOOT)
    }

    /// Reject non-positive or non-finite dimensions
    pub fn validate(&self) -> Result<(), QuoteError> {
        let fields = [
            ("width", self.width),
            ("length", self.length),
            ("extrusion length", self.extrusion_length),
            ("steel quantity", self.steel_quantity),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(QuoteError::InvalidInput(format!(
                    "Configuration '{}' has non-positive {}: {}",
                    self.id, name, value
                )));
            }
        }
        Ok(())
    }
}

/// Ordered, read-only list of machine configurations.
#[derive(Debug, Clone)]
pub struct Catalog {
    configs: Vec<MachineConfiguration>,
}

impl Catalog {
    /// The built-in catalog
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    /// Build a custom catalog; ids must be unique and dimensions positive.
    pub fn new(configs: Vec<MachineConfiguration>) -> Result<Self, QuoteError> {
        let mut seen = HashSet::new();
        for config in &configs {
            config.validate()?;
            if !seen.insert(config.id.as_str()) {
                return Err(QuoteError::InvalidInput(format!(
                    "Duplicate configuration id: {}",
                    config.id
                )));
            }
        }
        Ok(Self { configs })
    }

    /// All configurations in catalog order
    pub fn list_configurations(&self) -> &[MachineConfiguration] {
        &self.configs
    }

    pub fn get_configuration(&self, id: &str) -> Result<&MachineConfiguration, QuoteError> {
        self.configs
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| QuoteError::NotFound(format!("Unknown machine configuration: {}", id)))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order_and_ids() {
        let catalog = Catalog::standard();
        let ids: Vec<&str> = catalog
            .list_configurations()
            .iter()
            .map(|c| c.id.as_str())
            .collect();

        assert_eq!(ids.len(), 10);
        assert_eq!(ids.first(), Some(&"400 x 400 mm"));
        assert_eq!(ids.last(), Some(&"4 x 4 ft"));

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_standard_catalog_is_valid() {
        for config in Catalog::standard().list_configurations() {
            assert!(config.validate().is_ok(), "{} failed validation", config.id);
        }
    }

    #[test]
    fn test_get_configuration() {
        let config = Catalog::standard().get_configuration("2 x 2 ft").unwrap();
        assert_eq!(config.width, 2.0);
        assert_eq!(config.length, 2.0);
        assert_eq!(config.area(), 4.0);
        assert!((config.steel_quantity - 9.875).abs() < 1e-9);
        assert!(config.plasma_capable);
    }

    #[test]
    fn test_get_configuration_not_found() {
        let err = Catalog::standard().get_configuration("5 x 10 ft").unwrap_err();
        assert!(matches!(err, QuoteError::NotFound(_)));
    }

    #[test]
    fn test_smallest_machine_is_not_plasma_capable() {
        let config = Catalog::standard().get_configuration("400 x 400 mm").unwrap();
        assert!(!config.plasma_capable);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let config = MachineConfiguration::from_work_area("2 x 2 ft", 24.0, 24.0, true);
        let err = Catalog::new(vec![config.clone(), config]).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_zero_width() {
        let mut config = MachineConfiguration::from_work_area("flat", 24.0, 24.0, true);
        config.width = 0.0;
        assert!(matches!(
            Catalog::new(vec![config]),
            Err(QuoteError::InvalidInput(_))
        ));
    }
}
