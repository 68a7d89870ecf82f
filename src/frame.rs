//! Frame geometry for the belt-driven gantry design.
//!
//! Turns a nominal working area into the stock pieces needed to build the
//! machine: 2020/2040 V-slot extrusions cut from standard stock lengths and a
//! welded 1.5" square steel tube base. All lengths are inches unless the field
//! name says otherwise.

use serde::Serialize;
use std::fmt;

/// Standard extrusion stock lengths in millimetres, shortest first
pub const STANDARD_LENGTHS_MM: [u32; 6] = [400, 600, 800, 1000, 1220, 1500];

pub const MM_PER_INCH: f64 = 25.4;
pub const INCHES_PER_FOOT: f64 = 12.0;

const Y_RAIL_OFFSET_IN: f64 = 6.0;
const X_FRAME_OFFSET_IN: f64 = 3.5;
const GANTRY_OFFSET_IN: f64 = 5.25;
const STEEL_X_OFFSET_IN: f64 = 5.25;
const STEEL_Y_OFFSET_IN: f64 = 6.0;

/// Gantry beams shorter than this stay on 2020; longer ones need 2040 stiffness
const GANTRY_2040_THRESHOLD_IN: f64 = 29.0;

const STEEL_TUBE_SIZE: &str = "1.5\" x 1.5\"";

pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn in_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Pick the smallest standard stock length (mm) that covers `required_in`.
///
/// Falls back to the longest stock length when nothing is long enough.
pub fn choose_standard_length(required_in: f64) -> u32 {
    let required_mm = in_to_mm(required_in);
    STANDARD_LENGTHS_MM
        .iter()
        .copied()
        .find(|&length_mm| f64::from(length_mm) >= required_mm)
        .unwrap_or(STANDARD_LENGTHS_MM[STANDARD_LENGTHS_MM.len() - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExtrusionProfile {
    #[serde(rename = "2020")]
    P2020,
    #[serde(rename = "2040")]
    P2040,
}

impl fmt::Display for ExtrusionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P2020 => write!(f, "2020"),
            Self::P2040 => write!(f, "2040"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtrusionPiece {
    pub description: &'static str,
    pub profile: ExtrusionProfile,
    pub length_mm: u32,
    pub quantity: u32,
}

impl ExtrusionPiece {
    pub fn length_in(&self) -> f64 {
        mm_to_in(f64::from(self.length_mm))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteelPiece {
    pub description: &'static str,
    pub size: &'static str,
    pub length_in: f64,
    pub quantity: u32,
}

impl SteelPiece {
    pub fn length_ft(&self) -> f64 {
        self.length_in / INCHES_PER_FOOT
    }
}

/// Stock pieces for one machine frame, plus the working area they actually
/// yield once stock lengths are rounded up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameCutList {
    pub extrusions: Vec<ExtrusionPiece>,
    pub steel: Vec<SteelPiece>,
    pub actual_width_in: f64,
    pub actual_length_in: f64,
}

impl FrameCutList {
    /// Build the cut list for a nominal working area of `width_in` x `length_in`.
    pub fn for_work_area(width_in: f64, length_in: f64) -> Self {
        let required_y_rail_in = length_in + Y_RAIL_OFFSET_IN;
        let required_x_frame_in = width_in + X_FRAME_OFFSET_IN;
        let required_gantry_in = width_in + GANTRY_OFFSET_IN;

        let y_rail_mm = choose_standard_length(required_y_rail_in);
        let x_frame_mm = choose_standard_length(required_x_frame_in);
        let gantry_mm = choose_standard_length(required_gantry_in);

        let gantry_profile = if required_gantry_in < GANTRY_2040_THRESHOLD_IN {
            ExtrusionProfile::P2020
        } else {
            ExtrusionProfile::P2040
        };

        let extrusions = vec![
            ExtrusionPiece {
                description: "Y-axis rail",
                profile: ExtrusionProfile::P2020,
                length_mm: y_rail_mm,
                quantity: 2,
            },
            ExtrusionPiece {
                description: "X-axis frame rail",
                profile: ExtrusionProfile::P2020,
                length_mm: x_frame_mm,
                quantity: 2,
            },
            ExtrusionPiece {
                description: "Gantry beam",
                profile: gantry_profile,
                length_mm: gantry_mm,
                quantity: 1,
            },
        ];

        let steel = vec![
            SteelPiece {
                description: "Steel tube X",
                size: STEEL_TUBE_SIZE,
                length_in: width_in + STEEL_X_OFFSET_IN,
                quantity: 2,
            },
            SteelPiece {
                description: "Steel tube Y",
                size: STEEL_TUBE_SIZE,
                length_in: length_in + STEEL_Y_OFFSET_IN,
                quantity: 2,
            },
        ];

        Self {
            extrusions,
            steel,
            actual_width_in: mm_to_in(f64::from(gantry_mm)) - GANTRY_OFFSET_IN,
            actual_length_in: mm_to_in(f64::from(y_rail_mm)) - Y_RAIL_OFFSET_IN,
        }
    }

    /// Total extrusion stock, in feet
    pub fn extrusion_length_ft(&self) -> f64 {
        self.extrusions
            .iter()
            .map(|p| p.length_in() * f64::from(p.quantity))
            .sum::<f64>()
            / INCHES_PER_FOOT
    }

    /// Total steel tube, in feet
    pub fn steel_length_ft(&self) -> f64 {
        self.steel
            .iter()
            .map(|p| p.length_ft() * f64::from(p.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_choose_standard_length() {
        // 762 mm
        assert_eq!(choose_standard_length(30.0), 800);
        // 381 mm
        assert_eq!(choose_standard_length(15.0), 400);
        assert_eq!(choose_standard_length(1.0), 400);
        // longer than any stock falls back to the longest
        assert_eq!(choose_standard_length(100.0), 1500);
    }

    #[test]
    fn test_two_by_two_cut_list() {
        let cut = FrameCutList::for_work_area(24.0, 24.0);

        assert_eq!(cut.extrusions.len(), 3);
        assert!(cut.extrusions.iter().all(|p| p.length_mm == 800));
        assert_eq!(cut.extrusions[2].profile, ExtrusionProfile::P2040);

        // 2*800 + 2*800 + 800 mm
        assert!(approx(cut.extrusion_length_ft(), 4000.0 / 304.8));
        // 2*(24+5.25) + 2*(24+6) in
        assert!(approx(cut.steel_length_ft(), 118.5 / 12.0));

        assert!(approx(cut.actual_width_in, 800.0 / 25.4 - 5.25));
        assert!(approx(cut.actual_length_in, 800.0 / 25.4 - 6.0));
    }

    #[test]
    fn test_short_gantry_stays_2020() {
        let cut = FrameCutList::for_work_area(15.75, 15.75);
        let gantry = &cut.extrusions[2];
        assert_eq!(gantry.description, "Gantry beam");
        assert_eq!(gantry.profile, ExtrusionProfile::P2020);
        assert_eq!(gantry.length_mm, 600);
    }

    #[test]
    fn test_actual_area_covers_nominal() {
        for (w, l) in [(15.75, 48.0), (36.0, 36.0), (48.0, 48.0)] {
            let cut = FrameCutList::for_work_area(w, l);
            assert!(cut.actual_width_in >= w);
            assert!(cut.actual_length_in >= l);
        }
    }
}
