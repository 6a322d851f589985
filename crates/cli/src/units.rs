//! Display formatting for solver values.
//!
//! The solver works in feet (the guideline thresholds are published in feet).
//! Imperial output is feet and inches; metric output converts at 3.28 ft/m.

use dipole::prelude::Unit;

const FT_PER_M: f64 = 3.28;
const SQFT_PER_SQM: f64 = FT_PER_M * FT_PER_M;

#[derive(Clone, Copy, Debug)]
pub struct Formatter {
    unit: Unit,
}

impl Formatter {
    pub fn new(unit: Unit) -> Self {
        Self { unit }
    }

    /// `10' 6"` in feet, `3.05 m` or `61 cm` in metric.
    pub fn distance(&self, ft: f64) -> String {
        match self.unit {
            Unit::Feet => {
                let mut whole = ft.floor();
                let mut inches = ((ft - whole) * 12.0).round();
                if inches >= 12.0 {
                    whole += 1.0;
                    inches = 0.0;
                }
                format!("{whole}' {inches}\"")
            }
            Unit::Meters => {
                let cm = (ft / FT_PER_M * 100.0).round();
                if cm >= 100.0 {
                    format!("{:.2} m", cm / 100.0)
                } else {
                    format!("{cm} cm")
                }
            }
        }
    }

    /// `255 ft²` or `23.70 m²`.
    pub fn area(&self, sqft: f64) -> String {
        match self.unit {
            Unit::Feet => format!("{} ft²", sqft.round()),
            Unit::Meters => format!("{:.2} m²", sqft / SQFT_PER_SQM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_splits_feet_and_inches() {
        let f = Formatter::new(Unit::Feet);
        assert_eq!(f.distance(10.0), "10' 0\"");
        assert_eq!(f.distance(10.5), "10' 6\"");
        assert_eq!(f.distance(3.99), "4' 0\"");
        assert_eq!(f.area(255.0), "255 ft²");
    }

    #[test]
    fn metric_converts_from_feet() {
        let f = Formatter::new(Unit::Meters);
        assert_eq!(f.distance(10.0), "3.05 m");
        assert_eq!(f.distance(2.0), "61 cm");
        assert_eq!(f.area(255.0), "23.70 m²");
    }
}
