use crate::plot::color::get_color_from_label;
use anyhow::Result;
use plotters::prelude::RGBColor;
use std::fmt;

/// The two experimental configurations compared in every chart. Each one is
/// selected from the results by an exact match on the `INC` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Baseline {
    IncEnabled,
    Traditional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Diamond,
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Baseline::IncEnabled => write!(f, "INC-enabled"),
            Baseline::Traditional => write!(f, "Traditional"),
        }
    }
}

impl Baseline {
    /// Value of the `INC` column for rows that belong to this baseline.
    pub fn flag(&self) -> f64 {
        match self {
            Baseline::IncEnabled => 1.0,
            Baseline::Traditional => 0.0,
        }
    }

    pub fn marker(&self) -> Marker {
        match self {
            Baseline::IncEnabled => Marker::Circle,
            Baseline::Traditional => Marker::Diamond,
        }
    }

    pub fn get_color(&self) -> Result<RGBColor> {
        match self {
            Baseline::IncEnabled => get_color_from_label("inc"),
            Baseline::Traditional => get_color_from_label("traditional"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_distinct() {
        assert_eq!(Baseline::IncEnabled.flag(), 1.0);
        assert_eq!(Baseline::Traditional.flag(), 0.0);
    }

    #[test]
    fn legend_labels() {
        assert_eq!(Baseline::IncEnabled.to_string(), "INC-enabled");
        assert_eq!(Baseline::Traditional.to_string(), "Traditional");
    }

    #[test]
    fn baselines_use_different_markers_and_colors() {
        assert_eq!(Baseline::IncEnabled.marker(), Marker::Circle);
        assert_eq!(Baseline::Traditional.marker(), Marker::Diamond);
        let RGBColor(r_inc, g_inc, b_inc) = Baseline::IncEnabled.get_color().unwrap();
        let RGBColor(r_trad, g_trad, b_trad) = Baseline::Traditional.get_color().unwrap();
        assert_ne!((r_inc, g_inc, b_inc), (r_trad, g_trad, b_trad));
    }
}
