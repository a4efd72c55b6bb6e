//! Numeric value banding.
//!
//! Maps a percentage-like decimal to one of three ordered bands. The
//! intervals have no gaps and no overlaps: [0, 25] is Low, (25, 75] is
//! Medium, and everything else is High.
//!
//! Negative values classify High. The input domain is nominally
//! [0, 100], so this is arguably an accident of the boundary policy,
//! but it is long-standing observable behavior and is preserved here;
//! changing it is a product decision, not a bug fix.

use std::fmt;

use serde::Serialize;

/// Classification outcome for a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueBand {
    /// Value in [0, 25].
    Low,
    /// Value in (25, 75].
    Medium,
    /// Value above 75, or below 0.
    High,
}

impl ValueBand {
    /// Classify a decimal value into a band.
    ///
    /// Returns `None` for NaN (the unclassified sentinel); callers
    /// render such cells as plain formatted text, never as a band.
    /// Total over all other inputs, including infinities.
    ///
    /// # Example
    ///
    /// ```
    /// use semaforo::ValueBand;
    ///
    /// assert_eq!(ValueBand::classify(25.0), Some(ValueBand::Low));
    /// assert_eq!(ValueBand::classify(75.0), Some(ValueBand::Medium));
    /// assert_eq!(ValueBand::classify(75.0001), Some(ValueBand::High));
    /// assert_eq!(ValueBand::classify(f64::NAN), None);
    /// ```
    pub fn classify(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        if (0.0..=25.0).contains(&value) {
            Some(Self::Low)
        } else if value > 25.0 && value <= 75.0 {
            Some(Self::Medium)
        } else {
            Some(Self::High)
        }
    }

    /// Short lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Stable style class name for presentation adapters.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Low => "low-value",
            Self::Medium => "medium-value",
            Self::High => "high-value",
        }
    }
}

impl fmt::Display for ValueBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
