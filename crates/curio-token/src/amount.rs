//! CURIO amount representation.
//!
//! Amounts are stored as base units (1 CURIO = 10^9 units) so every
//! accounting path stays in integer arithmetic; the decimal CURIO view is a
//! display/input convenience only.

use crate::UNITS_PER_CURIO;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of CURIO, held in base units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount {
    units: u64,
}

impl Amount {
    /// Zero CURIO.
    pub const ZERO: Self = Self { units: 0 };

    /// Maximum representable amount.
    pub const MAX: Self = Self { units: u64::MAX };

    /// Create an amount from base units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self { units }
    }

    /// Create an amount from a decimal CURIO value.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn curio(value: f64) -> Self {
        assert!(value >= 0.0, "amount must be non-negative");
        Self {
            units: (value * UNITS_PER_CURIO as f64).round() as u64,
        }
    }

    /// The amount in base units.
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.units
    }

    /// The amount as decimal CURIO.
    #[must_use]
    pub fn as_curio(&self) -> f64 {
        self.units as f64 / UNITS_PER_CURIO as f64
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: Self) -> Option<Self> {
        match self.units.checked_add(other.units) {
            Some(units) => Some(Self { units }),
            None => None,
        }
    }

    /// Checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: Self) -> Option<Self> {
        match self.units.checked_sub(other.units) {
            Some(units) => Some(Self { units }),
            None => None,
        }
    }

    /// Saturating addition.
    #[must_use]
    pub const fn saturating_add(&self, other: Self) -> Self {
        Self {
            units: self.units.saturating_add(other.units),
        }
    }

    /// Saturating subtraction.
    #[must_use]
    pub const fn saturating_sub(&self, other: Self) -> Self {
        Self {
            units: self.units.saturating_sub(other.units),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9} CURIO", self.as_curio())
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self::from_units(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curio_to_units() {
        assert_eq!(Amount::curio(1.0).units(), UNITS_PER_CURIO);
        assert_eq!(Amount::curio(0.1).units(), UNITS_PER_CURIO / 10);
    }

    #[test]
    fn units_to_curio() {
        let amount = Amount::from_units(UNITS_PER_CURIO);
        assert!((amount.as_curio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_and_default() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(Amount::MAX.checked_add(Amount::from_units(1)), None);
        assert_eq!(
            Amount::from_units(1).checked_add(Amount::from_units(2)),
            Some(Amount::from_units(3))
        );
    }

    #[test]
    fn checked_sub_detects_underflow() {
        assert_eq!(Amount::ZERO.checked_sub(Amount::from_units(1)), None);
        assert_eq!(
            Amount::from_units(3).checked_sub(Amount::from_units(2)),
            Some(Amount::from_units(1))
        );
    }

    #[test]
    fn saturating_ops_clamp() {
        assert_eq!(Amount::MAX.saturating_add(Amount::from_units(1)), Amount::MAX);
        assert!(Amount::ZERO.saturating_sub(Amount::from_units(1)).is_zero());
    }

    #[test]
    fn ordering_follows_units() {
        assert!(Amount::curio(0.1) < Amount::curio(0.2));
    }

    #[test]
    fn display_shows_decimal() {
        let text = Amount::curio(1.5).to_string();
        assert!(text.contains("1.5"));
        assert!(text.contains("CURIO"));
    }

    #[test]
    fn serde_roundtrip() {
        let amount = Amount::from_units(54_625);
        let json = serde_json::to_string(&amount).expect("serialize");
        let parsed: Amount = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(amount, parsed);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn add_then_sub_is_identity(a in 0u64..=u64::MAX / 2, b in 0u64..=u64::MAX / 2) {
                let sum = Amount::from_units(a)
                    .checked_add(Amount::from_units(b))
                    .expect("no overflow below u64::MAX / 2");
                let back = sum.checked_sub(Amount::from_units(b)).expect("sum >= b");
                prop_assert_eq!(back.units(), a);
            }
        }
    }
}
