//! Quantity stepper for the detail screen.

use serde::{Deserialize, Serialize};

/// Minimum quantity a stepper can hold.
pub const MIN_QUANTITY: i64 = 1;

/// A bounded-below quantity counter.
///
/// Starts at 1. Increment has no upper bound; decrement is a no-op at the
/// minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity(i64);

impl Default for Quantity {
    fn default() -> Self {
        Self(MIN_QUANTITY)
    }
}

impl Quantity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn decrement(&mut self) {
        if self.0 > MIN_QUANTITY {
            self.0 -= 1;
        }
    }

    /// Whether the decrement control should be disabled.
    pub fn at_minimum(&self) -> bool {
        self.0 == MIN_QUANTITY
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        assert_eq!(Quantity::new().get(), 1);
        assert!(Quantity::new().at_minimum());
    }

    #[test]
    fn test_increment_adds_exactly_one() {
        let mut qty = Quantity::new();
        for expected in 2..=100 {
            qty.increment();
            assert_eq!(qty.get(), expected);
        }
    }

    #[test]
    fn test_never_decrements_below_one() {
        let mut qty = Quantity::new();
        for _ in 0..10 {
            qty.decrement();
        }
        assert_eq!(qty.get(), 1);
    }

    #[test]
    fn test_decrement_after_increment() {
        let mut qty = Quantity::new();
        qty.increment();
        qty.increment();
        qty.decrement();
        assert_eq!(qty.get(), 2);
        assert!(!qty.at_minimum());
    }
}
