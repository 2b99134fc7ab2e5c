//! Meal slot distribution
//!
//! Splits a daily calorie target across a fixed set of meal slots using
//! fixed percentage weights. Each slot is rounded independently; the slot
//! sum may drift from the input total by a calorie or two and that drift is
//! accepted, not corrected.

use serde::{Deserialize, Serialize};

/// Meal slot receiving a calorie allotment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

/// Per-slot calorie allotments for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDistribution {
    pub breakfast: i64,
    pub lunch: i64,
    pub dinner: i64,
    /// Present only when the snack slot was requested
    pub snack: Option<i64>,
}

impl MealDistribution {
    /// Slot/allotment pairs in display order
    pub fn slots(&self) -> Vec<(MealSlot, i64)> {
        let mut slots = vec![
            (MealSlot::Breakfast, self.breakfast),
            (MealSlot::Lunch, self.lunch),
            (MealSlot::Dinner, self.dinner),
        ];
        if let Some(snack) = self.snack {
            slots.push((MealSlot::Snack, snack));
        }
        slots
    }

    /// Sum of all allotments (may differ from the input total by rounding)
    pub fn total(&self) -> i64 {
        self.breakfast + self.lunch + self.dinner + self.snack.unwrap_or(0)
    }
}

// Fixed slot weights. Not configurable: these are the only two schemes.
const WEIGHTS_THREE: [f64; 3] = [0.30, 0.40, 0.30];
const WEIGHTS_FOUR: [f64; 4] = [0.25, 0.35, 0.35, 0.05];

fn share(total: i64, weight: f64) -> i64 {
    (total as f64 * weight).round() as i64
}

/// Split a daily calorie total across meal slots
pub fn distribute_calories(total: i64, include_snack: bool) -> MealDistribution {
    if include_snack {
        MealDistribution {
            breakfast: share(total, WEIGHTS_FOUR[0]),
            lunch: share(total, WEIGHTS_FOUR[1]),
            dinner: share(total, WEIGHTS_FOUR[2]),
            snack: Some(share(total, WEIGHTS_FOUR[3])),
        }
    } else {
        MealDistribution {
            breakfast: share(total, WEIGHTS_THREE[0]),
            lunch: share(total, WEIGHTS_THREE[1]),
            dinner: share(total, WEIGHTS_THREE[2]),
            snack: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_slot_split() {
        let d = distribute_calories(2585, false);
        assert_eq!(d.breakfast, 776); // round(2585 * 0.30) = 775.5 -> 776
        assert_eq!(d.lunch, 1034); // round(2585 * 0.40)
        assert_eq!(d.dinner, 776);
        assert_eq!(d.snack, None);
    }

    #[test]
    fn test_four_slot_split() {
        let d = distribute_calories(2000, true);
        assert_eq!(d.breakfast, 500);
        assert_eq!(d.lunch, 700);
        assert_eq!(d.dinner, 700);
        assert_eq!(d.snack, Some(100));
        assert_eq!(d.total(), 2000);
    }

    #[test]
    fn test_rounding_drift_is_bounded_not_exact() {
        // Independent rounding: the sum may miss the input, but never by
        // more than one calorie per slot.
        for total in [1, 7, 333, 1999, 2585, 2586, 3001] {
            let d = distribute_calories(total, false);
            assert!((d.total() - total).abs() <= 3, "total {} drifted", total);

            let d = distribute_calories(total, true);
            assert!((d.total() - total).abs() <= 4, "total {} drifted", total);
        }
        // 2585 specifically drifts: 776 + 1034 + 776 = 2586
        assert_eq!(distribute_calories(2585, false).total(), 2586);
    }

    #[test]
    fn test_zero_total() {
        let d = distribute_calories(0, true);
        assert_eq!(d.total(), 0);
    }

    #[test]
    fn test_slot_ordering() {
        let d = distribute_calories(1000, true);
        let slots: Vec<MealSlot> = d.slots().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            slots,
            vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner, MealSlot::Snack]
        );
    }
}
