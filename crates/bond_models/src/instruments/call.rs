//! Issuer call schedules for callable bonds.

use bond_core::types::PricingError;
use num_traits::Float;

/// A single call opportunity: the issuer may redeem the bond at
/// `year` for `price` per unit of face value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallEntry<T: Float> {
    /// Call date in years from valuation.
    pub year: T,
    /// Redemption price paid if the issuer calls at this date.
    pub price: T,
}

/// Ordered schedule of issuer call opportunities.
///
/// Entries are validated to be strictly increasing in time, strictly
/// inside the bond's life, with positive call prices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallSchedule<T: Float> {
    entries: Vec<CallEntry<T>>,
}

impl<T: Float> CallSchedule<T> {
    /// Construct a validated call schedule.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when the schedule is
    /// empty, call years are not strictly increasing and positive, or
    /// any call price is non-positive or non-finite.
    pub fn new(entries: Vec<CallEntry<T>>) -> Result<Self, PricingError> {
        if entries.is_empty() {
            return Err(PricingError::InvalidParameter {
                name: "call_schedule",
                reason: "schedule must contain at least one call date".to_string(),
            });
        }
        let mut prev = T::zero();
        for entry in &entries {
            if !entry.year.is_finite() || entry.year <= prev {
                return Err(PricingError::InvalidParameter {
                    name: "call_schedule",
                    reason: "call years must be finite, positive and strictly increasing"
                        .to_string(),
                });
            }
            if !entry.price.is_finite() || entry.price <= T::zero() {
                return Err(PricingError::InvalidParameter {
                    name: "call_schedule",
                    reason: "call prices must be finite and strictly positive".to_string(),
                });
            }
            prev = entry.year;
        }
        Ok(Self { entries })
    }

    /// Convenience constructor for a single call opportunity.
    pub fn single(year: T, price: T) -> Result<Self, PricingError> {
        Self::new(vec![CallEntry { year, price }])
    }

    /// Entries in ascending time order.
    #[inline]
    pub fn entries(&self) -> &[CallEntry<T>] {
        &self.entries
    }
}
