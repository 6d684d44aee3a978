use thiserror::Error;

use crate::denomination::Denomination;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CashError {
    #[error("Sorry - Invalid Amount")]
    InvalidAmount,
    #[error("Sorry - Mismatched Denominations")]
    MismatchDenomination,
    #[error("Sorry - Insufficient Funds")]
    InsufficientFunds,
}

/// A stack of bills sharing one denomination, e.g. two $10 bills.
///
/// The count is not validated on construction; only the bundles passed
/// into [`BillsBundle::put`] and [`BillsBundle::take`] are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillsBundle {
    denomination: Denomination,
    count: i64,
}

impl BillsBundle {
    pub fn new(denomination: Denomination) -> Self {
        Self::with_count(denomination, 0)
    }

    pub fn with_count(denomination: Denomination, count: i64) -> Self {
        Self {
            denomination,
            count,
        }
    }

    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn total_value(&self) -> i128 {
        i128::from(self.count) * i128::from(self.denomination.face_value())
    }

    /// Adds the bills of `other` to this bundle, returning the new count.
    /// A count too large to hold is an invalid amount.
    pub fn put(&mut self, other: &BillsBundle) -> Result<i64, CashError> {
        self.validate(other)?;
        self.count = self
            .count
            .checked_add(other.count)
            .ok_or(CashError::InvalidAmount)?;
        Ok(self.count)
    }

    /// Removes the bills of `other` from this bundle, returning the new count.
    pub fn take(&mut self, other: &BillsBundle) -> Result<i64, CashError> {
        self.validate(other)?;
        if self.count < other.count {
            return Err(CashError::InsufficientFunds);
        }
        self.count -= other.count;
        Ok(self.count)
    }

    /// How many bills of this bundle fit into `amount` without overshooting,
    /// limited by the bills actually held. Nothing is reserved.
    pub fn max_available_change(&self, amount: i64) -> Result<i64, CashError> {
        if amount < 0 {
            return Err(CashError::InvalidAmount);
        }
        if self.denomination.exceeds(amount) {
            return Ok(0);
        }
        let needed = amount / self.denomination.face_value();
        Ok(needed.min(self.count))
    }

    fn validate(&self, other: &BillsBundle) -> Result<(), CashError> {
        if other.count < 0 {
            return Err(CashError::InvalidAmount);
        }
        if other.denomination != self.denomination {
            return Err(CashError::MismatchDenomination);
        }
        Ok(())
    }
}
