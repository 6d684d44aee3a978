use std::fmt;

use crate::{
    bundle::{BillsBundle, CashError},
    denomination::Denomination,
};

/// One [`BillsBundle`] per [`Denomination`]. Used both for the till itself
/// and for the bills moved in or out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    bundles: [BillsBundle; 5],
}

impl Default for Register {
    fn default() -> Self {
        Self {
            bundles: Denomination::ALL.map(BillsBundle::new),
        }
    }
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the register with bill counts for $20, $10, $5, $2 and $1.
    /// Counts are not validated here.
    pub fn with_counts(twenties: i64, tens: i64, fives: i64, twos: i64, ones: i64) -> Self {
        Self::from_counts([twenties, tens, fives, twos, ones])
    }

    pub fn from_counts(counts: [i64; 5]) -> Self {
        let mut register = Self::default();
        for (bundle, count) in register.bundles.iter_mut().zip(counts) {
            *bundle = BillsBundle::with_count(bundle.denomination(), count);
        }
        register
    }

    pub fn bundle(&self, denomination: Denomination) -> &BillsBundle {
        &self.bundles[denomination.index()]
    }

    /// Bill counts in descending denomination order.
    pub fn counts(&self) -> [i64; 5] {
        self.bundles.each_ref().map(BillsBundle::count)
    }

    /// Wide enough that no combination of bill counts can overflow it.
    pub fn total_value(&self) -> i128 {
        self.bundles.iter().map(BillsBundle::total_value).sum()
    }

    /// Adds every bundle of `other` to this register, largest denomination
    /// first. Bundles updated before a failing one stay updated.
    pub fn put(&mut self, other: &Register) -> Result<(), CashError> {
        for (bundle, bills) in self.bundles.iter_mut().zip(&other.bundles) {
            bundle.put(bills)?;
        }
        Ok(())
    }

    /// Removes every bundle of `other` from this register, largest
    /// denomination first. Bundles updated before a failing one stay updated.
    pub fn take(&mut self, other: &Register) -> Result<(), CashError> {
        for (bundle, bills) in self.bundles.iter_mut().zip(&other.bundles) {
            bundle.take(bills)?;
        }
        Ok(())
    }

    /// Picks bills worth exactly `amount` without touching this register.
    /// Use [`Register::take`] with the result to withdraw them.
    ///
    /// Greedy from $20 down to $1 with no backtracking, so it can report
    /// [`CashError::InsufficientFunds`] even when some other combination
    /// of the held bills would add up to `amount`.
    pub fn change(&self, amount: i64) -> Result<Register, CashError> {
        if amount < 0 {
            return Err(CashError::InvalidAmount);
        }

        let mut change = Register::default();
        let mut remaining = amount;
        for (bundle, bills) in self.bundles.iter().zip(change.bundles.iter_mut()) {
            let count = bundle.max_available_change(remaining)?;
            let value = count
                .checked_mul(bundle.denomination().face_value())
                .ok_or(CashError::InvalidAmount)?;
            *bills = BillsBundle::with_count(bundle.denomination(), count);
            remaining = remaining
                .checked_sub(value)
                .ok_or(CashError::InvalidAmount)?;
        }

        if remaining > 0 {
            return Err(CashError::InsufficientFunds);
        }
        Ok(change)
    }

    /// Renders `$<total> <#20s> <#10s> <#5s> <#2s> <#1s>`.
    pub fn show(&self) -> String {
        let mut out = format!("${}", self.total_value());
        for bundle in &self.bundles {
            out.push(' ');
            out.push_str(&bundle.count().to_string());
        }
        out
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}
