use chrono::NaiveDate;

use super::ids::{AccountId, SplitId, TransactionId};

/// Share price a freshly allocated split starts with.
pub const DEFAULT_SHARE_PRICE: f64 = 1.0;

/// A balanced group of splits sharing a date, number, and description.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub num: String,
    pub description: String,
    pub(crate) splits: Vec<SplitId>,
    pub(crate) seq: u64,
}

impl Transaction {
    pub(crate) fn new(date: NaiveDate, seq: u64) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            num: String::new(),
            description: String::new(),
            splits: Vec::new(),
            seq,
        }
    }

    /// Owned splits in position order.
    pub fn splits(&self) -> &[SplitId] {
        &self.splits
    }
}

/// Reconciliation state of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reconcile {
    #[default]
    New,
    Cleared,
    Reconciled,
    Frozen,
}

impl Reconcile {
    /// Single-character code shown in the register's `R` column.
    pub fn as_char(self) -> char {
        match self {
            Reconcile::New => 'n',
            Reconcile::Cleared => 'c',
            Reconcile::Reconciled => 'y',
            Reconcile::Frozen => 'f',
        }
    }

    pub fn from_char(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'n' => Some(Reconcile::New),
            'c' => Some(Reconcile::Cleared),
            'y' => Some(Reconcile::Reconciled),
            'f' => Some(Reconcile::Frozen),
            _ => None,
        }
    }
}

/// One leg of a transaction, optionally filed under an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub id: SplitId,
    pub reconcile: Reconcile,
    pub action: String,
    pub memo: String,
    pub share_amount: f64,
    pub share_price: f64,
    pub(crate) parent: TransactionId,
    pub(crate) account: Option<AccountId>,
    pub(crate) seq: u64,
}

impl Split {
    pub(crate) fn new(parent: TransactionId, seq: u64) -> Self {
        Self {
            id: SplitId::new(),
            reconcile: Reconcile::New,
            action: String::new(),
            memo: String::new(),
            share_amount: 0.0,
            share_price: DEFAULT_SHARE_PRICE,
            parent,
            account: None,
            seq,
        }
    }

    pub fn parent(&self) -> TransactionId {
        self.parent
    }

    pub fn account(&self) -> Option<AccountId> {
        self.account
    }

    /// Monetary value: shares times price.
    pub fn value(&self) -> f64 {
        self.share_amount * self.share_price
    }

    /// Rewrites the share amount so the split carries `value` at its current
    /// price. A zero price is reset to the neutral price first.
    pub fn set_value(&mut self, value: f64) {
        if self.share_price == 0.0 {
            self.share_price = DEFAULT_SHARE_PRICE;
        }
        self.share_amount = value / self.share_price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_codes_round_trip() {
        for flag in [
            Reconcile::New,
            Reconcile::Cleared,
            Reconcile::Reconciled,
            Reconcile::Frozen,
        ] {
            assert_eq!(Reconcile::from_char(flag.as_char()), Some(flag));
        }
        assert_eq!(Reconcile::from_char('Y'), Some(Reconcile::Reconciled));
        assert_eq!(Reconcile::from_char('x'), None);
    }

    #[test]
    fn set_value_respects_price() {
        let mut split = Split::new(TransactionId::new(), 0);
        split.share_price = 4.0;
        split.set_value(100.0);
        assert_eq!(split.share_amount, 25.0);
        assert_eq!(split.value(), 100.0);

        split.share_price = 0.0;
        split.set_value(10.0);
        assert_eq!(split.share_price, DEFAULT_SHARE_PRICE);
        assert_eq!(split.share_amount, 10.0);
    }
}
