use chrono::NaiveDate;

use super::mode::RegisterKind;
use crate::ledger::{Ledger, Reconcile, SplitId};

/// A debit/credit column pair. A leg sits in exactly one of the columns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebitCredit {
    pub debit: f64,
    pub credit: f64,
}

impl DebitCredit {
    /// Positive amounts show as credits, negative ones as debits.
    pub fn from_amount(amount: f64) -> Self {
        if amount < 0.0 {
            Self {
                debit: -amount,
                credit: 0.0,
            }
        } else {
            Self {
                debit: 0.0,
                credit: amount,
            }
        }
    }

    pub fn debit(value: f64) -> Self {
        Self {
            debit: value,
            credit: 0.0,
        }
    }

    pub fn credit(value: f64) -> Self {
        Self {
            debit: 0.0,
            credit: value,
        }
    }

    /// `credit - debit`; the inverse of `from_amount`.
    pub fn signed(&self) -> f64 {
        self.credit - self.debit
    }
}

/// Field values of one register row, as populated from the ledger and
/// edited by the user before a save.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryFields {
    pub date: Option<NaiveDate>,
    pub num: String,
    pub description: String,
    pub reconcile: Option<Reconcile>,
    pub action: String,
    pub memo: String,
    /// Account of this split.
    pub transfer: String,
    /// Account of the other split, the split marker, or empty.
    pub mirror_transfer: String,
    /// Amount as shown on transaction-level rows.
    pub direct: DebitCredit,
    /// Negated amount as shown on split-level rows.
    pub mirrored: DebitCredit,
    pub price: f64,
    pub value: f64,
    pub balance: f64,
    pub share_balance: f64,
}

impl EntryFields {
    /// Copies the ledger attributes of `split` into display fields. `None`
    /// yields an all-empty row.
    pub fn load(
        ledger: &Ledger,
        split: Option<SplitId>,
        kind: RegisterKind,
        split_marker: &str,
    ) -> Self {
        let Some(entry) = split.and_then(|id| ledger.split(id)) else {
            return Self::default();
        };
        let Some(txn) = ledger.transaction(entry.parent()) else {
            return Self::default();
        };

        let mut balance = ledger.split_balance(entry.id);
        if kind.negates_balance() {
            balance = -balance;
        }

        let account_name = |id| {
            ledger
                .account(id)
                .map(|acc| acc.name.clone())
                .unwrap_or_default()
        };
        let transfer = entry.account().map(account_name).unwrap_or_default();
        let mirror_transfer = match ledger.other_split(entry.id) {
            Some(other) => ledger
                .split(other)
                .and_then(|s| s.account())
                .map(account_name)
                .unwrap_or_default(),
            None if ledger.split_at(txn.id, 1).is_some() => split_marker.to_string(),
            None => String::new(),
        };

        let amount = if kind.is_share_based() {
            entry.share_amount
        } else {
            entry.value()
        };

        Self {
            date: Some(txn.date),
            num: txn.num.clone(),
            description: txn.description.clone(),
            reconcile: Some(entry.reconcile),
            action: entry.action.clone(),
            memo: entry.memo.clone(),
            transfer,
            mirror_transfer,
            direct: DebitCredit::from_amount(amount),
            mirrored: DebitCredit::from_amount(-amount),
            price: entry.share_price,
            value: entry.value(),
            balance,
            share_balance: ledger.split_share_balance(entry.id),
        }
    }

    /// Amount carried by the direct pair.
    pub fn direct_amount(&self) -> f64 {
        self.direct.signed()
    }

    /// Amount carried by the mirrored pair, un-negated.
    pub fn mirrored_amount(&self) -> f64 {
        -self.mirrored.signed()
    }
}
