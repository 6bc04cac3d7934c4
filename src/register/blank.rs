use chrono::NaiveDate;
use tracing::{debug, info};

use super::mode::RegisterKind;
use crate::errors::{RegisterError, RegisterResult};
use crate::ledger::{AccountId, Ledger, SplitId, TransactionId};

/// Owns the trailing empty entry a register uses for appending new data.
///
/// At most one blank entry exists per register. Saving into it promotes it
/// to a regular entry; the next load manufactures a fresh one.
#[derive(Debug, Clone, Default)]
pub struct BlankEntrySlot {
    split: Option<SplitId>,
    promoted: Option<SplitId>,
}

impl BlankEntrySlot {
    pub fn split(&self) -> Option<SplitId> {
        self.split
    }

    pub fn is_blank(&self, split: SplitId) -> bool {
        self.split == Some(split)
    }

    pub fn transaction(&self, ledger: &Ledger) -> Option<TransactionId> {
        self.split
            .and_then(|split| ledger.split(split))
            .map(|split| split.parent())
    }

    /// Returns the blank split, creating a one-split transaction dated
    /// `today` in `account` when none is cached.
    ///
    /// Share-based registers copy the price of `last_shown` onto the new
    /// split; with several securities in one register that guess can be off.
    pub fn ensure(
        &mut self,
        ledger: &mut Ledger,
        account: AccountId,
        kind: RegisterKind,
        last_shown: Option<SplitId>,
        today: NaiveDate,
    ) -> RegisterResult<SplitId> {
        if let Some(split) = self.split {
            if ledger.split(split).is_some() {
                return Ok(split);
            }
            debug!(%split, "cached blank split vanished; manufacturing a new one");
        }
        if ledger.account(account).is_none() {
            return Err(RegisterError::UnknownAccount(account));
        }

        let txn = ledger.create_transaction(today);
        ledger.begin_edit(txn)?;
        let split = ledger
            .split_at(txn, 0)
            .ok_or(RegisterError::UnknownTransaction(txn))?;
        if kind.seeds_share_price() {
            let last_price = last_shown
                .and_then(|id| ledger.split(id))
                .map(|s| s.share_price);
            if let (Some(price), Some(entry)) = (last_price, ledger.split_mut(split)) {
                entry.share_price = price;
            }
        }
        ledger.commit_edit(txn)?;
        ledger.insert_split(account, split)?;

        info!(%split, transaction = %txn, "created blank entry");
        self.split = Some(split);
        Ok(split)
    }

    /// Clears the blank reference once `transaction`'s first split (the
    /// blank) has been saved into. Returns true when promoted.
    pub fn promote_if_saved(&mut self, ledger: &Ledger, transaction: TransactionId) -> bool {
        let first = ledger.split_at(transaction, 0);
        if first.is_some() && first == self.split {
            debug!(transaction = %transaction, "blank entry promoted");
            self.promoted = self.split.take();
            true
        } else {
            false
        }
    }

    /// Undoes a promotion after `transaction` was rolled back: the rolled
    /// back entry is blank again and any newer blank entry is destroyed.
    pub fn reinstate_after_rollback(
        &mut self,
        ledger: &mut Ledger,
        transaction: TransactionId,
    ) -> RegisterResult<()> {
        let Some(promoted) = self.promoted else {
            return Ok(());
        };
        if ledger.split(promoted).map(|s| s.parent()) != Some(transaction) {
            return Ok(());
        }
        if let Some(newer) = self.transaction(ledger) {
            if newer != transaction {
                ledger.begin_edit(newer)?;
                ledger.destroy(newer)?;
            }
        }
        self.split = self.promoted.take();
        debug!(transaction = %transaction, "blank entry reinstated");
        Ok(())
    }

    /// Forgets the last promotion; called once its session commits.
    pub fn settle(&mut self) {
        self.promoted = None;
    }

    /// Destroys the blank entry's transaction. Used on register teardown.
    pub fn release(&mut self, ledger: &mut Ledger) -> RegisterResult<()> {
        let Some(txn) = self.transaction(ledger) else {
            self.split = None;
            return Ok(());
        };
        ledger.begin_edit(txn)?;
        ledger.destroy(txn)?;
        self.split = None;
        info!(transaction = %txn, "released blank entry");
        Ok(())
    }
}
