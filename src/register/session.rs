use tracing::{info, warn};

use crate::errors::RegisterResult;
use crate::ledger::{Ledger, TransactionId};

/// The single begin/commit bracket a register keeps open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Open(TransactionId),
}

impl EditSession {
    pub fn open_transaction(&self) -> Option<TransactionId> {
        match self {
            EditSession::Idle => None,
            EditSession::Open(txn) => Some(*txn),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open(_))
    }

    /// Ensures `transaction` is the open edit. A different open transaction
    /// is committed first; sessions never nest and are never dropped.
    pub fn switch_to(&mut self, ledger: &mut Ledger, transaction: TransactionId) -> RegisterResult<()> {
        if self.open_transaction() == Some(transaction) {
            return Ok(());
        }
        self.commit(ledger)?;
        ledger.begin_edit(transaction)?;
        info!(%transaction, "edit session opened");
        *self = EditSession::Open(transaction);
        Ok(())
    }

    /// Commits the open transaction, if any, and returns to idle.
    pub fn commit(&mut self, ledger: &mut Ledger) -> RegisterResult<()> {
        if let EditSession::Open(previous) = *self {
            *self = EditSession::Idle;
            if ledger.transaction(previous).is_none() {
                warn!(transaction = %previous, "open transaction vanished before commit");
                return Ok(());
            }
            ledger.commit_edit(previous)?;
            info!(transaction = %previous, "edit session committed");
        }
        Ok(())
    }

    /// Discards every mutation made since the open transaction began.
    pub fn rollback(&mut self, ledger: &mut Ledger) -> RegisterResult<Option<TransactionId>> {
        let EditSession::Open(txn) = *self else {
            return Ok(None);
        };
        *self = EditSession::Idle;
        if ledger.transaction(txn).is_none() {
            warn!(transaction = %txn, "open transaction vanished before rollback");
            return Ok(None);
        }
        ledger.rollback_edit(txn)?;
        info!(transaction = %txn, "edit session rolled back");
        Ok(Some(txn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ledger_with_two() -> (Ledger, TransactionId, TransactionId) {
        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = ledger.create_transaction(date);
        let b = ledger.create_transaction(date);
        (ledger, a, b)
    }

    #[test]
    fn switching_commits_previous_transaction() {
        let (mut ledger, a, b) = ledger_with_two();
        let mut session = EditSession::default();

        session.switch_to(&mut ledger, a).unwrap();
        ledger.transaction_mut(a).unwrap().description = "kept".into();
        session.switch_to(&mut ledger, b).unwrap();

        assert_eq!(session, EditSession::Open(b));
        assert!(!ledger.is_open(a));
        assert!(ledger.is_open(b));

        session.rollback(&mut ledger).unwrap();
        assert_eq!(ledger.transaction(a).unwrap().description, "kept");
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn switching_to_same_transaction_keeps_bracket() {
        let (mut ledger, a, _) = ledger_with_two();
        let mut session = EditSession::default();
        session.switch_to(&mut ledger, a).unwrap();
        ledger.transaction_mut(a).unwrap().num = "7".into();
        session.switch_to(&mut ledger, a).unwrap();
        session.rollback(&mut ledger).unwrap();
        assert_eq!(ledger.transaction(a).unwrap().num, "");
    }

    #[test]
    fn commit_on_vanished_transaction_goes_idle() {
        let (mut ledger, a, _) = ledger_with_two();
        let mut session = EditSession::default();
        session.switch_to(&mut ledger, a).unwrap();
        ledger.destroy(a).unwrap();
        session.commit(&mut ledger).unwrap();
        assert!(!session.is_open());
    }
}
