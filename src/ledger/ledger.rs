use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{
    account::{Account, AccountKind},
    ids::{AccountId, SplitId, TransactionId},
    transaction::{Split, Transaction},
};
use crate::errors::{RegisterError, RegisterResult};

/// Joins account names into a full path.
pub const ACCOUNT_SEPARATOR: &str = ":";

/// Change notice other views use to refresh their display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Issued when an edit on the transaction is committed or rolled back.
    Transaction(TransactionId),
    /// Issued when a split leaves the account.
    Account(AccountId),
}

/// Pre-edit state captured by `begin_edit`.
#[derive(Debug, Clone)]
struct EditSnapshot {
    transaction: Transaction,
    splits: Vec<Split>,
}

/// Arena of accounts, transactions, and splits.
///
/// Transactions own their splits; accounts hold a membership index only.
/// Mutations made while a transaction is open are visible immediately and
/// become durable on `commit_edit`, or are undone by `rollback_edit`.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
    transactions: HashMap<TransactionId, Transaction>,
    splits: HashMap<SplitId, Split>,
    open_edits: HashMap<TransactionId, EditSnapshot>,
    refreshes: Vec<Refresh>,
    next_seq: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    // ------------------------------------------------------------------
    // accounts

    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        kind: AccountKind,
        currency: impl Into<String>,
    ) -> AccountId {
        self.add_account(Account::new(name, kind, currency))
    }

    pub fn add_account(&mut self, account: Account) -> AccountId {
        let id = account.id;
        self.accounts.push(account);
        id
    }

    /// Adds `account` beneath `parent` in the account tree.
    pub fn add_child_account(
        &mut self,
        parent: AccountId,
        mut account: Account,
    ) -> RegisterResult<AccountId> {
        if self.account(parent).is_none() {
            return Err(RegisterError::UnknownAccount(parent));
        }
        account.parent = Some(parent);
        Ok(self.add_account(account))
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Full name of `id` from the root of the account tree, joined with `:`.
    pub fn account_path(&self, id: AccountId) -> Option<String> {
        let mut names = Vec::new();
        let mut next = Some(id);
        while let Some(current) = next {
            let account = self.account(current)?;
            names.push(account.name.as_str());
            next = account.parent;
            if names.len() > self.accounts.len() {
                return None;
            }
        }
        names.reverse();
        Some(names.join(ACCOUNT_SEPARATOR))
    }

    /// Resolves a full path such as `Expenses:Food`, or a bare name when
    /// exactly one account carries it.
    pub fn account_by_name(&self, name: &str) -> Option<AccountId> {
        if let Some(account) = self
            .accounts
            .iter()
            .find(|account| self.account_path(account.id).as_deref() == Some(name))
        {
            return Some(account.id);
        }
        let mut matches = self.accounts.iter().filter(|account| account.name == name);
        let first = matches.next()?;
        if matches.next().is_some() {
            warn!(account = name, "account name is ambiguous; use its full path");
            return None;
        }
        Some(first.id)
    }

    /// Direct children of `parent`, or the top-level accounts for `None`.
    pub fn child_accounts(&self, parent: Option<AccountId>) -> impl Iterator<Item = &Account> {
        self.accounts
            .iter()
            .filter(move |account| account.parent == parent)
    }

    pub fn member_count(&self, account: AccountId) -> usize {
        self.account(account).map_or(0, |acc| acc.splits.len())
    }

    pub fn member_at(&self, account: AccountId, index: usize) -> Option<SplitId> {
        self.account(account)
            .and_then(|acc| acc.splits.get(index).copied())
    }

    /// Files `split` under `account`, removing it from its previous account.
    pub fn insert_split(&mut self, account: AccountId, split: SplitId) -> RegisterResult<()> {
        if self.account(account).is_none() {
            return Err(RegisterError::UnknownAccount(account));
        }
        let previous = self
            .splits
            .get(&split)
            .ok_or(RegisterError::UnknownSplit(split))?
            .account;
        if previous == Some(account) {
            return Ok(());
        }
        if let Some(old) = previous {
            self.detach_membership(old, split);
        }
        if let Some(acc) = self.account_mut(account) {
            acc.splits.push(split);
        }
        if let Some(entry) = self.splits.get_mut(&split) {
            entry.account = Some(account);
        }
        Ok(())
    }

    fn detach_membership(&mut self, account: AccountId, split: SplitId) {
        if let Some(acc) = self.account_mut(account) {
            acc.splits.retain(|member| *member != split);
        }
    }

    // ------------------------------------------------------------------
    // transactions and splits

    /// Allocates a transaction that already owns one unfiled split.
    pub fn create_transaction(&mut self, date: NaiveDate) -> TransactionId {
        let seq = self.bump_seq();
        let transaction = Transaction::new(date, seq);
        let id = transaction.id;
        self.transactions.insert(id, transaction);
        let split_seq = self.bump_seq();
        let split = Split::new(id, split_seq);
        let split_id = split.id;
        self.splits.insert(split_id, split);
        if let Some(txn) = self.transactions.get_mut(&id) {
            txn.splits.push(split_id);
        }
        id
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(&id)
    }

    pub fn transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.get_mut(&id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn split(&self, id: SplitId) -> Option<&Split> {
        self.splits.get(&id)
    }

    pub fn split_mut(&mut self, id: SplitId) -> Option<&mut Split> {
        self.splits.get_mut(&id)
    }

    /// Allocates a new split and appends it to `transaction`.
    pub fn append_split(&mut self, transaction: TransactionId) -> RegisterResult<SplitId> {
        if !self.transactions.contains_key(&transaction) {
            return Err(RegisterError::UnknownTransaction(transaction));
        }
        let seq = self.bump_seq();
        let split = Split::new(transaction, seq);
        let id = split.id;
        self.splits.insert(id, split);
        if let Some(txn) = self.transactions.get_mut(&transaction) {
            txn.splits.push(id);
        }
        Ok(id)
    }

    /// Split at `index` within the transaction; `None` past the end.
    pub fn split_at(&self, transaction: TransactionId, index: usize) -> Option<SplitId> {
        self.transactions
            .get(&transaction)
            .and_then(|txn| txn.splits.get(index).copied())
    }

    pub fn split_count(&self, transaction: TransactionId) -> usize {
        self.transactions
            .get(&transaction)
            .map_or(0, |txn| txn.splits.len())
    }

    /// The peer split, defined only when the transaction has exactly two.
    pub fn other_split(&self, split: SplitId) -> Option<SplitId> {
        let parent = self.splits.get(&split)?.parent;
        let txn = self.transactions.get(&parent)?;
        match txn.splits.as_slice() {
            [a, b] if *a == split => Some(*b),
            [a, b] if *b == split => Some(*a),
            _ => None,
        }
    }

    /// True when both splits belong to the same transaction.
    pub fn is_peer(&self, a: SplitId, b: SplitId) -> bool {
        match (self.splits.get(&a), self.splits.get(&b)) {
            (Some(left), Some(right)) => left.parent == right.parent,
            _ => false,
        }
    }

    /// Removes the transaction and every split it owns.
    pub fn destroy(&mut self, transaction: TransactionId) -> RegisterResult<()> {
        let txn = self
            .transactions
            .remove(&transaction)
            .ok_or(RegisterError::UnknownTransaction(transaction))?;
        for split_id in txn.splits {
            if let Some(split) = self.splits.remove(&split_id) {
                if let Some(account) = split.account {
                    self.detach_membership(account, split_id);
                }
            }
        }
        self.open_edits.remove(&transaction);
        debug!(%transaction, "destroyed transaction");
        Ok(())
    }

    // ------------------------------------------------------------------
    // edit brackets

    /// Opens an edit on `transaction`. Beginning an already-open edit is a
    /// no-op; brackets do not nest.
    pub fn begin_edit(&mut self, transaction: TransactionId) -> RegisterResult<()> {
        if self.open_edits.contains_key(&transaction) {
            return Ok(());
        }
        let txn = self
            .transactions
            .get(&transaction)
            .ok_or(RegisterError::UnknownTransaction(transaction))?
            .clone();
        let splits = txn
            .splits
            .iter()
            .filter_map(|id| self.splits.get(id).cloned())
            .collect();
        self.open_edits.insert(
            transaction,
            EditSnapshot {
                transaction: txn,
                splits,
            },
        );
        debug!(%transaction, "begin edit");
        Ok(())
    }

    /// Makes the open edit durable. Committing a transaction with no open
    /// edit does nothing.
    pub fn commit_edit(&mut self, transaction: TransactionId) -> RegisterResult<()> {
        if !self.transactions.contains_key(&transaction) {
            return Err(RegisterError::UnknownTransaction(transaction));
        }
        if self.open_edits.remove(&transaction).is_some() {
            self.refreshes.push(Refresh::Transaction(transaction));
            debug!(%transaction, "commit edit");
        }
        Ok(())
    }

    /// Restores the transaction, its splits, and their account memberships
    /// to the state captured by `begin_edit`.
    pub fn rollback_edit(&mut self, transaction: TransactionId) -> RegisterResult<()> {
        let Some(snapshot) = self.open_edits.remove(&transaction) else {
            if self.transactions.contains_key(&transaction) {
                return Ok(());
            }
            return Err(RegisterError::UnknownTransaction(transaction));
        };

        let current: Vec<SplitId> = self
            .transactions
            .get(&transaction)
            .map(|txn| txn.splits.clone())
            .unwrap_or_default();
        for split_id in current {
            let kept = snapshot.splits.iter().any(|saved| saved.id == split_id);
            if !kept {
                if let Some(split) = self.splits.remove(&split_id) {
                    if let Some(account) = split.account {
                        self.detach_membership(account, split_id);
                    }
                }
            }
        }

        for saved in snapshot.splits {
            let now = self.splits.get(&saved.id).and_then(|split| split.account);
            if now != saved.account {
                if let Some(account) = now {
                    self.detach_membership(account, saved.id);
                }
                if let Some(account) = saved.account {
                    if let Some(acc) = self.account_mut(account) {
                        acc.splits.push(saved.id);
                    }
                }
            }
            self.splits.insert(saved.id, saved);
        }

        self.transactions
            .insert(transaction, snapshot.transaction);
        self.refreshes.push(Refresh::Transaction(transaction));
        debug!(%transaction, "rollback edit");
        Ok(())
    }

    pub fn is_open(&self, transaction: TransactionId) -> bool {
        self.open_edits.contains_key(&transaction)
    }

    // ------------------------------------------------------------------
    // ordering and balances

    /// Sort key of a transaction. Open edits sort by their pre-edit values.
    pub fn sort_key(&self, transaction: TransactionId) -> Option<(NaiveDate, String, u64)> {
        let txn = match self.open_edits.get(&transaction) {
            Some(snapshot) => &snapshot.transaction,
            None => self.transactions.get(&transaction)?,
        };
        Some((txn.date, txn.num.clone(), txn.seq))
    }

    /// Member splits of `account` in register order: parent date, number,
    /// creation order, then split creation order.
    pub fn account_register_splits(&self, account: AccountId) -> Vec<SplitId> {
        let Some(acc) = self.account(account) else {
            return Vec::new();
        };
        let mut keyed: Vec<_> = acc
            .splits
            .iter()
            .filter_map(|id| {
                let split = self.splits.get(id)?;
                let key = self.sort_key(split.parent)?;
                Some((key, split.seq, *id))
            })
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        keyed.into_iter().map(|(_, _, id)| id).collect()
    }

    /// Running value balance of the split's account up to and including it.
    pub fn split_balance(&self, split: SplitId) -> f64 {
        self.running_total(split, Split::value)
    }

    /// Running share balance of the split's account up to and including it.
    pub fn split_share_balance(&self, split: SplitId) -> f64 {
        self.running_total(split, |s| s.share_amount)
    }

    fn running_total(&self, split: SplitId, measure: impl Fn(&Split) -> f64) -> f64 {
        let Some(target) = self.splits.get(&split) else {
            return 0.0;
        };
        let Some(account) = target.account else {
            return measure(target);
        };
        let mut total = 0.0;
        for id in self.account_register_splits(account) {
            if let Some(member) = self.splits.get(&id) {
                total += measure(member);
            }
            if id == split {
                break;
            }
        }
        total
    }

    // ------------------------------------------------------------------
    // change notices

    pub fn request_refresh(&mut self, refresh: Refresh) {
        self.refreshes.push(refresh);
    }

    /// Returns and clears the queued change notices.
    pub fn drain_refreshes(&mut self) -> Vec<Refresh> {
        std::mem::take(&mut self.refreshes)
    }
}
