//! In-memory ledger engine: accounts, transactions, and splits held in an
//! arena keyed by stable ids, with begin/commit/rollback edit brackets.

pub mod account;
pub mod ids;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use ids::{AccountId, SplitId, TransactionId};
pub use ledger::{Ledger, Refresh, ACCOUNT_SEPARATOR};
pub use transaction::{Reconcile, Split, Transaction, DEFAULT_SHARE_PRICE};
