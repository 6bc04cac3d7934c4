use super::ids::{AccountId, SplitId};

/// A named bucket of splits with a currency/security identity.
///
/// The account only indexes its member splits; a split's lifetime belongs to
/// its transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub kind: AccountKind,
    pub currency: String,
    pub security: Option<String>,
    pub parent: Option<AccountId>,
    pub(crate) splits: Vec<SplitId>,
}

impl Account {
    /// Creates a top-level account with no member splits.
    pub fn new(name: impl Into<String>, kind: AccountKind, currency: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            currency: currency.into(),
            security: None,
            parent: None,
            splits: Vec::new(),
        }
    }

    /// Sets the traded security; an empty string means none.
    pub fn with_security(mut self, security: impl Into<String>) -> Self {
        let security = security.into();
        self.security = if security.is_empty() {
            None
        } else {
            Some(security)
        };
        self
    }

    /// Member splits in insertion order.
    pub fn splits(&self) -> &[SplitId] {
        &self.splits
    }

    /// True when either the currency or the security equals `code`.
    pub fn trades_in(&self, code: &str) -> bool {
        self.currency == code || self.security.as_deref() == Some(code)
    }
}

/// Enumerates the supported account classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Bank,
    Cash,
    Asset,
    Credit,
    Liability,
    Income,
    Expense,
    Equity,
    Stock,
    Mutual,
    Currency,
}
