use serde::{Deserialize, Serialize};

use crate::ledger::AccountKind;

/// Row-expansion policy of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    SingleLine,
    DoubleLine,
    MultiLine,
    SingleDynamic,
    DoubleDynamic,
}

impl DisplayMode {
    pub fn is_dynamic(self) -> bool {
        matches!(self, DisplayMode::SingleDynamic | DisplayMode::DoubleDynamic)
    }

    /// Whether a transaction renders one row per split. `is_hot` marks the
    /// transaction under edit (or the expand hint when nothing is).
    pub fn expands(self, is_hot: bool) -> bool {
        match self {
            DisplayMode::MultiLine => true,
            DisplayMode::SingleDynamic | DisplayMode::DoubleDynamic => is_hot,
            DisplayMode::SingleLine | DisplayMode::DoubleLine => false,
        }
    }

    /// Cursor used for a collapsed transaction.
    pub fn lead_cursor(self) -> CursorKind {
        match self {
            DisplayMode::SingleLine | DisplayMode::SingleDynamic => CursorKind::Single,
            DisplayMode::DoubleLine | DisplayMode::MultiLine | DisplayMode::DoubleDynamic => {
                CursorKind::Double
            }
        }
    }
}

/// Row template placed on the grid for one row group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    Header,
    Single,
    Double,
    Transaction,
    Split,
}

/// Physical line count of every cursor template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorHeights {
    pub header: usize,
    pub single: usize,
    pub double: usize,
    pub transaction: usize,
    pub split: usize,
}

impl Default for CursorHeights {
    fn default() -> Self {
        Self {
            header: 1,
            single: 1,
            double: 2,
            transaction: 1,
            split: 1,
        }
    }
}

impl CursorHeights {
    pub fn rows(&self, cursor: CursorKind) -> usize {
        match cursor {
            CursorKind::Header => self.header,
            CursorKind::Single => self.single,
            CursorKind::Double => self.double,
            CursorKind::Transaction => self.transaction,
            CursorKind::Split => self.split,
        }
    }
}

/// Kind of account a register displays; decides amount routing and
/// balance sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterKind {
    Bank,
    Cash,
    Asset,
    Credit,
    Liability,
    Income,
    Expense,
    Equity,
    Stock,
    Portfolio,
    Currency,
    General,
}

impl RegisterKind {
    /// Amount edits land on the share amount rather than the value.
    pub fn is_share_based(self) -> bool {
        matches!(
            self,
            RegisterKind::Equity
                | RegisterKind::Stock
                | RegisterKind::Currency
                | RegisterKind::Portfolio
        )
    }

    /// Income and expense registers show the running balance negated.
    pub fn negates_balance(self) -> bool {
        matches!(self, RegisterKind::Income | RegisterKind::Expense)
    }

    /// A new blank entry copies the share price of the last shown split.
    pub fn seeds_share_price(self) -> bool {
        matches!(self, RegisterKind::Stock | RegisterKind::Portfolio)
    }
}

impl From<AccountKind> for RegisterKind {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Bank => RegisterKind::Bank,
            AccountKind::Cash => RegisterKind::Cash,
            AccountKind::Asset => RegisterKind::Asset,
            AccountKind::Credit => RegisterKind::Credit,
            AccountKind::Liability => RegisterKind::Liability,
            AccountKind::Income => RegisterKind::Income,
            AccountKind::Expense => RegisterKind::Expense,
            AccountKind::Equity => RegisterKind::Equity,
            AccountKind::Stock => RegisterKind::Stock,
            AccountKind::Mutual => RegisterKind::Portfolio,
            AccountKind::Currency => RegisterKind::Currency,
        }
    }
}
