#![allow(dead_code)]

use chrono::NaiveDate;
use split_register::{
    config::RegisterConfig,
    grid::MemoryGrid,
    ledger::{AccountId, AccountKind, Ledger, SplitId, TransactionId},
    register::{DisplayMode, RegisterKind},
    SplitRegister,
};

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid date")
}

/// Blank entries are dated after every fixture transaction.
pub fn fixed_today() -> NaiveDate {
    date(12, 31)
}

/// A checking account with a one-split and a two-split transaction.
pub struct Books {
    pub ledger: Ledger,
    pub checking: AccountId,
    pub food: AccountId,
    pub rent: AccountId,
    /// One split, $100 debit.
    pub t1: TransactionId,
    pub t1_split: SplitId,
    /// Two splits, $50 / $50.
    pub t2: TransactionId,
    pub t2_checking: SplitId,
    pub t2_food: SplitId,
}

impl Books {
    pub fn new() -> Self {
        let mut ledger = Ledger::new();
        let checking = ledger.create_account("Checking", AccountKind::Bank, "USD");
        let food = ledger.create_account("Food", AccountKind::Expense, "USD");
        let rent = ledger.create_account("Rent", AccountKind::Expense, "USD");

        let t1 = ledger.create_transaction(date(3, 1));
        let t1_split = ledger.split_at(t1, 0).expect("first split");
        ledger.insert_split(checking, t1_split).expect("file t1");
        ledger
            .split_mut(t1_split)
            .expect("t1 split")
            .set_value(-100.0);
        ledger.transaction_mut(t1).expect("t1").description = "ATM".into();

        let t2 = ledger.create_transaction(date(3, 2));
        let t2_checking = ledger.split_at(t2, 0).expect("first split");
        ledger.insert_split(checking, t2_checking).expect("file t2");
        ledger
            .split_mut(t2_checking)
            .expect("t2 split")
            .set_value(-50.0);
        let t2_food = ledger.append_split(t2).expect("append");
        ledger.insert_split(food, t2_food).expect("file t2 food");
        ledger.split_mut(t2_food).expect("t2 food").set_value(50.0);
        ledger.transaction_mut(t2).expect("t2").description = "Market".into();

        ledger.drain_refreshes();
        Self {
            ledger,
            checking,
            food,
            rent,
            t1,
            t1_split,
            t2,
            t2_checking,
            t2_food,
        }
    }

    /// Adds a transaction with three splits: checking, food, rent.
    pub fn add_three_way(&mut self) -> (TransactionId, SplitId) {
        let txn = self.ledger.create_transaction(date(3, 3));
        let anchor = self.ledger.split_at(txn, 0).expect("first split");
        self.ledger
            .insert_split(self.checking, anchor)
            .expect("file anchor");
        let food = self.ledger.append_split(txn).expect("append");
        self.ledger.insert_split(self.food, food).expect("file food");
        let rent = self.ledger.append_split(txn).expect("append");
        self.ledger.insert_split(self.rent, rent).expect("file rent");
        (txn, anchor)
    }

    /// Checking's splits in register order.
    pub fn entries(&self) -> Vec<SplitId> {
        self.ledger.account_register_splits(self.checking)
    }
}

pub fn register(mode: DisplayMode) -> SplitRegister {
    SplitRegister::new(RegisterKind::Bank, RegisterConfig::default().with_mode(mode))
        .with_clock(fixed_today)
}

/// Loads checking's current entries into `grid`.
pub fn load(register: &mut SplitRegister, books: &mut Books, grid: &mut MemoryGrid) {
    let entries = books.entries();
    let checking = books.checking;
    register
        .load_register(&mut books.ledger, grid, &entries, checking)
        .expect("load register");
}

/// Virtual row currently showing `split`.
pub fn row_of(register: &SplitRegister, split: SplitId) -> usize {
    register
        .layout()
        .and_then(|layout| layout.group_of(split))
        .map(|group| group.virt_row)
        .expect("split is laid out")
}

pub const ALL_MODES: [DisplayMode; 5] = [
    DisplayMode::SingleLine,
    DisplayMode::DoubleLine,
    DisplayMode::MultiLine,
    DisplayMode::SingleDynamic,
    DisplayMode::DoubleDynamic,
];
