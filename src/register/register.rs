use chrono::{Local, NaiveDate};
use tracing::{debug, error, info, warn};

use super::{
    blank::BlankEntrySlot,
    cursor::{CursorPositionTracker, NavigationGate, RowPosition},
    dirty::{DirtyFields, Field},
    fields::{DebitCredit, EntryFields},
    layout::{RowCounts, RowLayout, RowLayoutEngine},
    mode::{CursorKind, DisplayMode, RegisterKind},
    session::EditSession,
};
use crate::config::RegisterConfig;
use crate::errors::{RegisterError, RegisterResult};
use crate::grid::RegisterGrid;
use crate::ledger::{
    AccountId, Ledger, Reconcile, Refresh, SplitId, TransactionId, DEFAULT_SHARE_PRICE,
};

/// One user edit to a display field of the current row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Date(NaiveDate),
    Num(String),
    Description(String),
    Reconcile(Reconcile),
    Action(String),
    Memo(String),
    /// Account of the split on this row.
    Transfer(String),
    /// Account of the other split of a two-split transaction.
    MirrorTransfer(String),
    Debit(f64),
    Credit(f64),
    MirrorDebit(f64),
    MirrorCredit(f64),
    Price(f64),
    Value(f64),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Date(_) => Field::Date,
            FieldEdit::Num(_) => Field::Num,
            FieldEdit::Description(_) => Field::Description,
            FieldEdit::Reconcile(_) => Field::Reconcile,
            FieldEdit::Action(_) => Field::Action,
            FieldEdit::Memo(_) => Field::Memo,
            FieldEdit::Transfer(_) => Field::Transfer,
            FieldEdit::MirrorTransfer(_) => Field::MirrorTransfer,
            FieldEdit::Debit(_) | FieldEdit::Credit(_) => Field::Amount,
            FieldEdit::MirrorDebit(_) | FieldEdit::MirrorCredit(_) => Field::MirrorAmount,
            FieldEdit::Price(_) => Field::Price,
            FieldEdit::Value(_) => Field::Value,
        }
    }
}

/// Why a save was abandoned without touching the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    /// No cursor position is known.
    NoCurrentRow,
    /// The split-less row has no split directly above it.
    NoParentRow { virt_row: usize },
    /// The row's split is no longer in the ledger.
    MissingSplit(SplitId),
}

/// Result of flushing the edit buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Nothing was dirty.
    Unchanged,
    Saved {
        split: SplitId,
        transaction: TransactionId,
        /// Dirty fields that could not be applied.
        skipped: Vec<Field>,
        /// The save turned the blank entry into a regular entry.
        promoted_blank: bool,
    },
    Abandoned(AbandonReason),
}

/// A ledger register: lays out entries on a grid and buffers edits to the
/// row under the cursor until they are saved into the ledger.
#[derive(Debug)]
pub struct SplitRegister {
    kind: RegisterKind,
    config: RegisterConfig,
    blank: BlankEntrySlot,
    session: EditSession,
    tracker: CursorPositionTracker,
    layout: Option<RowLayout>,
    entries: Vec<SplitId>,
    default_account: Option<AccountId>,
    buffer: EntryFields,
    dirty: DirtyFields,
    pending_redraw: Option<TransactionId>,
    gate: NavigationGate,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl SplitRegister {
    pub fn new(kind: RegisterKind, config: RegisterConfig) -> Self {
        Self {
            kind,
            config,
            blank: BlankEntrySlot::default(),
            session: EditSession::default(),
            tracker: CursorPositionTracker::default(),
            layout: None,
            entries: Vec::new(),
            default_account: None,
            buffer: EntryFields::default(),
            dirty: DirtyFields::empty(),
            pending_redraw: None,
            gate: NavigationGate::default(),
            today: local_today,
        }
    }

    /// Builds a register whose kind follows the kind of `account`.
    pub fn for_account(
        ledger: &Ledger,
        account: AccountId,
        config: RegisterConfig,
    ) -> RegisterResult<Self> {
        let kind = ledger
            .account(account)
            .map(|acc| RegisterKind::from(acc.kind))
            .ok_or(RegisterError::UnknownAccount(account))?;
        debug!(%account, ?kind, "register kind chosen from account");
        Ok(Self::new(kind, config))
    }

    /// Replaces the date source used when manufacturing blank entries.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn kind(&self) -> RegisterKind {
        self.kind
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    pub fn mode(&self) -> DisplayMode {
        self.config.display_mode
    }

    /// Switches the display mode; takes effect on the next load.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.config.display_mode = mode;
    }

    pub fn blank_split(&self) -> Option<SplitId> {
        self.blank.split()
    }

    pub fn open_transaction(&self) -> Option<TransactionId> {
        self.session.open_transaction()
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn current_split(&self) -> Option<SplitId> {
        self.tracker.current_split()
    }

    pub fn cursor(&self) -> Option<RowPosition> {
        self.tracker.position()
    }

    pub fn expand_hint(&self) -> Option<TransactionId> {
        self.tracker.expand_hint()
    }

    pub fn layout(&self) -> Option<&RowLayout> {
        self.layout.as_ref()
    }

    pub fn buffer(&self) -> &EntryFields {
        &self.buffer
    }

    pub fn dirty(&self) -> DirtyFields {
        self.dirty
    }

    /// Handle to the flag that silences `on_user_navigate` during loads.
    pub fn navigation_gate(&self) -> NavigationGate {
        self.gate.clone()
    }

    fn engine(&self) -> RowLayoutEngine<'_> {
        RowLayoutEngine::new(self.config.display_mode, &self.config.cursor_heights)
    }

    // ------------------------------------------------------------------
    // layout

    /// Grid extents and cursor coordinates `entries` would produce.
    pub fn count_rows(&self, ledger: &Ledger, entries: &[SplitId]) -> RowCounts {
        self.engine()
            .count_rows(ledger, entries, self.blank.split(), &self.tracker)
    }

    /// Sizes and populates `grid` with `entries` followed by the blank entry,
    /// then puts the focus back on the row being edited.
    ///
    /// `entries` holds the split through which each transaction appears in
    /// this register, in display order.
    pub fn load_register(
        &mut self,
        ledger: &mut Ledger,
        grid: &mut dyn RegisterGrid,
        entries: &[SplitId],
        default_account: AccountId,
    ) -> RegisterResult<RowCounts> {
        let _suppressed = self.gate.suppress();

        let last_shown = entries
            .iter()
            .rev()
            .copied()
            .find(|split| !self.blank.is_blank(*split) && ledger.split(*split).is_some());
        self.blank.ensure(
            ledger,
            default_account,
            self.kind,
            last_shown,
            (self.today)(),
        )?;

        let layout = self
            .engine()
            .plan(ledger, entries, self.blank.split(), &self.tracker);
        let counts = layout.counts;
        debug!(
            phys_rows = counts.phys_rows,
            virt_rows = counts.virt_rows,
            mode = ?self.config.display_mode,
            "loading register"
        );

        grid.resize(counts.phys_rows, self.config.column_count, counts.virt_rows);
        for group in &layout.groups {
            grid.place_cursor(group.cursor, group.phys_row, group.virt_row);
            if group.cursor != CursorKind::Header {
                let fields =
                    EntryFields::load(ledger, group.split, self.kind, &self.config.split_marker);
                grid.commit_cursor(&fields);
            }
        }

        let cursor = layout
            .cursor_group()
            .copied()
            .ok_or(RegisterError::RowOutOfRange(counts.cursor_virt_row))?;
        let previous = self.tracker.current_split();
        self.tracker.set_current(cursor.split, cursor.position());
        if self.dirty.is_empty() || previous != cursor.split {
            self.reload_buffer(ledger);
        }
        grid.move_focus(counts.cursor_phys_row, 0);

        self.entries = entries.to_vec();
        self.default_account = Some(default_account);
        self.layout = Some(layout);
        Ok(counts)
    }

    /// Reloads with the entries and account of the last load.
    fn reload(
        &mut self,
        ledger: &mut Ledger,
        grid: &mut dyn RegisterGrid,
    ) -> RegisterResult<RowCounts> {
        let account = self.default_account.ok_or(RegisterError::NotLoaded)?;
        let entries = self.entries.clone();
        self.load_register(ledger, grid, &entries, account)
    }

    fn reload_buffer(&mut self, ledger: &Ledger) {
        self.buffer = EntryFields::load(
            ledger,
            self.tracker.current_split(),
            self.kind,
            &self.config.split_marker,
        );
        self.dirty = DirtyFields::empty();
    }

    /// Puts the cursor on row group `virt_row`, discarding unsaved edits.
    pub fn move_to(&mut self, ledger: &Ledger, virt_row: usize) -> RegisterResult<()> {
        let layout = self.layout.as_ref().ok_or(RegisterError::NotLoaded)?;
        let group = layout
            .group(virt_row)
            .filter(|group| group.cursor != CursorKind::Header)
            .copied()
            .ok_or(RegisterError::RowOutOfRange(virt_row))?;
        self.tracker.set_current(group.split, group.position());
        self.reload_buffer(ledger);
        Ok(())
    }

    // ------------------------------------------------------------------
    // editing

    /// Writes one field into the edit buffer and marks it dirty.
    pub fn edit(&mut self, edit: FieldEdit) {
        self.dirty.mark(edit.field());
        let buffer = &mut self.buffer;
        match edit {
            FieldEdit::Date(date) => buffer.date = Some(date),
            FieldEdit::Num(num) => buffer.num = num,
            FieldEdit::Description(text) => buffer.description = text,
            FieldEdit::Reconcile(flag) => buffer.reconcile = Some(flag),
            FieldEdit::Action(text) => buffer.action = text,
            FieldEdit::Memo(text) => buffer.memo = text,
            FieldEdit::Transfer(name) => buffer.transfer = name,
            FieldEdit::MirrorTransfer(name) => buffer.mirror_transfer = name,
            FieldEdit::Debit(amount) => buffer.direct = DebitCredit::debit(amount),
            FieldEdit::Credit(amount) => buffer.direct = DebitCredit::credit(amount),
            FieldEdit::MirrorDebit(amount) => buffer.mirrored = DebitCredit::debit(amount),
            FieldEdit::MirrorCredit(amount) => buffer.mirrored = DebitCredit::credit(amount),
            FieldEdit::Price(price) => buffer.price = price,
            FieldEdit::Value(value) => buffer.value = value,
        }
    }

    /// Flushes the dirty fields of the current row into the ledger inside
    /// the register's edit session.
    pub fn save_entry(&mut self, ledger: &mut Ledger) -> RegisterResult<SaveOutcome> {
        if self.dirty.is_empty() {
            return Ok(SaveOutcome::Unchanged);
        }

        let (split, transaction) = match self.resolve_target(ledger)? {
            Ok(target) => target,
            Err(reason) => {
                error!(?reason, "save abandoned");
                return Ok(SaveOutcome::Abandoned(reason));
            }
        };
        debug!(%split, %transaction, dirty = self.dirty.bits(), "saving entry");

        let mut skipped = Vec::new();
        let dirty = self.dirty;
        for field in dirty.fields() {
            if !self.apply_field(ledger, field, split, transaction, dirty)? {
                skipped.push(field);
            }
        }

        let promoted_blank = self.blank.promote_if_saved(ledger, transaction);
        self.dirty = DirtyFields::empty();
        self.pending_redraw = Some(transaction);
        info!(%split, %transaction, promoted_blank, "entry saved");
        Ok(SaveOutcome::Saved {
            split,
            transaction,
            skipped,
            promoted_blank,
        })
    }

    /// Finds the split to save into, opening its transaction's session. A
    /// split-less row appends a new split to the transaction above it.
    fn resolve_target(
        &mut self,
        ledger: &mut Ledger,
    ) -> RegisterResult<Result<(SplitId, TransactionId), AbandonReason>> {
        if let Some(split) = self.tracker.current_split() {
            let Some(transaction) = ledger.split(split).map(|s| s.parent()) else {
                return Ok(Err(AbandonReason::MissingSplit(split)));
            };
            self.switch_session(ledger, transaction)?;
            return Ok(Ok((split, transaction)));
        }

        let Some(position) = self.tracker.position() else {
            return Ok(Err(AbandonReason::NoCurrentRow));
        };
        let above = position
            .virt_row
            .checked_sub(1)
            .and_then(|row| self.layout.as_ref()?.group(row))
            .and_then(|group| group.split)
            .filter(|split| ledger.split(*split).is_some());
        let Some(above) = above else {
            return Ok(Err(AbandonReason::NoParentRow {
                virt_row: position.virt_row,
            }));
        };
        let Some(above_split) = ledger.split(above) else {
            return Ok(Err(AbandonReason::MissingSplit(above)));
        };
        let transaction = above_split.parent();
        let above_account = above_split.account();

        self.switch_session(ledger, transaction)?;
        let split = ledger.append_split(transaction)?;
        if self.config.force_double_entry_awareness {
            if let Some(account) = above_account {
                ledger.insert_split(account, split)?;
            }
        }
        debug!(%split, %transaction, "appended split for empty row");
        self.tracker.set_current(Some(split), position);
        Ok(Ok((split, transaction)))
    }

    fn switch_session(&mut self, ledger: &mut Ledger, transaction: TransactionId) -> RegisterResult<()> {
        if self.session.open_transaction() != Some(transaction) && self.session.is_open() {
            self.blank.settle();
        }
        self.session.switch_to(ledger, transaction)
    }

    /// Applies one dirty field. Returns false when the edit was dropped.
    fn apply_field(
        &self,
        ledger: &mut Ledger,
        field: Field,
        split: SplitId,
        transaction: TransactionId,
        dirty: DirtyFields,
    ) -> RegisterResult<bool> {
        let buffer = &self.buffer;
        match field {
            Field::Date => {
                if let (Some(date), Some(txn)) = (buffer.date, ledger.transaction_mut(transaction)) {
                    txn.date = date;
                }
            }
            Field::Num => {
                if let Some(txn) = ledger.transaction_mut(transaction) {
                    txn.num = buffer.num.clone();
                }
            }
            Field::Description => {
                if let Some(txn) = ledger.transaction_mut(transaction) {
                    txn.description = buffer.description.clone();
                }
            }
            Field::Reconcile => {
                if let (Some(flag), Some(entry)) = (buffer.reconcile, ledger.split_mut(split)) {
                    entry.reconcile = flag;
                }
            }
            Field::Action => {
                if let Some(entry) = ledger.split_mut(split) {
                    entry.action = buffer.action.clone();
                }
            }
            Field::Memo => {
                if let Some(entry) = ledger.split_mut(split) {
                    entry.memo = buffer.memo.clone();
                }
            }
            Field::Transfer => {
                let name = buffer.transfer.clone();
                return self.reparent(ledger, split, &name);
            }
            Field::MirrorTransfer => {
                let target = match ledger.other_split(split) {
                    Some(other) => other,
                    None if ledger.split_count(transaction) == 1 => ledger.append_split(transaction)?,
                    None => {
                        warn!(%transaction, "mirrored transfer on a transaction with three or more splits dropped");
                        return Ok(false);
                    }
                };
                let name = buffer.mirror_transfer.clone();
                return self.reparent(ledger, target, &name);
            }
            Field::Amount | Field::MirrorAmount => {
                // A direct edit wins when both pairs were touched.
                if field == Field::MirrorAmount && dirty.is_marked(Field::Amount) {
                    return Ok(true);
                }
                let amount = if field == Field::Amount {
                    buffer.direct_amount()
                } else {
                    buffer.mirrored_amount()
                };
                let share_based = self.kind.is_share_based();
                if let Some(entry) = ledger.split_mut(split) {
                    if share_based {
                        entry.share_amount = amount;
                    } else {
                        entry.set_value(amount);
                    }
                }
            }
            Field::Price => {
                let price = buffer.price;
                if let Some(entry) = ledger.split_mut(split) {
                    entry.share_price = price;
                }
                repair_fresh_account_price(ledger, split, price)?;
            }
            Field::Value => {
                let value = buffer.value;
                if let Some(entry) = ledger.split_mut(split) {
                    entry.set_value(value);
                }
            }
        }
        Ok(true)
    }

    /// Files `split` under the account called `name` and asks views of the
    /// vacated account to refresh.
    fn reparent(&self, ledger: &mut Ledger, split: SplitId, name: &str) -> RegisterResult<bool> {
        let Some(account) = ledger.account_by_name(name) else {
            warn!(%split, account = name, "transfer to unknown account dropped");
            return Ok(false);
        };
        let previous = ledger.split(split).and_then(|s| s.account());
        ledger.insert_split(account, split)?;
        if let Some(old) = previous.filter(|old| *old != account) {
            ledger.request_refresh(Refresh::Account(old));
        }
        Ok(true)
    }

    /// Queues a refresh of the transaction touched by the last save, so every
    /// view showing one of its splits redraws.
    pub fn redraw_entry(&mut self, ledger: &mut Ledger) {
        if let Some(transaction) = self.pending_redraw.take() {
            if ledger.transaction(transaction).is_some() {
                ledger.request_refresh(Refresh::Transaction(transaction));
            }
        }
    }

    /// Rolls back the open session and reloads the buffer.
    pub fn cancel_entry(&mut self, ledger: &mut Ledger) -> RegisterResult<()> {
        if let Some(transaction) = self.session.rollback(ledger)? {
            self.blank.reinstate_after_rollback(ledger, transaction)?;
        }
        if let Some(split) = self.tracker.current_split() {
            if ledger.split(split).is_none() {
                let position = self.tracker.position();
                if let Some(position) = position {
                    self.tracker.set_current(None, position);
                }
            }
        }
        self.pending_redraw = None;
        self.reload_buffer(ledger);
        Ok(())
    }

    // ------------------------------------------------------------------
    // navigation

    /// Hook for user-driven cursor moves. Saves the current entry, then
    /// places the cursor on the target row, relaying out dynamic registers
    /// so the target's transaction expands. Returns the physical row the
    /// cursor actually lands on.
    pub fn on_user_navigate(
        &mut self,
        ledger: &mut Ledger,
        grid: &mut dyn RegisterGrid,
        new_phys_row: usize,
        new_phys_col: usize,
    ) -> RegisterResult<usize> {
        if self.gate.is_suppressed() {
            return Ok(new_phys_row);
        }
        debug!(new_phys_row, new_phys_col, "user navigation");

        let source = self.tracker.current_split();
        let outcome = self.save_entry(ledger)?;
        self.redraw_entry(ledger);

        let layout = self.layout.as_ref().ok_or(RegisterError::NotLoaded)?;
        let Some(target) = layout
            .group_at_phys(new_phys_row)
            .filter(|group| group.cursor != CursorKind::Header)
            .copied()
        else {
            return Ok(new_phys_row);
        };

        match target.split {
            Some(split) => self.tracker.set_current(Some(split), target.position()),
            None => {
                let parent = source
                    .and_then(|split| ledger.split(split))
                    .map(|split| split.parent());
                self.tracker.hint_expand(parent.or(target.transaction), target.position());
            }
        }

        let saved = matches!(outcome, SaveOutcome::Saved { .. });
        if self.mode().is_dynamic() || saved {
            let counts = self.reload(ledger, grid)?;
            return Ok(counts.cursor_phys_row);
        }
        self.reload_buffer(ledger);
        grid.move_focus(target.phys_row, new_phys_col);
        Ok(target.phys_row)
    }

    /// Row a move to (`new_phys_row`, `new_phys_col`) would land on after
    /// relayout, without saving or moving anything.
    pub fn traverse(&self, ledger: &Ledger, new_phys_row: usize, new_phys_col: usize) -> usize {
        if !self.mode().is_dynamic() {
            return new_phys_row;
        }
        let Some(layout) = self.layout.as_ref() else {
            return new_phys_row;
        };
        let Some(target) = layout.group_at_phys(new_phys_row) else {
            return new_phys_row;
        };
        debug!(new_phys_row, new_phys_col, "traverse");

        let mut tracker = self.tracker.clone();
        match target.split {
            Some(split) => tracker.set_current(Some(split), target.position()),
            None => {
                let parent = self
                    .tracker
                    .current_split()
                    .and_then(|split| ledger.split(split))
                    .map(|split| split.parent());
                tracker.hint_expand(parent.or(target.transaction), target.position());
            }
        }
        self.engine()
            .count_rows(ledger, &self.entries, self.blank.split(), &tracker)
            .cursor_phys_row
    }

    /// Tears the register down: commits any open session and destroys the
    /// blank entry.
    pub fn close(&mut self, ledger: &mut Ledger) -> RegisterResult<()> {
        self.session.commit(ledger)?;
        self.blank.settle();
        self.blank.release(ledger)?;
        self.layout = None;
        self.dirty = DirtyFields::empty();
        info!("register closed");
        Ok(())
    }
}

/// Copies a new price onto the second split of an account holding only two,
/// when the first one was edited and the second still has the neutral price.
/// Cosmetic only: it keeps a fresh account's balance from looking wrong.
fn repair_fresh_account_price(
    ledger: &mut Ledger,
    split: SplitId,
    price: f64,
) -> RegisterResult<()> {
    let Some(account) = ledger.split(split).and_then(|s| s.account()) else {
        return Ok(());
    };
    let members = ledger.account_register_splits(account);
    let [first, second] = members.as_slice() else {
        return Ok(());
    };
    if *first != split {
        return Ok(());
    }
    let sibling = *second;
    let Some(transaction) = ledger
        .split(sibling)
        .filter(|s| (s.share_price - DEFAULT_SHARE_PRICE).abs() < f64::EPSILON)
        .map(|s| s.parent())
    else {
        return Ok(());
    };

    let bracket = !ledger.is_open(transaction);
    if bracket {
        ledger.begin_edit(transaction)?;
    }
    if let Some(entry) = ledger.split_mut(sibling) {
        entry.share_price = price;
    }
    if bracket {
        ledger.commit_edit(transaction)?;
    }
    debug!(%sibling, price, "copied price onto second split of fresh account");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemoryGrid;
    use crate::ledger::AccountKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()
    }

    #[test]
    fn debit_and_credit_edits_share_a_dirty_bit() {
        assert_eq!(FieldEdit::Debit(1.0).field(), Field::Amount);
        assert_eq!(FieldEdit::Credit(1.0).field(), Field::Amount);
        assert_eq!(FieldEdit::MirrorCredit(1.0).field(), Field::MirrorAmount);

        let mut register = SplitRegister::new(RegisterKind::Bank, RegisterConfig::default());
        register.edit(FieldEdit::Credit(8.0));
        register.edit(FieldEdit::Debit(3.0));
        assert_eq!(register.buffer().direct, DebitCredit::debit(3.0));
        assert_eq!(register.dirty().fields().collect::<Vec<_>>(), vec![Field::Amount]);
    }

    #[test]
    fn register_kind_follows_account_kind() {
        let mut ledger = Ledger::new();
        let fund = ledger.create_account("Index Fund", AccountKind::Mutual, "USD");
        let register =
            SplitRegister::for_account(&ledger, fund, RegisterConfig::default()).unwrap();
        assert_eq!(register.kind(), RegisterKind::Portfolio);

        let missing = AccountId::new();
        assert!(matches!(
            SplitRegister::for_account(&ledger, missing, RegisterConfig::default()),
            Err(RegisterError::UnknownAccount(id)) if id == missing
        ));
    }

    #[test]
    fn host_calls_before_load_report_not_loaded() {
        let mut ledger = Ledger::new();
        let mut grid = MemoryGrid::new();
        let mut register = SplitRegister::new(RegisterKind::Bank, RegisterConfig::default());

        assert!(matches!(
            register.move_to(&ledger, 1),
            Err(RegisterError::NotLoaded)
        ));
        assert!(matches!(
            register.on_user_navigate(&mut ledger, &mut grid, 1, 0),
            Err(RegisterError::NotLoaded)
        ));
        assert_eq!(register.traverse(&ledger, 4, 0), 4);
    }

    #[test]
    fn move_to_rejects_header_and_missing_rows() {
        let mut ledger = Ledger::new();
        let cash = ledger.create_account("Wallet", AccountKind::Cash, "USD");
        let mut grid = MemoryGrid::new();
        let mut register = SplitRegister::new(RegisterKind::Cash, RegisterConfig::default())
            .with_clock(today);
        register
            .load_register(&mut ledger, &mut grid, &[], cash)
            .unwrap();

        assert!(matches!(
            register.move_to(&ledger, 0),
            Err(RegisterError::RowOutOfRange(0))
        ));
        assert!(matches!(
            register.move_to(&ledger, 9),
            Err(RegisterError::RowOutOfRange(9))
        ));
        register.move_to(&ledger, 1).unwrap();
        assert_eq!(register.current_split(), register.blank_split());
        assert_eq!(register.buffer().date, Some(today()));
    }
}
