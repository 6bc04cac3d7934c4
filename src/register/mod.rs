pub mod blank;
pub mod cursor;
pub mod dirty;
pub mod fields;
pub mod layout;
pub mod mode;
#[allow(clippy::module_inception)]
pub mod register;
pub mod session;
pub mod transfer;

pub use blank::BlankEntrySlot;
pub use cursor::{CursorPositionTracker, NavigationGate, RowPosition, SuppressionGuard};
pub use dirty::{DirtyFields, Field};
pub use fields::{DebitCredit, EntryFields};
pub use layout::{RowCounts, RowGroup, RowLayout, RowLayoutEngine};
pub use mode::{CursorHeights, CursorKind, DisplayMode, RegisterKind};
pub use register::{AbandonReason, FieldEdit, SaveOutcome, SplitRegister};
pub use session::EditSession;
pub use transfer::transfer_candidates;
