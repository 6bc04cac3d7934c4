use bitflags::bitflags;

/// Display fields the user can edit in a register row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Num,
    Description,
    Reconcile,
    Action,
    Transfer,
    MirrorTransfer,
    Memo,
    Amount,
    MirrorAmount,
    Price,
    Value,
}

impl Field {
    /// Every field, in the order edits are applied to the ledger.
    pub const ALL: [Field; 12] = [
        Field::Date,
        Field::Num,
        Field::Description,
        Field::Reconcile,
        Field::Action,
        Field::Transfer,
        Field::MirrorTransfer,
        Field::Memo,
        Field::Amount,
        Field::MirrorAmount,
        Field::Price,
        Field::Value,
    ];

    /// Dirty flag carried by this field.
    pub fn flag(self) -> DirtyFields {
        match self {
            Field::Date => DirtyFields::DATE,
            Field::Num => DirtyFields::NUM,
            Field::Description => DirtyFields::DESCRIPTION,
            Field::Reconcile => DirtyFields::RECONCILE,
            Field::Action => DirtyFields::ACTION,
            Field::Transfer => DirtyFields::TRANSFER,
            Field::MirrorTransfer => DirtyFields::MIRROR_TRANSFER,
            Field::Memo => DirtyFields::MEMO,
            Field::Amount => DirtyFields::AMOUNT,
            Field::MirrorAmount => DirtyFields::MIRROR_AMOUNT,
            Field::Price => DirtyFields::PRICE,
            Field::Value => DirtyFields::VALUE,
        }
    }
}

bitflags! {
    /// Fields edited since the row was last loaded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFields: u16 {
        const DATE = 1 << 0;
        const NUM = 1 << 1;
        const DESCRIPTION = 1 << 2;
        const RECONCILE = 1 << 3;
        const ACTION = 1 << 4;
        const TRANSFER = 1 << 5;
        const MIRROR_TRANSFER = 1 << 6;
        const MEMO = 1 << 7;
        const AMOUNT = 1 << 8;
        const MIRROR_AMOUNT = 1 << 9;
        const PRICE = 1 << 10;
        const VALUE = 1 << 11;
    }
}

impl DirtyFields {
    pub fn mark(&mut self, field: Field) {
        self.insert(field.flag());
    }

    pub fn is_marked(&self, field: Field) -> bool {
        self.contains(field.flag())
    }

    /// Marked fields in application order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |field| self.is_marked(*field))
    }
}

impl From<Field> for DirtyFields {
    fn from(field: Field) -> Self {
        field.flag()
    }
}

impl FromIterator<Field> for DirtyFields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut dirty = DirtyFields::empty();
        for field in iter {
            dirty.mark(field);
        }
        dirty
    }
}
