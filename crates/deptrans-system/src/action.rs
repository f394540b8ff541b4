//! Action ids.
//!
//! An action is a single integer shared with the scoring model's output
//! layer, so the encoding is fixed:
//!
//! | id           | action          |
//! |--------------|-----------------|
//! | `0`          | SHIFT           |
//! | `2 * l + 1`  | LEFT, label `l` |
//! | `2 * l + 2`  | RIGHT, label `l`|
//!
//! The action space for `L` labels is `1 + 2 * L`.

use deptrans_core::DeprelId;

/// Unlabeled move behind an action id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Shift,
    Left,
    Right,
}

impl ActionKind {
    /// Dense index of the move (0 = shift, 1 = left, 2 = right), for models
    /// that embed the unlabeled structure separately from the label.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            ActionKind::Shift => 0,
            ActionKind::Left => 1,
            ActionKind::Right => 2,
        }
    }
}

/// A transition id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action(u32);

impl Action {
    pub const SHIFT: Action = Action(0);

    #[inline]
    pub fn left(deprel: DeprelId) -> Self {
        Action(deprel * 2 + 1)
    }

    #[inline]
    pub fn right(deprel: DeprelId) -> Self {
        Action(deprel * 2 + 2)
    }

    /// Wrap a raw id coming from a scorer. Range is checked by the system.
    #[inline]
    pub fn from_raw(id: u32) -> Self {
        Action(id)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_shift(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_left(self) -> bool {
        self.0 % 2 == 1
    }

    #[inline]
    pub fn is_right(self) -> bool {
        self.0 > 0 && self.0 % 2 == 0
    }

    pub fn kind(self) -> ActionKind {
        if self.is_shift() {
            ActionKind::Shift
        } else if self.is_left() {
            ActionKind::Left
        } else {
            ActionKind::Right
        }
    }

    /// Label carried by a LEFT or RIGHT action.
    ///
    /// # Panics
    /// Panics on SHIFT, which has no label.
    #[inline]
    pub fn deprel(self) -> DeprelId {
        self.try_deprel()
            .unwrap_or_else(|| panic!("Action: SHIFT does not carry a label"))
    }

    #[inline]
    pub fn try_deprel(self) -> Option<DeprelId> {
        match self.kind() {
            ActionKind::Shift => None,
            ActionKind::Left => Some((self.0 - 1) / 2),
            ActionKind::Right => Some((self.0 - 2) / 2),
        }
    }
}
