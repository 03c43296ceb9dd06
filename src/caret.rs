use std::fmt;
use std::fmt::{Debug, Formatter};
use std::str::Chars;

/// Caret policy for one edit.
///
/// Insertions move the caret forward past everything inserted up to
/// it; deletions leave it where the removed text started.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CaretGravity {
    /// Insertion edit. With `autocomplete` the mask fills in any
    /// trailing literal characters once the input is exhausted.
    Forward { autocomplete: bool },
    /// Deletion edit. With `autoskip` a backspace over a slot also
    /// swallows an adjacent auto-inserted separator.
    Backward { autoskip: bool },
}

impl CaretGravity {
    #[inline]
    pub(crate) fn autocomplete(&self) -> bool {
        matches!(self, CaretGravity::Forward { autocomplete: true })
    }

    #[inline]
    pub(crate) fn autoskip(&self) -> bool {
        matches!(self, CaretGravity::Backward { autoskip: true })
    }
}

impl Debug for CaretGravity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CaretGravity::Forward { autocomplete } => write!(f, ">{}", autocomplete),
            CaretGravity::Backward { autoskip } => write!(f, "<{}", autoskip),
        }
    }
}

/// A string with a caret.
///
/// The caret counts chars and sits between 0 and the char-length of
/// the string. This is what a text-change adapter hands to
/// [Mask::apply](crate::Mask::apply) and gets back formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretString {
    pub string: String,
    pub caret: usize,
    pub gravity: CaretGravity,
}

impl CaretString {
    pub fn new(string: impl Into<String>, caret: usize, gravity: CaretGravity) -> Self {
        Self {
            string: string.into(),
            caret,
            gravity,
        }
    }

    /// Mirror for right-to-left processing.
    ///
    /// Reverses the string char-wise and flips the caret to count
    /// from the other end.
    pub fn reversed(&self) -> Self {
        let len = self.string.chars().count();
        Self {
            string: self.string.chars().rev().collect(),
            caret: len.saturating_sub(self.caret),
            gravity: self.gravity,
        }
    }
}

/// Walks the chars of a [CaretString] while tracking whether the
/// current position still affects caret bookkeeping.
///
/// The predicates must be read *before* the `next()` they belong to;
/// `Mask::apply` depends on that ordering.
#[derive(Debug)]
pub(crate) struct CaretIterator<'a> {
    chars: Chars<'a>,
    index: usize,
    caret: usize,
    gravity: CaretGravity,
    rtl: bool,
}

impl<'a> CaretIterator<'a> {
    pub(crate) fn new(text: &'a CaretString) -> Self {
        Self {
            chars: text.string.chars(),
            index: 0,
            caret: text.caret,
            gravity: text.gravity,
            rtl: false,
        }
    }

    /// Traversal over the already reversed string; insertion affects
    /// the caret independent of gravity.
    pub(crate) fn new_rtl(text: &'a CaretString) -> Self {
        Self {
            rtl: true,
            ..Self::new(text)
        }
    }

    /// Would a char inserted at the current position move the caret.
    pub(crate) fn insertion_affects_caret(&self) -> bool {
        if self.rtl {
            return self.index <= self.caret;
        }
        match self.gravity {
            CaretGravity::Forward { .. } => self.index <= self.caret,
            CaretGravity::Backward { .. } => self.index < self.caret,
        }
    }

    /// Would a char removed at the current position move the caret.
    pub(crate) fn deletion_affects_caret(&self) -> bool {
        self.index < self.caret
    }

    pub(crate) fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.index += 1;
        Some(c)
    }
}
