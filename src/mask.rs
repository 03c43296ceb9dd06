//!
//! Compiled input mask.
//!
//! [Mask] wraps the state chain produced by the compiler and applies
//! it to user input: it formats the text, extracts the raw value,
//! keeps the caret in place and scores how well the input fits.
//!

use crate::caret::{CaretIterator, CaretString};
use crate::mask::compiler::Compiler;
use crate::mask::state::{Next, State};
use crate::{FormatError, Notation};

mod compiler;
mod rtl;
mod sanitizer;
mod state;

/// Result of applying a [Mask] to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskResult {
    /// Formatted text with the updated caret.
    pub formatted_text: CaretString,
    /// The accepted slot chars (plus `{}` literals), stripped of
    /// formatting decoration.
    pub extracted_value: String,
    /// How well the input fit the format. Each consumed char counts
    /// +1, each auto-insert or dropped char -1.
    pub affinity: i32,
    /// Every mandatory slot ahead is filled.
    pub complete: bool,
}

impl MaskResult {
    pub(crate) fn reversed(self) -> Self {
        Self {
            formatted_text: self.formatted_text.reversed(),
            extracted_value: self.extracted_value.chars().rev().collect(),
            affinity: self.affinity,
            complete: self.complete,
        }
    }
}

/// Compiled input mask.
///
/// Compiled once from a format string, immutable afterwards;
/// applying shares the state chain, so a `Mask` can be used from
/// several threads at once. Use [MaskRegistry](crate::MaskRegistry)
/// to compile each distinct format only once.
#[derive(Debug)]
pub struct Mask {
    format: String,
    first: State,
    rtl: bool,
}

impl Mask {
    /// Compile a format string.
    pub fn new(format: &str, notations: &[Notation]) -> Result<Self, FormatError> {
        Ok(Self {
            format: format.into(),
            first: Compiler::new(notations).compile(format)?,
            rtl: false,
        })
    }

    /// Compile for right-to-left input.
    ///
    /// The format is mirrored and applied from the end of the text.
    pub fn new_rtl(format: &str, notations: &[Notation]) -> Result<Self, FormatError> {
        let mirrored = rtl::mirror_format(format);
        Ok(Self {
            first: Compiler::new(notations).compile(&mirrored)?,
            format: mirrored,
            rtl: true,
        })
    }

    /// Check a format without keeping the compiled mask.
    pub fn validate(format: &str, notations: &[Notation]) -> bool {
        Compiler::new(notations).compile(format).is_ok()
    }

    /// The compiled format. Mirrored for rtl masks.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Apply the mask to user input.
    ///
    /// Total over every input: chars that cannot be placed are
    /// dropped, never an error.
    pub fn apply(&self, text: &CaretString) -> MaskResult {
        if self.rtl {
            self.run(&text.reversed()).reversed()
        } else {
            self.run(text)
        }
    }

    fn run(&self, text: &CaretString) -> MaskResult {
        let mut iter = if self.rtl {
            CaretIterator::new_rtl(text)
        } else {
            CaretIterator::new(text)
        };

        let mut affinity = 0i32;
        let mut extracted_value = String::new();
        let mut modified = String::new();
        let mut caret = text.caret;

        let mut state = &self.first;
        // Records, for every step before the caret, what autocomplete
        // would have inserted there. A step with no autocomplete
        // resets it.
        let mut autocompletion_stack: Vec<Next<'_>> = Vec::new();

        let mut insertion_affects_caret = iter.insertion_affects_caret();
        let mut deletion_affects_caret = iter.deletion_affects_caret();
        let mut character = iter.next();

        while let Some(c) = character {
            if let Some(next) = state.accept(c) {
                if deletion_affects_caret {
                    match state.autocomplete() {
                        Some(skip) => autocompletion_stack.push(skip),
                        None => autocompletion_stack.clear(),
                    }
                }
                state = next.state;
                if let Some(insert) = next.insert {
                    modified.push(insert);
                }
                if let Some(value) = next.value {
                    extracted_value.push(value);
                }
                if next.pass {
                    insertion_affects_caret = iter.insertion_affects_caret();
                    deletion_affects_caret = iter.deletion_affects_caret();
                    character = iter.next();
                    affinity += 1;
                } else {
                    if insertion_affects_caret && next.insert.is_some() {
                        caret += 1;
                    }
                    affinity -= 1;
                }
            } else {
                // hard rejection, drop the char
                if deletion_affects_caret {
                    caret = caret.saturating_sub(1);
                }
                insertion_affects_caret = iter.insertion_affects_caret();
                deletion_affects_caret = iter.deletion_affects_caret();
                character = iter.next();
                affinity -= 1;
            }
        }

        if text.gravity.autocomplete() && insertion_affects_caret {
            while let Some(next) = state.autocomplete() {
                state = next.state;
                if let Some(insert) = next.insert {
                    modified.push(insert);
                    caret += 1;
                }
                if let Some(value) = next.value {
                    extracted_value.push(value);
                }
            }
        }

        if text.gravity.autoskip() {
            while let Some(skip) = autocompletion_stack.pop() {
                if modified.chars().count() == caret {
                    if let Some(insert) = skip.insert {
                        if modified.chars().last() == Some(insert) {
                            modified.pop();
                            caret = caret.saturating_sub(1);
                        }
                    }
                    if let Some(value) = skip.value {
                        if extracted_value.chars().last() == Some(value) {
                            extracted_value.pop();
                        }
                    }
                } else if skip.insert.is_some() {
                    caret = caret.saturating_sub(1);
                }
            }
        }

        MaskResult {
            formatted_text: CaretString::new(modified, caret, text.gravity),
            extracted_value,
            affinity,
            complete: no_mandatory_left(state),
        }
    }

    /// Placeholder for the whole mask, one representative char per
    /// state.
    pub fn placeholder(&self) -> String {
        let mut out = String::new();
        let mut state = Some(&self.first);
        while let Some(s) = state {
            match s {
                State::Free { own, .. } | State::Fixed { own, .. } => out.push(*own),
                State::Value { class, .. } | State::Optional { class, .. } => {
                    out.push(class.placeholder())
                }
                State::Ellipsis { .. } | State::Eol => {}
            }
            state = s.child();
        }
        out
    }

    /// Minimal text length that fills every mandatory character.
    pub fn acceptable_text_length(&self) -> usize {
        self.count_states(|s| {
            matches!(
                s,
                State::Free { .. }
                    | State::Fixed { .. }
                    | State::Value { .. }
                    | State::Ellipsis { .. }
            )
        })
    }

    /// Total text length, mandatory and optional characters.
    pub fn total_text_length(&self) -> usize {
        self.count_states(|s| !matches!(s, State::Eol))
    }

    /// Minimal extracted-value length with every mandatory slot
    /// filled.
    pub fn acceptable_value_length(&self) -> usize {
        self.count_states(|s| {
            matches!(
                s,
                State::Fixed { .. } | State::Value { .. } | State::Ellipsis { .. }
            )
        })
    }

    /// Total extracted-value length.
    pub fn total_value_length(&self) -> usize {
        self.count_states(|s| {
            matches!(
                s,
                State::Fixed { .. }
                    | State::Value { .. }
                    | State::Ellipsis { .. }
                    | State::Optional { .. }
            )
        })
    }

    fn count_states(&self, count: impl Fn(&State) -> bool) -> usize {
        let mut n = 0;
        let mut state = Some(&self.first);
        while let Some(s) = state {
            if matches!(s, State::Eol) {
                break;
            }
            if count(s) {
                n += 1;
            }
            state = s.child();
        }
        n
    }
}

/// Walk ahead from the current state: complete means only free
/// chars, optional slots, an ellipsis or the end remain.
fn no_mandatory_left(mut state: &State) -> bool {
    loop {
        match state {
            State::Eol | State::Ellipsis { .. } => return true,
            State::Value { .. } | State::Fixed { .. } => return false,
            State::Free { child, .. } | State::Optional { child, .. } => state = child,
        }
    }
}
