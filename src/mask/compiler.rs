//!
//! Translates a sanitized mask format into the state chain.
//!

use crate::mask::sanitizer;
use crate::mask::state::{SlotClass, State};
use crate::{FormatError, Notation};

/// Compiles a format string.
///
/// Recursive descent over the sanitized format, tracking whether the
/// walk is inside `[]` or `{}` and the previous char for escapes and
/// `[…]` inheritance. O(format length).
#[derive(Debug)]
pub(crate) struct Compiler<'a> {
    notations: &'a [Notation],
}

impl<'a> Compiler<'a> {
    pub(crate) fn new(notations: &'a [Notation]) -> Self {
        Self { notations }
    }

    pub(crate) fn compile(&self, format: &str) -> Result<State, FormatError> {
        let sanitized = sanitizer::sanitize(format)?;
        let chars: Vec<char> = sanitized.chars().collect();
        self.compile_at(&chars, false, false, None)
    }

    fn compile_at(
        &self,
        rest: &[char],
        valuable: bool,
        fixed: bool,
        last: Option<char>,
    ) -> Result<State, FormatError> {
        let Some(&c) = rest.first() else {
            return Ok(State::Eol);
        };
        let escaped = last == Some('\\');

        match c {
            '[' if !escaped => return self.compile_at(&rest[1..], true, false, Some(c)),
            '{' if !escaped => return self.compile_at(&rest[1..], false, true, Some(c)),
            ']' | '}' if !escaped => return self.compile_at(&rest[1..], false, false, Some(c)),
            '\\' if !escaped => return self.compile_at(&rest[1..], valuable, fixed, Some(c)),
            _ => {}
        }

        if valuable {
            return self.compile_slot(c, rest, last);
        }
        if fixed {
            return Ok(State::Fixed {
                own: c,
                child: Box::new(self.compile_at(&rest[1..], false, true, Some(c))?),
            });
        }
        Ok(State::Free {
            own: c,
            child: Box::new(self.compile_at(&rest[1..], false, false, Some(c))?),
        })
    }

    /// One char inside `[]`.
    fn compile_slot(
        &self,
        c: char,
        rest: &[char],
        last: Option<char>,
    ) -> Result<State, FormatError> {
        let class = match c {
            '0' | '9' => SlotClass::Numeric,
            'A' | 'a' => SlotClass::Literal,
            '_' | '-' => SlotClass::AlphaNumeric,
            '…' => {
                // Terminal: anything after [… is unreachable.
                return Ok(State::Ellipsis {
                    class: self.inherited_class(last)?,
                });
            }
            c => {
                let notation = self
                    .notations
                    .iter()
                    .find(|n| n.character == c)
                    .ok_or(FormatError::UnknownSlot(c))?;
                let class = SlotClass::Custom(c, notation.character_set.clone());
                let child = Box::new(self.compile_at(&rest[1..], true, false, Some(c))?);
                return Ok(if notation.optional {
                    State::Optional { class, child }
                } else {
                    State::Value { class, child }
                });
            }
        };

        let child = Box::new(self.compile_at(&rest[1..], true, false, Some(c))?);
        Ok(match c {
            '0' | 'A' | '_' => State::Value { class, child },
            _ => State::Optional { class, child },
        })
    }

    /// Class an `[…]` slot repeats: that of the preceding slot char.
    fn inherited_class(&self, last: Option<char>) -> Result<SlotClass, FormatError> {
        match last {
            Some('0') | Some('9') => Ok(SlotClass::Numeric),
            Some('A') | Some('a') => Ok(SlotClass::Literal),
            Some('_') | Some('-') | Some('…') | Some('[') => Ok(SlotClass::AlphaNumeric),
            Some(c) => self
                .notations
                .iter()
                .find(|n| n.character == c)
                .map(|n| SlotClass::Custom(c, n.character_set.clone()))
                .ok_or(FormatError::UnknownSlot(c)),
            None => Err(FormatError::UnknownSlot('…')),
        }
    }
}
