use std::fmt;
use std::fmt::{Debug, Formatter};

/// Character class of one `[]` slot.
#[allow(variant_size_differences)]
#[derive(Clone, PartialEq, Eq)]
pub(crate) enum SlotClass {
    /// `0` / `9`
    Numeric,
    /// `A` / `a`
    Literal,
    /// `_` / `-`
    AlphaNumeric,
    /// Custom notation char with its accepted set.
    Custom(char, Box<str>),
}

impl SlotClass {
    #[inline]
    pub(crate) fn matches(&self, c: char) -> bool {
        match self {
            SlotClass::Numeric => c.is_numeric(),
            SlotClass::Literal => c.is_alphabetic(),
            SlotClass::AlphaNumeric => c.is_alphanumeric(),
            SlotClass::Custom(_, set) => set.contains(c),
        }
    }

    /// Char standing in for this class in a placeholder string.
    #[inline]
    pub(crate) fn placeholder(&self) -> char {
        match self {
            SlotClass::Numeric => '0',
            SlotClass::Literal => 'a',
            SlotClass::AlphaNumeric => '-',
            SlotClass::Custom(c, _) => *c,
        }
    }
}

impl Debug for SlotClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SlotClass::Numeric => write!(f, "0"),
            SlotClass::Literal => write!(f, "A"),
            SlotClass::AlphaNumeric => write!(f, "_"),
            SlotClass::Custom(c, _) => write!(f, "{}", c),
        }
    }
}

/// One node of the compiled mask automaton.
///
/// A singly linked chain ending in [State::Eol], built once by the
/// compiler and immutable afterwards. Transitions hand out references
/// into the chain, so applying a mask never copies states.
#[allow(variant_size_differences)]
pub(crate) enum State {
    /// Literal outside any brackets. Formats, doesn't extract.
    Free { own: char, child: Box<State> },
    /// Literal inside `{}`. Formats and extracts.
    Fixed { own: char, child: Box<State> },
    /// Mandatory `[]` slot. Rejects chars outside its class.
    Value { class: SlotClass, child: Box<State> },
    /// Optional `[]` slot. Skipped without consuming on mismatch.
    Optional { class: SlotClass, child: Box<State> },
    /// `[…]`: absorbs any number of chars of the inherited class.
    /// Terminal, loops on itself.
    Ellipsis { class: SlotClass },
    /// End of the mask. Accepts nothing.
    Eol,
}

/// One transition step.
///
/// `pass` tells whether the input char was consumed. `insert` goes
/// into the formatted text, `value` into the extracted value.
#[derive(Debug)]
pub(crate) struct Next<'a> {
    pub state: &'a State,
    pub insert: Option<char>,
    pub pass: bool,
    pub value: Option<char>,
}

impl State {
    /// Following node, or None past the end of the chain.
    pub(crate) fn child(&self) -> Option<&State> {
        match self {
            State::Free { child, .. }
            | State::Fixed { child, .. }
            | State::Value { child, .. }
            | State::Optional { child, .. } => Some(child),
            State::Ellipsis { .. } | State::Eol => None,
        }
    }

    /// Feed one input char.
    ///
    /// None is a hard rejection: nothing emitted, the caller drops
    /// the char. A [Next] with `pass == false` didn't consume the
    /// char either, but emitted the node's own literal (Free/Fixed)
    /// or skipped an optional slot; the char is retried on the
    /// returned state.
    pub(crate) fn accept(&self, c: char) -> Option<Next<'_>> {
        match self {
            State::Free { own, child } => Some(if *own == c {
                Next {
                    state: child,
                    insert: Some(c),
                    pass: true,
                    value: None,
                }
            } else {
                Next {
                    state: child,
                    insert: Some(*own),
                    pass: false,
                    value: None,
                }
            }),
            State::Fixed { own, child } => Some(if *own == c {
                Next {
                    state: child,
                    insert: Some(c),
                    pass: true,
                    value: Some(c),
                }
            } else {
                Next {
                    state: child,
                    insert: Some(*own),
                    pass: false,
                    value: Some(*own),
                }
            }),
            State::Value { class, child } => class.matches(c).then(|| Next {
                state: child,
                insert: Some(c),
                pass: true,
                value: Some(c),
            }),
            State::Optional { class, child } => Some(if class.matches(c) {
                Next {
                    state: child,
                    insert: Some(c),
                    pass: true,
                    value: Some(c),
                }
            } else {
                Next {
                    state: child,
                    insert: None,
                    pass: false,
                    value: None,
                }
            }),
            State::Ellipsis { class } => class.matches(c).then(|| Next {
                state: self,
                insert: Some(c),
                pass: true,
                value: Some(c),
            }),
            State::Eol => None,
        }
    }

    /// Transition that fills in this node without input, or None
    /// where nothing can be filled in.
    pub(crate) fn autocomplete(&self) -> Option<Next<'_>> {
        match self {
            State::Free { own, child } => Some(Next {
                state: child,
                insert: Some(*own),
                pass: false,
                value: None,
            }),
            State::Fixed { own, child } => Some(Next {
                state: child,
                insert: Some(*own),
                pass: false,
                value: Some(*own),
            }),
            State::Value { .. }
            | State::Optional { .. }
            | State::Ellipsis { .. }
            | State::Eol => None,
        }
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            State::Free { own, child } => write!(f, "{} -> {:?}", own, child),
            State::Fixed { own, child } => write!(f, "{{{}}} -> {:?}", own, child),
            State::Value { class, child } => write!(f, "[{:?}] -> {:?}", class, child),
            State::Optional { class, child } => write!(f, "[{:?}?] -> {:?}", class, child),
            State::Ellipsis { class } => write!(f, "[{:?}…]", class),
            State::Eol => write!(f, "EOL"),
        }
    }
}
