/// Custom slot character for `[]` groups.
///
/// Extends the builtin slot alphabet (`0`, `9`, `A`, `a`, `_`, `-`)
/// with a user-defined character and its accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notation {
    /// The character as it appears inside `[]` in the format.
    pub character: char,
    /// Characters a slot of this notation accepts.
    pub character_set: Box<str>,
    /// Optional slots are skipped without consuming input on a
    /// mismatch; mandatory slots reject it.
    pub optional: bool,
}

impl Notation {
    pub fn new(character: char, character_set: impl Into<Box<str>>, optional: bool) -> Self {
        Self {
            character,
            character_set: character_set.into(),
            optional,
        }
    }
}
