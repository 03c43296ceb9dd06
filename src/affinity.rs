//!
//! Scoring policies for picking the best of several mask formats.
//!

use crate::caret::CaretString;
use crate::mask::Mask;

/// How the affinity between one mask and the current input is
/// calculated when several candidate formats are configured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AffinityStrategy {
    /// The affinity computed by [Mask::apply] over the whole string:
    /// +1 per accepted char, -1 per auto-insert or dropped char.
    ///
    /// ```txt
    /// format: [00].[00]
    /// "1234"  -> 4 - 1 (missed dot)                    = 3
    /// "12.34" -> 5                                     = 5
    /// "1.234" -> 5 - 1 (superfluous dot) - 1 (missed)  = 3
    /// ```
    #[default]
    WholeString,
    /// Length of the longest common prefix between the input and the
    /// formatted output. Distinguishes formats by their fixed lead:
    ///
    /// ```txt
    /// formats: "+7 [000] [000]" and "8 [000] [000]"
    /// "+7 12 345" -> 5 / 0
    /// "8 12 345"  -> 0 / 4
    /// ```
    Prefix,
    /// Headroom between input length and total mask capacity;
    /// `i32::MIN` if the input doesn't fit at all. Useful when the
    /// format changes radically with the input length. Make the
    /// widest format the primary one.
    Capacity,
    /// Like [AffinityStrategy::Capacity], but on the extracted value
    /// against the mask's value capacity.
    ExtractedValueCapacity,
}

impl AffinityStrategy {
    /// Score one mask against the input.
    pub fn affinity(&self, mask: &Mask, text: &CaretString) -> i32 {
        match self {
            AffinityStrategy::WholeString => mask.apply(text).affinity,
            AffinityStrategy::Prefix => {
                let formatted = mask.apply(text).formatted_text.string;
                common_prefix(&formatted, &text.string) as i32
            }
            AffinityStrategy::Capacity => {
                let len = text.string.chars().count();
                let total = mask.total_text_length();
                if len > total {
                    i32::MIN
                } else {
                    len as i32 - total as i32
                }
            }
            AffinityStrategy::ExtractedValueCapacity => {
                let len = mask.apply(text).extracted_value.chars().count();
                let total = mask.total_value_length();
                if len > total {
                    i32::MIN
                } else {
                    len as i32 - total as i32
                }
            }
        }
    }
}

fn common_prefix(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .count()
}
