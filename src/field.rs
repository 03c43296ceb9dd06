//!
//! Per-field orchestration: format selection and text-change
//! processing.
//!
//! [MaskedField] is the piece between a text widget and the masks:
//! feed it every text-change event, write the returned formatted
//! text and caret back into the widget, and report the extracted
//! value and completion upward. It never touches widget APIs.
//!

use crate::affinity::AffinityStrategy;
use crate::caret::{CaretGravity, CaretString};
use crate::registry::MaskRegistry;
use crate::{FormatError, Mask, MaskResult, Notation};
use std::cmp::Reverse;
use std::sync::Arc;

/// Masking configuration of one input field.
///
/// Owns the primary format, any number of alternative formats and
/// the strategy that ranks them against the current input. Masks are
/// compiled lazily through the shared [MaskRegistry].
#[derive(Debug)]
pub struct MaskedField {
    registry: Arc<MaskRegistry>,
    primary_format: String,
    affine_formats: Vec<String>,
    notations: Vec<Notation>,
    strategy: AffinityStrategy,
    autocomplete: bool,
    autoskip: bool,
    rtl: bool,
}

impl MaskedField {
    /// New field with the given primary format.
    pub fn new(registry: Arc<MaskRegistry>, primary_format: impl Into<String>) -> Self {
        Self {
            registry,
            primary_format: primary_format.into(),
            affine_formats: Vec::new(),
            notations: Vec::new(),
            strategy: AffinityStrategy::default(),
            autocomplete: true,
            autoskip: false,
            rtl: false,
        }
    }

    /// Alternative formats ranked against the primary per input.
    pub fn affine_formats<T: Into<String>>(
        mut self,
        formats: impl IntoIterator<Item = T>,
    ) -> Self {
        self.affine_formats = formats.into_iter().map(|f| f.into()).collect();
        self
    }

    /// Custom slot notations for all formats of this field.
    pub fn notations(mut self, notations: impl IntoIterator<Item = Notation>) -> Self {
        self.notations = notations.into_iter().collect();
        self
    }

    /// Ranking strategy for the affine formats.
    pub fn strategy(mut self, strategy: AffinityStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fill in trailing literals after an insertion. Default on.
    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    /// Let a backspace swallow adjacent auto-inserted separators.
    /// Default off.
    pub fn autoskip(mut self, autoskip: bool) -> Self {
        self.autoskip = autoskip;
        self
    }

    /// Right-to-left formats.
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    fn mask(&self, format: &str) -> Result<Arc<Mask>, FormatError> {
        if self.rtl {
            self.registry.get_or_create_rtl(format, &self.notations)
        } else {
            self.registry.get_or_create(format, &self.notations)
        }
    }

    /// The primary mask.
    pub fn primary_mask(&self) -> Result<Arc<Mask>, FormatError> {
        self.mask(&self.primary_format)
    }

    /// Pick the best fitting mask for the input.
    ///
    /// Alternatives are ranked by descending affinity; the primary is
    /// slotted in before the first alternative it ties or beats, so
    /// it wins ties.
    pub fn pick_mask(&self, text: &CaretString) -> Result<Arc<Mask>, FormatError> {
        let primary = self.primary_mask()?;
        if self.affine_formats.is_empty() {
            return Ok(primary);
        }

        let primary_affinity = self.strategy.affinity(&primary, text);

        let mut ranked = Vec::with_capacity(self.affine_formats.len());
        for format in &self.affine_formats {
            let mask = self.mask(format)?;
            let affinity = self.strategy.affinity(&mask, text);
            ranked.push((mask, affinity));
        }
        ranked.sort_by_key(|(_, affinity)| Reverse(*affinity));

        // Position the primary takes in the ranking; at the end if
        // every alternative beats it.
        let primary_rank = ranked
            .iter()
            .position(|(_, affinity)| primary_affinity >= *affinity)
            .unwrap_or(ranked.len());

        if primary_rank == 0 {
            Ok(primary)
        } else {
            let (mask, _) = ranked.swap_remove(0);
            Ok(mask)
        }
    }

    /// Process one text-change event.
    ///
    /// `cursor`, `before` and `count` describe the edit the way text
    /// widgets report it: at char index `cursor`, `before` chars were
    /// replaced by `count` chars, and `text` is the text after the
    /// edit. A pure deletion gets backward caret gravity, everything
    /// else forward.
    pub fn text_changed(
        &self,
        text: &str,
        cursor: usize,
        before: usize,
        count: usize,
    ) -> Result<MaskResult, FormatError> {
        let deletion = before > 0 && count == 0;
        let gravity = if deletion {
            CaretGravity::Backward {
                autoskip: self.autoskip,
            }
        } else {
            CaretGravity::Forward {
                autocomplete: self.autocomplete,
            }
        };
        let caret = if deletion { cursor } else { cursor + count };

        let text = CaretString::new(text, caret, gravity);
        Ok(self.pick_mask(&text)?.apply(&text))
    }

    /// Format a whole value, as if typed in one go with the caret at
    /// the end.
    pub fn set_text(&self, text: &str) -> Result<MaskResult, FormatError> {
        let text = CaretString::new(
            text,
            text.chars().count(),
            CaretGravity::Forward {
                autocomplete: self.autocomplete,
            },
        );
        Ok(self.pick_mask(&text)?.apply(&text))
    }

    /// Placeholder of the primary mask.
    pub fn placeholder(&self) -> Result<String, FormatError> {
        Ok(self.primary_mask()?.placeholder())
    }

    /// Minimal text length filling all mandatory characters of the
    /// primary mask.
    pub fn acceptable_text_length(&self) -> Result<usize, FormatError> {
        Ok(self.primary_mask()?.acceptable_text_length())
    }

    /// Total text capacity of the primary mask.
    pub fn total_text_length(&self) -> Result<usize, FormatError> {
        Ok(self.primary_mask()?.total_text_length())
    }

    /// Minimal extracted-value length of the primary mask.
    pub fn acceptable_value_length(&self) -> Result<usize, FormatError> {
        Ok(self.primary_mask()?.acceptable_value_length())
    }

    /// Total extracted-value capacity of the primary mask.
    pub fn total_value_length(&self) -> Result<usize, FormatError> {
        Ok(self.primary_mask()?.total_value_length())
    }
}
