//!
//! Cache of compiled masks.
//!

use crate::{FormatError, Mask, Notation};
use log::debug;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Caches compiled [Mask]s by format and notations.
///
/// Each distinct (format, notations) pair is compiled once; every
/// later lookup returns the same shared mask. Applications declare a
/// small fixed set of formats, so there is no eviction.
///
/// Create one per application and hand it to whatever formats input.
#[derive(Debug, Default)]
pub struct MaskRegistry {
    masks: Mutex<FxHashMap<MaskKey, Arc<Mask>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MaskKey {
    format: String,
    notations: Vec<Notation>,
    rtl: bool,
}

impl MaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached mask for the format, compiling it on first use.
    ///
    /// A format that fails to compile is not cached.
    pub fn get_or_create(
        &self,
        format: &str,
        notations: &[Notation],
    ) -> Result<Arc<Mask>, FormatError> {
        self.get_or_insert(format, notations, false)
    }

    /// Same, for right-to-left masks.
    pub fn get_or_create_rtl(
        &self,
        format: &str,
        notations: &[Notation],
    ) -> Result<Arc<Mask>, FormatError> {
        self.get_or_insert(format, notations, true)
    }

    fn get_or_insert(
        &self,
        format: &str,
        notations: &[Notation],
        rtl: bool,
    ) -> Result<Arc<Mask>, FormatError> {
        let key = MaskKey {
            format: format.into(),
            notations: notations.into(),
            rtl,
        };

        let mut masks = self
            .masks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(mask) = masks.get(&key) {
            return Ok(mask.clone());
        }

        debug!("compile mask {:?} rtl={}", format, rtl);
        let mask = Arc::new(if rtl {
            Mask::new_rtl(format, notations)?
        } else {
            Mask::new(format, notations)?
        });
        masks.insert(key, mask.clone());
        Ok(mask)
    }
}
