// SPDX-License-Identifier: MPL-2.0
//! Set of pills currently attached to a surface.

use super::{Mode, PillId};
use std::collections::HashMap;

/// Pills that are on screen, with the mode each was shown in.
///
/// Entries are added when a pill is shown and removed when its exit begins.
/// The controller owns one; hosts that coordinate several controllers can
/// pass a pre-populated registry to
/// [`Controller::with_registry`](super::Controller::with_registry).
#[derive(Debug, Clone, Default)]
pub struct ActiveRegistry {
    entries: HashMap<PillId, Mode>,
}

impl ActiveRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id`. Returns false if it was already present, in which case
    /// the recorded mode is kept.
    pub fn insert(&mut self, id: PillId, mode: Mode) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, mode);
        true
    }

    /// Returns true if `id` was present.
    pub fn remove(&mut self, id: PillId) -> bool {
        self.entries.remove(&id).is_some()
    }

    #[must_use]
    pub fn contains(&self, id: PillId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn mode_of(&self, id: PillId) -> Option<Mode> {
        self.entries.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PillId, Mode)> + '_ {
        self.entries.iter().map(|(id, mode)| (*id, *mode))
    }

    /// Pills shown in `mode`, sorted by id.
    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Vec<PillId> {
        let mut ids: Vec<PillId> = self
            .entries
            .iter()
            .filter(|(_, m)| **m == mode)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }
}
