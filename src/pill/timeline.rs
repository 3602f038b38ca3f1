// SPDX-License-Identifier: MPL-2.0
//! Time-ordered stages of a multi-step transition.
//!
//! A transition such as "crossfade, pause, slide out, tear down" is stored as
//! a handful of `{deadline, action}` entries instead of nested callbacks. The
//! owner drains due entries from its tick and interprets the actions itself.
//!
//! Entries with equal deadlines keep their scheduling order.

use std::collections::VecDeque;
use std::time::Instant;

/// One scheduled step.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage<A> {
    pub at: Instant,
    pub action: A,
}

/// Ordered queue of pending stages.
#[derive(Debug, Clone)]
pub struct Timeline<A> {
    stages: VecDeque<Stage<A>>,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self {
            stages: VecDeque::new(),
        }
    }
}

impl<A> Timeline<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to run at `at`, after every stage already due at or
    /// before that instant.
    pub fn schedule(&mut self, at: Instant, action: A) {
        let index = self.stages.partition_point(|stage| stage.at <= at);
        self.stages.insert(index, Stage { at, action });
    }

    /// Removes and returns the earliest stage if it is due.
    pub fn pop_due(&mut self, now: Instant) -> Option<Stage<A>> {
        if self.stages.front().is_some_and(|stage| stage.at <= now) {
            self.stages.pop_front()
        } else {
            None
        }
    }

    /// Drops every pending stage.
    pub fn clear(&mut self) {
        self.stages.clear();
    }

    /// Keeps only the stages whose action satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&A) -> bool) {
        self.stages.retain(|stage| keep(&stage.action));
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.stages.front().map(|stage| stage.at)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if any pending stage satisfies `predicate`.
    pub fn contains(&self, mut predicate: impl FnMut(&A) -> bool) -> bool {
        self.stages.iter().any(|stage| predicate(&stage.action))
    }
}
