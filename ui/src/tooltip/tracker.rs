//! Tracked-trigger bookkeeping for the shared tooltip.
//!
//! The DOM controller delegates its hide decision here so the rule stays
//! testable without a browser: only leaving the trigger that currently owns
//! the tooltip hides it, and movement into that trigger's own descendants
//! is not a leave.

/// Which trigger currently owns the tooltip, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedTrigger<T: PartialEq> {
    owner: Option<T>,
}

impl<T: PartialEq> TrackedTrigger<T> {
    pub const fn none() -> Self {
        Self { owner: None }
    }

    /// Records `trigger` as the tooltip's owner, replacing any previous one.
    pub fn show(&mut self, trigger: T) {
        self.owner = Some(trigger);
    }

    pub fn clear(&mut self) {
        self.owner = None;
    }

    /// Whether a mouseout that left `trigger` should hide the tooltip.
    ///
    /// `moved_within` is true when the pointer landed on a descendant of the
    /// same trigger, which does not count as leaving it.
    pub fn should_hide_on_leave(&self, trigger: &T, moved_within: bool) -> bool {
        !moved_within && self.owner.as_ref() == Some(trigger)
    }
}
