//! Presentation bindings between a scene's route and the view showing it.
//!
//! A view presents a child either by pushing it (navigation stack) or as a
//! sheet. Both read "is shown" from the parent's route tag and write back
//! through the parent's presentation intent.

use crate::ui::route::Presents;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    Push,
    Sheet,
}

/// Two-way "is this child shown" binding over a state snapshot.
#[derive(Debug)]
pub struct PresentationBinding<I: Presents> {
    mode: PresentationMode,
    bound: I::Tag,
    current: Option<I::Tag>,
}

impl<I: Presents> PresentationBinding<I> {
    /// `current` is the parent's route tag in the snapshot the view rendered.
    pub fn new(mode: PresentationMode, current: Option<I::Tag>, bound: I::Tag) -> Self {
        Self {
            mode,
            bound,
            current,
        }
    }

    pub fn push(current: Option<I::Tag>, bound: I::Tag) -> Self {
        Self::new(PresentationMode::Push, current, bound)
    }

    pub fn sheet(current: Option<I::Tag>, bound: I::Tag) -> Self {
        Self::new(PresentationMode::Sheet, current, bound)
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.current == Some(self.bound)
    }

    /// Intent to send when the view reports a new presentation value.
    ///
    /// Returns `None` when nothing needs to change, including when the view
    /// reports a dismissal for a child the route no longer shows: the route
    /// has already moved on and a second presentation-false would clear
    /// whatever replaced it.
    pub fn set(&self, presented: bool) -> Option<I> {
        match (presented, self.is_active()) {
            (true, true) => None,
            (true, false) => Some(I::presentation(self.bound, true)),
            (false, true) => Some(I::presentation(self.bound, false)),
            (false, false) => {
                tracing::warn!(
                    mode = ?self.mode,
                    bound = ?self.bound,
                    current = ?self.current,
                    "dismissal reported for a route that is not active; ignored"
                );
                None
            }
        }
    }
}
