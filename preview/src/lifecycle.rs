//! One-way preview lifecycle and visibility latch.
//!
//! `Unobserved -> Observed -> Visible -> Mounted`. No transition goes back,
//! and no step is skipped. Once the owning view is torn down, intersection
//! notifications are ignored so a late observer callback cannot fire the
//! latch.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreviewPhase {
    /// Created, observer not yet attached.
    #[default]
    Unobserved,
    /// Observer attached, waiting for the region to approach the viewport.
    Observed,
    /// Latch fired; the document is being compiled.
    Visible,
    /// Frame attached. Terminal.
    Mounted,
}

impl PreviewPhase {
    fn next(self) -> Option<Self> {
        match self {
            Self::Unobserved => Some(Self::Observed),
            Self::Observed => Some(Self::Visible),
            Self::Visible => Some(Self::Mounted),
            Self::Mounted => None,
        }
    }

    /// True once the visibility latch has fired.
    pub fn is_visible(self) -> bool {
        self >= Self::Visible
    }
}

/// Lifecycle driver for a single preview instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewLifecycle {
    phase: PreviewPhase,
    detached: bool,
}

impl PreviewLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PreviewPhase {
        self.phase
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Move one step forward to `target`. Returns `false` and leaves the
    /// phase unchanged for backwards, repeated, or skipping transitions, and
    /// for any transition after [`PreviewLifecycle::detach`].
    pub fn advance(&mut self, target: PreviewPhase) -> bool {
        if self.detached || self.phase.next() != Some(target) {
            return false;
        }
        self.phase = target;
        true
    }

    /// Observer attached.
    pub fn observe(&mut self) -> bool {
        self.advance(PreviewPhase::Observed)
    }

    /// Feed one intersection notification. Returns `true` exactly once: the
    /// first time the region is reported intersecting while observed.
    /// Callers disconnect their observer when this returns `true`.
    pub fn notify(&mut self, is_intersecting: bool) -> bool {
        is_intersecting && self.advance(PreviewPhase::Visible)
    }

    /// Frame attached.
    pub fn mount(&mut self) -> bool {
        self.advance(PreviewPhase::Mounted)
    }

    /// Owning view unmounted. Further notifications are ignored.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}
