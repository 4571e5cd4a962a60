//! The host's view-mounting capability.

use crate::routing::ViewRef;

/// Mounts the component a view reference stands for.
///
/// Implemented by the host's composition root; the router only hands out
/// references.
pub trait ViewMount {
    fn mount(&mut self, view: &ViewRef);
}

impl<F> ViewMount for F
where
    F: FnMut(&ViewRef),
{
    fn mount(&mut self, view: &ViewRef) {
        self(view)
    }
}
