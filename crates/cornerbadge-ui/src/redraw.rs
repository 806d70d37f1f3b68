//! Redraw scheduling.
//!
//! Widgets never draw on their own: when their visual state changes they ask
//! the host for a future draw pass through [`RedrawRequests`]. Requests are
//! advisory and coalesce; the host drains them with [`RedrawRequests::take`].

use std::cell::Cell;

/// Counter of redraw requests made since the host last drained it.
///
/// Lives on [`crate::scene::UiScene`] and is lent to widgets through
/// [`crate::constraints::LayoutCtx`]. Single-threaded by construction
/// (`Cell`), like the rest of the UI layer.
#[derive(Debug, Default)]
pub struct RedrawRequests {
    pending: Cell<u32>,
}

impl RedrawRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a future draw pass.
    #[inline]
    pub fn request(&self) {
        self.pending.set(self.pending.get().saturating_add(1));
    }

    /// Number of requests since the last [`take`](Self::take).
    #[inline]
    pub fn pending(&self) -> u32 {
        self.pending.get()
    }

    /// Drains the counter. Returns `true` if at least one redraw was requested.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.replace(0) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_coalesce_until_taken() {
        let r = RedrawRequests::new();
        assert!(!r.take());
        r.request();
        r.request();
        assert_eq!(r.pending(), 2);
        assert!(r.take());
        assert_eq!(r.pending(), 0);
        assert!(!r.take());
    }
}
