use tracing::trace;

use crate::core::Viewport;

/// Explicit subscribe/unsubscribe pair for ambient resize notifications.
///
/// Hosts register a binding on activation and tear it down when the chart
/// leaves the screen. Samples delivered while unsubscribed are dropped, which
/// guarantees no stale layout recomputation after teardown. Unsubscription is
/// idempotent: repeated teardown calls are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportBinding {
    subscribed: bool,
}

impl ViewportBinding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the binding. Returns `false` when already subscribed.
    pub fn subscribe(&mut self) -> bool {
        if self.subscribed {
            return false;
        }
        self.subscribed = true;
        true
    }

    /// Deactivates the binding. Returns `false` when already unsubscribed.
    pub fn unsubscribe(&mut self) -> bool {
        if !self.subscribed {
            return false;
        }
        self.subscribed = false;
        true
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Filters one viewport sample through the subscription gate.
    ///
    /// Returns the sample for layout recomputation while subscribed, `None`
    /// after teardown.
    #[must_use]
    pub fn deliver(&self, viewport: Viewport) -> Option<Viewport> {
        if !self.subscribed {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "viewport sample dropped after teardown"
            );
            return None;
        }
        Some(viewport)
    }
}
