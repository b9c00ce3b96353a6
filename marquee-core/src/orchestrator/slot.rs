//! Per-lane in-flight request tracking.
//!
//! Each fetch lane (hero, section, search) owns one `Slot`. Activating a
//! slot cancels whatever was outstanding and hands the new fetch a ticket;
//! a resolution may only commit while its ticket is still current. The
//! ticket check and the store write must happen with no await between them
//! so that no newer activation can interleave.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

/// Handle for one issued fetch: its cancellation token plus the slot
/// generation it was issued under.
#[derive(Debug, Clone)]
pub(crate) struct FetchTicket {
    pub token: CancellationToken,
    pub generation: u64,
}

/// One logical fetch lane. At most one uncancelled request at a time.
#[derive(Debug)]
pub(crate) struct Slot {
    name: &'static str,
    generation: AtomicU64,
    active: Mutex<CancellationToken>,
}

impl Slot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: AtomicU64::new(0),
            active: Mutex::new(CancellationToken::new()),
        }
    }

    /// Cancel the outstanding request (if any) and open a new generation.
    /// The returned ticket belongs to the fetch about to be issued.
    pub fn activate(&self, parent: &CancellationToken) -> FetchTicket {
        let token = parent.child_token();
        {
            let mut active = self.active.lock().unwrap();
            active.cancel();
            *active = token.clone();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(slot = self.name, generation, "slot activated");
        FetchTicket { token, generation }
    }

    /// Cancel the outstanding request and return the slot to idle without
    /// issuing a replacement.
    pub fn deactivate(&self) {
        self.active.lock().unwrap().cancel();
        self.generation.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(slot = self.name, "slot deactivated");
    }

    /// Whether a resolution holding `ticket` may still commit: its token is
    /// uncancelled and no newer activation has superseded it.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        !ticket.token.is_cancelled()
            && self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::Slot;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn activation_cancels_the_previous_ticket() {
        let slot = Slot::new("section");
        let root = CancellationToken::new();

        let first = slot.activate(&root);
        assert!(slot.is_current(&first));

        let second = slot.activate(&root);
        assert!(first.token.is_cancelled());
        assert!(!slot.is_current(&first));
        assert!(slot.is_current(&second));
    }

    #[test]
    fn deactivation_leaves_no_current_ticket() {
        let slot = Slot::new("search");
        let root = CancellationToken::new();

        let ticket = slot.activate(&root);
        slot.deactivate();

        assert!(ticket.token.is_cancelled());
        assert!(!slot.is_current(&ticket));
    }

    #[test]
    fn parent_cancellation_reaches_the_ticket() {
        let slot = Slot::new("hero");
        let root = CancellationToken::new();

        let ticket = slot.activate(&root);
        root.cancel();

        assert!(ticket.token.is_cancelled());
        assert!(!slot.is_current(&ticket));
    }
}
