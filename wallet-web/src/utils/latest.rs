//! Last-request-wins bookkeeping for async fetches started from effects.
//!
//! Each [`LatestRequest::begin`] supersedes every ticket handed out before it, so a
//! slow response for an old input can be recognized and dropped on arrival.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct LatestRequest {
    current: Rc<Cell<u64>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; earlier tickets stop being latest.
    pub fn begin(&self) -> RequestTicket {
        let id = self.current.get().wrapping_add(1);
        self.current.set(id);
        RequestTicket {
            id,
            current: self.current.clone(),
        }
    }
}

/// Handle for one started request.
pub struct RequestTicket {
    id: u64,
    current: Rc<Cell<u64>>,
}

impl RequestTicket {
    /// `false` once a newer request has begun.
    pub fn is_latest(&self) -> bool {
        self.current.get() == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let requests = LatestRequest::new();
        let first = requests.begin();
        assert!(first.is_latest());

        let second = requests.begin();
        assert!(!first.is_latest());
        assert!(second.is_latest());
    }

    #[test]
    fn test_slow_first_response_is_dropped() {
        // Account A is fetched, then B; A's response arrives after B's.
        let requests = LatestRequest::new();
        let mut shown = None;

        let ticket_a = requests.begin();
        let ticket_b = requests.begin();

        if ticket_b.is_latest() {
            shown = Some("balance of B");
        }
        if ticket_a.is_latest() {
            shown = Some("balance of A");
        }

        assert_eq!(shown, Some("balance of B"));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let requests = LatestRequest::new();
        let ticket = requests.begin();

        let _ = requests.clone().begin();

        assert!(!ticket.is_latest());
    }
}
