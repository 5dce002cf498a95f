//! Request ids for screen loads.
//!
//! Every reload takes a ticket. When a response arrives, it is applied only
//! if its ticket is still the newest one issued by that screen; slower
//! responses from superseded loads are discarded.

/// Identifier of one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding all earlier ones.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// `Some(value)` when `ticket` is current, `None` for stale results.
    pub fn try_apply<T>(&self, ticket: LoadTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_is_current() {
        let mut seq = LoadSequence::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut seq = LoadSequence::new();
        let slow = seq.begin();
        let fast = seq.begin();

        // fast response lands first, slow one afterwards
        assert_eq!(seq.try_apply(fast, "fresh"), Some("fresh"));
        assert_eq!(seq.try_apply(slow, "stale"), None);
    }
}
