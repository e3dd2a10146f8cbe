//! # Reveal Slot
//!
//! Selecting a card reveals its "add" affordance for a short while. There is
//! one slot: a new selection replaces the old one and restarts the countdown,
//! and an expiry that belongs to an older selection does nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket(u64);

#[derive(Debug, Default)]
pub struct RevealSlot {
    /// Catalog index currently revealed.
    selected: Option<usize>,
    generation: u64,
}

impl RevealSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Reveal `index`. The returned ticket is the only one that can clear it.
    pub fn select(&mut self, index: usize) -> RevealTicket {
        self.generation += 1;
        self.selected = Some(index);
        RevealTicket(self.generation)
    }

    /// Clear immediately, e.g. once the revealed card was added. Pending
    /// expiries become stale.
    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.selected = None;
    }

    /// Timer fired for `ticket`. Returns true if the reveal was cleared.
    pub fn expire(&mut self, ticket: RevealTicket) -> bool {
        if ticket.0 != self.generation || self.selected.is_none() {
            return false;
        }
        self.selected = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_expire() {
        let mut slot = RevealSlot::new();
        let ticket = slot.select(4);
        assert!(slot.is_revealed(4));
        assert!(slot.expire(ticket));
        assert_eq!(slot.selected(), None);
    }

    #[test]
    fn test_reselect_resets_countdown() {
        let mut slot = RevealSlot::new();
        let first = slot.select(4);
        let second = slot.select(4);
        assert!(!slot.expire(first));
        assert!(slot.is_revealed(4));
        assert!(slot.expire(second));
    }

    #[test]
    fn test_select_other_card_moves_slot() {
        let mut slot = RevealSlot::new();
        let first = slot.select(1);
        slot.select(2);
        assert!(!slot.is_revealed(1));
        assert!(slot.is_revealed(2));
        assert!(!slot.expire(first));
        assert!(slot.is_revealed(2));
    }

    #[test]
    fn test_dismiss_makes_ticket_stale() {
        let mut slot = RevealSlot::new();
        let ticket = slot.select(0);
        slot.dismiss();
        assert_eq!(slot.selected(), None);
        let next = slot.select(0);
        assert!(!slot.expire(ticket));
        assert!(slot.is_revealed(0));
        assert!(slot.expire(next));
    }

    #[test]
    fn test_double_expire() {
        let mut slot = RevealSlot::new();
        let ticket = slot.select(0);
        assert!(slot.expire(ticket));
        assert!(!slot.expire(ticket));
    }
}
