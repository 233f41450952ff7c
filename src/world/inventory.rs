//! Collected-object counter
//!
//! Owned by the [`GameContext`](super::GameContext) and passed by reference to
//! whatever needs it. Changes are broadcast to typed observers.

use super::events::Observers;

/// Sent after every change to the inventory total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryChanged {
    pub previous: u32,
    pub total: u32,
}

#[derive(Debug, Default)]
pub struct Inventory {
    total: u32,
    pub on_changed: Observers<InventoryChanged>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn add(&mut self, count: u32) {
        self.set(self.total.saturating_add(count));
    }

    /// Removes up to `count`; the total never goes below zero
    pub fn remove(&mut self, count: u32) {
        self.set(self.total.saturating_sub(count));
    }

    pub fn reset(&mut self) {
        self.set(0);
    }

    fn set(&mut self, total: u32) {
        if total == self.total {
            return;
        }
        let event = InventoryChanged {
            previous: self.total,
            total,
        };
        self.total = total;
        self.on_changed.notify(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_add_remove_clamps() {
        let mut inventory = Inventory::new();
        inventory.add(3);
        assert_eq!(inventory.total(), 3);
        inventory.remove(5);
        assert_eq!(inventory.total(), 0);
    }

    #[test]
    fn test_reset() {
        let mut inventory = Inventory::new();
        inventory.add(4);
        inventory.reset();
        assert_eq!(inventory.total(), 0);
    }

    #[test]
    fn test_change_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut inventory = Inventory::new();
        let sink = Rc::clone(&seen);
        inventory
            .on_changed
            .subscribe(move |e| sink.borrow_mut().push(*e));

        inventory.add(2);
        inventory.remove(0);
        inventory.remove(1);

        assert_eq!(
            *seen.borrow(),
            vec![
                InventoryChanged { previous: 0, total: 2 },
                InventoryChanged { previous: 2, total: 1 },
            ]
        );
    }
}
