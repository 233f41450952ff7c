//! Door that opens once enough objects have been collected
//!
//! One slot lights up per update while the inventory is ahead of the lit
//! count, so a burst of pickups animates slot by slot.

use serde::{Deserialize, Serialize};

/// What happened on a door update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorUpdate {
    Idle,
    /// 1-based slot index
    SlotLit(u32),
    /// The last slot lit; the door opens
    Unlocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDoor {
    required: u32,
    lit_slots: u32,
    unlocked: bool,
}

impl InventoryDoor {
    /// A door needs at least one object
    pub fn new(required: u32) -> Self {
        Self {
            required: required.max(1),
            lit_slots: 0,
            unlocked: false,
        }
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn lit_slots(&self) -> u32 {
        self.lit_slots
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn update(&mut self, inventory_total: u32) -> DoorUpdate {
        if self.unlocked || inventory_total <= self.lit_slots {
            return DoorUpdate::Idle;
        }

        self.lit_slots += 1;
        if self.lit_slots == self.required {
            self.unlocked = true;
            log::info!("Door unlocked ({} objects)", self.required);
            DoorUpdate::Unlocked
        } else {
            DoorUpdate::SlotLit(self.lit_slots)
        }
    }
}
