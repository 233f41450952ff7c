//! Scene-wide gameplay context
//!
//! Created by the owning scope, passed by `&mut` to whichever system needs
//! it, and dropped at the scope's end. There is no global instance.

use super::door::{DoorUpdate, InventoryDoor};
use super::inventory::Inventory;

/// Index of a door registered with [`GameContext::add_door`]
pub type DoorId = usize;

#[derive(Debug, Default)]
pub struct GameContext {
    pub inventory: Inventory,
    doors: Vec<InventoryDoor>,
}

impl GameContext {
    pub fn new() -> Self {
        log::debug!("Game context created");
        Self::default()
    }

    pub fn add_door(&mut self, door: InventoryDoor) -> DoorId {
        self.doors.push(door);
        self.doors.len() - 1
    }

    pub fn door(&self, id: DoorId) -> Option<&InventoryDoor> {
        self.doors.get(id)
    }

    /// A pickup touched the player
    pub fn collect(&mut self, count: u32) {
        self.inventory.add(count);
    }

    /// Advance every door against the current inventory; returns the non-idle updates
    pub fn update(&mut self) -> Vec<(DoorId, DoorUpdate)> {
        let total = self.inventory.total();
        self.doors
            .iter_mut()
            .enumerate()
            .filter_map(|(id, door)| match door.update(total) {
                DoorUpdate::Idle => None,
                update => Some((id, update)),
            })
            .collect()
    }
}

impl Drop for GameContext {
    fn drop(&mut self) {
        log::debug!(
            "Game context torn down ({} objects, {} doors)",
            self.inventory.total(),
            self.doors.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doors_follow_inventory() {
        let mut ctx = GameContext::new();
        let small = ctx.add_door(InventoryDoor::new(1));
        let big = ctx.add_door(InventoryDoor::new(2));

        assert!(ctx.update().is_empty());

        ctx.collect(2);
        assert_eq!(
            ctx.update(),
            vec![(small, DoorUpdate::Unlocked), (big, DoorUpdate::SlotLit(1))]
        );
        assert_eq!(ctx.update(), vec![(big, DoorUpdate::Unlocked)]);
        assert!(ctx.door(big).is_some_and(InventoryDoor::is_unlocked));
    }

    #[test]
    fn test_unknown_door() {
        let ctx = GameContext::new();
        assert!(ctx.door(3).is_none());
    }
}
