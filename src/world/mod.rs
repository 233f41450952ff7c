//! Gameplay wiring around the character
//!
//! Explicit replacements for engine-style managers and message broadcasting:
//! - `context`: scene-owned state passed by reference
//! - `events`: typed observer lists
//! - `inventory`, `door`, `switch`: small puzzle pieces built on those
//! - `interact`: nearest-target selection

pub mod context;
pub mod door;
pub mod events;
pub mod interact;
pub mod inventory;
pub mod switch;

pub use context::{DoorId, GameContext};
pub use door::{DoorUpdate, InventoryDoor};
pub use events::{ObserverId, Observers};
pub use interact::closest_interactable;
pub use inventory::{Inventory, InventoryChanged};
pub use switch::SwitchPlate;
