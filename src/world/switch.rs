//! Toggle plate driven by interaction
use super::events::Observers;

#[derive(Debug, Default)]
pub struct SwitchPlate {
    active: bool,
    /// Receives the new active state
    pub on_toggle: Observers<bool>,
}

impl SwitchPlate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the plate and tell every listener; returns how many were told
    pub fn interact(&mut self) -> usize {
        self.active = !self.active;
        self.on_toggle.notify(&self.active)
    }
}
