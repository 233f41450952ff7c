//! Reference motion resolver: an infinite horizontal floor
//!
//! Real hosts sweep a capsule through their collision world. This one only
//! integrates position and stops at `floor_height`, which is enough for
//! headless runs and tests.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::motor::MotionResolver;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatGroundResolver {
    pub position: Vec3,
    pub floor_height: f32,
}

impl FlatGroundResolver {
    pub fn new(position: Vec3, floor_height: f32) -> Self {
        Self {
            position,
            floor_height,
        }
    }

    /// Actor standing on a floor at y = 0
    pub fn at_origin() -> Self {
        Self::new(Vec3::ZERO, 0.0)
    }

    /// Height above the floor
    pub fn altitude(&self) -> f32 {
        self.position.y - self.floor_height
    }
}

impl MotionResolver for FlatGroundResolver {
    fn move_by(&mut self, displacement: Vec3) -> bool {
        self.position += displacement;
        if self.position.y <= self.floor_height {
            self.position.y = self.floor_height;
            true
        } else {
            false
        }
    }
}
