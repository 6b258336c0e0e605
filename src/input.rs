use glam::Vec2;

/// Movement keys held this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    /// True while any movement key is down, even if opposite keys cancel out.
    pub fn any_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Unnormalized direction, y up. Each axis is -1, 0 or 1.
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.up {
            direction.y += 1.0;
        }
        if self.down {
            direction.y -= 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        direction
    }
}
