use glam::Vec2;

/// A key the demo cares about, decoupled from any window-library keycode.
/// The application shell maps its own keycodes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadKey {
    Forward,
    Back,
    Left,
    Right,
    Jump,
}

/// Held-key tracker producing the planar direction and the jump edge.
///
/// Direction is the raw digital axis pair `(right - left, forward - back)`;
/// the kernel normalizes it. Opposite keys held together cancel to zero.
#[derive(Debug, Clone, Default)]
pub struct DigitalPad {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
    jump_held: bool,
    jump_edge: bool,
}

impl DigitalPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: PadKey) {
        match key {
            PadKey::Forward => self.forward = true,
            PadKey::Back => self.back = true,
            PadKey::Left => self.left = true,
            PadKey::Right => self.right = true,
            PadKey::Jump => {
                // Edge fires on the up-to-down transition only; key repeat
                // delivers press events while held and must not re-arm it.
                if !self.jump_held {
                    self.jump_edge = true;
                    tracing::debug!("jump edge");
                }
                self.jump_held = true;
            }
        }
    }

    pub fn release(&mut self, key: PadKey) {
        match key {
            PadKey::Forward => self.forward = false,
            PadKey::Back => self.back = false,
            PadKey::Left => self.left = false,
            PadKey::Right => self.right = false,
            PadKey::Jump => self.jump_held = false,
        }
    }

    /// Digital planar direction: x = right minus left, y = forward minus back.
    pub fn direction(&self) -> Vec2 {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.forward as i8 - self.back as i8) as f32;
        Vec2::new(x, y)
    }

    /// Consume the pending jump edge, if any. Clears on read so one press
    /// yields exactly one jump attempt.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_edge)
    }
}
