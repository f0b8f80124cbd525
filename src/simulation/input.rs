use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
}

pub trait InputSource {
    fn is_down(&self, key: Key) -> bool;
}

/// Keys held during one tick. Taken once per tick so every read inside the
/// physics step agrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
}

impl InputSnapshot {
    pub fn with_rotate_left(self, rotate_left: bool) -> Self {
        Self {
            rotate_left,
            ..self
        }
    }

    pub fn with_rotate_right(self, rotate_right: bool) -> Self {
        Self {
            rotate_right,
            ..self
        }
    }

    pub fn with_thrust(self, thrust: bool) -> Self {
        Self { thrust, ..self }
    }
}

impl InputSource for InputSnapshot {
    fn is_down(&self, key: Key) -> bool {
        match key {
            Key::RotateLeft => self.rotate_left,
            Key::RotateRight => self.rotate_right,
            Key::Thrust => self.thrust,
        }
    }
}

/// Key state written by the host's event handlers and read by the game loop.
/// A single writer and a single reader, so plain atomic flags are enough.
#[derive(Debug, Default)]
pub struct Keyboard {
    rotate_left: AtomicBool,
    rotate_right: AtomicBool,
    thrust: AtomicBool,
    any_key: AtomicBool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(&self, key: Key) -> &AtomicBool {
        match key {
            Key::RotateLeft => &self.rotate_left,
            Key::RotateRight => &self.rotate_right,
            Key::Thrust => &self.thrust,
        }
    }

    pub fn press(&self, key: Key) {
        self.flag(key).store(true, Ordering::Release);
        self.press_any();
    }

    pub fn release(&self, key: Key) {
        self.flag(key).store(false, Ordering::Release);
    }

    /// Any key press, including keys the game does not map.
    pub fn press_any(&self) {
        self.any_key.store(true, Ordering::Release);
    }

    /// Consumes the pending "any key" press, if there is one.
    pub fn take_any_key(&self) -> bool {
        self.any_key.swap(false, Ordering::AcqRel)
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            rotate_left: self.is_down(Key::RotateLeft),
            rotate_right: self.is_down(Key::RotateRight),
            thrust: self.is_down(Key::Thrust),
        }
    }
}

impl InputSource for Keyboard {
    fn is_down(&self, key: Key) -> bool {
        self.flag(key).load(Ordering::Acquire)
    }
}
