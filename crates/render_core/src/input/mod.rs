//! Keyboard input
//!
//! Key codes and modifier bits use GLFW's numbering so the GLFW backend can
//! forward them unchanged; other backends translate into the same values.

use bitflags::bitflags;

use crate::render::Window;

/// Keyboard key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub i32);

impl Key {
    /// Key not known to the backend
    pub const UNKNOWN: Self = Self(-1);
    /// Space bar
    pub const SPACE: Self = Self(32);
    /// A key
    pub const A: Self = Self(65);
    /// D key
    pub const D: Self = Self(68);
    /// Q key
    pub const Q: Self = Self(81);
    /// S key
    pub const S: Self = Self(83);
    /// W key
    pub const W: Self = Self(87);
    /// Escape key
    pub const ESCAPE: Self = Self(256);
    /// Enter key
    pub const ENTER: Self = Self(257);
    /// Tab key
    pub const TAB: Self = Self(258);
    /// Right arrow
    pub const RIGHT: Self = Self(262);
    /// Left arrow
    pub const LEFT: Self = Self(263);
    /// Down arrow
    pub const DOWN: Self = Self(264);
    /// Up arrow
    pub const UP: Self = Self(265);
}

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key was released
    Release,
    /// Key was pressed
    Press,
    /// Key was held down until it repeated
    Repeat,
}

bitflags! {
    /// Modifier keys held during a key event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        /// Either shift key
        const SHIFT = 0x0001;
        /// Either control key
        const CONTROL = 0x0002;
        /// Either alt key
        const ALT = 0x0004;
        /// Either super key
        const SUPER = 0x0008;
        /// Caps lock is on
        const CAPS_LOCK = 0x0010;
        /// Num lock is on
        const NUM_LOCK = 0x0020;
    }
}

/// A single key event as delivered by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key code
    pub key: Key,
    /// Platform-specific scancode
    pub scancode: i32,
    /// Press, release or repeat
    pub action: KeyAction,
    /// Modifiers held at the time
    pub mods: Modifiers,
}

impl KeyEvent {
    /// Create a key event
    pub const fn new(key: Key, scancode: i32, action: KeyAction, mods: Modifiers) -> Self {
        Self {
            key,
            scancode,
            action,
            mods,
        }
    }

    /// Press of `key` with no modifiers
    pub const fn press(key: Key) -> Self {
        Self::new(key, 0, KeyAction::Press, Modifiers::empty())
    }

    /// Release of `key` with no modifiers
    pub const fn release(key: Key) -> Self {
        Self::new(key, 0, KeyAction::Release, Modifiers::empty())
    }
}

/// Receiver for key events, owned by a [`Window`]
///
/// Called synchronously from [`Window::swap_buffers`] on the render-loop thread,
/// in the order the backend reported the events. Implementations must not
/// block: the whole loop stalls until the callback returns.
///
/// While the callback runs the window has no delegate installed. Installing a
/// new delegate from inside the callback replaces this one once it returns.
pub trait KeyboardDelegate {
    /// Handle one key event
    fn key_callback(&mut self, window: &mut Window<'_>, event: KeyEvent);
}

/// Delegate that asks the window to close when a given key is pressed
#[derive(Debug, Clone, Copy)]
pub struct CloseOnKey {
    key: Key,
}

impl CloseOnKey {
    /// Close the window when `key` is pressed
    pub const fn new(key: Key) -> Self {
        Self { key }
    }
}

impl Default for CloseOnKey {
    fn default() -> Self {
        Self::new(Key::ESCAPE)
    }
}

impl KeyboardDelegate for CloseOnKey {
    fn key_callback(&mut self, window: &mut Window<'_>, event: KeyEvent) {
        if event.key == self.key && event.action == KeyAction::Press {
            log::info!("Close key {:?} pressed", event.key);
            window.set_should_close(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bits_match_glfw() {
        let mods = Modifiers::from_bits_truncate(0x0003);
        assert!(mods.contains(Modifiers::SHIFT | Modifiers::CONTROL));
        assert!(!mods.contains(Modifiers::ALT));
        assert_eq!(Modifiers::from_bits_truncate(0x0100), Modifiers::empty());
    }

    #[test]
    fn test_press_helper() {
        let event = KeyEvent::press(Key::ESCAPE);
        assert_eq!(event.action, KeyAction::Press);
        assert!(event.mods.is_empty());
        assert_eq!(event.key, Key(256));
    }

    #[test]
    fn test_close_on_key_ignores_other_input() {
        use crate::render::{HeadlessWindowFactory, WindowFactory};

        let mut factory = HeadlessWindowFactory::default();
        let mut window = factory.create_window(1, 1, "keys").unwrap();
        let mut delegate = CloseOnKey::new(Key::Q);

        delegate.key_callback(&mut window, KeyEvent::press(Key::ESCAPE));
        delegate.key_callback(&mut window, KeyEvent::release(Key::Q));
        assert!(!window.should_close());

        delegate.key_callback(&mut window, KeyEvent::press(Key::Q));
        assert!(window.should_close());
    }
}
