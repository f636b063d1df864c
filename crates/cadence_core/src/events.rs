//! Input vocabulary
//!
//! Keystroke actions carry a `KeyCode` and hand it to their callback when
//! they fire, so replayed or scripted input looks the same as live input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Alphanumeric keys
    pub const A: KeyCode = KeyCode(0x41);
    pub const D: KeyCode = KeyCode(0x44);
    pub const E: KeyCode = KeyCode(0x45);
    pub const Q: KeyCode = KeyCode(0x51);
    pub const R: KeyCode = KeyCode(0x52);
    pub const S: KeyCode = KeyCode(0x53);
    pub const W: KeyCode = KeyCode(0x57);

    // Number keys
    pub const KEY_0: KeyCode = KeyCode(0x30);
    pub const KEY_1: KeyCode = KeyCode(0x31);
    pub const KEY_2: KeyCode = KeyCode(0x32);
    pub const KEY_3: KeyCode = KeyCode(0x33);

    // Special keys
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Map an ASCII letter or digit to its key code (case-insensitive)
    pub fn from_char(c: char) -> KeyCode {
        match c.to_ascii_uppercase() {
            c @ ('A'..='Z' | '0'..='9') => KeyCode(c as u32),
            ' ' => KeyCode::SPACE,
            _ => KeyCode::UNKNOWN,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match char::from_u32(self.0) {
            Some(c) if c.is_ascii_alphanumeric() => write!(f, "{c}"),
            _ => write!(f, "0x{:02X}", self.0),
        }
    }
}
