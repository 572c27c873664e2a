use std::fmt;

use crate::keycode::Keycode;

pub const HID_USAGE_GENERIC_DESKTOP: u16 = 0x01;
pub const HID_USAGE_KEYBOARD: u16 = 0x07;
pub const HID_USAGE_CONSUMER: u16 = 0x0C;

pub const MOD_LCTL: u8 = 0x01;
pub const MOD_LSFT: u8 = 0x02;
pub const MOD_LALT: u8 = 0x04;
pub const MOD_LGUI: u8 = 0x08;
pub const MOD_RCTL: u8 = 0x10;
pub const MOD_RSFT: u8 = 0x20;
pub const MOD_RALT: u8 = 0x40;
pub const MOD_RGUI: u8 = 0x80;

/// Modifier bits in encoding order, with ZMK's wrapper function names.
const MODIFIER_WRAPPERS: [(u8, &str); 8] = [
    (MOD_LCTL, "LC"),
    (MOD_LSFT, "LS"),
    (MOD_LALT, "LA"),
    (MOD_LGUI, "LG"),
    (MOD_RCTL, "RC"),
    (MOD_RSFT, "RS"),
    (MOD_RALT, "RA"),
    (MOD_RGUI, "RG"),
];

/// Lossless decoded ZMK HID usage value (base usage + implicit modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HidUsage {
    page: u16,
    id: u16,
    modifiers: u8,
}

impl HidUsage {
    /// Decode from ZMK's encoded usage format.
    ///
    /// ZMK encodes as:
    /// - bits 31:24: modifiers
    /// - bits 23:16: usage page
    /// - bits 15:00: usage id
    ///
    /// If page is 0, ZMK treats it as keyboard page (`0x07`).
    pub fn from_encoded(encoded: u32) -> Self {
        let page = match ((encoded >> 16) & 0xFF) as u16 {
            0 => HID_USAGE_KEYBOARD,
            page => page,
        };

        Self {
            page,
            id: (encoded & 0xFFFF) as u16,
            modifiers: (encoded >> 24) as u8,
        }
    }

    pub fn from_parts(page: u16, id: u16, modifiers: u8) -> Self {
        Self {
            page,
            id,
            modifiers,
        }
    }

    pub fn to_hid_usage(self) -> u32 {
        ((self.modifiers as u32) << 24) | (((self.page & 0xFF) as u32) << 16) | self.id as u32
    }

    pub fn page(self) -> u16 {
        self.page
    }

    pub fn id(self) -> u16 {
        self.id
    }

    pub fn modifiers(self) -> u8 {
        self.modifiers
    }

    /// Returns the same usage with every implicit modifier cleared.
    pub fn base(self) -> Self {
        Self {
            modifiers: 0,
            ..self
        }
    }

    pub fn with_modifiers(self, modifiers: u8) -> Self {
        Self {
            modifiers: self.modifiers | modifiers,
            ..self
        }
    }

    pub fn known_keycode(self) -> Option<Keycode> {
        Keycode::from_hid_usage(self.to_hid_usage())
    }

    pub fn known_base_keycode(self) -> Option<Keycode> {
        self.base().known_keycode()
    }

    pub fn modifier_labels(self) -> Vec<&'static str> {
        MODIFIER_WRAPPERS
            .iter()
            .filter(|(bit, _)| self.modifiers & bit != 0)
            .map(|&(_, label)| label)
            .collect()
    }
}

impl From<Keycode> for HidUsage {
    fn from(value: Keycode) -> Self {
        Self::from_encoded(value.to_hid_usage())
    }
}

impl fmt::Display for HidUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(keycode) = self.known_keycode() {
            return f.write_str(keycode.to_name());
        }

        if let Some(base) = self.known_base_keycode() {
            // LS(LC(A)) style, outermost wrapper is the highest modifier bit.
            let labels = self.modifier_labels();
            for label in labels.iter().rev() {
                write!(f, "{label}(")?;
            }
            f.write_str(base.to_name())?;
            for _ in &labels {
                f.write_str(")")?;
            }
            return Ok(());
        }

        write!(f, "0x{:08X}", self.to_hid_usage())
    }
}
