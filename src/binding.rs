//! Typed binding domain model on top of raw ZMK behavior bindings.

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::hid_usage::HidUsage;
use crate::keycode::Keycode;

/// Firmware behavior a typed [`Behavior`] is bound through.
///
/// Behavior ids are assigned by the firmware at build time, so roles are
/// matched against the display names the device reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum BehaviorRole {
    #[strum(to_string = "Key Press")]
    KeyPress,
    #[strum(to_string = "Key Toggle")]
    KeyToggle,
    #[strum(to_string = "Layer-Tap")]
    LayerTap,
    #[strum(to_string = "Mod-Tap")]
    ModTap,
    #[strum(to_string = "Sticky Key")]
    StickyKey,
    #[strum(to_string = "Sticky Layer")]
    StickyLayer,
    #[strum(to_string = "Momentary Layer")]
    MomentaryLayer,
    #[strum(to_string = "Toggle Layer")]
    ToggleLayer,
    #[strum(to_string = "To Layer")]
    ToLayer,
    #[strum(to_string = "Bluetooth")]
    Bluetooth,
    #[strum(to_string = "External Power")]
    ExternalPower,
    #[strum(to_string = "Output Selection")]
    OutputSelection,
    #[strum(to_string = "Backlight")]
    Backlight,
    #[strum(to_string = "Underglow")]
    Underglow,
    #[strum(to_string = "Mouse Key Press")]
    MouseKeyPress,
    #[strum(to_string = "Mouse Move")]
    MouseMove,
    #[strum(to_string = "Mouse Scroll")]
    MouseScroll,
    #[strum(to_string = "Caps Word")]
    CapsWord,
    #[strum(to_string = "Key Repeat")]
    KeyRepeat,
    #[strum(to_string = "Reset")]
    Reset,
    #[strum(to_string = "Bootloader")]
    Bootloader,
    #[strum(to_string = "Soft Off")]
    SoftOff,
    #[strum(to_string = "Studio Unlock")]
    StudioUnlock,
    #[strum(to_string = "Grave/Escape")]
    GraveEscape,
    #[strum(to_string = "Transparent")]
    Transparent,
    #[strum(to_string = "None")]
    None,
}

/// Display names some firmware builds report instead of the canonical one.
const ROLE_ALIASES: [(&str, BehaviorRole); 2] = [
    ("z so off", BehaviorRole::SoftOff),
    ("gresc", BehaviorRole::GraveEscape),
];

impl BehaviorRole {
    /// Canonical display name as reported by upstream ZMK firmware.
    pub fn display_name(self) -> &'static str {
        self.into()
    }
}

/// Lossless typed behavior value for a single key binding.
///
/// Used by [`crate::StudioClient::get_key_at`] and [`crate::StudioClient::set_key_at`].
/// Unknown behavior IDs, and parameters a typed variant cannot carry, are
/// represented by [`Behavior::Unknown`].
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Behavior {
    KeyPress(HidUsage),
    KeyToggle(HidUsage),
    LayerTap { layer_id: u32, tap: HidUsage },
    ModTap { hold: HidUsage, tap: HidUsage },
    StickyKey(HidUsage),
    StickyLayer { layer_id: u32 },
    MomentaryLayer { layer_id: u32 },
    ToggleLayer { layer_id: u32 },
    ToLayer { layer_id: u32 },
    Bluetooth { command: u32, value: u32 },
    ExternalPower { value: u32 },
    OutputSelection { value: u32 },
    Backlight { command: u32, value: u32 },
    Underglow { command: u32, value: u32 },
    MouseKeyPress { value: u32 },
    MouseMove { value: u32 },
    MouseScroll { value: u32 },
    CapsWord,
    KeyRepeat,
    Reset,
    Bootloader,
    SoftOff,
    StudioUnlock,
    GraveEscape,
    Transparent,
    None,
    Unknown {
        behavior_id: i32,
        param1: u32,
        param2: u32,
    },
}

impl Behavior {
    pub fn key_press(key: Keycode) -> Self {
        Self::KeyPress(key.into())
    }

    /// Snake-case discriminator, for example `"key_press"` or `"momentary_layer"`.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Firmware role this value is written through; `None` for [`Behavior::Unknown`].
    pub fn role(&self) -> Option<BehaviorRole> {
        self.binding_target().ok()
    }

    /// Role to resolve against the device catalog, or the raw behavior id
    /// carried by [`Behavior::Unknown`].
    pub(crate) fn binding_target(&self) -> Result<BehaviorRole, i32> {
        let role = match self {
            Self::KeyPress(_) => BehaviorRole::KeyPress,
            Self::KeyToggle(_) => BehaviorRole::KeyToggle,
            Self::LayerTap { .. } => BehaviorRole::LayerTap,
            Self::ModTap { .. } => BehaviorRole::ModTap,
            Self::StickyKey(_) => BehaviorRole::StickyKey,
            Self::StickyLayer { .. } => BehaviorRole::StickyLayer,
            Self::MomentaryLayer { .. } => BehaviorRole::MomentaryLayer,
            Self::ToggleLayer { .. } => BehaviorRole::ToggleLayer,
            Self::ToLayer { .. } => BehaviorRole::ToLayer,
            Self::Bluetooth { .. } => BehaviorRole::Bluetooth,
            Self::ExternalPower { .. } => BehaviorRole::ExternalPower,
            Self::OutputSelection { .. } => BehaviorRole::OutputSelection,
            Self::Backlight { .. } => BehaviorRole::Backlight,
            Self::Underglow { .. } => BehaviorRole::Underglow,
            Self::MouseKeyPress { .. } => BehaviorRole::MouseKeyPress,
            Self::MouseMove { .. } => BehaviorRole::MouseMove,
            Self::MouseScroll { .. } => BehaviorRole::MouseScroll,
            Self::CapsWord => BehaviorRole::CapsWord,
            Self::KeyRepeat => BehaviorRole::KeyRepeat,
            Self::Reset => BehaviorRole::Reset,
            Self::Bootloader => BehaviorRole::Bootloader,
            Self::SoftOff => BehaviorRole::SoftOff,
            Self::StudioUnlock => BehaviorRole::StudioUnlock,
            Self::GraveEscape => BehaviorRole::GraveEscape,
            Self::Transparent => BehaviorRole::Transparent,
            Self::None => BehaviorRole::None,
            Self::Unknown { behavior_id, .. } => return Err(*behavior_id),
        };
        Ok(role)
    }

    /// Raw `(param1, param2)` pair written to the firmware.
    pub fn params(&self) -> (u32, u32) {
        match *self {
            Self::KeyPress(key) | Self::KeyToggle(key) | Self::StickyKey(key) => {
                (key.to_hid_usage(), 0)
            }
            Self::LayerTap { layer_id, tap } => (layer_id, tap.to_hid_usage()),
            Self::ModTap { hold, tap } => (hold.to_hid_usage(), tap.to_hid_usage()),
            Self::StickyLayer { layer_id }
            | Self::MomentaryLayer { layer_id }
            | Self::ToggleLayer { layer_id }
            | Self::ToLayer { layer_id } => (layer_id, 0),
            Self::Bluetooth { command, value }
            | Self::Backlight { command, value }
            | Self::Underglow { command, value } => (command, value),
            Self::ExternalPower { value }
            | Self::OutputSelection { value }
            | Self::MouseKeyPress { value }
            | Self::MouseMove { value }
            | Self::MouseScroll { value } => (value, 0),
            Self::CapsWord
            | Self::KeyRepeat
            | Self::Reset
            | Self::Bootloader
            | Self::SoftOff
            | Self::StudioUnlock
            | Self::GraveEscape
            | Self::Transparent
            | Self::None => (0, 0),
            Self::Unknown { param1, param2, .. } => (param1, param2),
        }
    }

    /// Decodes a raw binding whose behavior id resolved to `role`.
    ///
    /// Parameters the typed variant has no room for fall back to
    /// [`Behavior::Unknown`] so a read-modify-write never drops data.
    pub fn from_role(role: BehaviorRole, behavior_id: i32, param1: u32, param2: u32) -> Self {
        let usage = HidUsage::from_encoded;
        let decoded = match role {
            BehaviorRole::KeyPress => Self::KeyPress(usage(param1)),
            BehaviorRole::KeyToggle => Self::KeyToggle(usage(param1)),
            BehaviorRole::StickyKey => Self::StickyKey(usage(param1)),
            BehaviorRole::LayerTap => Self::LayerTap {
                layer_id: param1,
                tap: usage(param2),
            },
            BehaviorRole::ModTap => Self::ModTap {
                hold: usage(param1),
                tap: usage(param2),
            },
            BehaviorRole::StickyLayer => Self::StickyLayer { layer_id: param1 },
            BehaviorRole::MomentaryLayer => Self::MomentaryLayer { layer_id: param1 },
            BehaviorRole::ToggleLayer => Self::ToggleLayer { layer_id: param1 },
            BehaviorRole::ToLayer => Self::ToLayer { layer_id: param1 },
            BehaviorRole::Bluetooth => Self::Bluetooth {
                command: param1,
                value: param2,
            },
            BehaviorRole::ExternalPower => Self::ExternalPower { value: param1 },
            BehaviorRole::OutputSelection => Self::OutputSelection { value: param1 },
            BehaviorRole::Backlight => Self::Backlight {
                command: param1,
                value: param2,
            },
            BehaviorRole::Underglow => Self::Underglow {
                command: param1,
                value: param2,
            },
            BehaviorRole::MouseKeyPress => Self::MouseKeyPress { value: param1 },
            BehaviorRole::MouseMove => Self::MouseMove { value: param1 },
            BehaviorRole::MouseScroll => Self::MouseScroll { value: param1 },
            BehaviorRole::CapsWord => Self::CapsWord,
            BehaviorRole::KeyRepeat => Self::KeyRepeat,
            BehaviorRole::Reset => Self::Reset,
            BehaviorRole::Bootloader => Self::Bootloader,
            BehaviorRole::SoftOff => Self::SoftOff,
            BehaviorRole::StudioUnlock => Self::StudioUnlock,
            BehaviorRole::GraveEscape => Self::GraveEscape,
            BehaviorRole::Transparent => Self::Transparent,
            BehaviorRole::None => Self::None,
        };

        // HidUsage normalizes page 0 to the keyboard page, which is the same key.
        let normalized = |raw: u32| usage(raw).to_hid_usage();
        let expected = match decoded {
            Self::KeyPress(_) | Self::KeyToggle(_) | Self::StickyKey(_) => {
                (normalized(param1), param2)
            }
            Self::LayerTap { .. } => (param1, normalized(param2)),
            Self::ModTap { .. } => (normalized(param1), normalized(param2)),
            _ => (param1, param2),
        };
        if decoded.params() != expected {
            log::debug!(
                "binding {behavior_id} ({}) carries extra parameters ({param1:#x}, {param2:#x})",
                role.display_name()
            );
            return Self::Unknown {
                behavior_id,
                param1,
                param2,
            };
        }

        decoded
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyPress(key) | Self::KeyToggle(key) | Self::StickyKey(key) => {
                write!(f, "{}({key})", self.kind())
            }
            Self::LayerTap { layer_id, tap } => write!(f, "layer_tap({layer_id}, {tap})"),
            Self::ModTap { hold, tap } => write!(f, "mod_tap({hold}, {tap})"),
            Self::StickyLayer { layer_id }
            | Self::MomentaryLayer { layer_id }
            | Self::ToggleLayer { layer_id }
            | Self::ToLayer { layer_id } => write!(f, "{}({layer_id})", self.kind()),
            Self::Unknown {
                behavior_id,
                param1,
                param2,
            } => write!(f, "unknown({behavior_id}, {param1:#x}, {param2:#x})"),
            _ => match self.params() {
                (0, 0) => f.write_str(self.kind()),
                (p1, 0) => write!(f, "{}({p1})", self.kind()),
                (p1, p2) => write!(f, "{}({p1}, {p2})", self.kind()),
            },
        }
    }
}

pub fn role_from_display_name(name: &str) -> Option<BehaviorRole> {
    let n = normalize_behavior_name(name);
    BehaviorRole::iter()
        .find(|role| normalize_behavior_name(role.display_name()) == n)
        .or_else(|| {
            ROLE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == n)
                .map(|&(_, role)| role)
        })
}

fn normalize_behavior_name(name: &str) -> String {
    let mut out = String::new();
    let mut in_space = true;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            in_space = false;
        } else if !in_space {
            out.push(' ');
            in_space = true;
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }

    out
}
