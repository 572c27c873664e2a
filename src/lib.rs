//! ZMK Studio client library and demo driver.
//!
//! The library surface is:
//! - [`StudioClient`] for RPC operations over any blocking `Read + Write` stream
//! - [`Behavior`] for typed key bindings, built from [`Keycode`] and [`HidUsage`]
//! - [`transport`] for BLE/serial I/O adapters
//! - [`StudioSession`] and [`Connector`], the seam the [`demo`] driver runs against
//!
//! [`proto`] exposes the raw protobuf message set for advanced use cases.

mod binding;
pub mod cli;
mod client;
pub mod demo;
mod framing;
mod hid_usage;
mod keycode;
/// Raw protobuf types used by the RPC protocol.
pub mod proto;
mod protocol;
mod session;
#[cfg(test)]
mod testing;
/// Transport adapters for connecting to a ZMK Studio-capable device.
pub mod transport;

/// Typed key binding value used by [`StudioClient::get_key_at`] and [`StudioClient::set_key_at`].
pub use binding::{Behavior, BehaviorRole};
/// Errors returned by high-level client operations.
pub use client::{ClientError, StudioClient};
pub use framing::FramingError;
pub use hid_usage::{
    HID_USAGE_CONSUMER, HID_USAGE_GENERIC_DESKTOP, HID_USAGE_KEYBOARD, HidUsage, MOD_LALT, MOD_LCTL, MOD_LGUI, MOD_LSFT,
    MOD_RALT, MOD_RCTL, MOD_RGUI, MOD_RSFT,
};
/// ZMK keycode enum used in typed behavior APIs.
pub use keycode::Keycode;
pub use protocol::ProtocolError;
pub use session::{Connector, DeviceConnector, DeviceSession, StudioSession, Transport};
pub use transport::ConnectError;
