//! Protobuf message set spoken by ZMK Studio firmware.
//!
//! Messages are declared with `prost` derives and mirror the `zmk.*`
//! packages field for field, so they stay wire compatible with the
//! firmware's `.proto` definitions.

/// Implements `as_str_name` for enumerations using their protobuf value names.
///
/// Must stay above `mod zmk` so the submodules see it in textual scope.
macro_rules! proto_str_name {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $name {
                /// Returns the protobuf value name of this variant.
                pub fn as_str_name(self) -> &'static str {
                    self.into()
                }
            }
        )+
    };
}

pub mod zmk;
