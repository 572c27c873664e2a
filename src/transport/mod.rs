#[cfg(feature = "ble")]
pub mod ble;
#[cfg(feature = "serial")]
pub mod serial;

/// Failure to establish a transport to a device.
#[derive(Debug)]
pub enum ConnectError {
    #[cfg(feature = "serial")]
    Serial(serial::SerialTransportError),
    #[cfg(feature = "ble")]
    Ble(ble::BleTransportError),
    /// The transport was compiled out; carries the cargo feature name.
    Unsupported(&'static str),
}

impl std::fmt::Display for ConnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "serial")]
            Self::Serial(err) => write!(f, "Serial connection failed: {err}"),
            #[cfg(feature = "ble")]
            Self::Ble(err) => write!(f, "BLE connection failed: {err}"),
            Self::Unsupported(feature) => write!(
                f,
                "Transport not available in this build; rebuild with `--features {feature}`"
            ),
        }
    }
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serial")]
            Self::Serial(err) => Some(err),
            #[cfg(feature = "ble")]
            Self::Ble(err) => Some(err),
            Self::Unsupported(_) => None,
        }
    }
}

#[cfg(feature = "serial")]
impl From<serial::SerialTransportError> for ConnectError {
    fn from(value: serial::SerialTransportError) -> Self {
        Self::Serial(value)
    }
}

#[cfg(feature = "ble")]
impl From<ble::BleTransportError> for ConnectError {
    fn from(value: ble::BleTransportError) -> Self {
        Self::Ble(value)
    }
}
