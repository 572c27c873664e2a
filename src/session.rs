//! Capability seam between the demo driver and a live device session.
//!
//! [`StudioSession`] is the set of session operations the driver needs and
//! [`Connector`] is the factory that opens one. [`StudioClient`] and
//! [`DeviceConnector`] are the hardware-backed implementations.

use std::io::{Read, Write};

use prost::Message;

use crate::binding::Behavior;
use crate::client::{ClientError, StudioClient};
use crate::proto::zmk;
use crate::transport::ConnectError;

pub trait StudioSession {
    fn get_lock_state(&mut self) -> Result<zmk::core::LockState, ClientError>;

    fn list_all_behaviors(&mut self) -> Result<Vec<u32>, ClientError>;

    /// Protobuf encoding of the device's `GetBehaviorDetailsResponse`.
    fn get_behavior_details_bytes(&mut self, behavior_id: u32) -> Result<Vec<u8>, ClientError>;

    /// Protobuf encoding of the device's working `Keymap`.
    fn get_keymap_bytes(&mut self) -> Result<Vec<u8>, ClientError>;

    /// Protobuf encoding of the device's `PhysicalLayouts`.
    fn get_physical_layouts_bytes(&mut self) -> Result<Vec<u8>, ClientError>;

    fn get_key_at(&mut self, layer_id: u32, key_position: i32) -> Result<Behavior, ClientError>;

    fn set_key_at(
        &mut self,
        layer_id: u32,
        key_position: i32,
        behavior: Behavior,
    ) -> Result<(), ClientError>;

    fn check_unsaved_changes(&mut self) -> Result<bool, ClientError>;

    /// Returns `true` if there was anything to discard.
    fn discard_changes(&mut self) -> Result<bool, ClientError>;
}

impl<T: Read + Write> StudioSession for StudioClient<T> {
    fn get_lock_state(&mut self) -> Result<zmk::core::LockState, ClientError> {
        StudioClient::get_lock_state(self)
    }

    fn list_all_behaviors(&mut self) -> Result<Vec<u32>, ClientError> {
        StudioClient::list_all_behaviors(self)
    }

    fn get_behavior_details_bytes(&mut self, behavior_id: u32) -> Result<Vec<u8>, ClientError> {
        Ok(self.get_behavior_details(behavior_id)?.encode_to_vec())
    }

    fn get_keymap_bytes(&mut self) -> Result<Vec<u8>, ClientError> {
        Ok(self.get_keymap()?.encode_to_vec())
    }

    fn get_physical_layouts_bytes(&mut self) -> Result<Vec<u8>, ClientError> {
        Ok(self.get_physical_layouts()?.encode_to_vec())
    }

    fn get_key_at(&mut self, layer_id: u32, key_position: i32) -> Result<Behavior, ClientError> {
        StudioClient::get_key_at(self, layer_id, key_position)
    }

    fn set_key_at(
        &mut self,
        layer_id: u32,
        key_position: i32,
        behavior: Behavior,
    ) -> Result<(), ClientError> {
        StudioClient::set_key_at(self, layer_id, key_position, behavior)
    }

    fn check_unsaved_changes(&mut self) -> Result<bool, ClientError> {
        StudioClient::check_unsaved_changes(self)
    }

    fn discard_changes(&mut self) -> Result<bool, ClientError> {
        StudioClient::discard_changes(self)
    }
}

/// Opens sessions over the supported transports.
pub trait Connector {
    type Session: StudioSession;

    fn open_serial(&self, port: &str) -> Result<Self::Session, ConnectError>;

    fn connect_ble(&self) -> Result<Self::Session, ConnectError>;
}

/// Any blocking duplex byte stream a [`StudioClient`] can run over.
pub trait Transport: Read + Write {}

impl<T: Read + Write> Transport for T {}

/// Session type produced by [`DeviceConnector`].
pub type DeviceSession = StudioClient<Box<dyn Transport>>;

/// [`Connector`] backed by real serial ports and BLE adapters.
#[derive(Debug, Clone, Default)]
pub struct DeviceConnector {
    #[cfg(feature = "serial")]
    pub serial: crate::transport::serial::SerialOptions,
    #[cfg(feature = "ble")]
    pub ble: crate::transport::ble::BleConnectOptions,
}

impl Connector for DeviceConnector {
    type Session = DeviceSession;

    #[cfg(feature = "serial")]
    fn open_serial(&self, port: &str) -> Result<Self::Session, ConnectError> {
        use crate::transport::serial::SerialTransport;

        let transport: Box<dyn Transport> =
            Box::new(SerialTransport::open_with_options(port, self.serial)?);
        log::info!("connected over serial: {port}");
        Ok(StudioClient::new(transport))
    }

    #[cfg(not(feature = "serial"))]
    fn open_serial(&self, _port: &str) -> Result<Self::Session, ConnectError> {
        Err(ConnectError::Unsupported("serial"))
    }

    #[cfg(feature = "ble")]
    fn connect_ble(&self) -> Result<Self::Session, ConnectError> {
        use crate::transport::ble::BleTransport;

        let transport: Box<dyn Transport> =
            Box::new(BleTransport::connect_with_options(self.ble.clone())?);
        log::info!("connected over BLE");
        Ok(StudioClient::new(transport))
    }

    #[cfg(not(feature = "ble"))]
    fn connect_ble(&self) -> Result<Self::Session, ConnectError> {
        Err(ConnectError::Unsupported("ble"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SimDevice;

    #[test]
    fn byte_views_decode_back_to_messages() {
        let mut session = StudioClient::new(SimDevice::new());

        let keymap = zmk::keymap::Keymap::decode(session.get_keymap_bytes().unwrap().as_slice())
            .unwrap();
        assert_eq!(keymap.layers[0].name, "Base");

        let layouts = zmk::keymap::PhysicalLayouts::decode(
            session.get_physical_layouts_bytes().unwrap().as_slice(),
        )
        .unwrap();
        assert_eq!(layouts.layouts[0].keys.len(), 4);

        let details = zmk::behaviors::GetBehaviorDetailsResponse::decode(
            session.get_behavior_details_bytes(3).unwrap().as_slice(),
        )
        .unwrap();
        assert_eq!(details.display_name, "Momentary Layer");
    }

    #[test]
    fn boxed_transport_runs_a_session() {
        let transport: Box<dyn Transport> = Box::new(SimDevice::new());
        let mut session: DeviceSession = StudioClient::new(transport);
        assert_eq!(StudioSession::list_all_behaviors(&mut session).unwrap(), vec![1, 2, 3, 4]);
    }

    #[cfg(not(feature = "ble"))]
    #[test]
    fn disabled_transport_is_unsupported() {
        let err = match DeviceConnector::default().connect_ble() {
            Ok(_) => panic!("ble is compiled out"),
            Err(err) => err,
        };
        assert!(matches!(err, ConnectError::Unsupported("ble")));
        assert!(err.to_string().contains("--features ble"));
    }
}
