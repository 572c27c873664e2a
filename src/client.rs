//! Blocking RPC client for ZMK Studio devices.

use std::collections::{HashMap, VecDeque};
use std::io::{Read, Write};

use crate::binding::{Behavior, BehaviorRole, role_from_display_name};
use crate::framing::FrameDecoder;
use crate::proto::zmk;
use crate::proto::zmk::studio;
use crate::protocol::{ProtocolError, decode_responses, encode_request};

#[derive(Debug)]
pub enum ClientError {
    Io(std::io::Error),
    Protocol(ProtocolError),
    Meta(zmk::meta::ErrorConditions),
    NoResponse,
    MissingResponseType,
    MissingSubsystem,
    UnexpectedSubsystem(&'static str),
    UnexpectedRequestId { expected: u32, actual: u32 },
    UnknownEnumValue { field: &'static str, value: i32 },
    SetLayerBindingFailed(zmk::keymap::SetLayerBindingResponse),
    SaveChangesFailed(zmk::keymap::SaveChangesErrorCode),
    SetActivePhysicalLayoutFailed(zmk::keymap::SetActivePhysicalLayoutErrorCode),
    MoveLayerFailed(zmk::keymap::MoveLayerErrorCode),
    AddLayerFailed(zmk::keymap::AddLayerErrorCode),
    RemoveLayerFailed(zmk::keymap::RemoveLayerErrorCode),
    RestoreLayerFailed(zmk::keymap::RestoreLayerErrorCode),
    SetLayerPropsFailed(zmk::keymap::SetLayerPropsResponse),
    InvalidLayerOrPosition { layer_id: u32, key_position: i32 },
    MissingBehaviorRole(&'static str),
    BehaviorIdOutOfRange { behavior_id: u32 },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Protocol(err) => write!(f, "Protocol error: {err}"),
            Self::Meta(cond) => write!(f, "Device returned meta error: {}", cond.as_str_name()),
            Self::NoResponse => write!(f, "Device returned no response"),
            Self::MissingResponseType => write!(f, "Response was missing type"),
            Self::MissingSubsystem => write!(f, "Request response was missing subsystem"),
            Self::UnexpectedSubsystem(expected) => {
                write!(f, "Unexpected subsystem in response; expected {expected}")
            }
            Self::UnexpectedRequestId { expected, actual } => write!(
                f,
                "Unexpected request ID in response: expected {expected}, got {actual}"
            ),
            Self::UnknownEnumValue { field, value } => {
                write!(f, "Unknown enum value for {field}: {value}")
            }
            Self::SetLayerBindingFailed(code) => {
                write!(f, "Set layer binding failed: {}", code.as_str_name())
            }
            Self::SaveChangesFailed(code) => {
                write!(f, "Save changes failed: {}", code.as_str_name())
            }
            Self::SetActivePhysicalLayoutFailed(code) => {
                write!(f, "Set active physical layout failed: {}", code.as_str_name())
            }
            Self::MoveLayerFailed(code) => write!(f, "Move layer failed: {}", code.as_str_name()),
            Self::AddLayerFailed(code) => write!(f, "Add layer failed: {}", code.as_str_name()),
            Self::RemoveLayerFailed(code) => {
                write!(f, "Remove layer failed: {}", code.as_str_name())
            }
            Self::RestoreLayerFailed(code) => {
                write!(f, "Restore layer failed: {}", code.as_str_name())
            }
            Self::SetLayerPropsFailed(code) => {
                write!(f, "Set layer properties failed: {}", code.as_str_name())
            }
            Self::InvalidLayerOrPosition {
                layer_id,
                key_position,
            } => write!(
                f,
                "Invalid layer/position: layer_id={layer_id}, key_position={key_position}"
            ),
            Self::MissingBehaviorRole(role) => {
                write!(f, "Missing required behavior role in firmware: {role}")
            }
            Self::BehaviorIdOutOfRange { behavior_id } => {
                write!(f, "Behavior ID is out of i32 range: {behavior_id}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Protocol(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ProtocolError> for ClientError {
    fn from(value: ProtocolError) -> Self {
        Self::Protocol(value)
    }
}

/// Converts a raw protobuf enum value, naming the field on failure.
fn known_enum<E: TryFrom<i32>>(field: &'static str, value: i32) -> Result<E, ClientError> {
    E::try_from(value).map_err(|_| ClientError::UnknownEnumValue { field, value })
}

/// Resolves a firmware `ok | err(code)` reply, wrapping a known code with `failed`.
fn coded_result<T, E: TryFrom<i32>>(
    field: &'static str,
    result: Option<Result<T, i32>>,
    failed: impl FnOnce(E) -> ClientError,
) -> Result<T, ClientError> {
    match result {
        Some(Ok(value)) => Ok(value),
        Some(Err(raw)) => Err(failed(known_enum(field, raw)?)),
        None => Err(ClientError::MissingResponseType),
    }
}

/// Behavior ids discovered on the device, keyed both ways.
#[derive(Debug, Default)]
struct BehaviorCatalog {
    role_by_id: HashMap<u32, BehaviorRole>,
    id_by_role: HashMap<BehaviorRole, u32>,
    loaded: bool,
}

impl BehaviorCatalog {
    fn insert(&mut self, id: u32, role: BehaviorRole) {
        self.role_by_id.insert(id, role);
        // Firmware may expose duplicates (e.g. two "Key Press" nodes); the first wins.
        self.id_by_role.entry(role).or_insert(id);
    }
}

/// Client for one ZMK Studio session over any blocking byte transport.
///
/// Each call writes one framed request and blocks until the matching
/// response arrives. Notifications that arrive in between are queued and
/// can be drained with [`StudioClient::next_notification`].
pub struct StudioClient<T> {
    io: T,
    next_request_id: u32,
    decoder: FrameDecoder,
    read_buffer: Vec<u8>,
    responses: VecDeque<studio::Response>,
    notifications: VecDeque<studio::Notification>,
    catalog: BehaviorCatalog,
}

impl<T: Read + Write> StudioClient<T> {
    pub fn new(io: T) -> Self {
        Self::with_read_buffer(io, 256)
    }

    pub fn with_read_buffer(io: T, read_buffer_size: usize) -> Self {
        Self {
            io,
            next_request_id: 0,
            decoder: FrameDecoder::new(),
            read_buffer: vec![0; read_buffer_size.max(1)],
            responses: VecDeque::new(),
            notifications: VecDeque::new(),
            catalog: BehaviorCatalog::default(),
        }
    }

    pub fn into_inner(self) -> T {
        self.io
    }

    pub fn next_notification(&mut self) -> Option<studio::Notification> {
        self.notifications.pop_front()
    }

    /// Returns the next queued notification, reading from the transport until one arrives.
    pub fn read_notification_blocking(&mut self) -> Result<studio::Notification, ClientError> {
        loop {
            if let Some(notification) = self.next_notification() {
                return Ok(notification);
            }

            match self.read_next_response()?.r#type {
                Some(studio::response::Type::Notification(notification)) => return Ok(notification),
                Some(studio::response::Type::RequestResponse(rr)) => {
                    log::warn!("dropping unsolicited response {}", rr.request_id)
                }
                None => return Err(ClientError::MissingResponseType),
            }
        }
    }

    pub fn get_device_info(&mut self) -> Result<zmk::core::GetDeviceInfoResponse, ClientError> {
        match self.call_core(zmk::core::request::RequestType::GetDeviceInfo(true))? {
            zmk::core::response::ResponseType::GetDeviceInfo(info) => Ok(info),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    pub fn get_lock_state(&mut self) -> Result<zmk::core::LockState, ClientError> {
        match self.call_core(zmk::core::request::RequestType::GetLockState(true))? {
            zmk::core::response::ResponseType::GetLockState(state) => {
                known_enum("core.get_lock_state", state)
            }
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Locks the device again. Keymap RPCs fail with `UNLOCK_REQUIRED` afterwards.
    pub fn lock(&mut self) -> Result<(), ClientError> {
        // Firmware acknowledges with a meta `no_response` and a lock state notification.
        match self.call_core(zmk::core::request::RequestType::Lock(true)) {
            Ok(_) | Err(ClientError::NoResponse) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Resets all persisted settings on the device. Returns the firmware's success flag.
    pub fn reset_settings(&mut self) -> Result<bool, ClientError> {
        match self.call_core(zmk::core::request::RequestType::ResetSettings(true))? {
            zmk::core::response::ResponseType::ResetSettings(ok) => Ok(ok),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    pub fn list_all_behaviors(&mut self) -> Result<Vec<u32>, ClientError> {
        match self.call_behaviors(zmk::behaviors::request::RequestType::ListAllBehaviors(true))? {
            zmk::behaviors::response::ResponseType::ListAllBehaviors(items) => Ok(items.behaviors),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    pub fn get_behavior_details(
        &mut self,
        behavior_id: u32,
    ) -> Result<zmk::behaviors::GetBehaviorDetailsResponse, ClientError> {
        let request = zmk::behaviors::GetBehaviorDetailsRequest { behavior_id };
        match self.call_behaviors(
            zmk::behaviors::request::RequestType::GetBehaviorDetails(request),
        )? {
            zmk::behaviors::response::ResponseType::GetBehaviorDetails(details) => Ok(details),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    pub fn get_keymap(&mut self) -> Result<zmk::keymap::Keymap, ClientError> {
        match self.call_keymap(zmk::keymap::request::RequestType::GetKeymap(true))? {
            zmk::keymap::response::ResponseType::GetKeymap(keymap) => Ok(keymap),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    pub fn get_physical_layouts(&mut self) -> Result<zmk::keymap::PhysicalLayouts, ClientError> {
        match self.call_keymap(zmk::keymap::request::RequestType::GetPhysicalLayouts(true))? {
            zmk::keymap::response::ResponseType::GetPhysicalLayouts(layouts) => Ok(layouts),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    pub fn set_layer_binding(
        &mut self,
        layer_id: u32,
        key_position: i32,
        binding: zmk::keymap::BehaviorBinding,
    ) -> Result<(), ClientError> {
        let request = zmk::keymap::SetLayerBindingRequest {
            layer_id,
            key_position,
            binding: Some(binding),
        };

        match self.call_keymap(zmk::keymap::request::RequestType::SetLayerBinding(request))? {
            zmk::keymap::response::ResponseType::SetLayerBinding(raw) => {
                let code: zmk::keymap::SetLayerBindingResponse =
                    known_enum("keymap.set_layer_binding", raw)?;
                if code == zmk::keymap::SetLayerBindingResponse::SetLayerBindingRespOk {
                    Ok(())
                } else {
                    Err(ClientError::SetLayerBindingFailed(code))
                }
            }
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Typed keymap API: read a behavior from a specific layer/key position.
    pub fn get_key_at(
        &mut self,
        layer_id: u32,
        key_position: i32,
    ) -> Result<Behavior, ClientError> {
        self.ensure_behavior_catalog()?;

        let keymap = self.get_keymap()?;
        let binding = binding_at(&keymap, layer_id, key_position).ok_or(
            ClientError::InvalidLayerOrPosition {
                layer_id,
                key_position,
            },
        )?;

        let role = u32::try_from(binding.behavior_id)
            .ok()
            .and_then(|id| self.catalog.role_by_id.get(&id).copied());
        let behavior = match role {
            Some(role) => {
                Behavior::from_role(role, binding.behavior_id, binding.param1, binding.param2)
            }
            None => Behavior::Unknown {
                behavior_id: binding.behavior_id,
                param1: binding.param1,
                param2: binding.param2,
            },
        };

        Ok(behavior)
    }

    /// Typed keymap API: set a behavior at a specific layer/key position.
    ///
    /// This updates the device's working keymap state only.
    /// Persist with [`StudioClient::save_changes`] or revert with [`StudioClient::discard_changes`].
    pub fn set_key_at(
        &mut self,
        layer_id: u32,
        key_position: i32,
        behavior: Behavior,
    ) -> Result<(), ClientError> {
        let behavior_id = match behavior.binding_target() {
            Ok(role) => {
                self.ensure_behavior_catalog()?;
                self.behavior_id_for(role)?
            }
            Err(raw_behavior_id) => raw_behavior_id,
        };
        let (param1, param2) = behavior.params();

        log::debug!("set_key_at layer={layer_id} position={key_position} -> {behavior}");
        self.set_layer_binding(
            layer_id,
            key_position,
            zmk::keymap::BehaviorBinding {
                behavior_id,
                param1,
                param2,
            },
        )
    }

    pub fn check_unsaved_changes(&mut self) -> Result<bool, ClientError> {
        match self.call_keymap(zmk::keymap::request::RequestType::CheckUnsavedChanges(true))? {
            zmk::keymap::response::ResponseType::CheckUnsavedChanges(has_changes) => {
                Ok(has_changes)
            }
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Saves pending keymap mutations made by methods like [`StudioClient::set_key_at`].
    ///
    /// After this succeeds, changes are persisted on the device.
    pub fn save_changes(&mut self) -> Result<(), ClientError> {
        use zmk::keymap::save_changes_response::Result as SaveResult;

        match self.call_keymap(zmk::keymap::request::RequestType::SaveChanges(true))? {
            zmk::keymap::response::ResponseType::SaveChanges(save) => coded_result(
                "keymap.save_changes",
                save.result.map(|r| match r {
                    SaveResult::Ok(_) => Ok(()),
                    SaveResult::Err(raw) => Err(raw),
                }),
                ClientError::SaveChangesFailed,
            ),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Discards pending keymap mutations made since the last save.
    ///
    /// Returns `true` if there were pending changes and they were discarded.
    pub fn discard_changes(&mut self) -> Result<bool, ClientError> {
        match self.call_keymap(zmk::keymap::request::RequestType::DiscardChanges(true))? {
            zmk::keymap::response::ResponseType::DiscardChanges(discarded) => Ok(discarded),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Switches the physical layout and returns the keymap as remapped for it.
    pub fn set_active_physical_layout(
        &mut self,
        index: u32,
    ) -> Result<zmk::keymap::Keymap, ClientError> {
        use zmk::keymap::set_active_physical_layout_response::Result as LayoutResult;

        match self.call_keymap(zmk::keymap::request::RequestType::SetActivePhysicalLayout(index))? {
            zmk::keymap::response::ResponseType::SetActivePhysicalLayout(resp) => coded_result(
                "keymap.set_active_physical_layout",
                resp.result.map(|r| match r {
                    LayoutResult::Ok(keymap) => Ok(keymap),
                    LayoutResult::Err(raw) => Err(raw),
                }),
                ClientError::SetActivePhysicalLayoutFailed,
            ),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Moves the layer at `start_index` to `dest_index`; returns the reordered keymap.
    pub fn move_layer(
        &mut self,
        start_index: u32,
        dest_index: u32,
    ) -> Result<zmk::keymap::Keymap, ClientError> {
        use zmk::keymap::move_layer_response::Result as MoveResult;

        let request = zmk::keymap::MoveLayerRequest {
            start_index,
            dest_index,
        };
        match self.call_keymap(zmk::keymap::request::RequestType::MoveLayer(request))? {
            zmk::keymap::response::ResponseType::MoveLayer(resp) => coded_result(
                "keymap.move_layer",
                resp.result.map(|r| match r {
                    MoveResult::Ok(keymap) => Ok(keymap),
                    MoveResult::Err(raw) => Err(raw),
                }),
                ClientError::MoveLayerFailed,
            ),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Appends a layer; fails with `ADD_LAYER_ERR_NO_SPACE` once all layers are in use.
    pub fn add_layer(&mut self) -> Result<zmk::keymap::AddLayerResponseDetails, ClientError> {
        use zmk::keymap::add_layer_response::Result as AddResult;

        let request = zmk::keymap::AddLayerRequest {};
        match self.call_keymap(zmk::keymap::request::RequestType::AddLayer(request))? {
            zmk::keymap::response::ResponseType::AddLayer(resp) => coded_result(
                "keymap.add_layer",
                resp.result.map(|r| match r {
                    AddResult::Ok(details) => Ok(details),
                    AddResult::Err(raw) => Err(raw),
                }),
                ClientError::AddLayerFailed,
            ),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Removes the layer at `layer_index`. It can be brought back with
    /// [`StudioClient::restore_layer`] until changes are saved or discarded.
    pub fn remove_layer(&mut self, layer_index: u32) -> Result<(), ClientError> {
        use zmk::keymap::remove_layer_response::Result as RemoveResult;

        let request = zmk::keymap::RemoveLayerRequest { layer_index };
        match self.call_keymap(zmk::keymap::request::RequestType::RemoveLayer(request))? {
            zmk::keymap::response::ResponseType::RemoveLayer(resp) => coded_result(
                "keymap.remove_layer",
                resp.result.map(|r| match r {
                    RemoveResult::Ok(_) => Ok(()),
                    RemoveResult::Err(raw) => Err(raw),
                }),
                ClientError::RemoveLayerFailed,
            ),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    pub fn restore_layer(
        &mut self,
        layer_id: u32,
        at_index: u32,
    ) -> Result<zmk::keymap::Layer, ClientError> {
        use zmk::keymap::restore_layer_response::Result as RestoreResult;

        let request = zmk::keymap::RestoreLayerRequest { layer_id, at_index };
        match self.call_keymap(zmk::keymap::request::RequestType::RestoreLayer(request))? {
            zmk::keymap::response::ResponseType::RestoreLayer(resp) => coded_result(
                "keymap.restore_layer",
                resp.result.map(|r| match r {
                    RestoreResult::Ok(layer) => Ok(layer),
                    RestoreResult::Err(raw) => Err(raw),
                }),
                ClientError::RestoreLayerFailed,
            ),
            _ => Err(ClientError::MissingResponseType),
        }
    }

    /// Renames a layer.
    pub fn set_layer_props(
        &mut self,
        layer_id: u32,
        name: impl Into<String>,
    ) -> Result<(), ClientError> {
        let request = zmk::keymap::SetLayerPropsRequest {
            layer_id,
            name: name.into(),
        };
        match self.call_keymap(zmk::keymap::request::RequestType::SetLayerProps(request))? {
            zmk::keymap::response::ResponseType::SetLayerProps(raw) => {
                let code: zmk::keymap::SetLayerPropsResponse =
                    known_enum("keymap.set_layer_props", raw)?;
                if code == zmk::keymap::SetLayerPropsResponse::SetLayerPropsRespOk {
                    Ok(())
                } else {
                    Err(ClientError::SetLayerPropsFailed(code))
                }
            }
            _ => Err(ClientError::MissingResponseType),
        }
    }

    fn behavior_id_for(&self, role: BehaviorRole) -> Result<i32, ClientError> {
        let behavior_id = self
            .catalog
            .id_by_role
            .get(&role)
            .copied()
            .ok_or(ClientError::MissingBehaviorRole(role.display_name()))?;
        i32::try_from(behavior_id).map_err(|_| ClientError::BehaviorIdOutOfRange { behavior_id })
    }

    fn ensure_behavior_catalog(&mut self) -> Result<(), ClientError> {
        if self.catalog.loaded {
            return Ok(());
        }

        let ids = self.list_all_behaviors()?;
        log::debug!("building behavior catalog from {} behaviors", ids.len());
        for id in ids {
            let details = self.get_behavior_details(id)?;
            match role_from_display_name(&details.display_name) {
                Some(role) => self.catalog.insert(id, role),
                None => log::debug!("behavior {id} ({:?}) has no typed role", details.display_name),
            }
        }
        self.catalog.loaded = true;

        Ok(())
    }

    fn call_core(
        &mut self,
        request_type: zmk::core::request::RequestType,
    ) -> Result<zmk::core::response::ResponseType, ClientError> {
        let request = zmk::core::Request {
            request_type: Some(request_type),
        };
        match self.call(studio::request::Subsystem::Core(request))? {
            studio::request_response::Subsystem::Core(resp) => {
                resp.response_type.ok_or(ClientError::MissingResponseType)
            }
            _ => Err(ClientError::UnexpectedSubsystem("core")),
        }
    }

    fn call_behaviors(
        &mut self,
        request_type: zmk::behaviors::request::RequestType,
    ) -> Result<zmk::behaviors::response::ResponseType, ClientError> {
        let request = zmk::behaviors::Request {
            request_type: Some(request_type),
        };
        match self.call(studio::request::Subsystem::Behaviors(request))? {
            studio::request_response::Subsystem::Behaviors(resp) => {
                resp.response_type.ok_or(ClientError::MissingResponseType)
            }
            _ => Err(ClientError::UnexpectedSubsystem("behaviors")),
        }
    }

    fn call_keymap(
        &mut self,
        request_type: zmk::keymap::request::RequestType,
    ) -> Result<zmk::keymap::response::ResponseType, ClientError> {
        let request = zmk::keymap::Request {
            request_type: Some(request_type),
        };
        match self.call(studio::request::Subsystem::Keymap(request))? {
            studio::request_response::Subsystem::Keymap(resp) => {
                resp.response_type.ok_or(ClientError::MissingResponseType)
            }
            _ => Err(ClientError::UnexpectedSubsystem("keymap")),
        }
    }

    /// Sends one request and returns the subsystem payload of its response.
    fn call(
        &mut self,
        subsystem: studio::request::Subsystem,
    ) -> Result<studio::request_response::Subsystem, ClientError> {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        let request = studio::Request {
            request_id,
            subsystem: Some(subsystem),
        };
        let bytes = encode_request(&request);
        log::debug!("request {request_id}: {} bytes", bytes.len());
        self.io.write_all(&bytes)?;
        self.io.flush()?;

        loop {
            let rr = match self.read_next_response()?.r#type {
                Some(studio::response::Type::Notification(notification)) => {
                    log::debug!("queued notification while awaiting request {request_id}");
                    self.notifications.push_back(notification);
                    continue;
                }
                Some(studio::response::Type::RequestResponse(rr)) => rr,
                None => return Err(ClientError::MissingResponseType),
            };

            if rr.request_id != request_id {
                return Err(ClientError::UnexpectedRequestId {
                    expected: request_id,
                    actual: rr.request_id,
                });
            }
            log::debug!("response {request_id} received");

            return match rr.subsystem {
                Some(studio::request_response::Subsystem::Meta(meta)) => {
                    Err(meta_error(meta.response_type))
                }
                Some(subsystem) => Ok(subsystem),
                None => Err(ClientError::MissingSubsystem),
            };
        }
    }

    fn read_next_response(&mut self) -> Result<studio::Response, ClientError> {
        loop {
            if let Some(response) = self.responses.pop_front() {
                return Ok(response);
            }

            let read = self.io.read(&mut self.read_buffer)?;
            if read == 0 {
                if self.decoder.is_mid_frame() {
                    log::warn!("transport closed in the middle of a frame");
                }
                return Err(ClientError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "Transport reached EOF",
                )));
            }

            log::trace!("read {read} bytes from transport");
            decode_responses(
                &mut self.decoder,
                &self.read_buffer[..read],
                &mut self.responses,
            )?;
        }
    }
}

fn meta_error(response_type: Option<zmk::meta::response::ResponseType>) -> ClientError {
    match response_type {
        Some(zmk::meta::response::ResponseType::NoResponse(_)) => ClientError::NoResponse,
        Some(zmk::meta::response::ResponseType::SimpleError(raw)) => {
            match known_enum("meta.simple_error", raw) {
                Ok(cond) => ClientError::Meta(cond),
                Err(err) => err,
            }
        }
        None => ClientError::MissingResponseType,
    }
}

fn binding_at(
    keymap: &zmk::keymap::Keymap,
    layer_id: u32,
    key_position: i32,
) -> Option<zmk::keymap::BehaviorBinding> {
    let pos = usize::try_from(key_position).ok()?;
    let layer = keymap.layers.iter().find(|l| l.id == layer_id)?;
    layer.bindings.get(pos).copied()
}
