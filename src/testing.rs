//! In-memory ZMK Studio device for unit tests.

use std::collections::VecDeque;
use std::io::{Read, Write};

use crate::framing::FrameDecoder;
use crate::proto::zmk;
use crate::proto::zmk::studio;
use crate::protocol::{decode_requests, encode_response};

const KEY_PRESS: i32 = 1;
const TRANSPARENT: i32 = 2;
const MOMENTARY_LAYER: i32 = 3;
const MACRO: i32 = 4;

fn binding(behavior_id: i32, param1: u32, param2: u32) -> zmk::keymap::BehaviorBinding {
    zmk::keymap::BehaviorBinding {
        behavior_id,
        param1,
        param2,
    }
}

fn layer(id: u32, name: &str, bindings: Vec<zmk::keymap::BehaviorBinding>) -> zmk::keymap::Layer {
    zmk::keymap::Layer {
        id,
        name: name.to_string(),
        bindings,
    }
}

fn default_keymap() -> zmk::keymap::Keymap {
    zmk::keymap::Keymap {
        layers: vec![
            layer(
                0,
                "Base",
                vec![
                    binding(KEY_PRESS, 0x0007_0014, 0),
                    binding(KEY_PRESS, 0x0007_001A, 0),
                    binding(MOMENTARY_LAYER, 1, 0),
                    binding(42, 5, 6),
                ],
            ),
            layer(1, "Lower", vec![binding(TRANSPARENT, 0, 0); 4]),
        ],
        available_layers: 2,
        max_layer_name_length: 20,
    }
}

const LAYOUT_NAMES: [&str; 2] = ["Default", "Split"];

/// Answers framed requests synchronously on `write` and serves the framed
/// replies from `read`. An empty outbox reads as EOF.
pub struct SimDevice {
    decoder: FrameDecoder,
    outbox: VecDeque<u8>,
    request_ids: Vec<u32>,
    locked: bool,
    silent: bool,
    pending_notification: bool,
    corrupt_request_id: bool,
    trailing: Vec<studio::Notification>,
    active_layout: u32,
    removed: Vec<zmk::keymap::Layer>,
    saved: zmk::keymap::Keymap,
    working: zmk::keymap::Keymap,
}

impl SimDevice {
    pub fn new() -> Self {
        let keymap = default_keymap();
        Self {
            decoder: FrameDecoder::new(),
            outbox: VecDeque::new(),
            request_ids: Vec::new(),
            locked: false,
            silent: false,
            pending_notification: false,
            corrupt_request_id: false,
            trailing: Vec::new(),
            active_layout: 0,
            removed: Vec::new(),
            saved: keymap.clone(),
            working: keymap,
        }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn go_silent(&mut self) {
        self.silent = true;
    }

    pub fn notify_before_next_response(&mut self) {
        self.pending_notification = true;
    }

    pub fn corrupt_next_request_id(&mut self) {
        self.corrupt_request_id = true;
    }

    pub fn request_ids(&self) -> Vec<u32> {
        self.request_ids.clone()
    }

    fn respond(&mut self, request: studio::Request) {
        self.request_ids.push(request.request_id);
        if self.silent {
            return;
        }

        if std::mem::take(&mut self.pending_notification) {
            let notification = studio::Notification {
                subsystem: Some(studio::notification::Subsystem::Keymap(
                    zmk::keymap::Notification {
                        notification_type: Some(
                            zmk::keymap::notification::NotificationType::UnsavedChangesStatusChanged(
                                false,
                            ),
                        ),
                    },
                )),
            };
            self.send(studio::response::Type::Notification(notification));
        }

        let subsystem = match request.subsystem {
            Some(studio::request::Subsystem::Core(req)) => self.core(req),
            Some(studio::request::Subsystem::Behaviors(req)) => self.behaviors(req),
            Some(studio::request::Subsystem::Keymap(_)) if self.locked => {
                meta(zmk::meta::response::ResponseType::SimpleError(
                    zmk::meta::ErrorConditions::UnlockRequired as i32,
                ))
            }
            Some(studio::request::Subsystem::Keymap(req)) => self.keymap(req),
            None => meta(zmk::meta::response::ResponseType::SimpleError(
                zmk::meta::ErrorConditions::RpcNotFound as i32,
            )),
        };

        let request_id = if std::mem::take(&mut self.corrupt_request_id) {
            100
        } else {
            request.request_id
        };
        self.send(studio::response::Type::RequestResponse(
            studio::RequestResponse {
                request_id,
                subsystem: Some(subsystem),
            },
        ));
        for notification in std::mem::take(&mut self.trailing) {
            self.send(studio::response::Type::Notification(notification));
        }
    }

    fn send(&mut self, response_type: studio::response::Type) {
        let response = studio::Response {
            r#type: Some(response_type),
        };
        self.outbox.extend(encode_response(&response));
    }

    fn core(&mut self, req: zmk::core::Request) -> studio::request_response::Subsystem {
        use zmk::core::request::RequestType;
        use zmk::core::response::ResponseType;

        let response_type = match req.request_type {
            Some(RequestType::GetDeviceInfo(_)) => {
                ResponseType::GetDeviceInfo(zmk::core::GetDeviceInfoResponse {
                    name: "Sim Keyboard".to_string(),
                    serial_number: vec![0xDE, 0xAD],
                })
            }
            Some(RequestType::GetLockState(_)) => ResponseType::GetLockState(if self.locked {
                zmk::core::LockState::ZmkStudioCoreLockStateLocked as i32
            } else {
                zmk::core::LockState::ZmkStudioCoreLockStateUnlocked as i32
            }),
            Some(RequestType::Lock(_)) => {
                self.locked = true;
                self.trailing.push(studio::Notification {
                    subsystem: Some(studio::notification::Subsystem::Core(
                        zmk::core::Notification {
                            notification_type: Some(
                                zmk::core::notification::NotificationType::LockStateChanged(
                                    zmk::core::LockState::ZmkStudioCoreLockStateLocked as i32,
                                ),
                            ),
                        },
                    )),
                });
                return meta(zmk::meta::response::ResponseType::NoResponse(true));
            }
            Some(RequestType::ResetSettings(_)) => {
                self.saved = default_keymap();
                self.working = self.saved.clone();
                self.active_layout = 0;
                self.removed.clear();
                ResponseType::ResetSettings(true)
            }
            None => {
                return meta(zmk::meta::response::ResponseType::NoResponse(true));
            }
        };

        studio::request_response::Subsystem::Core(zmk::core::Response {
            response_type: Some(response_type),
        })
    }

    fn behaviors(&mut self, req: zmk::behaviors::Request) -> studio::request_response::Subsystem {
        use zmk::behaviors::request::RequestType;
        use zmk::behaviors::response::ResponseType;

        let response_type = match req.request_type {
            Some(RequestType::ListAllBehaviors(_)) => {
                ResponseType::ListAllBehaviors(zmk::behaviors::ListAllBehaviorsResponse {
                    behaviors: vec![1, 2, 3, 4],
                })
            }
            Some(RequestType::GetBehaviorDetails(details)) => {
                let display_name = match details.behavior_id as i32 {
                    KEY_PRESS => "Key Press",
                    TRANSPARENT => "Transparent",
                    MOMENTARY_LAYER => "Momentary Layer",
                    MACRO => "Macro",
                    _ => return meta(zmk::meta::response::ResponseType::SimpleError(0)),
                };
                ResponseType::GetBehaviorDetails(zmk::behaviors::GetBehaviorDetailsResponse {
                    id: details.behavior_id,
                    display_name: display_name.to_string(),
                    metadata: Vec::new(),
                })
            }
            None => return meta(zmk::meta::response::ResponseType::SimpleError(3)),
        };

        studio::request_response::Subsystem::Behaviors(zmk::behaviors::Response {
            response_type: Some(response_type),
        })
    }

    fn keymap(&mut self, req: zmk::keymap::Request) -> studio::request_response::Subsystem {
        use zmk::keymap::request::RequestType;
        use zmk::keymap::response::ResponseType;

        let response_type = match req.request_type {
            Some(RequestType::GetKeymap(_)) => ResponseType::GetKeymap(self.working.clone()),
            Some(RequestType::GetPhysicalLayouts(_)) => {
                ResponseType::GetPhysicalLayouts(zmk::keymap::PhysicalLayouts {
                    active_layout_index: self.active_layout,
                    layouts: LAYOUT_NAMES
                        .iter()
                        .map(|name| zmk::keymap::PhysicalLayout {
                            name: name.to_string(),
                            keys: vec![
                                zmk::keymap::KeyPhysicalAttrs {
                                    width: 100,
                                    height: 100,
                                    ..Default::default()
                                };
                                4
                            ],
                        })
                        .collect(),
                })
            }
            Some(RequestType::SetLayerBinding(set)) => {
                ResponseType::SetLayerBinding(self.set_binding(set) as i32)
            }
            Some(RequestType::CheckUnsavedChanges(_)) => {
                ResponseType::CheckUnsavedChanges(self.working != self.saved)
            }
            Some(RequestType::SaveChanges(_)) => {
                self.saved = self.working.clone();
                ResponseType::SaveChanges(zmk::keymap::SaveChangesResponse {
                    result: Some(zmk::keymap::save_changes_response::Result::Ok(true)),
                })
            }
            Some(RequestType::DiscardChanges(_)) => {
                let had_changes = self.working != self.saved;
                self.working = self.saved.clone();
                self.removed.clear();
                ResponseType::DiscardChanges(had_changes)
            }
            Some(RequestType::SetActivePhysicalLayout(index)) => {
                use zmk::keymap::set_active_physical_layout_response::Result;
                let result = if (index as usize) < LAYOUT_NAMES.len() {
                    self.active_layout = index;
                    Result::Ok(self.working.clone())
                } else {
                    Result::Err(
                        zmk::keymap::SetActivePhysicalLayoutErrorCode::SetActivePhysicalLayoutErrInvalidLayoutIndex
                            as i32,
                    )
                };
                ResponseType::SetActivePhysicalLayout(zmk::keymap::SetActivePhysicalLayoutResponse {
                    result: Some(result),
                })
            }
            Some(RequestType::MoveLayer(req)) => {
                use zmk::keymap::MoveLayerErrorCode as Code;
                use zmk::keymap::move_layer_response::Result;
                let len = self.working.layers.len();
                let result = if req.start_index as usize >= len {
                    Result::Err(Code::MoveLayerErrInvalidLayer as i32)
                } else if req.dest_index as usize >= len {
                    Result::Err(Code::MoveLayerErrInvalidDestination as i32)
                } else {
                    let moved = self.working.layers.remove(req.start_index as usize);
                    self.working.layers.insert(req.dest_index as usize, moved);
                    Result::Ok(self.working.clone())
                };
                ResponseType::MoveLayer(zmk::keymap::MoveLayerResponse {
                    result: Some(result),
                })
            }
            Some(RequestType::AddLayer(_)) => {
                use zmk::keymap::add_layer_response::Result;
                let result = match self.add_layer() {
                    Ok(details) => Result::Ok(details),
                    Err(code) => Result::Err(code as i32),
                };
                ResponseType::AddLayer(zmk::keymap::AddLayerResponse {
                    result: Some(result),
                })
            }
            Some(RequestType::RemoveLayer(req)) => {
                use zmk::keymap::remove_layer_response::Result;
                let index = req.layer_index as usize;
                let result = if index < self.working.layers.len() {
                    self.removed.push(self.working.layers.remove(index));
                    self.working.available_layers += 1;
                    Result::Ok(true)
                } else {
                    Result::Err(zmk::keymap::RemoveLayerErrorCode::RemoveLayerErrInvalidIndex as i32)
                };
                ResponseType::RemoveLayer(zmk::keymap::RemoveLayerResponse {
                    result: Some(result),
                })
            }
            Some(RequestType::RestoreLayer(req)) => {
                use zmk::keymap::restore_layer_response::Result;
                let result = match self.restore_layer(req) {
                    Ok(layer) => Result::Ok(layer),
                    Err(code) => Result::Err(code as i32),
                };
                ResponseType::RestoreLayer(zmk::keymap::RestoreLayerResponse {
                    result: Some(result),
                })
            }
            Some(RequestType::SetLayerProps(req)) => {
                ResponseType::SetLayerProps(self.set_layer_props(req) as i32)
            }
            None => return meta(zmk::meta::response::ResponseType::SimpleError(3)),
        };

        studio::request_response::Subsystem::Keymap(zmk::keymap::Response {
            response_type: Some(response_type),
        })
    }

    fn add_layer(
        &mut self,
    ) -> Result<zmk::keymap::AddLayerResponseDetails, zmk::keymap::AddLayerErrorCode> {
        if self.working.available_layers == 0 {
            return Err(zmk::keymap::AddLayerErrorCode::AddLayerErrNoSpace);
        }
        let id = self
            .working
            .layers
            .iter()
            .chain(&self.removed)
            .map(|l| l.id + 1)
            .max()
            .unwrap_or(0);
        let new_layer = layer(id, "", vec![binding(TRANSPARENT, 0, 0); 4]);
        self.working.layers.push(new_layer.clone());
        self.working.available_layers -= 1;
        Ok(zmk::keymap::AddLayerResponseDetails {
            index: (self.working.layers.len() - 1) as u32,
            layer: Some(new_layer),
        })
    }

    fn restore_layer(
        &mut self,
        req: zmk::keymap::RestoreLayerRequest,
    ) -> Result<zmk::keymap::Layer, zmk::keymap::RestoreLayerErrorCode> {
        use zmk::keymap::RestoreLayerErrorCode as Code;

        let Some(stashed) = self.removed.iter().position(|l| l.id == req.layer_id) else {
            return Err(Code::RestoreLayerErrInvalidId);
        };
        if req.at_index as usize > self.working.layers.len() {
            return Err(Code::RestoreLayerErrInvalidIndex);
        }
        let restored = self.removed.remove(stashed);
        self.working
            .layers
            .insert(req.at_index as usize, restored.clone());
        self.working.available_layers -= 1;
        Ok(restored)
    }

    fn set_layer_props(
        &mut self,
        req: zmk::keymap::SetLayerPropsRequest,
    ) -> zmk::keymap::SetLayerPropsResponse {
        use zmk::keymap::SetLayerPropsResponse as Resp;

        if req.name.len() > self.working.max_layer_name_length as usize {
            return Resp::SetLayerPropsRespErrGeneric;
        }
        match self.working.layers.iter_mut().find(|l| l.id == req.layer_id) {
            Some(target) => {
                target.name = req.name;
                Resp::SetLayerPropsRespOk
            }
            None => Resp::SetLayerPropsRespErrInvalidId,
        }
    }

    fn set_binding(
        &mut self,
        set: zmk::keymap::SetLayerBindingRequest,
    ) -> zmk::keymap::SetLayerBindingResponse {
        use zmk::keymap::SetLayerBindingResponse as Resp;

        let Some(new_binding) = set.binding else {
            return Resp::SetLayerBindingRespInvalidParameters;
        };
        if !(1..=MACRO).contains(&new_binding.behavior_id) {
            return Resp::SetLayerBindingRespInvalidBehavior;
        }
        let slot = self
            .working
            .layers
            .iter_mut()
            .find(|l| l.id == set.layer_id)
            .and_then(|l| {
                usize::try_from(set.key_position)
                    .ok()
                    .and_then(|pos| l.bindings.get_mut(pos))
            });
        match slot {
            Some(slot) => {
                *slot = new_binding;
                Resp::SetLayerBindingRespOk
            }
            None => Resp::SetLayerBindingRespInvalidLocation,
        }
    }
}

fn meta(response_type: zmk::meta::response::ResponseType) -> studio::request_response::Subsystem {
    studio::request_response::Subsystem::Meta(zmk::meta::Response {
        response_type: Some(response_type),
    })
}

impl Read for SimDevice {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.outbox.len());
        for (slot, byte) in buf.iter_mut().zip(self.outbox.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for SimDevice {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut requests = Vec::new();
        let decoded = decode_requests(&mut self.decoder, buf, &mut requests);
        for request in requests {
            self.respond(request);
        }
        decoded.map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
