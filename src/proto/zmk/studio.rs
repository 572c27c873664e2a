//! `zmk.studio`: top-level request/response envelopes.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(uint32, tag = "1")]
    pub request_id: u32,
    #[prost(oneof = "request::Subsystem", tags = "3, 4, 5")]
    pub subsystem: Option<request::Subsystem>,
}

pub mod request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Subsystem {
        #[prost(message, tag = "3")]
        Core(super::super::core::Request),
        #[prost(message, tag = "4")]
        Behaviors(super::super::behaviors::Request),
        #[prost(message, tag = "5")]
        Keymap(super::super::keymap::Request),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(oneof = "response::Type", tags = "1, 2")]
    pub r#type: Option<response::Type>,
}

pub mod response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(message, tag = "1")]
        RequestResponse(super::RequestResponse),
        #[prost(message, tag = "2")]
        Notification(super::Notification),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestResponse {
    #[prost(uint32, tag = "1")]
    pub request_id: u32,
    #[prost(oneof = "request_response::Subsystem", tags = "2, 3, 4, 5")]
    pub subsystem: Option<request_response::Subsystem>,
}

pub mod request_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Subsystem {
        #[prost(message, tag = "2")]
        Meta(super::super::meta::Response),
        #[prost(message, tag = "3")]
        Core(super::super::core::Response),
        #[prost(message, tag = "4")]
        Behaviors(super::super::behaviors::Response),
        #[prost(message, tag = "5")]
        Keymap(super::super::keymap::Response),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Notification {
    #[prost(oneof = "notification::Subsystem", tags = "2, 5")]
    pub subsystem: Option<notification::Subsystem>,
}

pub mod notification {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Subsystem {
        #[prost(message, tag = "2")]
        Core(super::super::core::Notification),
        #[prost(message, tag = "5")]
        Keymap(super::super::keymap::Notification),
    }
}
