//! `zmk.meta`: protocol-level error reporting.

use strum_macros::IntoStaticStr;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration, IntoStaticStr,
)]
#[repr(i32)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorConditions {
    Generic = 0,
    UnlockRequired = 1,
    RpcNotFound = 2,
    MsgDecodeFailed = 3,
    MsgEncodeFailed = 4,
}

proto_str_name!(ErrorConditions);

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(oneof = "response::ResponseType", tags = "1, 2")]
    pub response_type: Option<response::ResponseType>,
}

pub mod response {
    #[derive(Clone, Copy, PartialEq, ::prost::Oneof)]
    pub enum ResponseType {
        #[prost(bool, tag = "1")]
        NoResponse(bool),
        #[prost(enumeration = "super::ErrorConditions", tag = "2")]
        SimpleError(i32),
    }
}
