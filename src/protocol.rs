//! Protocol-level helpers for frame + protobuf handling.

use prost::Message;

use crate::framing::{FrameDecoder, FramingError, encode_frame};
use crate::proto::zmk::studio::{Request, Response};

#[derive(Debug)]
pub enum ProtocolError {
    Framing(FramingError),
    Decode(prost::DecodeError),
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Framing(err) => write!(f, "framing error: {err}"),
            Self::Decode(err) => write!(f, "decode error: {err}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Framing(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<FramingError> for ProtocolError {
    fn from(value: FramingError) -> Self {
        Self::Framing(value)
    }
}

impl From<prost::DecodeError> for ProtocolError {
    fn from(value: prost::DecodeError) -> Self {
        Self::Decode(value)
    }
}

pub fn encode_request(request: &Request) -> Vec<u8> {
    encode_frame(&request.encode_to_vec())
}

/// Decodes every response completed by `chunk` into `out`.
///
/// Responses decoded before a framing or protobuf error are still
/// delivered; the first error is reported after the chunk is consumed.
pub fn decode_responses(
    decoder: &mut FrameDecoder,
    chunk: &[u8],
    out: &mut impl Extend<Response>,
) -> Result<(), ProtocolError> {
    decode_frames(decoder, chunk, out)
}

/// Device side of the codec, used by the in-memory device in tests.
#[cfg(test)]
pub fn encode_response(response: &Response) -> Vec<u8> {
    encode_frame(&response.encode_to_vec())
}

#[cfg(test)]
pub fn decode_requests(
    decoder: &mut FrameDecoder,
    chunk: &[u8],
    out: &mut impl Extend<Request>,
) -> Result<(), ProtocolError> {
    decode_frames(decoder, chunk, out)
}

fn decode_frames<M: Message + Default>(
    decoder: &mut FrameDecoder,
    chunk: &[u8],
    out: &mut impl Extend<M>,
) -> Result<(), ProtocolError> {
    let mut frames = Vec::new();
    let framing = decoder.push(chunk, &mut frames);

    let mut decode_error = None;
    for frame in frames {
        match M::decode(frame.as_slice()) {
            Ok(message) => out.extend(Some(message)),
            Err(err) => {
                log::warn!("dropping undecodable frame of {} bytes: {err}", frame.len());
                decode_error.get_or_insert(err);
            }
        }
    }

    framing?;
    decode_error.map_or(Ok(()), |err| Err(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::zmk;
    use crate::proto::zmk::studio;

    fn keymap_request(request_id: u32) -> Request {
        Request {
            request_id,
            subsystem: Some(studio::request::Subsystem::Keymap(zmk::keymap::Request {
                request_type: Some(zmk::keymap::request::RequestType::GetKeymap(true)),
            })),
        }
    }

    #[test]
    fn request_survives_framing() {
        let request = keymap_request(7);

        let mut decoder = FrameDecoder::new();
        let mut decoded = Vec::new();
        decode_requests(&mut decoder, &encode_request(&request), &mut decoded).unwrap();
        assert_eq!(decoded, vec![request]);
    }

    #[test]
    fn garbage_payload_is_a_decode_error() {
        let mut decoder = FrameDecoder::new();
        let mut decoded: Vec<Response> = Vec::new();
        let frame = encode_frame(&[0xFF, 0xFF, 0xFF]);
        let err = decode_responses(&mut decoder, &frame, &mut decoded).unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(_)));
        assert!(decoded.is_empty());
    }

    #[test]
    fn framing_errors_are_wrapped() {
        let mut decoder = FrameDecoder::new();
        let mut decoded: Vec<Response> = Vec::new();
        let err = decode_responses(&mut decoder, &[0x01], &mut decoded).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Framing(FramingError::ExpectedStartOfFrame)
        ));
    }

    #[test]
    fn messages_before_an_error_are_kept() {
        let mut chunk = encode_request(&keymap_request(1));
        chunk.extend(encode_frame(&[0xFF, 0xFF, 0xFF]));
        chunk.push(0x00);
        chunk.extend(encode_request(&keymap_request(2)));

        let mut decoder = FrameDecoder::new();
        let mut decoded = Vec::new();
        let err = decode_requests(&mut decoder, &chunk, &mut decoded).unwrap_err();

        assert!(matches!(
            err,
            ProtocolError::Framing(FramingError::ExpectedStartOfFrame)
        ));
        assert_eq!(decoded, vec![keymap_request(1), keymap_request(2)]);
    }
}
