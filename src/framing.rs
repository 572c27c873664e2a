//! Byte framing for ZMK Studio transport frames.
//!
//! A frame is `SOF`, the payload with every control byte escaped by `ESC`,
//! then `EOF`.

pub const FRAMING_SOF: u8 = 0xAB;
pub const FRAMING_ESC: u8 = 0xAC;
pub const FRAMING_EOF: u8 = 0xAD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecodeState {
    #[default]
    Idle,
    AwaitingData,
    Escaped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    ExpectedStartOfFrame,
    UnexpectedStartOfFrameMidFrame,
}

impl core::fmt::Display for FramingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ExpectedStartOfFrame => write!(f, "expected start-of-frame byte"),
            Self::UnexpectedStartOfFrameMidFrame => {
                write!(f, "unexpected start-of-frame mid-frame")
            }
        }
    }
}

impl std::error::Error for FramingError {}

fn is_control_byte(b: u8) -> bool {
    matches!(b, FRAMING_SOF | FRAMING_ESC | FRAMING_EOF)
}

pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let escapes = payload.iter().filter(|&&b| is_control_byte(b)).count();
    let mut out = Vec::with_capacity(payload.len() + escapes + 2);
    out.push(FRAMING_SOF);
    for &b in payload {
        if is_control_byte(b) {
            out.push(FRAMING_ESC);
        }
        out.push(b);
    }
    out.push(FRAMING_EOF);
    out
}

/// Incremental frame decoder.
///
/// Bytes may arrive in arbitrary chunks; a frame can span several calls to
/// [`FrameDecoder::push`] and one chunk can complete several frames.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    state: DecodeState,
    data: Vec<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops any partially received frame.
    pub fn reset(&mut self) {
        self.state = DecodeState::Idle;
        self.data.clear();
    }

    pub fn is_mid_frame(&self) -> bool {
        self.state != DecodeState::Idle
    }

    /// Appends every frame completed by `chunk` to `frames`.
    ///
    /// A malformed byte resets the decoder and scanning resumes at the next
    /// start-of-frame, so frames before and after it are still delivered.
    /// The first error seen in the chunk is returned once the whole chunk
    /// has been consumed.
    pub fn push(&mut self, chunk: &[u8], frames: &mut Vec<Vec<u8>>) -> Result<(), FramingError> {
        let mut first_error = None;
        for &b in chunk {
            match self.push_byte(b) {
                Ok(Some(frame)) => {
                    log::trace!("decoded frame of {} bytes", frame.len());
                    frames.push(frame);
                }
                Ok(None) => {}
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn push_byte(&mut self, b: u8) -> Result<Option<Vec<u8>>, FramingError> {
        let next = match (self.state, b) {
            (DecodeState::Idle, FRAMING_SOF) => DecodeState::AwaitingData,
            (DecodeState::Idle, _) => {
                self.reset();
                return Err(FramingError::ExpectedStartOfFrame);
            }
            (DecodeState::AwaitingData, FRAMING_SOF) => {
                self.reset();
                return Err(FramingError::UnexpectedStartOfFrameMidFrame);
            }
            (DecodeState::AwaitingData, FRAMING_ESC) => DecodeState::Escaped,
            (DecodeState::AwaitingData, FRAMING_EOF) => {
                self.state = DecodeState::Idle;
                return Ok(Some(core::mem::take(&mut self.data)));
            }
            (DecodeState::AwaitingData, _) | (DecodeState::Escaped, _) => {
                self.data.push(b);
                DecodeState::AwaitingData
            }
        };
        self.state = next;
        Ok(None)
    }
}
