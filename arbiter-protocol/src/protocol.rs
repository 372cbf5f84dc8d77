use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::ProtocolError;
use crate::peer_id::PeerId;

/// Maximum frame size (64 KiB). Verdict messages are small; anything
/// larger is corrupt or hostile.
pub const MAX_FRAME_SIZE: usize = 64 * 1024;

/// Admission verdict returned by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Allow,
    /// The source is known but the destination is not on its allow list.
    DisallowedDestination,
    /// No rule mentions the source at all.
    SourceUnknown,
    /// The request frame could not be decoded.
    MalformedMessage,
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

/// Request for a verdict on a message from `source` to `destination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictRequest {
    pub source: PeerId,
    pub destination: PeerId,
    pub payload: Vec<u8>,
}

/// The arbiter's answer to a [`VerdictRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictResponse {
    pub verdict: Verdict,
}

/// Write one message as a 4-byte big-endian length prefix followed by its
/// JSON encoding.
pub async fn write_frame<W, T>(writer: &mut W, message: &T) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let payload = serde_json::to_vec(message).map_err(ProtocolError::Encode)?;
    if payload.len() > MAX_FRAME_SIZE {
        return Err(ProtocolError::FrameTooLarge(payload.len()));
    }

    let mut frame = Vec::with_capacity(4 + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(&payload);
    writer.write_all(&frame).await?;
    Ok(())
}

/// Read one length-prefixed JSON frame and decode it.
pub async fn read_frame<R, T>(reader: &mut R) -> Result<T, ProtocolError>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf).await?;
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_FRAME_SIZE {
        return Err(ProtocolError::FrameTooLarge(len));
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;
    serde_json::from_slice(&payload).map_err(ProtocolError::Decode)
}
