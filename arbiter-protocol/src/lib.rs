//! Wire protocol for the arbiter admission server.
//!
//! Defines the verdict request/response messages, the length-prefixed JSON
//! framing used on the wire, and an async client for one-shot verdict
//! queries.

pub mod client;
pub mod errors;
pub mod peer_id;
pub mod protocol;

pub use client::{VerdictClient, DEFAULT_ARBITER_PORT};
pub use errors::{ClientError, ProtocolError};
pub use peer_id::PeerId;
pub use protocol::{Verdict, VerdictRequest, VerdictResponse};
