use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::errors::ClientError;
use crate::peer_id::PeerId;
use crate::protocol::{read_frame, write_frame, Verdict, VerdictRequest, VerdictResponse};

/// Port the arbiter server listens on unless configured otherwise.
pub const DEFAULT_ARBITER_PORT: u16 = 9061;

/// One-shot client for verdict queries against the arbiter server.
///
/// Each query opens a fresh connection, sends a single request, and reads a
/// single response.
pub struct VerdictClient {
    server_addr: SocketAddr,
    self_id: PeerId,
}

impl VerdictClient {
    /// Client for an arbiter on localhost at the default port.
    pub fn new() -> Self {
        Self::with_address(SocketAddr::new(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            DEFAULT_ARBITER_PORT,
        ))
    }

    /// Client for an arbiter at a specific address.
    pub fn with_address(server_addr: SocketAddr) -> Self {
        VerdictClient {
            server_addr,
            self_id: PeerId::local(),
        }
    }

    /// Sets the identity this client reports as the destination of
    /// incoming messages.
    pub fn set_self_id(&mut self, id: PeerId) {
        self.self_id = id;
    }

    pub fn self_id(&self) -> &PeerId {
        &self.self_id
    }

    /// Ask the arbiter whether `payload` from `source` may pass to this
    /// peer. Any connection or protocol failure counts as a deny.
    pub async fn ask_for_verdict(&self, source: &PeerId, payload: &[u8]) -> bool {
        match self.query(source, payload).await {
            Ok(verdict) => verdict.is_allowed(),
            Err(e) => {
                warn!("verdict query failed: {}", e);
                false
            }
        }
    }

    /// Perform one verdict exchange and return the arbiter's answer.
    pub async fn query(&self, source: &PeerId, payload: &[u8]) -> Result<Verdict, ClientError> {
        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|source| ClientError::Connect {
                addr: self.server_addr,
                source,
            })?;
        debug!("connected to arbiter at {}", self.server_addr);

        let request = VerdictRequest {
            source: source.clone(),
            destination: self.self_id.clone(),
            payload: payload.to_vec(),
        };
        write_frame(&mut stream, &request).await?;
        debug!("sent verdict request for source {}", source.name());

        let response: VerdictResponse = read_frame(&mut stream).await?;
        debug!("received verdict {:?}", response.verdict);
        Ok(response.verdict)
    }
}

impl Default for VerdictClient {
    fn default() -> Self {
        Self::new()
    }
}
