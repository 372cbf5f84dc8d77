//! Server-role test peer: an echo server guarded by the arbiter.
//!
//! Each received payload is echoed back only when the arbiter allows the
//! calling address; a denied caller sees the connection close with no
//! reply.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use arbiter_protocol::{PeerId, VerdictClient};

/// Numeric id this peer reports for itself in verdict requests.
const SELF_PEER_ID: u64 = 5678;
/// Numeric id reported for callers, which are identified by address only.
const CALLER_PEER_ID: u64 = 111;

/// Echo peer that defers admission to the arbiter
#[derive(Parser, Debug)]
#[command(name = "peer-server")]
struct Args {
    /// Address to listen on, e.g. 127.0.0.1:7005
    bind_addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let listener = TcpListener::bind(args.bind_addr)
        .await
        .with_context(|| format!("cannot listen on {}", args.bind_addr))?;
    info!("listening on {}", args.bind_addr);

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                info!("new connection from {}", peer);
                let self_addr = args.bind_addr;
                tokio::spawn(async move {
                    handle_client(stream, peer, self_addr).await;
                });
            }
            Err(e) => {
                warn!("accept error: {}", e);
            }
        }
    }
}

/// Read one payload, ask the arbiter for a verdict, echo on allow.
async fn handle_client(mut stream: TcpStream, peer: SocketAddr, self_addr: SocketAddr) {
    let mut data = [0u8; 256];
    let len = match stream.read(&mut data).await {
        Ok(len) => len,
        Err(e) => {
            warn!("failed to read from {}: {}", peer, e);
            return;
        }
    };
    let payload = &data[..len];

    // Callers are identified by the address they connect from.
    let source = PeerId::new(peer.to_string(), CALLER_PEER_ID);
    let mut arbiter = VerdictClient::new();
    arbiter.set_self_id(PeerId::new(self_addr.to_string(), SELF_PEER_ID));

    debug!("asking the arbiter about {}", peer);
    let allowed = arbiter.ask_for_verdict(&source, payload).await;
    info!("arbiter verdict for {}: {}", peer, allowed);

    if allowed {
        if let Err(e) = stream.write_all(payload).await {
            warn!("failed to echo to {}: {}", peer, e);
        }
    }
}
