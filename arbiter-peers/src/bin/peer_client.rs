//! Client-role test peer: sends a greeting from a fixed local address and
//! checks the echo.
//!
//! Exit codes: 0 = echo matched, 1 = reply missing or different (the peer
//! was rejected), 2 = transport failure while waiting for the reply. Setup
//! failures (bind, connect, send) abort with a generic error status.

use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpSocket;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const GREETING: &[u8] = b"Hello!";

/// Greeting client that connects from a fixed local address
#[derive(Parser, Debug)]
#[command(name = "peer-client")]
struct Args {
    /// Address of the peer server, e.g. 127.0.0.1:7005
    server_addr: SocketAddr,

    /// Local address to connect from, e.g. 127.0.0.1:7010
    local_addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // The local address doubles as this peer's identity, so bind it
    // explicitly instead of letting the OS pick an ephemeral port.
    let socket = TcpSocket::new_v4().context("cannot create socket")?;
    socket.set_reuseaddr(true).context("cannot set SO_REUSEADDR")?;
    socket
        .bind(args.local_addr)
        .with_context(|| format!("cannot open local socket on {}", args.local_addr))?;
    info!("opened local socket on {}", args.local_addr);

    let mut stream = socket
        .connect(args.server_addr)
        .await
        .with_context(|| format!("cannot connect to server {}", args.server_addr))?;
    info!("connected to {}", args.server_addr);

    stream.write_all(GREETING).await.context("cannot send request")?;
    info!("sent request");

    let mut data = [0u8; 256];
    match stream.read(&mut data).await {
        Ok(len) if &data[..len] == GREETING => {
            info!("reply is ok");
            Ok(ExitCode::SUCCESS)
        }
        Ok(len) => {
            warn!("unexpected reply: {:?}", String::from_utf8_lossy(&data[..len]));
            Ok(ExitCode::from(1))
        }
        Err(e) => {
            warn!("failed to receive reply: {}", e);
            Ok(ExitCode::from(2))
        }
    }
}
