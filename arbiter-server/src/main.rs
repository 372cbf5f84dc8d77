//! Arbiter admission server.
//!
//! Loads a rule set describing which sources may reach which destinations
//! and answers verdict requests over TCP, one request per connection.

mod rules;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use arbiter_protocol::protocol::{read_frame, write_frame, Verdict, VerdictRequest, VerdictResponse};
use arbiter_protocol::DEFAULT_ARBITER_PORT;

use crate::rules::RuleSet;

/// Arbiter admission server
#[derive(Parser, Debug)]
#[command(name = "arbiter-server", about = "Manages the admission rule set and answers verdict requests")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_ARBITER_PORT)]
    port: u16,

    /// Path to the admission rules file
    #[arg(short, long)]
    rules: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let rules = RuleSet::load(&args.rules)
        .with_context(|| format!("cannot load rules from {}", args.rules.display()))?;
    let rules = Arc::new(rules);

    let local_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), args.port);
    let listener = TcpListener::bind(local_addr)
        .await
        .with_context(|| format!("cannot open server socket on {local_addr}"))?;
    info!("server listening on {}", local_addr);

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                debug!("new connection from {}", peer);
                let rules = rules.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, rules).await {
                        warn!("connection with {} failed: {}", peer, e);
                    }
                });
            }
            Err(e) => {
                warn!("stream error: {}", e);
            }
        }
    }
}

/// Answer a single verdict request, then close the connection.
///
/// Undecodable requests are answered with a `MalformedMessage` verdict
/// rather than dropped, so callers can tell a bad frame from a dead server.
async fn handle_connection(mut stream: TcpStream, rules: Arc<RuleSet>) -> Result<()> {
    let response = match read_frame::<_, VerdictRequest>(&mut stream).await {
        Ok(request) => {
            debug!("processing request {:?}", request);
            let verdict = rules.decide(&request.source, &request.destination);
            debug!("verdict for request is {:?}", verdict);
            VerdictResponse { verdict }
        }
        Err(e) => {
            error!("malformed request: {}", e);
            VerdictResponse {
                verdict: Verdict::MalformedMessage,
            }
        }
    };

    write_frame(&mut stream, &response).await?;
    Ok(())
}
