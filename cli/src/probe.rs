//! Liveness probe for the cache service over RESP.
//!
//! One connection, one `PING`, one reply line. The socket is shut down
//! whether or not the round trip succeeded.

use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::Instant;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connect to {addr} failed: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("server returned error: {0}")]
    ServerError(String),
    #[error("unexpected reply: {0:?}")]
    UnexpectedReply(String),
    #[error("connection closed before reply")]
    ConnectionClosed,
}

/// Encode a command as a RESP array of bulk strings.
pub fn encode_command(args: &[&str]) -> Vec<u8> {
    let mut out = format!("*{}\r\n", args.len()).into_bytes();
    for arg in args {
        out.extend_from_slice(format!("${}\r\n", arg.len()).as_bytes());
        out.extend_from_slice(arg.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out
}

/// Classify a single reply line (CRLF already stripped) to `PING`.
///
/// `+PONG` is the only healthy answer; `-...` is a server error (e.g. auth
/// required); anything else is unexpected.
pub fn parse_ping_reply(line: &str) -> Result<String, ProbeError> {
    if let Some(rest) = line.strip_prefix('-') {
        return Err(ProbeError::ServerError(rest.to_owned()));
    }
    match line.strip_prefix('+') {
        Some(status) if status.eq_ignore_ascii_case("PONG") => Ok(status.to_owned()),
        _ => Err(ProbeError::UnexpectedReply(line.to_owned())),
    }
}

/// Connect to `addr`, send `PING`, and return the status text of the reply.
///
/// `timeout` is one budget shared by the connect and the round trip.
///
/// # Errors
///
/// Returns a [`ProbeError`] if the connection, the exchange, or the reply
/// fails.
pub async fn ping(addr: &str, timeout: Duration) -> Result<String, ProbeError> {
    let deadline = Instant::now() + timeout;
    let mut stream = tokio::time::timeout_at(deadline, TcpStream::connect(addr))
        .await
        .map_err(|_| ProbeError::Timeout(timeout))?
        .map_err(|source| ProbeError::Connect { addr: addr.to_owned(), source })?;

    let result = match tokio::time::timeout_at(deadline, round_trip(&mut stream)).await {
        Ok(result) => result,
        Err(_) => Err(ProbeError::Timeout(timeout)),
    };

    // Released on every path; a failed shutdown does not change the outcome.
    let _ = stream.shutdown().await;
    result
}

async fn round_trip(stream: &mut TcpStream) -> Result<String, ProbeError> {
    stream.write_all(&encode_command(&["PING"])).await?;

    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(ProbeError::ConnectionClosed);
    }
    parse_ping_reply(line.trim_end_matches(['\r', '\n']))
}

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;
