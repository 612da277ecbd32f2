use log::{error, info, warn};
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedReadHalf;

use crate::client::Client;
use crate::error::ServerError;
use crate::middleware::logging::{log_command, log_reply};
use crate::protocol::responses::{READY, SYNTAX_ERROR, format_response};
use crate::protocol::{CommandStatus, handle_command, parse_command};
use crate::server::ServerContext;

/// Outcome of reading one bounded command line
enum LineRead {
    Line(String),
    TooLong,
    InvalidUtf8,
    Closed,
}

/// Reads up to `max_len` bytes of the next line.
///
/// An over-long line is replied to before its remainder is discarded, so a
/// client that never sends a newline still gets an answer.
async fn read_command_line(
    reader: &mut BufReader<OwnedReadHalf>,
    buf: &mut Vec<u8>,
    max_len: usize,
) -> Result<LineRead, ServerError> {
    buf.clear();
    let limit = max_len as u64 + 1;
    let n = (&mut *reader).take(limit).read_until(b'\n', buf).await?;

    if n == 0 {
        return Ok(LineRead::Closed);
    }
    if buf.len() > max_len {
        return Ok(LineRead::TooLong);
    }

    match String::from_utf8(std::mem::take(buf)) {
        Ok(line) => Ok(LineRead::Line(line)),
        Err(_) => Ok(LineRead::InvalidUtf8),
    }
}

/// Discards the rest of an over-long line, `chunk` bytes at a time.
async fn discard_line(
    reader: &mut BufReader<OwnedReadHalf>,
    buf: &mut Vec<u8>,
    chunk: usize,
) -> Result<(), ServerError> {
    while !buf.ends_with(b"\n") {
        buf.clear();
        let n = (&mut *reader).take(chunk as u64).read_until(b'\n', buf).await?;
        if n == 0 {
            break;
        }
    }
    Ok(())
}

/// Serves one client connection until it quits or disconnects.
///
/// - Greets the client, then reads bounded command lines from a `BufReader`.
/// - Dispatches each command through `handle_command`.
/// - Mirrors the client's session into the shared registry after every command.
pub async fn handle_client(
    stream: TcpStream,
    client_addr: SocketAddr,
    context: &ServerContext,
) -> Result<(), ServerError> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut buf = Vec::new();
    let mut client = Client::new(client_addr);
    let max_len = context.startup.max_command_length;

    write_half
        .write_all(format_response(READY, "signup-gate ready").as_bytes())
        .await?;
    write_half.flush().await?;

    loop {
        let line = match read_command_line(&mut reader, &mut buf, max_len).await {
            Ok(LineRead::Line(line)) => line,
            Ok(LineRead::Closed) => {
                // Client closed the connection
                info!("Connection closed by client {}", client_addr);
                break;
            }
            Ok(LineRead::TooLong) => {
                warn!("Command from {} exceeds {} bytes", client_addr, max_len);
                write_half
                    .write_all(format_response(SYNTAX_ERROR, "Command too long").as_bytes())
                    .await?;
                discard_line(&mut reader, &mut buf, max_len).await?;
                continue;
            }
            Ok(LineRead::InvalidUtf8) => {
                warn!("Command from {} is not valid UTF-8", client_addr);
                write_half
                    .write_all(
                        format_response(SYNTAX_ERROR, "Command is not valid UTF-8").as_bytes(),
                    )
                    .await?;
                continue;
            }
            Err(e) => {
                error!("Failed to read from {}: {}", client_addr, e);
                return Err(e);
            }
        };

        let command = parse_command(&line);
        log_command(&client_addr, &command);

        let result = handle_command(&mut client, command, context).await;
        log_reply(&client_addr, &result);
        context.clients.lock().await.update(&client);

        if let Some(msg) = &result.message {
            write_half.write_all(msg.as_bytes()).await?;
        }

        if result.status == CommandStatus::CloseConnection {
            info!("Client {} requested to quit", client_addr);
            break;
        }
    }

    Ok(())
}
