use log::{error, info, warn};
use std::net::SocketAddr;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

use crate::client::{Client, handle_client};
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::middleware::logging::log_connection;
use crate::protocol::responses::{SERVICE_UNAVAILABLE, format_response};
use crate::server::context::ServerContext;

pub struct Server {
    listener: TcpListener,
    context: ServerContext,
}

impl Server {
    /// Binds the listener described by `config`.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        Self::with_context(ServerContext::new(config)).await
    }

    pub async fn with_context(context: ServerContext) -> Result<Self, ServerError> {
        let socket = context.startup.listen_socket();
        let listener = TcpListener::bind(&socket).await.map_err(|e| {
            error!("Failed to bind to {}: {}", socket, e);
            e
        })?;
        info!("Server bound to {}", listener.local_addr()?);

        Ok(Self { listener, context })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop forever.
    pub async fn start(&self) {
        info!(
            "Starting signup-gate on {} (max {} clients)",
            self.context.startup.listen_socket(),
            self.context.runtime.read().await.max_clients
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let context = self.context.clone();

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_new_client(stream, addr, context).await {
                            warn!("Failed to handle client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Registers a new client, or turns it away when the server is full.
async fn handle_new_client(
    mut stream: TcpStream,
    client_addr: SocketAddr,
    context: ServerContext,
) -> Result<(), ServerError> {
    let max_clients = context.runtime.read().await.max_clients;

    let admitted = {
        let mut clients = context.clients.lock().await;
        let admitted = clients.try_insert(Client::new(client_addr), max_clients);
        if admitted {
            log_connection(&client_addr, clients.len(), clients.logged_in_count());
        }
        admitted
    };

    if !admitted {
        warn!("Rejecting {}: {} clients already connected", client_addr, max_clients);
        stream
            .write_all(
                format_response(SERVICE_UNAVAILABLE, "Too many connections. Try again later.")
                    .as_bytes(),
            )
            .await?;
        return Ok(());
    }

    let result = handle_client(stream, client_addr, &context).await;

    context.clients.lock().await.remove(&client_addr);
    info!("Client {} disconnected", client_addr);

    result
}
