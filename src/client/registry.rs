//! Client registry
//!
//! Tracks live connections for the connection limit and for logging.

use crate::client::Client;
use std::collections::HashMap;
use std::net::SocketAddr;

/// Registry for tracking active clients
#[derive(Default)]
pub struct ClientRegistry {
    clients: HashMap<SocketAddr, Client>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `client` unless `max_clients` connections are already live.
    pub fn try_insert(&mut self, client: Client, max_clients: usize) -> bool {
        if self.clients.len() >= max_clients {
            return false;
        }
        self.clients.insert(*client.client_addr(), client);
        true
    }

    /// Replaces the stored snapshot of a client's state.
    pub fn update(&mut self, client: &Client) {
        if let Some(entry) = self.clients.get_mut(client.client_addr()) {
            *entry = client.clone();
        }
    }

    pub fn remove(&mut self, addr: &SocketAddr) -> Option<Client> {
        self.clients.remove(addr)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Number of connections currently logged in
    pub fn logged_in_count(&self) -> usize {
        self.clients.values().filter(|c| c.is_logged_in()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SessionUser;

    fn addr(port: u16) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], port))
    }

    #[test]
    fn test_capacity_enforced() {
        let mut registry = ClientRegistry::new();
        assert!(registry.try_insert(Client::new(addr(1)), 2));
        assert!(registry.try_insert(Client::new(addr(2)), 2));
        assert!(!registry.try_insert(Client::new(addr(3)), 2));
        assert_eq!(registry.len(), 2);

        registry.remove(&addr(1));
        assert!(registry.try_insert(Client::new(addr(3)), 2));
    }

    #[test]
    fn test_update_tracks_sessions() {
        let mut registry = ClientRegistry::new();
        let mut client = Client::new(addr(1));
        registry.try_insert(client.clone(), 10);
        assert_eq!(registry.logged_in_count(), 0);

        client.login(SessionUser {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
        });
        registry.update(&client);
        assert_eq!(registry.logged_in_count(), 1);

        client.logout();
        registry.update(&client);
        assert_eq!(registry.logged_in_count(), 0);
    }
}
