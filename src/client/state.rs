//! Module `client`
//!
//! Defines the `Client` struct holding per-connection session state.

use std::net::SocketAddr;

use crate::auth::User;

/// The account a connection is logged in as
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Represents the state of a connected client.
#[derive(Debug, Clone)]
pub struct Client {
    client_addr: SocketAddr,
    session: Option<SessionUser>,
}

impl Client {
    pub fn new(client_addr: SocketAddr) -> Self {
        Self {
            client_addr,
            session: None,
        }
    }

    /// Starts a session, replacing any previous one.
    pub fn login(&mut self, user: SessionUser) {
        self.session = Some(user);
    }

    /// Ends the session. Returns the account that was logged in, if any.
    pub fn logout(&mut self) -> Option<SessionUser> {
        self.session.take()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SessionUser> {
        self.session.as_ref()
    }

    pub fn client_addr(&self) -> &SocketAddr {
        &self.client_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str) -> SessionUser {
        SessionUser {
            id: 1,
            username: name.into(),
            email: format!("{name}@example.com"),
        }
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut client = Client::new("127.0.0.1:4000".parse().unwrap());
        assert!(!client.is_logged_in());
        assert_eq!(client.logout(), None);

        client.login(session("alice"));
        assert_eq!(client.session().map(|s| s.username.as_str()), Some("alice"));

        client.login(session("bob"));
        assert_eq!(client.session().map(|s| s.username.as_str()), Some("bob"));

        assert_eq!(client.logout().map(|s| s.username), Some("bob".to_string()));
        assert!(!client.is_logged_in());
    }
}
