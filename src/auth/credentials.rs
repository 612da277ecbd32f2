//! Credential storage and management
//!
//! In-memory account registry with unique usernames and emails.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::auth::validator::normalize_email;
use crate::error::StoreError;

/// A registered account
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Default)]
struct Accounts {
    next_id: u64,
    by_id: HashMap<u64, User>,
    username_index: HashMap<String, u64>,
    email_index: HashMap<String, u64>,
}

/// Thread-safe account store
#[derive(Default)]
pub struct UserStore {
    accounts: RwLock<Accounts>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if either the username or the email is already registered.
    pub async fn is_taken(&self, username: &str, email: &str) -> bool {
        let accounts = self.accounts.read().await;
        accounts.username_index.contains_key(username)
            || accounts.email_index.contains_key(&normalize_email(email))
    }

    /// Inserts a new account. Username and email must both be unused.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password_hash: String,
    ) -> Result<User, StoreError> {
        let email = normalize_email(email);
        let mut accounts = self.accounts.write().await;

        if accounts.username_index.contains_key(username)
            || accounts.email_index.contains_key(&email)
        {
            return Err(StoreError::AlreadyExists {
                username: username.to_string(),
                email,
            });
        }

        accounts.next_id += 1;
        let user = User {
            id: accounts.next_id,
            username: username.to_string(),
            email: email.clone(),
            password_hash,
        };

        accounts.username_index.insert(user.username.clone(), user.id);
        accounts.email_index.insert(email, user.id);
        accounts.by_id.insert(user.id, user.clone());

        Ok(user)
    }

    /// Looks an account up by username or by email.
    pub async fn find_by_identity(&self, identity: &str) -> Result<User, StoreError> {
        let identity = identity.trim();
        let accounts = self.accounts.read().await;

        accounts
            .username_index
            .get(identity)
            .or_else(|| accounts.email_index.get(&normalize_email(identity)))
            .and_then(|id| accounts.by_id.get(id))
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(identity.to_string()))
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_id.len()
    }
}
