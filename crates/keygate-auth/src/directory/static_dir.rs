//! In-process fixture implementation of the user-directory collaborator.

use async_trait::async_trait;
use dashmap::DashMap;

use keygate_core::config::SeedUser;
use keygate_core::result::AuthResult;
use keygate_core::traits::directory::UserDirectory;
use keygate_core::types::UserRecord;

use crate::password::PasswordHasher;

/// A concurrent fixture user table, seeded once at startup.
///
/// Stands in for whatever real credential store a deployment wires up;
/// lookups are read-only after seeding.
#[derive(Debug, Default)]
pub struct StaticUserDirectory {
    users: DashMap<String, UserRecord>,
}

impl StaticUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Inserts a pre-hashed user record.
    pub fn insert(&self, record: UserRecord) {
        self.users.insert(record.username.clone(), record);
    }

    /// Builds a directory from configuration, hashing each seed password.
    pub fn seed(hasher: &PasswordHasher, seeds: &[SeedUser]) -> AuthResult<Self> {
        let directory = Self::new();
        for seed in seeds {
            directory.insert(UserRecord {
                username: seed.username.clone(),
                password_hash: hasher.hash(&seed.password)?,
                role: seed.role.parse()?,
            });
        }
        Ok(directory)
    }

    /// Number of seeded users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn find(&self, username: &str) -> AuthResult<Option<UserRecord>> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }
}
