//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use bookvault::{
    AccountService, AppResult, BlocklistConfig, JwtDecoder, JwtEncoder, PasswordHasher,
    PasswordPolicy, SessionIssuer, TokenAuthenticator, TokenRevocationList, User, UserDirectory,
    UserRole,
};
use bookvault_core::config::auth::AuthConfig;
use bookvault_core::config::logging::LoggingConfig;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let logging = LoggingConfig::default();
        let builder = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
        let _ = if logging.json_output() {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

/// In-memory stand-in for the external user directory.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryDirectory {
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn set_role(&self, id: Uuid, role: UserRole) {
        if let Some(user) = self.users.lock().unwrap().get_mut(&id) {
            user.role = role;
        }
    }

    pub fn remove(&self, id: Uuid) {
        self.users.lock().unwrap().remove(&id);
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().get_mut(&id) {
            user.password_hash = password_hash.to_string();
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn mark_verified(&self, id: Uuid) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().get_mut(&id) {
            user.is_verified = true;
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// Fully wired auth core over an in-memory directory and blocklist.
pub struct TestHarness {
    pub config: AuthConfig,
    pub directory: Arc<InMemoryDirectory>,
    pub hasher: Arc<PasswordHasher>,
    pub encoder: Arc<JwtEncoder>,
    pub decoder: Arc<JwtDecoder>,
    pub revocations: Arc<TokenRevocationList>,
    pub issuer: SessionIssuer,
    pub accounts: AccountService,
    pub access_auth: TokenAuthenticator,
    pub refresh_auth: TokenAuthenticator,
}

impl TestHarness {
    pub async fn new() -> Self {
        init_tracing();

        let config = AuthConfig::default();

        let store = bookvault::blocklist::connect(&BlocklistConfig::default())
            .await
            .expect("Failed to open in-memory blocklist");

        let directory = Arc::new(InMemoryDirectory::default());
        let hasher = Arc::new(PasswordHasher::new(&config));
        let encoder = Arc::new(JwtEncoder::new(&config).expect("Failed to build encoder"));
        let decoder = Arc::new(JwtDecoder::new(&config).expect("Failed to build decoder"));
        let email_codec = Arc::new(
            bookvault::EmailTokenCodec::new(&config).expect("Failed to build email codec"),
        );
        let revocations = Arc::new(TokenRevocationList::new(store, &config));

        let issuer = SessionIssuer::new(
            Arc::clone(&directory) as Arc<dyn UserDirectory>,
            Arc::clone(&hasher),
            Arc::clone(&encoder),
            Arc::clone(&revocations),
        );

        let accounts = AccountService::new(
            Arc::clone(&directory) as Arc<dyn UserDirectory>,
            Arc::clone(&hasher),
            PasswordPolicy::new(&config),
            Arc::clone(&email_codec),
        );

        let access_auth =
            TokenAuthenticator::access(Arc::clone(&decoder), Arc::clone(&revocations));
        let refresh_auth =
            TokenAuthenticator::refresh(Arc::clone(&decoder), Arc::clone(&revocations));

        Self {
            config,
            directory,
            hasher,
            encoder,
            decoder,
            revocations,
            issuer,
            accounts,
            access_auth,
            refresh_auth,
        }
    }

    /// Registers a verified user and returns the stored record.
    pub fn register(&self, username: &str, email: &str, password: &str, role: UserRole) -> User {
        self.register_with_verified(username, email, password, role, true)
    }

    pub fn register_with_verified(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: UserRole,
        is_verified: bool,
    ) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: self.hasher.hash(password).expect("Failed to hash password"),
            role,
            is_verified,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.directory.insert(user.clone());
        user
    }

    /// Formats a token as an Authorization header value.
    pub fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }
}
