//! Common test doubles shared across integration tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use alloy_primitives::Address;
use async_trait::async_trait;
use sessionkit_core::{
    AuthSdk, SessionError, SessionObserver, UserMetadata, WalletProvider,
};

/// In-memory wallet provider returning a fixed signer address.
pub struct StubProvider {
    address: Address,
    fail: AtomicBool,
}

impl StubProvider {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            fail: AtomicBool::new(false),
        }
    }

    #[allow(dead_code)]
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl WalletProvider for StubProvider {
    async fn signer_address(&self) -> Result<Address, SessionError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(SessionError::Provider {
                error: "stub provider failure".to_owned(),
            });
        }
        Ok(self.address)
    }
}

/// In-memory login SDK double with scriptable failures and call counters.
pub struct StubAuthSdk {
    email: String,
    token: String,
    logged_in: AtomicBool,
    fail_login: AtomicBool,
    fail_token: AtomicBool,
    fail_logout: AtomicBool,
    logout_calls: AtomicUsize,
    provider: Arc<StubProvider>,
}

impl StubAuthSdk {
    /// A logged-out SDK that will establish a session for `email` on login.
    pub fn anonymous(email: &str, address: Address) -> Self {
        Self {
            email: email.to_owned(),
            token: "did:token:fresh".to_owned(),
            logged_in: AtomicBool::new(false),
            fail_login: AtomicBool::new(false),
            fail_token: AtomicBool::new(false),
            fail_logout: AtomicBool::new(false),
            logout_calls: AtomicUsize::new(0),
            provider: Arc::new(StubProvider::new(address)),
        }
    }

    /// An SDK already holding a valid session for `email`.
    pub fn with_session(email: &str, address: Address) -> Self {
        let sdk = Self::anonymous(email, address);
        sdk.logged_in.store(true, Ordering::SeqCst);
        sdk
    }

    #[allow(dead_code)]
    pub fn set_fail_login(&self, fail: bool) {
        self.fail_login.store(fail, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn set_fail_token(&self, fail: bool) {
        self.fail_token.store(fail, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn set_fail_logout(&self, fail: bool) {
        self.fail_logout.store(fail, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn is_session_active(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthSdk for StubAuthSdk {
    async fn login_with_link(&self, _email: &str) -> Result<(), SessionError> {
        if self.fail_login.load(Ordering::SeqCst) {
            return Err(SessionError::Sdk {
                operation: "login_with_link",
                error: "user closed the verification window".to_owned(),
            });
        }
        self.logged_in.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn logout(&self) -> Result<(), SessionError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(SessionError::Sdk {
                operation: "logout",
                error: "network unreachable".to_owned(),
            });
        }
        self.logged_in.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.logged_in.load(Ordering::SeqCst))
    }

    async fn user_metadata(&self) -> Result<UserMetadata, SessionError> {
        if !self.logged_in.load(Ordering::SeqCst) {
            return Err(SessionError::Sdk {
                operation: "user_metadata",
                error: "no active session".to_owned(),
            });
        }
        Ok(UserMetadata {
            email: self.email.clone(),
        })
    }

    async fn id_token(&self) -> Result<String, SessionError> {
        if self.fail_token.load(Ordering::SeqCst)
            || !self.logged_in.load(Ordering::SeqCst)
        {
            return Err(SessionError::Sdk {
                operation: "id_token",
                error: "no active session".to_owned(),
            });
        }
        Ok(self.token.clone())
    }

    fn wallet_provider(&self) -> Result<Arc<dyn WalletProvider>, SessionError> {
        Ok(Arc::clone(&self.provider) as Arc<dyn WalletProvider>)
    }
}

/// Observer double recording emitted navigations and error notifications.
#[derive(Default)]
pub struct RecordingObserver {
    navigations: AtomicUsize,
    errors: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn navigations(&self) -> usize {
        self.navigations.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("errors lock").clone()
    }
}

impl SessionObserver for RecordingObserver {
    fn navigate_home(&self) {
        self.navigations.fetch_add(1, Ordering::SeqCst);
    }

    fn session_error(&self, message: String) {
        self.errors.lock().expect("errors lock").push(message);
    }
}
