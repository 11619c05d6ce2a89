use tracing::{debug, info};

use safetynet_common::Identity;

use crate::authenticator::Authenticator;
use crate::identity_store::IdentityStore;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Per-viewer session state: the current identity plus the store it is
/// persisted in. Built with `restore_identity`, torn down with `logout`.
#[derive(Debug)]
pub struct SessionContext<S> {
    store: S,
    identity: Option<Identity>,
    loading: bool,
}

impl<S: IdentityStore> SessionContext<S> {
    /// A context that has not yet consulted its store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            identity: None,
            loading: true,
        }
    }

    /// A context with the persisted identity already restored.
    pub fn restored(store: S) -> Self {
        let mut ctx = Self::new(store);
        ctx.restore_identity();
        ctx
    }

    /// Load whatever identity the store holds. Loading ends either way.
    pub fn restore_identity(&mut self) {
        self.identity = self.store.load();
        self.loading = false;
        debug!(restored = self.identity.is_some(), "Identity restore finished");
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Check credentials with `authenticator`; on success install and
    /// persist the returned identity. A failure changes nothing.
    pub async fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        email: &str,
        password: &str,
    ) -> bool {
        match authenticator.authenticate(email, password).await {
            Some(identity) => {
                self.store.save(&identity);
                info!(identity_id = %identity.id, role = %identity.role, "Login succeeded");
                self.identity = Some(identity);
                true
            }
            None => {
                info!("Login rejected");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            info!(identity_id = %identity.id, "Logged out");
        }
        self.store.clear();
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(Identity::is_admin)
    }

    /// Decide whether the viewer may enter `target`.
    pub fn guard(&self, target: &str, require_admin: bool) -> Access {
        if self.loading {
            return Access::Allow;
        }
        if self.identity.is_none() {
            debug!(path = target, "No identity, redirecting to login");
            return Access::Redirect(LOGIN_PATH);
        }
        if require_admin && !self.is_admin() {
            debug!(path = target, "Admin role required, redirecting to dashboard");
            return Access::Redirect(DASHBOARD_PATH);
        }
        Access::Allow
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
