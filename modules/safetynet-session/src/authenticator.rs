use async_trait::async_trait;

use safetynet_common::{Identity, Role};

/// Credential check behind the login form. Returns the identity to install
/// on success; `None` never says whether the user or the password was wrong.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Option<Identity>;
}

/// Accepts exactly one configured email/password pair and yields the fixed
/// administrator record. Stand-in until a real verifier is wired in.
#[derive(Debug, Clone)]
pub struct StaticCredentialAuthenticator {
    email: String,
    password: String,
}

impl StaticCredentialAuthenticator {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn admin_identity(&self) -> Identity {
        Identity {
            id: "admin-1".to_string(),
            name: "Admin User".to_string(),
            email: self.email.clone(),
            role: Role::Admin,
        }
    }
}

#[async_trait]
impl Authenticator for StaticCredentialAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Option<Identity> {
        if constant_time_eq(email.as_bytes(), self.email.as_bytes())
            & constant_time_eq(password.as_bytes(), self.password.as_bytes())
        {
            Some(self.admin_identity())
        } else {
            None
        }
    }
}

/// Constant-time comparison to prevent timing attacks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> StaticCredentialAuthenticator {
        StaticCredentialAuthenticator::new("admin@safetynet.com", "admin123")
    }

    #[tokio::test]
    async fn exact_pair_yields_admin() {
        let identity = authenticator()
            .authenticate("admin@safetynet.com", "admin123")
            .await
            .unwrap();
        assert_eq!(identity.id, "admin-1");
        assert_eq!(identity.name, "Admin User");
        assert!(identity.is_admin());
    }

    #[tokio::test]
    async fn match_is_exact() {
        let auth = authenticator();
        assert!(auth.authenticate("ADMIN@safetynet.com", "admin123").await.is_none());
        assert!(auth.authenticate("admin@safetynet.com", "admin123 ").await.is_none());
        assert!(auth.authenticate("", "").await.is_none());
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
