//! Access gate behaviour across the login / restore / logout lifecycle.

use safetynet_common::{Identity, Role};
use safetynet_session::{
    Access, IdentityStore, MemoryIdentityStore, SessionContext, StaticCredentialAuthenticator,
    DASHBOARD_PATH, LOGIN_PATH,
};

fn authenticator() -> StaticCredentialAuthenticator {
    StaticCredentialAuthenticator::new("admin@safetynet.com", "admin123")
}

fn resident() -> Identity {
    Identity {
        id: "user-7".to_string(),
        name: "Resident".to_string(),
        email: "resident@example.com".to_string(),
        role: Role::User,
    }
}

// =========================================================================
// guard
// =========================================================================

#[test]
fn no_identity_redirects_to_login() {
    let ctx = SessionContext::restored(MemoryIdentityStore::new());
    assert_eq!(ctx.guard("/dashboard", false), Access::Redirect(LOGIN_PATH));
    assert_eq!(ctx.guard("/admin", true), Access::Redirect(LOGIN_PATH));
}

#[test]
fn non_admin_is_sent_to_dashboard() {
    let ctx = SessionContext::restored(MemoryIdentityStore::holding(resident()));
    assert_eq!(ctx.guard("/admin", true), Access::Redirect(DASHBOARD_PATH));
    assert_eq!(ctx.guard("/dashboard", false), Access::Allow);
}

#[tokio::test]
async fn admin_is_allowed() {
    let mut ctx = SessionContext::restored(MemoryIdentityStore::new());
    assert!(ctx.login(&authenticator(), "admin@safetynet.com", "admin123").await);
    assert_eq!(ctx.guard("/admin", true), Access::Allow);
}

#[test]
fn loading_context_allows_pending_restore() {
    let ctx = SessionContext::new(MemoryIdentityStore::new());
    assert!(ctx.is_loading());
    assert_eq!(ctx.guard("/admin", true), Access::Allow);
}

// =========================================================================
// login / logout
// =========================================================================

#[tokio::test]
async fn login_with_admin_credentials_grants_admin() {
    let mut ctx = SessionContext::restored(MemoryIdentityStore::new());
    assert!(ctx.login(&authenticator(), "admin@safetynet.com", "admin123").await);
    assert!(ctx.is_admin());
    assert_eq!(ctx.store().peek().map(|i| i.id.as_str()), Some("admin-1"));
}

#[tokio::test]
async fn failed_login_leaves_identity_unchanged() {
    let mut ctx = SessionContext::restored(MemoryIdentityStore::new());
    assert!(!ctx.login(&authenticator(), "admin@safetynet.com", "wrong").await);
    assert!(ctx.identity().is_none());
    assert!(ctx.store().peek().is_none());

    let mut ctx = SessionContext::restored(MemoryIdentityStore::holding(resident()));
    assert!(!ctx.login(&authenticator(), "someone@else.com", "admin123").await);
    assert_eq!(ctx.identity(), Some(&resident()));
    assert!(!ctx.is_admin());
}

#[tokio::test]
async fn logout_clears_identity_and_storage() {
    let mut ctx = SessionContext::restored(MemoryIdentityStore::new());
    ctx.login(&authenticator(), "admin@safetynet.com", "admin123").await;
    ctx.logout();

    assert!(ctx.identity().is_none());
    assert_eq!(ctx.guard("/admin", true), Access::Redirect(LOGIN_PATH));
    assert!(ctx.into_store().load().is_none());
}

#[tokio::test]
async fn identity_survives_a_fresh_context_over_the_same_store() {
    let mut ctx = SessionContext::restored(MemoryIdentityStore::new());
    ctx.login(&authenticator(), "admin@safetynet.com", "admin123").await;
    let store = ctx.into_store();

    let restored = SessionContext::restored(store);
    assert!(restored.is_admin());
    assert_eq!(restored.guard("/admin", true), Access::Allow);
}
