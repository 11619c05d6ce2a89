use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{debug, warn};

use safetynet_common::{Identity, SafetyNetError};
use safetynet_session::{
    constant_time_eq, Access, IdentityStore, SessionContext, DASHBOARD_PATH, LOGIN_PATH,
};

use crate::components::NavState;
use crate::rest::ApiError;
use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

const COOKIE_NAME: &str = "sn_identity";
/// Browsers cap cookie lifetime at 400 days.
const COOKIE_MAX_AGE_SECS: i64 = 400 * 24 * 3600;

/// Identity slot persisted in a signed cookie: `hex(json)|hex(hmac)`.
///
/// Reads come from the request's Cookie header; writes are collected as a
/// pending Set-Cookie value for the handler to attach to its response.
#[derive(Debug, Clone)]
pub struct CookieIdentityStore {
    secret: String,
    current: Option<String>,
    pending: Option<String>,
}

impl CookieIdentityStore {
    pub fn new(cookie_value: Option<String>, secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            current: cookie_value,
            pending: None,
        }
    }

    pub fn from_headers(headers: &HeaderMap, secret: &str) -> Self {
        let cookie_header = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let value = parse_cookie(cookie_header, COOKIE_NAME).map(str::to_string);
        Self::new(value, secret)
    }

    /// The Set-Cookie header value produced by the last save/clear, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Attach the pending Set-Cookie header, if any, to `response`.
    pub fn apply_to(&self, response: &mut Response) {
        let Some(cookie) = self.pending.as_deref() else {
            return;
        };
        match HeaderValue::from_str(cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Identity cookie is not a valid header value"),
        }
    }
}

impl IdentityStore for CookieIdentityStore {
    fn load(&self) -> Option<Identity> {
        let value = self.current.as_deref()?;
        let identity = verify_identity(value, &self.secret);
        if identity.is_none() {
            debug!("Ignoring unverifiable identity cookie");
        }
        identity
    }

    fn save(&mut self, identity: &Identity) {
        match encode_identity(identity, &self.secret) {
            Some(value) => {
                self.pending = Some(identity_cookie(&value));
                self.current = Some(value);
            }
            None => warn!(identity_id = %identity.id, "Failed to encode identity cookie"),
        }
    }

    fn clear(&mut self) {
        self.current = None;
        self.pending = Some(clear_identity_cookie());
    }
}

/// Session context for the current request, restored from its cookie.
fn session_from_parts(parts: &Parts, state: &AppState) -> SessionContext<CookieIdentityStore> {
    let store = CookieIdentityStore::from_headers(&parts.headers, state.config.session_secret());
    SessionContext::restored(store)
}

/// Whoever is browsing, signed in or not. Never rejects.
pub struct Viewer(pub SessionContext<CookieIdentityStore>);

impl Viewer {
    pub fn nav(&self) -> NavState {
        NavState::from_session(&self.0)
    }
}

impl FromRequestParts<Arc<AppState>> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Viewer(session_from_parts(parts, state)))
    }
}

/// Admin page session. Missing identity redirects to /login; a non-admin
/// identity redirects to /dashboard.
pub struct AdminSession {
    pub identity: Identity,
    pub nav: NavState,
}

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let ctx = session_from_parts(parts, state);
        match ctx.guard(parts.uri.path(), true) {
            Access::Redirect(to) => Err(Redirect::to(to).into_response()),
            Access::Allow => match ctx.identity() {
                Some(identity) => Ok(AdminSession {
                    identity: identity.clone(),
                    nav: NavState::from_session(&ctx),
                }),
                None => Err(Redirect::to(LOGIN_PATH).into_response()),
            },
        }
    }
}

/// JSON API counterpart of [`AdminSession`]: answers 401/403 instead of
/// redirecting.
pub struct ApiAdmin {
    pub identity: Identity,
}

impl FromRequestParts<Arc<AppState>> for ApiAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let ctx = session_from_parts(parts, state);
        match (ctx.guard(parts.uri.path(), true), ctx.identity()) {
            (Access::Allow, Some(identity)) => Ok(ApiAdmin {
                identity: identity.clone(),
            }),
            (Access::Redirect(DASHBOARD_PATH), _) => Err(SafetyNetError::Forbidden.into()),
            _ => Err(SafetyNetError::Unauthorized.into()),
        }
    }
}

/// Signed cookie value for `identity`: `hex(json)|hex(sig)`.
pub fn encode_identity(identity: &Identity, secret: &str) -> Option<String> {
    let json = serde_json::to_vec(identity).ok()?;
    let payload = hex::encode(json);
    let sig = sign(&payload, secret);
    Some(format!("{payload}|{sig}"))
}

/// Verify a cookie value. Returns the identity if the signature matches.
pub fn verify_identity(value: &str, secret: &str) -> Option<Identity> {
    let (payload, sig) = value.split_once('|')?;
    let expected_sig = sign(payload, secret);
    if !constant_time_eq(sig.as_bytes(), expected_sig.as_bytes()) {
        return None;
    }
    let json = hex::decode(payload).ok()?;
    serde_json::from_slice(&json).ok()
}

/// Build the Set-Cookie header value.
/// In release builds, adds `Secure` flag to prevent transmission over HTTP.
fn identity_cookie(value: &str) -> String {
    let secure = if cfg!(debug_assertions) { "" } else { "; Secure" };
    format!(
        "{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={COOKIE_MAX_AGE_SECS}{secure}"
    )
}

/// Build a Set-Cookie header that clears the identity.
fn clear_identity_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn sign(payload: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Parse a specific cookie from the Cookie header string.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name) {
            if let Some(value) = value.strip_prefix('=') {
                return Some(value);
            }
        }
    }
    None
}
