//! Session store: tokens, refresh token, profile, and the loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is created at startup and shared through Leptos
//! context. The navigation guard reads [`SessionStore::snapshot`]; login,
//! logout and the course pages drive the mutation API.
//!
//! INVARIANTS
//! ==========
//! - Memory and storage agree after every successful mutation.
//! - Every clear wipes memory and all three storage slots together.
//! - Mutating async operations are serialized by `ops`, so a logout racing a
//!   background refresh cannot interleave their writes.
//!
//! ERROR HANDLING
//! ==============
//! Login/register/refresh errors propagate. Logout network errors are logged
//! and swallowed. A failed profile fetch clears the whole session: a token
//! that cannot fetch its own profile is treated as invalid, even when the
//! failure was transport-level.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, PoisonError};

use futures::future::LocalBoxFuture;
use futures::lock::Mutex;

use super::credentials::{
    ACCESS_TOKEN_KEY, CredentialStore, PROFILE_KEY, REFRESH_TOKEN_KEY, StorageParseError,
};
use crate::config::TokenLifetimes;
use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, Profile, RegisterRequest, Role};

/// In-memory authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl Session {
    /// Logged in means both an access token and a profile are held.
    pub fn is_logged_in(&self) -> bool {
        !self.access_token.is_empty() && self.profile.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }

    pub fn is_student(&self) -> bool {
        self.role() == Some(Role::Student)
    }

    pub fn is_teacher(&self) -> bool {
        self.role() == Some(Role::Teacher)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Name to greet the user with; empty when no profile is loaded.
    pub fn display_name(&self) -> &str {
        self.profile.as_ref().map_or("", Profile::display_name)
    }
}

/// What [`SessionStore::init_user_info`] found in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No token pair was stored.
    Empty,
    /// Tokens and profile were both restored.
    Restored,
    /// Tokens were restored without a profile; a profile fetch was scheduled.
    NeedsProfile,
}

type Observer = Box<dyn Fn(&Session) + Send + Sync>;

pub struct SessionStore<A> {
    api: A,
    tokens: Box<dyn CredentialStore>,
    profiles: Box<dyn CredentialStore>,
    lifetimes: TokenLifetimes,
    state: RwLock<Session>,
    ops: Mutex<()>,
    observer: RwLock<Option<Observer>>,
}

impl<A: AuthApi> SessionStore<A> {
    /// Create an empty store. Call [`Self::init_user_info`] to restore a
    /// previous session.
    pub fn new(
        api: A,
        tokens: Box<dyn CredentialStore>,
        profiles: Box<dyn CredentialStore>,
        lifetimes: TokenLifetimes,
    ) -> Self {
        Self {
            api,
            tokens,
            profiles,
            lifetimes,
            state: RwLock::new(Session::default()),
            ops: Mutex::new(()),
            observer: RwLock::new(None),
        }
    }

    /// Register the callback notified with a fresh snapshot after each change.
    pub fn set_observer<F>(&self, observer: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        *self.observer.write().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(observer));
    }

    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().is_logged_in()
    }

    pub fn access_token(&self) -> String {
        self.read().access_token.clone()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.read().profile.clone()
    }

    /// Authenticate with username and password.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`ApiError`] (typically `Auth` for bad
    /// credentials, `Network` when unreachable); state is left untouched.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError> {
        let _op = self.ops.lock().await;
        self.update(|s| s.loading = true);
        let result = self.api.login(&req).await;
        match &result {
            Ok(resp) => {
                self.persist_login(resp);
                self.update(|s| {
                    apply_login(s, resp);
                    s.loading = false;
                });
                log::info!("logged in as {}", resp.user_info.username);
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.update(|s| s.loading = false);
            }
        }
        result
    }

    /// Create an account. Does not log the new user in.
    ///
    /// # Errors
    ///
    /// Returns `Validation` or `Conflict` (duplicate username) from the backend.
    pub async fn register(&self, req: RegisterRequest) -> Result<(), ApiError> {
        let _op = self.ops.lock().await;
        self.update(|s| s.loading = true);
        let result = self.api.register(&req).await;
        self.update(|s| s.loading = false);
        result
    }

    /// End the session. Always succeeds locally.
    pub async fn logout(&self) {
        let _op = self.ops.lock().await;
        let token = self.access_token();
        if !token.is_empty() {
            if let Err(e) = self.api.logout(&token).await {
                log::warn!("logout request failed: {e}");
            }
        }
        self.clear_auth_data();
    }

    /// Re-fetch the profile for the held access token.
    ///
    /// Returns `None` without a network call when no token is held. Any fetch
    /// failure clears the whole session.
    pub async fn get_current_user(&self) -> Option<Profile> {
        let _op = self.ops.lock().await;
        let token = self.access_token();
        if token.is_empty() {
            return None;
        }
        match self.api.current_user(&token).await {
            Ok(profile) => {
                self.persist_profile(&profile);
                self.update(|s| s.profile = Some(profile.clone()));
                Some(profile)
            }
            Err(e) => {
                log::warn!("fetching current user failed, clearing session: {e}");
                self.clear_auth_data();
                None
            }
        }
    }

    /// Exchange the refresh token for a new token pair and profile.
    ///
    /// # Errors
    ///
    /// Returns `Auth` without a network call when no refresh token is held,
    /// or the backend error when the exchange fails. Either way the session is
    /// cleared and the caller must treat the user as logged out.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let _op = self.ops.lock().await;
        let refresh = self.read().refresh_token.clone();
        if refresh.is_empty() {
            self.clear_auth_data();
            return Err(ApiError::Auth("no refresh token available".to_owned()));
        }
        match self.api.refresh(&refresh).await {
            Ok(resp) => {
                self.persist_login(&resp);
                self.update(|s| apply_login(s, &resp));
                Ok(resp.access_token)
            }
            Err(e) => {
                log::warn!("token refresh failed, clearing session: {e}");
                self.clear_auth_data();
                Err(e)
            }
        }
    }

    /// Run an authenticated call with the current access token.
    ///
    /// If the backend rejects the token, the token pair is refreshed once and
    /// the call is replayed with the new token.
    ///
    /// # Errors
    ///
    /// Returns `Auth` when logged out or when the refresh fails, otherwise
    /// whatever `call` returns.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> Result<T, ApiError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let token = self.access_token();
        if token.is_empty() {
            return Err(ApiError::Auth("not logged in".to_owned()));
        }
        match call(token).await {
            Err(e) if e.is_auth() => {
                log::info!("access token rejected, refreshing");
                let fresh = self.refresh_access_token().await?;
                call(fresh).await
            }
            other => other,
        }
    }

    /// Load the cached profile slot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageParseError`] when the slot holds invalid JSON.
    pub fn load_profile(&self) -> Result<Option<Profile>, StorageParseError> {
        let Some(raw) = self.profiles.get(PROFILE_KEY) else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| StorageParseError(e.to_string()))
    }

    /// Clear memory and all three storage slots.
    pub fn clear_auth_data(&self) {
        self.tokens.remove(ACCESS_TOKEN_KEY);
        self.tokens.remove(REFRESH_TOKEN_KEY);
        self.profiles.remove(PROFILE_KEY);
        self.update(|s| {
            s.access_token.clear();
            s.refresh_token.clear();
            s.profile = None;
        });
    }

    fn persist_login(&self, resp: &LoginResponse) {
        self.tokens
            .set(ACCESS_TOKEN_KEY, &resp.access_token, Some(self.lifetimes.access_days));
        self.tokens
            .set(REFRESH_TOKEN_KEY, &resp.refresh_token, Some(self.lifetimes.refresh_days));
        self.persist_profile(&resp.user_info);
    }

    fn persist_profile(&self, profile: &Profile) {
        match serde_json::to_string(profile) {
            Ok(raw) => self.profiles.set(PROFILE_KEY, &raw, None),
            Err(e) => log::warn!("could not serialize profile: {e}"),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut state = self.write();
            f(&mut state);
            state.clone()
        };
        let observer = self.observer.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(observer) = observer.as_ref() {
            observer(&snapshot);
        }
    }
}

impl<A: AuthApi + 'static> SessionStore<A> {
    /// Restore the session persisted by a previous page load.
    ///
    /// Tokens are restored only as a pair. A corrupt profile slot is removed
    /// on its own. When tokens come back without a profile, a
    /// [`Self::get_current_user`] call is handed to `spawn`; if that fetch
    /// fails, the restored tokens are cleared too.
    pub fn init_user_info<S>(self: &Arc<Self>, spawn: S) -> RestoreOutcome
    where
        S: FnOnce(LocalBoxFuture<'static, ()>),
    {
        let access = self.tokens.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty());
        let refresh = self.tokens.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty());
        let pair = access.zip(refresh);

        let profile = self.load_profile().unwrap_or_else(|e| {
            log::warn!("discarding cached profile: {e}");
            self.profiles.remove(PROFILE_KEY);
            None
        });
        let has_profile = profile.is_some();
        let has_tokens = pair.is_some();

        self.update(|s| {
            if let Some((access, refresh)) = pair {
                s.access_token = access;
                s.refresh_token = refresh;
            }
            s.profile = profile;
        });

        match (has_tokens, has_profile) {
            (false, _) => RestoreOutcome::Empty,
            (true, true) => RestoreOutcome::Restored,
            (true, false) => {
                let store = Arc::clone(self);
                spawn(Box::pin(async move {
                    store.get_current_user().await;
                }));
                RestoreOutcome::NeedsProfile
            }
        }
    }
}

fn apply_login(session: &mut Session, resp: &LoginResponse) {
    session.access_token.clone_from(&resp.access_token);
    session.refresh_token.clone_from(&resp.refresh_token);
    session.profile = Some(resp.user_info.clone());
}
