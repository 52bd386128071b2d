use dioxus::prelude::*;

use crate::model::user::UserDto;

#[cfg(feature = "web")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(feature = "web")]
use crate::client::constant::TOKEN_STORAGE_KEY;

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Stored token not checked yet
    Initializing,
    /// Token accepted by `/api/auth/me`
    Authenticated(UserDto),
    /// No token, or the token was rejected
    NotLoggedIn,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Shared authentication state, provided once by `App`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    /// Stores the token and marks the user as logged in.
    pub fn login(&mut self, access_token: &str, user: UserDto) {
        #[cfg(feature = "web")]
        if let Err(e) = LocalStorage::set(TOKEN_STORAGE_KEY, access_token) {
            dioxus_logger::tracing::error!("Failed to persist access token: {}", e);
        }
        #[cfg(not(feature = "web"))]
        let _ = access_token;

        self.inner.set(AuthState::Authenticated(user));
    }

    /// Replaces the profile after `/api/auth/me` answered.
    pub fn set_user(&mut self, user: Option<UserDto>) {
        match user {
            Some(user) => self.inner.set(AuthState::Authenticated(user)),
            None => self.logout(),
        }
    }

    pub fn logout(&mut self) {
        #[cfg(feature = "web")]
        LocalStorage::delete(TOKEN_STORAGE_KEY);

        self.inner.set(AuthState::NotLoggedIn);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Access token saved by the last login, if any.
#[cfg(feature = "web")]
pub fn stored_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_STORAGE_KEY).ok()
}
