//! Auth endpoints consumed by the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthApi`] is the seam between [`crate::state::session::SessionStore`]
//! and the network: the browser build uses [`HttpAuthApi`], tests substitute
//! a scripted fake.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::http::{HttpClient, Method, json_body};
use super::types::{LoginRequest, LoginResponse, Profile, RegisterRequest};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const ME_PATH: &str = "/auth/me";

/// The `/auth/*` surface of the backend.
///
/// Futures are `?Send` because browser fetch futures are tied to the JS
/// event loop.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError>;

    /// `POST /auth/refresh?refreshToken=<token>`.
    async fn refresh(&self, refresh_token: &str) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/logout`.
    async fn logout(&self, access_token: &str) -> Result<(), ApiError>;

    /// `GET /auth/me`.
    async fn current_user(&self, access_token: &str) -> Result<Profile, ApiError>;
}

/// [`AuthApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    http: HttpClient,
}

impl HttpAuthApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

fn refresh_query(refresh_token: &str) -> Vec<(&'static str, String)> {
    vec![("refreshToken", refresh_token.to_owned())]
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.http.send(Method::Post, LOGIN_PATH, &[], Some(json_body(req)?), None).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.http.send(Method::Post, REGISTER_PATH, &[], Some(json_body(req)?), None).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<LoginResponse, ApiError> {
        self.http.send(Method::Post, REFRESH_PATH, &refresh_query(refresh_token), None, None).await
    }

    async fn logout(&self, access_token: &str) -> Result<(), ApiError> {
        self.http.send(Method::Post, LOGOUT_PATH, &[], None, Some(access_token)).await
    }

    async fn current_user(&self, access_token: &str) -> Result<Profile, ApiError> {
        self.http.send(Method::Get, ME_PATH, &[], None, Some(access_token)).await
    }
}
