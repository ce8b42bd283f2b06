// src/services/identity.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Identity-provider failure. The message is shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct AuthError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub provider: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Hosted identity and user-record store.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_account(&self, email: &str, password: &str) -> Result<UserRecord, AuthError>;
    async fn set_display_name(&self, uid: &str, name: &str) -> Result<(), AuthError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, AuthError>;
    async fn sign_in_with_popup(&self, provider: OAuthProvider) -> Result<UserRecord, AuthError>;
    async fn store_profile(&self, uid: &str, profile: &UserProfile) -> Result<(), AuthError>;
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Registration and login flows over an explicitly supplied provider handle.
#[derive(Clone)]
pub struct AccountService {
    provider: Arc<dyn IdentityProvider>,
}

impl AccountService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    pub async fn register_with_email(&self, form: &RegistrationForm) -> Result<UserProfile, AuthError> {
        let name = form.name.trim();
        let email = form.email.trim();

        let user = self.provider.create_account(email, &form.password).await?;
        self.provider.set_display_name(&user.uid, name).await?;

        let profile = UserProfile {
            name: name.to_string(),
            email: email.to_string(),
            phone: form.phone.trim().to_string(),
            provider: "email".to_string(),
            created_at: now_iso(),
        };
        self.provider.store_profile(&user.uid, &profile).await?;

        info!(uid = %user.uid, "registered account with email");
        Ok(profile)
    }

    pub async fn register_with_google(&self) -> Result<UserProfile, AuthError> {
        let user = self.provider.sign_in_with_popup(OAuthProvider::Google).await?;

        let profile = UserProfile {
            name: user.display_name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            phone: user.phone_number.clone().unwrap_or_default(),
            provider: "google".to_string(),
            created_at: now_iso(),
        };
        self.provider.store_profile(&user.uid, &profile).await?;

        info!(uid = %user.uid, "registered account with google");
        Ok(profile)
    }

    pub async fn login_with_email(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        self.provider.sign_in(email.trim(), password).await
    }

    pub async fn login_with_google(&self) -> Result<UserRecord, AuthError> {
        self.provider.sign_in_with_popup(OAuthProvider::Google).await
    }
}
