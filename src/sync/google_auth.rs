use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::storage::config::Config;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const REDIRECT_URI: &str = "http://localhost:8080";
const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read token cache: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse token: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Token has expired")]
    TokenExpired,
    #[error("No refresh token available")]
    NoRefreshToken,
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("OAuth error: {0}")]
    OAuthError(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenInfo {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl TokenInfo {
    pub fn new(access_token: String, expires_in_seconds: i64) -> Self {
        Self {
            access_token,
            refresh_token: None,
            expires_at: Utc::now() + chrono::Duration::seconds(expires_in_seconds),
        }
    }

    pub fn with_refresh_token(mut self, refresh_token: String) -> Self {
        self.refresh_token = Some(refresh_token);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.expires_at > Utc::now()
    }

    /// True when the token is within five minutes of expiring.
    pub fn needs_refresh(&self) -> bool {
        let buffer = chrono::Duration::minutes(5);
        self.expires_at <= Utc::now() + buffer
    }
}

/// On-disk cache for the OAuth2 token, next to the config file.
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, token: &TokenInfo) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(token)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn load(&self) -> Result<TokenInfo, AuthError> {
        let content = std::fs::read_to_string(&self.path)?;
        let token: TokenInfo = serde_json::from_str(&content)?;
        Ok(token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    refresh_token: Option<String>,
}

/// Obtains and refreshes Google OAuth2 credentials. The config is
/// passed in explicitly; nothing here reads global state.
pub struct GoogleAuthenticator {
    config: Config,
    cache: TokenCache,
    client: reqwest::Client,
}

impl GoogleAuthenticator {
    pub fn new(config: Config) -> Self {
        let cache = TokenCache::new(config.google.token_cache.clone());
        Self {
            config,
            cache,
            client: reqwest::Client::new(),
        }
    }

    /// Returns a usable access token: the cached one if still valid,
    /// a refreshed one if close to expiry, an error otherwise.
    pub async fn get_valid_token(&mut self) -> Result<TokenInfo, AuthError> {
        match self.cache.load() {
            Ok(token) if token.is_valid() && !token.needs_refresh() => Ok(token),
            Ok(token) if token.refresh_token.is_some() => self.refresh_token(&token).await,
            _ => Err(AuthError::TokenExpired),
        }
    }

    pub async fn refresh_token(&mut self, token: &TokenInfo) -> Result<TokenInfo, AuthError> {
        let refresh_token = token
            .refresh_token
            .as_ref()
            .ok_or(AuthError::NoRefreshToken)?;

        tracing::info!("Refreshing expiring access token");

        let response = self
            .request_token(&[
                ("client_id", self.config.google.client_id.as_str()),
                ("client_secret", self.config.google.client_secret.as_str()),
                ("refresh_token", refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .await?;

        let new_token = TokenInfo::new(response.access_token, response.expires_in)
            .with_refresh_token(refresh_token.clone());

        self.cache.save(&new_token)?;
        Ok(new_token)
    }

    pub async fn exchange_code_for_token(&mut self, code: &str) -> Result<TokenInfo, AuthError> {
        let response = self
            .request_token(&[
                ("client_id", self.config.google.client_id.as_str()),
                ("client_secret", self.config.google.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", REDIRECT_URI),
                ("grant_type", "authorization_code"),
            ])
            .await?;

        let new_token = TokenInfo::new(response.access_token, response.expires_in)
            .with_refresh_token(response.refresh_token.ok_or(AuthError::NoRefreshToken)?);

        self.cache.save(&new_token)?;
        Ok(new_token)
    }

    async fn request_token(&self, params: &[(&str, &str)]) -> Result<TokenResponse, AuthError> {
        let response = self
            .client
            .post(TOKEN_ENDPOINT)
            .form(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(AuthError::OAuthError(error_text));
        }

        Ok(response.json().await?)
    }

    pub fn get_auth_url(&self) -> String {
        format!(
            "https://accounts.google.com/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent",
            urlencoding::encode(&self.config.google.client_id),
            urlencoding::encode(REDIRECT_URI),
            urlencoding::encode(CALENDAR_SCOPE)
        )
    }

    pub fn print_auth_instructions(&self) {
        println!("\n=== Google Calendar Authentication ===\n");
        println!("To authenticate with Google Calendar:");
        println!("1. Visit this URL in your browser:\n");
        println!("{}\n", self.get_auth_url());
        println!("2. Sign in and authorize the application");
        println!("3. After authorizing, you'll be redirected to localhost:8080");
        println!("4. Copy the 'code' parameter from the URL");
        println!("5. Paste it when prompted\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_token() -> TokenInfo {
        TokenInfo::new("test_access_token".to_string(), 3600)
    }

    fn create_expired_token() -> TokenInfo {
        TokenInfo {
            access_token: "expired_token".to_string(),
            refresh_token: Some("refresh_token".to_string()),
            expires_at: Utc::now() - chrono::Duration::hours(1),
        }
    }

    #[test]
    fn new_token_is_valid() {
        assert!(create_test_token().is_valid());
    }

    #[test]
    fn expired_token_is_not_valid() {
        assert!(!create_expired_token().is_valid());
    }

    #[test]
    fn token_with_refresh_token() {
        let token = create_test_token().with_refresh_token("refresh_token".to_string());

        assert_eq!(token.refresh_token, Some("refresh_token".to_string()));
    }

    #[test]
    fn save_token_to_cache() {
        let temp_dir = TempDir::new().unwrap();
        let token_path = temp_dir.path().join("token.json");
        let cache = TokenCache::new(token_path.clone());

        cache.save(&create_test_token()).unwrap();

        assert!(token_path.exists());
    }

    #[test]
    fn load_token_from_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = TokenCache::new(temp_dir.path().join("token.json"));
        let original = create_test_token().with_refresh_token("refresh".to_string());

        cache.save(&original).unwrap();
        let loaded = cache.load().unwrap();

        assert_eq!(loaded.access_token, original.access_token);
        assert_eq!(loaded.refresh_token, original.refresh_token);
    }

    #[test]
    fn load_missing_token_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let cache = TokenCache::new(temp_dir.path().join("nonexistent.json"));

        assert!(cache.load().is_err());
    }

    #[test]
    fn soon_to_expire_token_needs_refresh() {
        let token = TokenInfo {
            access_token: "token".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_at: Utc::now() + chrono::Duration::minutes(3),
        };

        assert!(token.needs_refresh());
    }

    #[test]
    fn fresh_token_does_not_need_refresh() {
        assert!(!create_test_token().needs_refresh());
    }

    #[test]
    fn auth_url_carries_calendar_scope() {
        let auth = GoogleAuthenticator::new(Config::default());
        let url = auth.get_auth_url();

        assert!(url.contains("accounts.google.com"));
        assert!(url.contains(&urlencoding::encode(CALENDAR_SCOPE).to_string()));
    }
}
