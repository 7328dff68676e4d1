use crate::config::MediaServiceConfig;
use crate::credential::credential_issuer::{CredentialError, CredentialIssuer};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use switchboard_core::{Credential, CredentialRequest};

/// Upper bound on token lifetime, one day.
const MAX_TTL_SECS: u64 = 24 * 60 * 60;

/// Track sources a joined participant may publish.
pub const PUBLISH_SOURCES: [&str; 4] = ["microphone", "camera", "screen_share", "screen_share_audio"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_sources: Vec<String>,
}

/// Claims of a media service access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// API key the token was signed with.
    pub iss: String,
    pub sub: String,
    /// Token id; the identity, as the media service expects.
    pub jti: String,
    pub name: String,
    pub nbf: i64,
    pub exp: i64,
    pub video: VideoGrant,
}

/// HS256 issuer for media service access tokens, scoped to one identity and one room.
pub struct JwtCredentialIssuer {
    api_key: String,
    encoding_key: EncodingKey,
    ws_url: String,
    ttl: Duration,
}

impl JwtCredentialIssuer {
    pub fn new(config: &MediaServiceConfig) -> Self {
        let ttl_secs = config.token_ttl_secs.min(MAX_TTL_SECS) as i64;
        Self {
            api_key: config.api_key.clone(),
            encoding_key: EncodingKey::from_secret(config.api_secret.as_bytes()),
            ws_url: config.ws_url.clone(),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn claims_for(&self, request: &CredentialRequest, now: DateTime<Utc>) -> AccessClaims {
        let expires = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);

        AccessClaims {
            iss: self.api_key.clone(),
            sub: request.identity.clone(),
            jti: request.identity.clone(),
            name: request
                .name
                .clone()
                .unwrap_or_else(|| request.identity.clone()),
            nbf: now.timestamp(),
            exp: expires.timestamp(),
            video: VideoGrant {
                room: request.room_name.clone(),
                room_join: true,
                can_publish: true,
                can_subscribe: true,
                can_publish_sources: PUBLISH_SOURCES.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

#[async_trait]
impl CredentialIssuer for JwtCredentialIssuer {
    async fn issue(&self, request: &CredentialRequest) -> Result<Credential, CredentialError> {
        let claims = self.claims_for(request, Utc::now());
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(Credential {
            token,
            ws_url: self.ws_url.clone(),
        })
    }
}
