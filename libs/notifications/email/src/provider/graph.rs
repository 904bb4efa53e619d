//! Microsoft Graph provider using the OAuth2 client-credentials grant
//!
//! Sends email through the Graph `sendMail` API as a fixed service mailbox.
//! The app registration needs the application-level `Mail.Send` permission
//! with admin consent.
//!
//! ## Setup
//!
//! 1. Register an application in Entra ID and create a client secret
//! 2. Grant `Mail.Send` (application) and consent for the tenant
//! 3. Set environment variables:
//!    - `CLIENT_ID` - application (client) ID
//!    - `TENANT_ID` - directory (tenant) ID
//!    - `CLIENT_SECRET` - client secret value

use crate::models::Email;
use crate::provider::{EmailProvider, SendResult};
use async_trait::async_trait;
use eyre::{eyre, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
const AUTHORITY_BASE_URL: &str = "https://login.microsoftonline.com";
const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

/// The service mailbox every message is sent from.
pub const SENDER_ADDRESS: &str = "connect@drivingmaster.in";

/// Microsoft Graph provider using client credentials
pub struct GraphProvider {
    client_id: String,
    tenant_id: String,
    client_secret: String,
    sender: String,
    client: Client,
    /// Cached access token with expiry
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: u64,
}

/// Token response from the Microsoft identity platform
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
    #[allow(dead_code)]
    token_type: String,
}

/// Graph sendMail request body
#[derive(Serialize)]
struct SendMailRequest<'a> {
    message: Message<'a>,
    #[serde(rename = "saveToSentItems")]
    save_to_sent_items: bool,
}

#[derive(Serialize)]
struct Message<'a> {
    subject: &'a str,
    body: MessageBody<'a>,
    #[serde(rename = "toRecipients")]
    to_recipients: Vec<Recipient<'a>>,
    from: Recipient<'a>,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    #[serde(rename = "contentType")]
    content_type: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct Recipient<'a> {
    #[serde(rename = "emailAddress")]
    email_address: EmailAddress<'a>,
}

#[derive(Serialize)]
struct EmailAddress<'a> {
    address: &'a str,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl GraphProvider {
    /// Create a new GraphProvider
    pub fn new(
        client_id: impl Into<String>,
        tenant_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            tenant_id: tenant_id.into(),
            client_secret: client_secret.into(),
            sender: SENDER_ADDRESS.to_string(),
            client: Client::new(),
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Create from environment variables
    ///
    /// Expects:
    /// - `CLIENT_ID` - application (client) ID
    /// - `TENANT_ID` - directory (tenant) ID
    /// - `CLIENT_SECRET` - client secret value
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("CLIENT_ID").map_err(|_| eyre!("CLIENT_ID not set"))?;
        let tenant_id = std::env::var("TENANT_ID").map_err(|_| eyre!("TENANT_ID not set"))?;
        let client_secret =
            std::env::var("CLIENT_SECRET").map_err(|_| eyre!("CLIENT_SECRET not set"))?;

        Ok(Self::new(client_id, tenant_id, client_secret))
    }

    /// The mailbox messages are sent from
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Get a valid access token, acquiring a fresh one if necessary
    async fn get_access_token(&self) -> Result<String> {
        // Check cache first
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                // Use token if it has at least 60 seconds before expiry
                if cached.expires_at > unix_now() + 60 {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let token = self.acquire_token().await?;

        // Cache the token
        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                access_token: token.access_token.clone(),
                expires_at: unix_now() + token.expires_in,
            });
        }

        Ok(token.access_token)
    }

    /// Acquire an access token via the client-credentials grant
    async fn acquire_token(&self) -> Result<TokenResponse> {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            AUTHORITY_BASE_URL, self.tenant_id
        );

        let response = self
            .client
            .post(&token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", GRAPH_SCOPE),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .map_err(|e| eyre!("Token request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                error = %error_body,
                "Error acquiring access token"
            );
            return Err(eyre!("Failed to acquire access token: {}", error_body));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| eyre!("Failed to parse token response: {}", e))?;

        info!("Access token acquired successfully");
        Ok(token)
    }
}

#[async_trait]
impl EmailProvider for GraphProvider {
    async fn send(&self, email: &Email) -> Result<SendResult> {
        let access_token = self.get_access_token().await?;

        let body_html = email
            .body_html
            .as_deref()
            .ok_or_else(|| eyre!("Email must have HTML content"))?;
        let from = email.from.as_deref().unwrap_or(&self.sender);

        let request = SendMailRequest {
            message: Message {
                subject: &email.subject,
                body: MessageBody {
                    content_type: "HTML",
                    content: body_html,
                },
                to_recipients: vec![Recipient {
                    email_address: EmailAddress { address: &email.to },
                }],
                from: Recipient {
                    email_address: EmailAddress { address: from },
                },
            },
            save_to_sent_items: true,
        };

        debug!(
            to = %email.to,
            subject = %email.subject,
            "Sending email via Microsoft Graph"
        );

        let send_url = format!("{}/users/{}/sendMail", GRAPH_BASE_URL, self.sender);
        let response = self
            .client
            .post(&send_url)
            .bearer_auth(&access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| eyre!("Graph sendMail request failed: {}", e))?;

        let status = response.status();

        if status.is_success() {
            // Graph returns 202 Accepted with an empty body
            debug!(message_id = %email.id, to = %email.to, "Email sent successfully via Graph");

            Ok(SendResult {
                message_id: email.id.clone(),
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            error!(
                to = %email.to,
                subject = %email.subject,
                status = %status,
                error = %error_body,
                "Graph sendMail error"
            );

            match status.as_u16() {
                429 => Err(eyre!("rate limit exceeded")),
                400 => Err(eyre!("invalid request: {}", error_body)),
                401 | 403 => Err(eyre!("authentication failed: {}", error_body)),
                _ => Err(eyre!("Graph error ({}): {}", status, error_body)),
            }
        }
    }

    async fn health_check(&self) -> Result<()> {
        // Verify we can get an access token
        self.get_access_token().await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "microsoft-graph"
    }
}
