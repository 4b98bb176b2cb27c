//! reqwest implementation of `OnboardingApiPort`.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use qw_core::onboarding::{ClaimReceipt, OnboardingStatus};
use qw_core::ports::{ApiError, OnboardingApiPort};
use qw_core::{AccessToken, OnboardingToken, Password, VerificationCode};

#[derive(Serialize)]
struct ClaimRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct CodeRequest<'a> {
    code: &'a str,
}

#[derive(Serialize)]
struct PasswordRequest<'a> {
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// HTTP client for the `/onboarding/*` endpoints.
#[derive(Debug, Clone)]
pub struct HttpOnboardingApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOnboardingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/onboarding/{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "onboarding api responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        warn!(endpoint, status = status.as_u16(), "onboarding api rejected request");
        if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Unauthorized { detail })
        } else {
            Err(ApiError::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        self.send(request, endpoint)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn authed_post(&self, path: &str, token: &OnboardingToken) -> RequestBuilder {
        self.http.post(self.url(path)).bearer_auth(token.expose())
    }
}

/// FastAPI puts a string in `detail` for handled errors and a list of
/// validation problems for 422s; only the string form is shown to users.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[async_trait]
impl OnboardingApiPort for HttpOnboardingApi {
    async fn claim(&self, first_name: &str, last_name: &str) -> Result<ClaimReceipt, ApiError> {
        let request = self.http.post(self.url("claim")).json(&ClaimRequest {
            first_name,
            last_name,
        });
        self.send_json(request, "claim").await
    }

    async fn status(&self, token: &OnboardingToken) -> Result<OnboardingStatus, ApiError> {
        let request = self.http.get(self.url("status")).bearer_auth(token.expose());
        self.send_json(request, "status").await
    }

    async fn submit_email(&self, token: &OnboardingToken, email: &str) -> Result<(), ApiError> {
        let request = self.authed_post("email", token).json(&EmailRequest { email });
        self.send(request, "email").await.map(|_| ())
    }

    async fn verify_code(
        &self,
        token: &OnboardingToken,
        code: &VerificationCode,
    ) -> Result<(), ApiError> {
        let request = self
            .authed_post("verify-code", token)
            .json(&CodeRequest {
                code: code.as_str(),
            });
        self.send(request, "verify-code").await.map(|_| ())
    }

    async fn resend_code(&self, token: &OnboardingToken) -> Result<(), ApiError> {
        let request = self.authed_post("resend-code", token);
        self.send(request, "resend-code").await.map(|_| ())
    }

    async fn set_password(
        &self,
        token: &OnboardingToken,
        password: &Password,
    ) -> Result<AccessToken, ApiError> {
        let request = self.authed_post("password", token).json(&PasswordRequest {
            password: password.expose(),
        });
        let response: TokenResponse = self.send_json(request, "password").await?;
        Ok(AccessToken::new(response.access_token))
    }
}
