//! Contact form domain: validation and submission planning shared with
//! the client, plus the server-side mail relay behind `/api/contact`.

use leptos::prelude::window;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use thiserror::Error;

#[cfg(feature = "ssr")]
use async_trait::async_trait;
#[cfg(feature = "ssr")]
use axum::{http::StatusCode, Extension, Json};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Payload exchanged with the relay endpoint. Fields default to empty on
/// deserialization so a missing field is rejected by the handler instead
/// of the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Hidden field genuine users never fill in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Outcome of the last submission attempt, as shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Matches the usual `^[^\s@]+@[^\s@]+\.[^\s@]+$` check: a single `@`
/// separating non-whitespace halves, with a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.name.is_empty() {
        errors.name = Some("Name is required");
    } else if form.name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters");
    }
    if form.email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(&form.email) {
        errors.email = Some("Please enter a valid email address");
    }
    if form.message.is_empty() {
        errors.message = Some("Message is required");
    } else if form.message.chars().count() < 10 {
        errors.message = Some("Message must be at least 10 characters");
    }
    errors
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPlan {
    /// Honeypot tripped: report success to the bot, send nothing.
    FeignSuccess,
    Reject(FieldErrors),
    Relay,
}

/// Decides what a submission attempt does. The honeypot wins over
/// validation so automated posts never see an error to iterate on.
pub fn plan_submission(form: &ContactForm) -> SubmissionPlan {
    if form.honeypot.as_deref().is_some_and(|h| !h.is_empty()) {
        return SubmissionPlan::FeignSuccess;
    }
    let errors = validate(form);
    if !errors.is_empty() {
        return SubmissionPlan::Reject(errors);
    }
    SubmissionPlan::Relay
}

/// POSTs the form to the relay endpoint. Ok only on a 2xx reply.
pub async fn post_contact(form: &ContactForm) -> Result<(), reqwest::Error> {
    reqwest::Client::new()
        .post(endpoint_url())
        .json(form)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

// The WASM fetch backend wants an absolute URL.
fn endpoint_url() -> String {
    match window().location().origin() {
        Ok(origin) => format!("{origin}{CONTACT_ENDPOINT}"),
        Err(_) => CONTACT_ENDPOINT.to_string(),
    }
}

/// Body shape of every `/api/contact` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReply {
    pub message: String,
}

/// Outgoing mail, composed but not yet handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub subject: String,
    pub html: String,
}

pub fn compose(form: &ContactForm) -> MailMessage {
    MailMessage {
        from: format!("\"{}\" <{}>", form.name, form.email),
        subject: format!("New Contact Form Submission from {}", form.name),
        html: format!(
            "<p><strong>Name:</strong> {}</p>\n<p><strong>Email:</strong> {}</p>\n<p><strong>Message:</strong> {}</p>",
            form.name, form.email, form.message
        ),
    }
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("mail relay is not configured: {0}")]
    Config(String),
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("couldn't build mail: {0}")]
    Mail(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Transport seam for the contact endpoint. Production speaks SMTP;
/// tests substitute a recording double.
#[cfg(feature = "ssr")]
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn deliver(&self, mail: &MailMessage) -> Result<(), ContactError>;
}

#[cfg(feature = "ssr")]
pub type DynMailRelay = Arc<dyn MailRelay>;

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub relay: String,
    pub username: String,
    pub password: String,
    pub recipient: String,
}

#[cfg(feature = "ssr")]
impl MailConfig {
    /// Reads SMTP settings from the environment. `None` means the site
    /// runs with the contact endpoint degraded to its 500 reply.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("SMTP_USERNAME").ok()?;
        let password = std::env::var("SMTP_PASSWORD").ok()?;
        let recipient = std::env::var("CONTACT_RECIPIENT").ok()?;
        let relay =
            std::env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        Some(Self {
            relay,
            username,
            password,
            recipient,
        })
    }
}

#[cfg(feature = "ssr")]
pub struct SmtpMailer {
    transport: lettre::AsyncSmtpTransport<lettre::Tokio1Executor>,
    recipient: lettre::message::Mailbox,
}

#[cfg(feature = "ssr")]
impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, ContactError> {
        use lettre::transport::smtp::authentication::Credentials;

        let transport = lettre::AsyncSmtpTransport::<lettre::Tokio1Executor>::relay(&config.relay)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let recipient = config.recipient.parse()?;
        Ok(Self {
            transport,
            recipient,
        })
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl MailRelay for SmtpMailer {
    async fn deliver(&self, mail: &MailMessage) -> Result<(), ContactError> {
        use lettre::{
            message::{header::ContentType, Mailbox},
            AsyncTransport, Message,
        };

        let from: Mailbox = mail.from.parse()?;
        let email = Message::builder()
            .from(from)
            .to(self.recipient.clone())
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(mail.html.clone())?;
        self.transport.send(email).await?;
        Ok(())
    }
}

/// Stands in when the environment carries no SMTP credentials: the rest
/// of the site works, submissions surface the 500 reply.
#[cfg(feature = "ssr")]
pub struct UnconfiguredRelay;

#[cfg(feature = "ssr")]
#[async_trait]
impl MailRelay for UnconfiguredRelay {
    async fn deliver(&self, _mail: &MailMessage) -> Result<(), ContactError> {
        Err(ContactError::Config(
            "SMTP_USERNAME, SMTP_PASSWORD, and CONTACT_RECIPIENT must be set".to_string(),
        ))
    }
}

/// Handler for `POST /api/contact`. Mounted with `routing::post` so any
/// other verb gets a 405 with an `Allow: POST` header from the router.
#[cfg(feature = "ssr")]
pub async fn submit(
    Extension(relay): Extension<DynMailRelay>,
    Json(form): Json<ContactForm>,
) -> (StatusCode, Json<ContactReply>) {
    if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactReply {
                message: "All fields are required.".to_string(),
            }),
        );
    }

    let mail = compose(&form);
    match relay.deliver(&mail).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ContactReply {
                message: "Message sent successfully!".to_string(),
            }),
        ),
        Err(err) => {
            tracing::error!("error sending email: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactReply {
                    message: "Failed to send message.".to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I'd like to connect.".to_string(),
            honeypot: None,
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        assert!(validate(&filled_form()).is_empty());
        assert_eq!(plan_submission(&filled_form()), SubmissionPlan::Relay);
    }

    #[test]
    fn rejects_missing_and_short_name() {
        let mut form = filled_form();
        form.name.clear();
        assert_eq!(validate(&form).name, Some("Name is required"));

        form.name = "J".to_string();
        assert_eq!(
            validate(&form).name,
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let mut form = filled_form();
        form.email = "janeexample.com".to_string();

        let errors = validate(&form);
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        // an invalid field means no network call is planned
        assert_eq!(plan_submission(&form), SubmissionPlan::Reject(errors));
    }

    #[test]
    fn rejects_short_message() {
        let mut form = filled_form();
        form.message = "Too short".to_string();

        let errors = validate(&form);
        assert_eq!(
            errors.message,
            Some("Message must be at least 10 characters")
        );
        assert_eq!(plan_submission(&form), SubmissionPlan::Reject(errors));
    }

    #[test]
    fn email_pattern_edge_cases() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe+tag@mail.example.co"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("janeexample.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exam ple.com"));
    }

    #[test]
    fn honeypot_feigns_success_without_sending() {
        let mut form = filled_form();
        form.honeypot = Some("gotcha".to_string());
        assert_eq!(plan_submission(&form), SubmissionPlan::FeignSuccess);

        // even when the rest of the form would fail validation
        form.name.clear();
        form.email.clear();
        form.message.clear();
        assert_eq!(plan_submission(&form), SubmissionPlan::FeignSuccess);
    }

    #[test]
    fn empty_honeypot_is_a_real_submission() {
        let mut form = filled_form();
        form.honeypot = Some(String::new());
        assert_eq!(plan_submission(&form), SubmissionPlan::Relay);
    }

    #[test]
    fn compose_embeds_all_fields() {
        let mail = compose(&filled_form());
        assert_eq!(mail.from, "\"Jane Doe\" <jane@example.com>");
        assert_eq!(mail.subject, "New Contact Form Submission from Jane Doe");
        assert!(mail.html.contains("Jane Doe"));
        assert!(mail.html.contains("jane@example.com"));
        assert!(mail.html.contains("Hello, I'd like to connect."));
    }

    #[test]
    fn missing_json_fields_deserialize_empty() {
        let form: ContactForm =
            serde_json::from_value(serde_json::json!({ "name": "Jane Doe" }))
                .expect("partial payload still parses");
        assert_eq!(form.name, "Jane Doe");
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(form.honeypot.is_none());
    }
}

#[cfg(all(test, feature = "ssr"))]
mod server_tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        routing::post,
        Extension, Router,
    };
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct RecordingRelay {
        sent: Mutex<Vec<MailMessage>>,
    }

    #[async_trait]
    impl MailRelay for RecordingRelay {
        async fn deliver(&self, mail: &MailMessage) -> Result<(), ContactError> {
            self.sent.lock().expect("lock poisoned").push(mail.clone());
            Ok(())
        }
    }

    struct FailingRelay;

    #[async_trait]
    impl MailRelay for FailingRelay {
        async fn deliver(&self, _mail: &MailMessage) -> Result<(), ContactError> {
            Err(ContactError::Config("down for the test".to_string()))
        }
    }

    fn contact_router(relay: DynMailRelay) -> Router {
        Router::new()
            .route(CONTACT_ENDPOINT, post(submit))
            .layer(Extension(relay))
    }

    fn json_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(CONTACT_ENDPOINT)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn reply_of(response: axum::response::Response) -> ContactReply {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("reply parses")
    }

    #[tokio::test]
    async fn well_formed_submission_relays_exactly_once() {
        let relay = Arc::new(RecordingRelay {
            sent: Mutex::new(Vec::new()),
        });
        let app = contact_router(relay.clone());

        let response = app
            .oneshot(json_request(serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": "Hello, I'd like to connect."
            })))
            .await
            .expect("request succeeds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(reply_of(response).await.message, "Message sent successfully!");

        let sent = relay.sent.lock().expect("lock poisoned");
        assert_eq!(sent.len(), 1);
        assert!(sent[0].html.contains("Jane Doe"));
        assert!(sent[0].html.contains("jane@example.com"));
        assert!(sent[0].html.contains("Hello, I'd like to connect."));
        assert_eq!(sent[0].from, "\"Jane Doe\" <jane@example.com>");
    }

    #[tokio::test]
    async fn missing_or_empty_fields_reject_without_mail() {
        let bodies = [
            serde_json::json!({ "email": "jane@example.com", "message": "Hello, I'd like to connect." }),
            serde_json::json!({ "name": "Jane Doe", "message": "Hello, I'd like to connect." }),
            serde_json::json!({ "name": "Jane Doe", "email": "jane@example.com" }),
            serde_json::json!({ "name": "", "email": "jane@example.com", "message": "Hello, I'd like to connect." }),
            serde_json::json!({ "name": "Jane Doe", "email": "", "message": "" }),
        ];

        for body in bodies {
            let relay = Arc::new(RecordingRelay {
                sent: Mutex::new(Vec::new()),
            });
            let response = contact_router(relay.clone())
                .oneshot(json_request(body))
                .await
                .expect("request succeeds");

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(reply_of(response).await.message, "All fields are required.");
            assert!(relay.sent.lock().expect("lock poisoned").is_empty());
        }
    }

    #[tokio::test]
    async fn non_post_methods_get_405_with_allow_header() {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let response = contact_router(Arc::new(UnconfiguredRelay))
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(CONTACT_ENDPOINT)
                        .body(Body::empty())
                        .expect("request builds"),
                )
                .await
                .expect("request succeeds");

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(
                response
                    .headers()
                    .get(header::ALLOW)
                    .and_then(|v| v.to_str().ok()),
                Some("POST")
            );
        }
    }

    #[tokio::test]
    async fn relay_failure_maps_to_500() {
        let response = contact_router(Arc::new(FailingRelay))
            .oneshot(json_request(serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": "Hello, I'd like to connect."
            })))
            .await
            .expect("request succeeds");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply_of(response).await.message, "Failed to send message.");
    }

    #[tokio::test]
    async fn honeypot_is_ignored_server_side() {
        // filtering bots is the client's job; the endpoint relays anyway
        let relay = Arc::new(RecordingRelay {
            sent: Mutex::new(Vec::new()),
        });
        let response = contact_router(relay.clone())
            .oneshot(json_request(serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": "Hello, I'd like to connect.",
                "honeypot": "bot was here"
            })))
            .await
            .expect("request succeeds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(relay.sent.lock().expect("lock poisoned").len(), 1);
    }
}
