use crate::i18n::{pick, Language};
use crate::logging::{log_event, LogLevel};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "g-recaptcha-response")]
    pub recaptcha_token: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("captcha token missing")]
    MissingCaptcha,
    #[error("form endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("form submission failed: {0}")]
    Transport(String),
    #[error("a submission is already in flight")]
    Busy,
}

impl SubmitError {
    pub fn alert(&self, language: Language) -> Option<&'static str> {
        match self {
            Self::MissingCaptcha => Some(pick(
                language,
                "Please complete the reCAPTCHA.",
                "لطفاً reCAPTCHA را تکمیل کنید.",
            )),
            Self::Rejected { .. } => Some(pick(
                language,
                "Failed to send message. Please try again.",
                "ارسال پیام با خطا مواجه شد. لطفاً دوباره تلاش کنید.",
            )),
            Self::Transport(_) => Some(pick(
                language,
                "An error occurred. Please try again later.",
                "خطایی رخ داد. لطفاً بعداً دوباره تلاش کنید.",
            )),
            Self::Busy => None,
        }
    }
}

pub fn success_alert(language: Language) -> &'static str {
    pick(language, "Message sent successfully!", "پیام با موفقیت ارسال شد!")
}

pub trait CaptchaWidget {
    fn reset(&self);
}

#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn send(&self, endpoint: &Url, payload: &ContactPayload) -> Result<u16, SubmitError>;
}

#[derive(Debug)]
pub struct ContactController<W> {
    form: ContactForm,
    captcha_token: Option<String>,
    submitting: bool,
    widget: W,
}

impl<W: CaptchaWidget> ContactController<W> {
    pub fn new(widget: W) -> Self {
        Self {
            form: ContactForm::default(),
            captcha_token: None,
            submitting: false,
            widget,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    pub fn set_captcha_token(&mut self, token: Option<String>) {
        self.captcha_token = token.filter(|token| !token.is_empty());
    }

    #[cfg(test)]
    pub fn has_captcha_token(&self) -> bool {
        self.captcha_token.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn begin(&mut self) -> Result<ContactPayload, SubmitError> {
        if self.submitting {
            return Err(SubmitError::Busy);
        }

        let Some(token) = self.captcha_token.clone() else {
            log_event(
                LogLevel::Warn,
                "contact_submit_blocked",
                json!({ "reason": "missing_captcha" }),
            );
            return Err(SubmitError::MissingCaptcha);
        };

        self.submitting = true;
        Ok(ContactPayload {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            subject: self.form.subject.clone(),
            message: self.form.message.clone(),
            recaptcha_token: token,
        })
    }

    /// Applies the transport outcome. Any non-2xx status is a failure.
    pub fn finish(&mut self, outcome: Result<u16, SubmitError>) -> Result<(), SubmitError> {
        self.submitting = false;

        let result = match outcome {
            Ok(status) if (200..300).contains(&status) => Ok(status),
            Ok(status) => Err(SubmitError::Rejected { status }),
            Err(error) => Err(error),
        };

        match result {
            Ok(status) => {
                self.form = ContactForm::default();
                self.captcha_token = None;
                self.widget.reset();
                log_event(
                    LogLevel::Info,
                    "contact_submit_succeeded",
                    json!({ "status": status }),
                );
                Ok(())
            }
            Err(error) => {
                log_event(
                    LogLevel::Error,
                    "contact_submit_failed",
                    json!({ "error": error.to_string() }),
                );
                Err(error)
            }
        }
    }

    pub async fn submit<T: FormTransport>(&mut self, transport: &T, endpoint: &Url) -> Result<(), SubmitError> {
        let payload = self.begin()?;
        let outcome = transport.send(endpoint, &payload).await;
        self.finish(outcome)
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ContactPayload, FormTransport, SubmitError};
    use gloo_net::http::Request;
    use url::Url;

    #[derive(Clone, Copy, Debug, Default)]
    pub struct GlooTransport;

    impl FormTransport for GlooTransport {
        async fn send(&self, endpoint: &Url, payload: &ContactPayload) -> Result<u16, SubmitError> {
            let response = Request::post(endpoint.as_str())
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|error| SubmitError::Transport(error.to_string()))?
                .send()
                .await
                .map_err(|error| SubmitError::Transport(error.to_string()))?;

            Ok(response.status())
        }
    }
}

#[cfg(test)]
mod native {
    use super::{ContactPayload, FormTransport, SubmitError};
    use reqwest::header::ACCEPT;
    use url::Url;

    #[derive(Clone, Debug, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl FormTransport for ReqwestTransport {
        async fn send(&self, endpoint: &Url, payload: &ContactPayload) -> Result<u16, SubmitError> {
            let response = self
                .client
                .post(endpoint.clone())
                .header(ACCEPT, "application/json")
                .json(payload)
                .send()
                .await
                .map_err(|error| SubmitError::Transport(error.to_string()))?;

            Ok(response.status().as_u16())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::native::ReqwestTransport;
    use super::*;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CountingWidget {
        resets: Rc<Cell<usize>>,
    }

    impl CaptchaWidget for CountingWidget {
        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[derive(Default)]
    struct CountingTransport {
        calls: Cell<usize>,
    }

    impl FormTransport for CountingTransport {
        async fn send(&self, _endpoint: &Url, _payload: &ContactPayload) -> Result<u16, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            Ok(200)
        }
    }

    #[derive(Clone, Default)]
    struct Recorded {
        bodies: Arc<Mutex<Vec<Value>>>,
        accepts: Arc<Mutex<Vec<String>>>,
    }

    async fn record(
        State(recorded): State<Recorded>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let accept = headers
            .get("accept")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        recorded.accepts.lock().unwrap().push(accept);
        recorded.bodies.lock().unwrap().push(body);
        (StatusCode::OK, Json(serde_json::json!({ "ok": true })))
    }

    async fn spawn_endpoint(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{addr}/f/test")).unwrap()
    }

    fn filled_controller(widget: CountingWidget) -> ContactController<CountingWidget> {
        let mut controller = ContactController::new(widget);
        controller.set_field(FormField::Name, "Sara".to_string());
        controller.set_field(FormField::Email, "sara@example.com".to_string());
        controller.set_field(FormField::Subject, "Pipelines".to_string());
        controller.set_field(FormField::Message, "Can we talk about Kafka?".to_string());
        controller
    }

    #[tokio::test]
    async fn missing_captcha_blocks_without_network_call() {
        let transport = CountingTransport::default();
        let endpoint = Url::parse("https://formspree.io/f/xanpdgrl").unwrap();
        let mut controller = filled_controller(CountingWidget::default());

        let error = controller.submit(&transport, &endpoint).await.unwrap_err();

        assert_eq!(error, SubmitError::MissingCaptcha);
        assert_eq!(transport.calls.get(), 0);
        assert!(!controller.is_submitting());
        assert_eq!(controller.form().name, "Sara");
        assert_eq!(
            error.alert(Language::Fa),
            Some("لطفاً reCAPTCHA را تکمیل کنید.")
        );
        assert_eq!(error.alert(Language::En), Some("Please complete the reCAPTCHA."));
    }

    #[tokio::test]
    async fn successful_submission_clears_form_and_resets_widget() {
        let recorded = Recorded::default();
        let router = Router::new()
            .route("/f/test", post(record))
            .with_state(recorded.clone());
        let endpoint = spawn_endpoint(router).await;

        let widget = CountingWidget::default();
        let mut controller = filled_controller(widget.clone());
        controller.set_captcha_token(Some("token-123".to_string()));

        controller
            .submit(&ReqwestTransport::default(), &endpoint)
            .await
            .unwrap();

        assert!(controller.form().is_empty());
        assert!(!controller.has_captcha_token());
        assert_eq!(widget.resets.get(), 1);

        let bodies = recorded.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["name"], "Sara");
        assert_eq!(bodies[0]["message"], "Can we talk about Kafka?");
        assert_eq!(bodies[0]["g-recaptcha-response"], "token-123");
        assert_eq!(recorded.accepts.lock().unwrap()[0], "application/json");
    }

    #[tokio::test]
    async fn non_success_status_keeps_fields() {
        let router = Router::new().route(
            "/f/test",
            post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "invalid captcha") }),
        );
        let endpoint = spawn_endpoint(router).await;

        let widget = CountingWidget::default();
        let mut controller = filled_controller(widget.clone());
        controller.set_captcha_token(Some("expired".to_string()));

        let error = controller
            .submit(&ReqwestTransport::default(), &endpoint)
            .await
            .unwrap_err();

        assert_eq!(error, SubmitError::Rejected { status: 422 });
        assert_eq!(controller.form().subject, "Pipelines");
        assert!(controller.has_captcha_token());
        assert_eq!(widget.resets.get(), 0);
        assert_eq!(
            error.alert(Language::En),
            Some("Failed to send message. Please try again.")
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let endpoint = Url::parse(&format!("http://{addr}/f/test")).unwrap();

        let mut controller = filled_controller(CountingWidget::default());
        controller.set_captcha_token(Some("token".to_string()));

        let error = controller
            .submit(&ReqwestTransport::default(), &endpoint)
            .await
            .unwrap_err();

        assert!(matches!(error, SubmitError::Transport(_)));
        assert!(!controller.is_submitting());
        assert_eq!(
            error.alert(Language::Fa),
            Some("خطایی رخ داد. لطفاً بعداً دوباره تلاش کنید.")
        );
    }

    #[test]
    fn second_begin_while_in_flight_is_busy() {
        let mut controller = filled_controller(CountingWidget::default());
        controller.set_captcha_token(Some("token".to_string()));

        let payload = controller.begin().unwrap();
        assert_eq!(payload.recaptcha_token, "token");
        assert_eq!(controller.begin(), Err(SubmitError::Busy));
        assert_eq!(SubmitError::Busy.alert(Language::En), None);

        controller.finish(Ok(204)).unwrap();
        assert!(!controller.is_submitting());
    }

    #[test]
    fn expired_token_blocks_submission() {
        let mut controller = filled_controller(CountingWidget::default());
        controller.set_captcha_token(Some("token".to_string()));
        controller.set_captcha_token(None);

        assert_eq!(controller.begin(), Err(SubmitError::MissingCaptcha));
    }

    #[test]
    fn payload_uses_recaptcha_field_name() {
        let payload = ContactPayload {
            name: "a".to_string(),
            email: "b".to_string(),
            subject: "c".to_string(),
            message: "d".to_string(),
            recaptcha_token: "t".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["g-recaptcha-response"], "t");
        assert!(value.get("recaptcha_token").is_none());
    }
}
