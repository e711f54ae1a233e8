//! Client layer: token lifecycle, HTTP execution and transport ↔ domain mapping.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::domain::{
    ConnectionStatus, Credentials, DeviceErrorCode, DeviceResponse, DialAction, SendSms,
    SessionToken, SmsCount, SmsIndex, SmsList, SmsListQuery, ValidationError,
};
use crate::transport::{self, DecodeError};

/// Address HiLink devices answer on out of the box.
pub const DEFAULT_BASE_URL: &str = "http://192.168.8.1";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fixed headers sent on every request.
///
/// The device web UI is an XHR application; these values mimic what a browser sends so the
/// device accepts the calls. They are protocol constants, overridable for odd firmware.
pub struct DeviceHeaders {
    pub accept: String,
    pub accept_language: String,
    pub cache_control: String,
    pub content_type: String,
    pub pragma: String,
    pub user_agent: String,
    pub x_requested_with: String,
}

impl Default for DeviceHeaders {
    fn default() -> Self {
        Self {
            accept: "*/*".to_owned(),
            accept_language: "en-US,en;q=0.9".to_owned(),
            cache_control: "no-cache".to_owned(),
            content_type: "application/x-www-form-urlencoded; charset=UTF-8".to_owned(),
            pragma: "no-cache".to_owned(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36".to_owned(),
            x_requested_with: "XMLHttpRequest".to_owned(),
        }
    }
}

impl DeviceHeaders {
    // `Content-Type` only accompanies a body; the token GET goes out without it.
    fn pairs(&self, has_body: bool) -> Vec<(String, String)> {
        [
            ("Accept", &self.accept),
            ("Accept-Language", &self.accept_language),
            ("Cache-Control", &self.cache_control),
            ("Content-Type", &self.content_type),
            ("Pragma", &self.pragma),
            ("User-Agent", &self.user_agent),
            ("X-Requested-With", &self.x_requested_with),
        ]
        .into_iter()
        .filter(|(name, _)| has_body || *name != "Content-Type")
        .map(|(name, value)| (name.to_owned(), value.clone()))
        .collect()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`HiLinkClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - device-level failures (the `<error>` envelope),
/// - validation/parse failures.
pub enum HiLinkError {
    /// HTTP client / transport failure (connection refused, DNS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the device.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The device answered with its `<error>` envelope.
    #[error("device error {}", describe_device_error(.code, .message))]
    Device {
        code: Option<DeviceErrorCode>,
        message: Option<String>,
    },

    /// Response body was not the XML shape the operation expects.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors or preconditions rejected a value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl HiLinkError {
    /// `true` when the device rejected the credentials, session or token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Device { code: Some(code), .. } if code.is_auth_error())
    }
}

fn describe_device_error(code: &Option<DeviceErrorCode>, message: &Option<String>) -> String {
    let code = match code {
        Some(code) => code.to_string(),
        None => "(no code)".to_owned(),
    };
    match message {
        Some(message) => format!("{code}: {message}"),
        None => code,
    }
}

impl From<DecodeError> for HiLinkError {
    fn from(value: DecodeError) -> Self {
        Self::Parse(Box::new(value))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`HiLinkClient`].
///
/// Use this when you need to customize the device address, timeout, or headers.
pub struct HiLinkClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    headers: DeviceHeaders,
}

impl Default for HiLinkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HiLinkClientBuilder {
    /// Create a builder targeting [`DEFAULT_BASE_URL`] with no timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            headers: DeviceHeaders::default(),
        }
    }

    /// Override the device base URL (scheme and host, e.g. `http://192.168.1.1`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.headers.user_agent = user_agent.into();
        self
    }

    /// Override the `Accept-Language` header.
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.headers.accept_language = accept_language.into();
        self
    }

    /// Replace the whole set of fixed headers.
    pub fn headers(mut self, headers: DeviceHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// Build a [`HiLinkClient`].
    pub fn build(self) -> Result<HiLinkClient, HiLinkError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| HiLinkError::Transport(Box::new(err)))?;

        Ok(HiLinkClient {
            base_url,
            headers: self.headers,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let url = url::Url::parse(input.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url.as_str().trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// Session client for one HiLink device.
///
/// Every operation first fetches a fresh anti-CSRF token from `/api/webserver/token` and
/// sends it in the `__RequestVerificationToken` header of exactly one API request. The token
/// is never stored on the client, so a token is never reused for a later request.
///
/// Responses are decoded as either the operation's success shape or the device `<error>`
/// envelope, which is returned as [`HiLinkError::Device`].
pub struct HiLinkClient {
    base_url: String,
    headers: DeviceHeaders,
    http: Arc<dyn HttpTransport>,
}

impl HiLinkClient {
    /// Create a client for the device at `base_url` with default settings.
    ///
    /// For more customization, use [`HiLinkClient::builder`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, HiLinkError> {
        HiLinkClientBuilder::new().base_url(base_url).build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> HiLinkClientBuilder {
        HiLinkClientBuilder::new()
    }

    /// Device base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a new security token.
    ///
    /// Operations call this themselves; it is public so callers can probe reachability.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_token(&self) -> Result<SessionToken, HiLinkError> {
        let body = self
            .execute(HttpMethod::Get, transport::TOKEN_PATH, None, None)
            .await?;
        let token = into_result(transport::decode_token_response(&body)?)?;
        debug!("fetched session token");
        Ok(token)
    }

    /// Log in with a user name and password.
    ///
    /// The password is sent base64-encoded. If the token fetch fails, no login request is sent.
    ///
    /// Errors:
    /// - [`HiLinkError::Device`] when the device rejects the credentials (see
    ///   [`HiLinkError::is_auth_error`]),
    /// - [`HiLinkError::Transport`] / [`HiLinkError::HttpStatus`] for HTTP failures.
    #[instrument(skip_all, fields(username = %credentials.username().as_str()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<(), HiLinkError> {
        let body = transport::encode_login_body(credentials);
        self.post_expecting_ok(transport::LOGIN_PATH, body).await?;
        debug!("logged in");
        Ok(())
    }

    /// Send one SMS text to the request's recipients.
    ///
    /// The message is stamped with the local time. The device answer is checked like every
    /// other operation, so a rejected message is reported as [`HiLinkError::Device`].
    #[instrument(skip_all, fields(recipients = request.recipients().len(), chars = request.text().char_count()))]
    pub async fn send_sms(&self, request: &SendSms) -> Result<(), HiLinkError> {
        let date = chrono::Local::now().naive_local();
        let body = transport::encode_send_sms_body(request, date);
        self.post_expecting_ok(transport::SEND_SMS_PATH, body).await
    }

    /// Read the mailbox counters.
    #[instrument(skip(self))]
    pub async fn sms_count(&self) -> Result<SmsCount, HiLinkError> {
        let body = self
            .authorized(HttpMethod::Get, transport::SMS_COUNT_PATH, None)
            .await?;
        into_result(transport::decode_sms_count_response(&body)?)
    }

    /// List one page of stored messages.
    ///
    /// `SmsListQuery::default()` returns the newest 20 messages of the local inbox.
    #[instrument(skip(self))]
    pub async fn sms_list(&self, query: &SmsListQuery) -> Result<SmsList, HiLinkError> {
        let body = self
            .authorized(
                HttpMethod::Post,
                transport::SMS_LIST_PATH,
                Some(transport::encode_sms_list_body(query)),
            )
            .await?;
        let list = into_result(transport::decode_sms_list_response(&body)?)?;
        debug!(count = list.count, page = list.messages.len(), "listed messages");
        Ok(list)
    }

    /// Delete a stored message.
    #[instrument(skip(self))]
    pub async fn delete_sms(&self, index: SmsIndex) -> Result<(), HiLinkError> {
        let body = transport::encode_delete_sms_body(index);
        self.post_expecting_ok(transport::DELETE_SMS_PATH, body)
            .await
    }

    /// Read the connection/signal/battery snapshot.
    #[instrument(skip(self))]
    pub async fn connection_status(&self) -> Result<ConnectionStatus, HiLinkError> {
        let body = self
            .authorized(HttpMethod::Get, transport::STATUS_PATH, None)
            .await?;
        into_result(transport::decode_status_response(&body)?)
    }

    /// `true` iff the device reports mobile data as connected (status `901`).
    pub async fn is_connected(&self) -> Result<bool, HiLinkError> {
        Ok(self.connection_status().await?.is_connected())
    }

    /// Bring mobile data up.
    pub async fn connect(&self) -> Result<(), HiLinkError> {
        self.dial(DialAction::Connect).await
    }

    /// Bring mobile data down.
    pub async fn disconnect(&self) -> Result<(), HiLinkError> {
        self.dial(DialAction::Disconnect).await
    }

    /// Issue a dial action.
    #[instrument(skip(self))]
    pub async fn dial(&self, action: DialAction) -> Result<(), HiLinkError> {
        let body = transport::encode_dial_body(action);
        self.post_expecting_ok(transport::DIAL_PATH, body).await
    }

    async fn post_expecting_ok(&self, path: &str, body: String) -> Result<(), HiLinkError> {
        let response = self.authorized(HttpMethod::Post, path, Some(body)).await?;
        into_result(transport::decode_ok(&response)?)
    }

    async fn authorized(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<String, HiLinkError> {
        let token = self.fetch_token().await?;
        self.execute(method, path, body, Some(token)).await
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        token: Option<SessionToken>,
    ) -> Result<String, HiLinkError> {
        let mut headers = self.headers.pairs(body.is_some());
        if let Some(token) = token {
            headers.push((SessionToken::HEADER.to_owned(), token.as_str().to_owned()));
        }
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        let response = self
            .http
            .execute(request)
            .await
            .map_err(HiLinkError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(HiLinkError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}

fn into_result<T>(response: DeviceResponse<T>) -> Result<T, HiLinkError> {
    match response {
        DeviceResponse::Success(value) => Ok(value),
        DeviceResponse::Error { code, message } => {
            warn!(code = ?code.map(DeviceErrorCode::as_i32), message = ?message, "device returned error envelope");
            Err(HiLinkError::Device { code, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::domain::{MessageText, PhoneNumber};

    use super::*;

    const OK: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<response>OK</response>";

    #[derive(Debug, Clone, Default)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug, Default)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        responses: VecDeque<Result<HttpResponse, String>>,
    }

    impl FakeTransport {
        fn respond(self, status: u16, body: impl Into<String>) -> Self {
            self.state
                .lock()
                .unwrap()
                .responses
                .push_back(Ok(HttpResponse {
                    status,
                    body: body.into(),
                }));
            self
        }

        fn token(self, token: &str) -> Self {
            self.respond(200, format!("<response><token>{token}</token></response>"))
        }

        fn fail(self, message: &str) -> Self {
            self.state
                .lock()
                .unwrap()
                .responses
                .push_back(Err(message.to_owned()));
            self
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                match state.responses.pop_front() {
                    Some(Ok(response)) => Ok(response),
                    Some(Err(message)) => Err(message.into()),
                    None => Err("no scripted response".into()),
                }
            })
        }
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn make_client(transport: FakeTransport) -> HiLinkClient {
        HiLinkClient {
            base_url: "http://device.invalid".to_owned(),
            headers: DeviceHeaders::default(),
            http: Arc::new(transport),
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("admin", "admin").unwrap()
    }

    #[tokio::test]
    async fn login_fetches_token_then_posts_credentials() {
        let transport = FakeTransport::default().token("tok-1").respond(200, OK);
        let client = make_client(transport.clone());

        client.login(&credentials()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);

        let token_request = &requests[0];
        assert_eq!(token_request.method, HttpMethod::Get);
        assert_eq!(token_request.url, "http://device.invalid/api/webserver/token");
        assert_eq!(header(token_request, SessionToken::HEADER), None);
        assert_eq!(header(token_request, "Content-Type"), None);
        assert_eq!(header(token_request, "X-Requested-With"), Some("XMLHttpRequest"));

        let login_request = &requests[1];
        assert_eq!(login_request.method, HttpMethod::Post);
        assert_eq!(login_request.url, "http://device.invalid/api/user/login");
        assert_eq!(header(login_request, SessionToken::HEADER), Some("tok-1"));
        assert_eq!(
            header(login_request, "Content-Type"),
            Some("application/x-www-form-urlencoded; charset=UTF-8")
        );
        assert_eq!(header(login_request, "X-Requested-With"), Some("XMLHttpRequest"));
        let body = login_request.body.as_deref().unwrap();
        assert!(body.contains("<Username>admin</Username>"));
        assert!(body.contains("<Password>YWRtaW4=</Password>"));
    }

    #[tokio::test]
    async fn login_short_circuits_when_token_fetch_fails() {
        let transport = FakeTransport::default().fail("connection refused");
        let client = make_client(transport.clone());

        let err = client.login(&credentials()).await.unwrap_err();
        assert!(matches!(err, HiLinkError::Transport(_)));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://device.invalid/api/webserver/token");
    }

    #[tokio::test]
    async fn login_maps_error_envelope_to_device_error() {
        let transport = FakeTransport::default()
            .token("tok-1")
            .respond(200, "<error><code>108006</code><message></message></error>");
        let client = make_client(transport);

        let err = client.login(&credentials()).await.unwrap_err();
        assert!(err.is_auth_error());
        match err {
            HiLinkError::Device { code, message } => {
                assert_eq!(code, Some(DeviceErrorCode::new(108006)));
                assert_eq!(message, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn device_error_display_shows_code_and_message() {
        let err = HiLinkError::Device {
            code: Some(DeviceErrorCode::new(108006)),
            message: None,
        };
        assert_eq!(err.to_string(), "device error 108006");

        let err = HiLinkError::Device {
            code: Some(DeviceErrorCode::new(113004)),
            message: Some("busy".to_owned()),
        };
        assert_eq!(err.to_string(), "device error 113004: busy");

        let err = HiLinkError::Device {
            code: None,
            message: None,
        };
        assert_eq!(err.to_string(), "device error (no code)");
    }

    #[tokio::test]
    async fn token_error_envelope_stops_the_operation() {
        let transport = FakeTransport::default()
            .respond(200, "<error><code>125002</code><message></message></error>");
        let client = make_client(transport.clone());

        let err = client.sms_count().await.unwrap_err();
        assert!(matches!(err, HiLinkError::Device { .. }));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn every_call_uses_a_freshly_fetched_token() {
        let count = "<response><LocalUnread>1</LocalUnread></response>";
        let transport = FakeTransport::default()
            .token("first")
            .respond(200, count)
            .token("second")
            .respond(200, count);
        let client = make_client(transport.clone());

        client.sms_count().await.unwrap();
        client.sms_count().await.unwrap();

        let requests = transport.requests();
        let urls = requests.iter().map(|r| r.url.as_str()).collect::<Vec<_>>();
        assert_eq!(
            urls,
            vec![
                "http://device.invalid/api/webserver/token",
                "http://device.invalid/api/sms/sms-count",
                "http://device.invalid/api/webserver/token",
                "http://device.invalid/api/sms/sms-count",
            ]
        );
        assert_eq!(header(&requests[1], SessionToken::HEADER), Some("first"));
        assert_eq!(header(&requests[3], SessionToken::HEADER), Some("second"));
    }

    #[tokio::test]
    async fn send_sms_posts_escaped_payload() {
        let transport = FakeTransport::default().token("tok").respond(200, OK);
        let client = make_client(transport.clone());
        let request = SendSms::to_one(
            PhoneNumber::new("+989123456789").unwrap(),
            MessageText::new("a < b & \"c\"").unwrap(),
        );

        client.send_sms(&request).await.unwrap();

        let requests = transport.requests();
        let send = &requests[1];
        assert_eq!(send.url, "http://device.invalid/api/sms/send-sms");
        let body = send.body.as_deref().unwrap();
        assert!(body.contains("<Phones><Phone>+989123456789</Phone></Phones>"));
        assert!(body.contains("<Content>a &lt; b &amp; &quot;c&quot;</Content>"));
        assert!(body.contains("<Length>11</Length>"));

        let date_start = body.find("<Date>").unwrap() + "<Date>".len();
        let date_end = body.find("</Date>").unwrap();
        let date = &body[date_start..date_end];
        assert!(chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[tokio::test]
    async fn send_sms_reports_rejection() {
        let transport = FakeTransport::default()
            .token("tok")
            .respond(200, "<error><code>113004</code><message></message></error>");
        let client = make_client(transport);
        let request = SendSms::to_one(
            PhoneNumber::new("123").unwrap(),
            MessageText::new("hi").unwrap(),
        );

        let err = client.send_sms(&request).await.unwrap_err();
        assert!(matches!(
            err,
            HiLinkError::Device {
                code: Some(code),
                ..
            } if code.as_i32() == 113004
        ));
    }

    #[tokio::test]
    async fn sms_list_posts_default_query_and_parses_messages() {
        let xml = r#"<response><Count>1</Count><Messages><Message>
<Smstat>0</Smstat><Index>40001</Index><Phone>123</Phone><Content>hey</Content>
<Date>2025-03-07 09:05:03</Date><Sca></Sca><SaveType>4</SaveType><Priority>0</Priority><SmsType>1</SmsType>
</Message></Messages></response>"#;
        let transport = FakeTransport::default().token("tok").respond(200, xml);
        let client = make_client(transport.clone());

        let list = client.sms_list(&SmsListQuery::default()).await.unwrap();
        assert_eq!(list.count, 1);
        assert_eq!(list.messages[0].index, SmsIndex::new(40001));
        assert_eq!(list.messages[0].content, "hey");

        let requests = transport.requests();
        assert_eq!(requests[1].method, HttpMethod::Post);
        let body = requests[1].body.as_deref().unwrap();
        assert!(body.contains("<PageIndex>1</PageIndex><ReadCount>20</ReadCount><BoxType>1</BoxType>"));
    }

    #[tokio::test]
    async fn delete_sms_posts_index() {
        let transport = FakeTransport::default().token("tok").respond(200, OK);
        let client = make_client(transport.clone());

        client.delete_sms(SmsIndex::new(40001)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[1].url, "http://device.invalid/api/sms/delete-sms");
        assert!(
            requests[1]
                .body
                .as_deref()
                .unwrap()
                .contains("<Index>40001</Index>")
        );
    }

    #[tokio::test]
    async fn is_connected_follows_connection_status() {
        let transport = FakeTransport::default()
            .token("a")
            .respond(200, "<response><ConnectionStatus>901</ConnectionStatus></response>")
            .token("b")
            .respond(200, "<response><ConnectionStatus>902</ConnectionStatus></response>")
            .token("c")
            .respond(200, "<response><ConnectionStatus></ConnectionStatus></response>");
        let client = make_client(transport.clone());

        assert!(client.is_connected().await.unwrap());
        assert!(!client.is_connected().await.unwrap());
        assert!(!client.is_connected().await.unwrap());
        assert_eq!(
            transport.requests()[1].url,
            "http://device.invalid/api/monitoring/status"
        );
    }

    #[tokio::test]
    async fn connect_and_disconnect_post_dial_actions() {
        let transport = FakeTransport::default()
            .token("a")
            .respond(200, OK)
            .token("b")
            .respond(200, OK);
        let client = make_client(transport.clone());

        client.connect().await.unwrap();
        client.disconnect().await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[1].url, "http://device.invalid/api/dialup/dial");
        assert!(requests[1].body.as_deref().unwrap().contains("<Action>1</Action>"));
        assert!(requests[3].body.as_deref().unwrap().contains("<Action>0</Action>"));
    }

    #[tokio::test]
    async fn dial_failure_is_reported() {
        let transport = FakeTransport::default()
            .token("a")
            .respond(200, "<error><code>100003</code><message></message></error>");
        let client = make_client(transport);

        let err = client.connect().await.unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn maps_non_success_http_status() {
        let transport = FakeTransport::default().respond(500, "oops");
        let client = make_client(transport);

        let err = client.fetch_token().await.unwrap_err();
        assert!(matches!(
            err,
            HiLinkError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn maps_empty_http_body_to_none() {
        let transport = FakeTransport::default().token("tok").respond(404, "  ");
        let client = make_client(transport);

        let err = client.sms_count().await.unwrap_err();
        assert!(matches!(
            err,
            HiLinkError::HttpStatus {
                status: 404,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn malformed_response_is_a_parse_error() {
        let transport = FakeTransport::default()
            .token("tok")
            .respond(200, "<html><body>Please log in</body></html>");
        let client = make_client(transport);

        let err = client.connection_status().await.unwrap_err();
        assert!(matches!(err, HiLinkError::Parse(_)));
    }

    #[test]
    fn builder_normalizes_base_url() {
        let client = HiLinkClient::builder()
            .base_url("http://192.168.1.1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.1");

        let client = HiLinkClient::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        for input in ["", "192.168.8.1", "ftp://192.168.8.1", "not a url"] {
            let err = HiLinkClient::new(input).err().unwrap();
            assert!(
                matches!(err, HiLinkError::Validation(ValidationError::InvalidBaseUrl { .. })),
                "{input:?}"
            );
        }
    }

    #[test]
    fn builder_header_overrides_are_applied() {
        let client = HiLinkClient::builder()
            .user_agent("hilink-test")
            .accept_language("fa-IR")
            .build()
            .unwrap();
        assert_eq!(client.headers.user_agent, "hilink-test");
        assert_eq!(client.headers.accept_language, "fa-IR");
        assert_eq!(client.headers.pragma, "no-cache");
    }
}
