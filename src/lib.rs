//! Typed Rust client for the HTTP/XML management API of Huawei HiLink routers and modems.
//!
//! The crate is layered: a domain layer of strong types, a transport layer for the XML
//! wire format of each endpoint, and a small client layer that fetches a fresh security
//! token before every call and maps the device `<error>` envelope to [`HiLinkError`].
//!
//! ```rust,no_run
//! use hilink::{Credentials, HiLinkClient, MessageText, PhoneNumber, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hilink::HiLinkError> {
//!     let client = HiLinkClient::new("http://192.168.8.1")?;
//!     client.login(&Credentials::new("admin", "admin")?).await?;
//!     let request = SendSms::to_one(PhoneNumber::new("+989123456789")?, MessageText::new("hello")?);
//!     client.send_sms(&request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_BASE_URL, DeviceHeaders, HiLinkClient, HiLinkClientBuilder, HiLinkError};
pub use domain::{
    BATCH_SMS_LIMIT, BatchPlan, BoxType, CONNECTED_STATUS, ConnectionStatus, Credentials,
    DeviceErrorCode, DeviceResponse, DialAction, KnownDeviceErrorCode, MessageText, Password,
    PhoneNumber, SMS_LIST_MAX_READ_COUNT, SendSms, SessionToken, SmsCount, SmsIndex, SmsList,
    SmsListQuery, SmsMessage, Username, ValidationError, parse_recipients, sms_parts,
};
pub use transport::xml_escape;
