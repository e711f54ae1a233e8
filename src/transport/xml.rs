//! XML helpers shared by every endpoint: escaping, request framing and the
//! success/error envelope decode.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::domain::{DeviceErrorCode, DeviceResponse};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected XML shape: {0}")]
    Shape(#[from] quick_xml::DeError),

    #[error("response body contains no XML element")]
    NoRootElement,

    #[error("unexpected root element <{root}>")]
    UnexpectedRoot { root: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Response,
    Error,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorEnvelope {
    code: Option<String>,
    message: Option<String>,
}

/// Escape `<`, `>`, `&`, `'` and `"` for interpolation into element text.
pub fn xml_escape(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}

/// Wrap already-escaped element markup in the `<request>` document the device expects.
pub fn request_document(inner: &str) -> String {
    format!("{DECLARATION}<request>{inner}</request>")
}

/// `<name>escaped value</name>`.
pub fn text_element(name: &str, value: &str) -> String {
    format!("<{name}>{}</{name}>", xml_escape(value))
}

/// Counter field that some firmware leaves empty (no SIM, feature off); empty reads as `0`.
pub fn empty_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<u32>()
        .map_err(|_| D::Error::custom(format!("expected a counter, got {text:?}")))
}

/// Decode a `<response>` into `T`, or the `<error>` envelope.
pub fn decode<T: DeserializeOwned>(xml: &str) -> Result<DeviceResponse<T>, DecodeError> {
    match classify(xml)? {
        Root::Error => Ok(decode_error_envelope(xml)),
        Root::Response => Ok(DeviceResponse::Success(quick_xml::de::from_str(xml)?)),
    }
}

/// Decode a response whose only payload is a status text such as `<response>OK</response>`.
pub fn decode_ok(xml: &str) -> Result<DeviceResponse<()>, DecodeError> {
    match classify(xml)? {
        Root::Error => Ok(decode_error_envelope(xml)),
        Root::Response => {
            check_well_formed(xml)?;
            Ok(DeviceResponse::Success(()))
        }
    }
}

fn classify(xml: &str) -> Result<Root, DecodeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = element.local_name();
                return match name.as_ref() {
                    b"response" => Ok(Root::Response),
                    b"error" => Ok(Root::Error),
                    other => Err(DecodeError::UnexpectedRoot {
                        root: String::from_utf8_lossy(other).into_owned(),
                    }),
                };
            }
            Event::Eof => return Err(DecodeError::NoRootElement),
            _ => {}
        }
    }
}

fn check_well_formed(xml: &str) -> Result<(), DecodeError> {
    let mut reader = Reader::from_str(xml);
    loop {
        if let Event::Eof = reader.read_event()? {
            return Ok(());
        }
    }
}

// The root alone decides failure; a garbled envelope body still reports an error.
fn decode_error_envelope<T>(xml: &str) -> DeviceResponse<T> {
    let envelope = quick_xml::de::from_str::<ErrorEnvelope>(xml).unwrap_or_default();
    let code = envelope
        .code
        .and_then(|code| code.trim().parse::<i32>().ok())
        .map(DeviceErrorCode::new);
    let message = envelope
        .message
        .map(|message| message.trim().to_owned())
        .filter(|message| !message.is_empty());
    DeviceResponse::Error { code, message }
}
