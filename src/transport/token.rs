use serde::Deserialize;

use crate::domain::{DeviceResponse, SessionToken};
use crate::transport::xml::{DecodeError, decode};

pub const TOKEN_PATH: &str = "/api/webserver/token";

#[derive(Debug, Deserialize)]
struct TokenXml {
    token: String,
}

pub fn decode_token_response(xml: &str) -> Result<DeviceResponse<SessionToken>, DecodeError> {
    Ok(decode::<TokenXml>(xml)?.map(|parsed| SessionToken::new(parsed.token.trim())))
}
