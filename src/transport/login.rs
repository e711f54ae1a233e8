use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{Credentials, Password, Username};
use crate::transport::xml::{request_document, text_element};

pub const LOGIN_PATH: &str = "/api/user/login";

/// Login body with the password base64-encoded (the device's plain login scheme).
pub fn encode_login_body(credentials: &Credentials) -> String {
    let encoded_password = STANDARD.encode(credentials.password().as_str());
    request_document(&format!(
        "{}{}",
        text_element(Username::FIELD, credentials.username().as_str()),
        text_element(Password::FIELD, &encoded_password),
    ))
}
