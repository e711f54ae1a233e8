//! Transport layer: endpoint paths and XML wire-format details.

mod delete_sms;
mod dial;
mod login;
mod monitoring;
mod send_sms;
mod sms_count;
mod sms_list;
mod token;
mod xml;

pub use delete_sms::{DELETE_SMS_PATH, encode_delete_sms_body};
pub use dial::{DIAL_PATH, encode_dial_body};
pub use login::{LOGIN_PATH, encode_login_body};
pub use monitoring::{STATUS_PATH, decode_status_response};
pub use send_sms::{SEND_SMS_PATH, encode_send_sms_body};
pub use sms_count::{SMS_COUNT_PATH, decode_sms_count_response};
pub use sms_list::{SMS_LIST_PATH, decode_sms_list_response, encode_sms_list_body};
pub use token::{TOKEN_PATH, decode_token_response};
pub use xml::{DecodeError, decode_ok, xml_escape};
