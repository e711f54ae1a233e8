use crate::domain::SmsIndex;
use crate::transport::xml::request_document;

pub const DELETE_SMS_PATH: &str = "/api/sms/delete-sms";

pub fn encode_delete_sms_body(index: SmsIndex) -> String {
    request_document(&format!("<{0}>{1}</{0}>", SmsIndex::FIELD, index))
}
