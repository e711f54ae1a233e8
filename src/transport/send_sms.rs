use chrono::NaiveDateTime;

use crate::domain::{MessageText, PhoneNumber, SendSms};
use crate::transport::xml::{request_document, text_element};

pub const SEND_SMS_PATH: &str = "/api/sms/send-sms";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Body for `send-sms`. `date` is the device-local timestamp stamped on the message.
pub fn encode_send_sms_body(request: &SendSms, date: NaiveDateTime) -> String {
    let phones = request
        .recipients()
        .iter()
        .map(|phone| text_element(PhoneNumber::FIELD, phone.raw()))
        .collect::<String>();
    let text = request.text();

    request_document(&format!(
        "<Index>-1</Index><Phones>{phones}</Phones><Sca></Sca>{}<Length>{}</Length><Reserved>1</Reserved>{}",
        text_element(MessageText::FIELD, text.as_str()),
        text.char_count(),
        text_element("Date", &date.format(DATE_FORMAT).to_string()),
    ))
}
