use serde::Deserialize;

use crate::domain::{DeviceResponse, SmsIndex, SmsList, SmsListQuery, SmsMessage};
use crate::transport::xml::{DecodeError, decode, empty_as_zero, request_document};

pub const SMS_LIST_PATH: &str = "/api/sms/sms-list";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SmsListXml {
    #[serde(default, deserialize_with = "empty_as_zero")]
    count: u32,
    #[serde(default)]
    messages: MessagesXml,
}

#[derive(Debug, Default, Deserialize)]
struct MessagesXml {
    #[serde(rename = "Message", default)]
    message: Vec<SmsMessageXml>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SmsMessageXml {
    index: u32,
    #[serde(default)]
    smstat: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    sca: String,
    #[serde(default)]
    save_type: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    sms_type: String,
}

impl From<SmsMessageXml> for SmsMessage {
    fn from(value: SmsMessageXml) -> Self {
        Self {
            index: SmsIndex::new(value.index),
            status: value.smstat,
            phone: value.phone,
            content: value.content,
            date: value.date,
            sca: value.sca,
            save_type: value.save_type,
            priority: value.priority,
            sms_type: value.sms_type,
        }
    }
}

pub fn encode_sms_list_body(query: &SmsListQuery) -> String {
    request_document(&format!(
        "<PageIndex>{}</PageIndex><ReadCount>{}</ReadCount><BoxType>{}</BoxType><SortType>{}</SortType><Ascending>{}</Ascending><UnreadPreferred>{}</UnreadPreferred>",
        query.page_index(),
        query.read_count(),
        query.selected_box().code(),
        query.sort_type(),
        u8::from(query.is_ascending()),
        u8::from(query.is_unread_preferred()),
    ))
}

pub fn decode_sms_list_response(xml: &str) -> Result<DeviceResponse<SmsList>, DecodeError> {
    Ok(decode::<SmsListXml>(xml)?.map(|parsed| SmsList {
        count: parsed.count,
        messages: parsed
            .messages
            .message
            .into_iter()
            .map(SmsMessage::from)
            .collect(),
    }))
}
