use serde::Deserialize;

use crate::domain::{DeviceResponse, SmsCount};
use crate::transport::xml::{DecodeError, decode, empty_as_zero};

pub const SMS_COUNT_PATH: &str = "/api/sms/sms-count";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct SmsCountXml {
    #[serde(deserialize_with = "empty_as_zero")]
    local_unread: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    local_inbox: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    local_outbox: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    local_draft: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    local_deleted: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    sim_unread: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    sim_inbox: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    sim_outbox: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    sim_draft: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    local_max: u32,
    #[serde(deserialize_with = "empty_as_zero")]
    sim_max: u32,
}

impl From<SmsCountXml> for SmsCount {
    fn from(value: SmsCountXml) -> Self {
        Self {
            local_unread: value.local_unread,
            local_inbox: value.local_inbox,
            local_outbox: value.local_outbox,
            local_draft: value.local_draft,
            local_deleted: value.local_deleted,
            sim_unread: value.sim_unread,
            sim_inbox: value.sim_inbox,
            sim_outbox: value.sim_outbox,
            sim_draft: value.sim_draft,
            local_max: value.local_max,
            sim_max: value.sim_max,
        }
    }
}

pub fn decode_sms_count_response(xml: &str) -> Result<DeviceResponse<SmsCount>, DecodeError> {
    Ok(decode::<SmsCountXml>(xml)?.map(SmsCount::from))
}
