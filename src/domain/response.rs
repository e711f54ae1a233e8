use crate::domain::value::{DeviceErrorCode, SmsIndex};

/// `ConnectionStatus` value reported while mobile data is up.
pub const CONNECTED_STATUS: &str = "901";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of decoding a device response: the typed payload or the `<error>` envelope.
pub enum DeviceResponse<T> {
    Success(T),
    /// `code` is `None` when the envelope carries no numeric code.
    Error {
        code: Option<DeviceErrorCode>,
        message: Option<String>,
    },
}

impl<T> DeviceResponse<T> {
    /// Map the success payload, passing an error envelope through unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DeviceResponse<U> {
        match self {
            Self::Success(value) => DeviceResponse::Success(f(value)),
            Self::Error { code, message } => DeviceResponse::Error { code, message },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Mailbox counters from `sms-count`.
pub struct SmsCount {
    pub local_unread: u32,
    pub local_inbox: u32,
    pub local_outbox: u32,
    pub local_draft: u32,
    pub local_deleted: u32,
    pub sim_unread: u32,
    pub sim_inbox: u32,
    pub sim_outbox: u32,
    pub sim_draft: u32,
    pub local_max: u32,
    pub sim_max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One stored message from `sms-list`.
pub struct SmsMessage {
    pub index: SmsIndex,
    /// `Smstat`: `0` unread, `1` read (other values are device specific).
    pub status: String,
    pub phone: String,
    pub content: String,
    pub date: String,
    pub sca: String,
    pub save_type: String,
    pub priority: String,
    pub sms_type: String,
}

impl SmsMessage {
    pub fn is_unread(&self) -> bool {
        self.status == "0"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One page of messages plus the total count the device reports for the box.
pub struct SmsList {
    pub count: u32,
    pub messages: Vec<SmsMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Connection, signal and battery snapshot from `monitoring/status`.
///
/// Values are kept as the device reports them; many are empty on devices without
/// the corresponding hardware.
pub struct ConnectionStatus {
    pub connection_status: String,
    pub signal_strength: String,
    pub signal_icon: String,
    pub current_network_type: String,
    pub current_service_domain: String,
    pub roaming_status: String,
    pub battery_status: String,
    pub battery_level: String,
    pub simlock_status: String,
    pub wan_ip_address: String,
    pub primary_dns: String,
    pub secondary_dns: String,
    pub current_wifi_user: String,
    pub total_wifi_user: String,
    pub service_status: String,
    pub sim_status: String,
    pub wifi_status: String,
}

impl ConnectionStatus {
    /// `true` iff `ConnectionStatus` is exactly `901`.
    pub fn is_connected(&self) -> bool {
        self.connection_status == CONNECTED_STATUS
    }
}
