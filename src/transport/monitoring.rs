use serde::Deserialize;

use crate::domain::{ConnectionStatus, DeviceResponse};
use crate::transport::xml::{DecodeError, decode};

pub const STATUS_PATH: &str = "/api/monitoring/status";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct StatusXml {
    connection_status: String,
    signal_strength: String,
    signal_icon: String,
    current_network_type: String,
    current_service_domain: String,
    roaming_status: String,
    battery_status: String,
    battery_level: String,
    simlock_status: String,
    #[serde(rename = "WanIPAddress")]
    wan_ip_address: String,
    primary_dns: String,
    secondary_dns: String,
    current_wifi_user: String,
    total_wifi_user: String,
    service_status: String,
    sim_status: String,
    wifi_status: String,
}

impl From<StatusXml> for ConnectionStatus {
    fn from(value: StatusXml) -> Self {
        Self {
            connection_status: value.connection_status,
            signal_strength: value.signal_strength,
            signal_icon: value.signal_icon,
            current_network_type: value.current_network_type,
            current_service_domain: value.current_service_domain,
            roaming_status: value.roaming_status,
            battery_status: value.battery_status,
            battery_level: value.battery_level,
            simlock_status: value.simlock_status,
            wan_ip_address: value.wan_ip_address,
            primary_dns: value.primary_dns,
            secondary_dns: value.secondary_dns,
            current_wifi_user: value.current_wifi_user,
            total_wifi_user: value.total_wifi_user,
            service_status: value.service_status,
            sim_status: value.sim_status,
            wifi_status: value.wifi_status,
        }
    }
}

pub fn decode_status_response(xml: &str) -> Result<DeviceResponse<ConnectionStatus>, DecodeError> {
    Ok(decode::<StatusXml>(xml)?.map(ConnectionStatus::from))
}
