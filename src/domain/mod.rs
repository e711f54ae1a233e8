//! Domain layer: strong types with validation and invariants (no I/O).

mod batch;
mod request;
mod response;
mod validation;
mod value;

pub use batch::{BATCH_SMS_LIMIT, BatchPlan, parse_recipients, sms_parts};
pub use request::{Credentials, SMS_LIST_MAX_READ_COUNT, SendSms, SmsListQuery};
pub use response::{
    CONNECTED_STATUS, ConnectionStatus, DeviceResponse, SmsCount, SmsList, SmsMessage,
};
pub use validation::ValidationError;
pub use value::{
    BoxType, DeviceErrorCode, DialAction, KnownDeviceErrorCode, MessageText, Password,
    PhoneNumber, SessionToken, SmsIndex, Username,
};
