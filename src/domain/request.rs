use crate::domain::validation::ValidationError;
use crate::domain::value::{BoxType, MessageText, Password, PhoneNumber, Username};

/// Largest page the device serves from `sms-list`.
pub const SMS_LIST_MAX_READ_COUNT: u32 = 50;

#[derive(Debug, Clone)]
/// Device login credentials.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate and pair a user name and password.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone)]
/// One SMS text addressed to one or more recipients in a single device request.
pub struct SendSms {
    recipients: Vec<PhoneNumber>,
    text: MessageText,
}

impl SendSms {
    pub fn to_one(phone: PhoneNumber, text: MessageText) -> Self {
        Self {
            recipients: vec![phone],
            text,
        }
    }

    pub fn to_many(
        recipients: Vec<PhoneNumber>,
        text: MessageText,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: PhoneNumber::FIELD,
            });
        }
        Ok(Self { recipients, text })
    }

    pub fn recipients(&self) -> &[PhoneNumber] {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Page selection for `sms-list`.
///
/// The default asks for the newest 20 messages of the local inbox.
pub struct SmsListQuery {
    page_index: u32,
    read_count: u32,
    box_type: BoxType,
    sort_type: u8,
    ascending: bool,
    unread_preferred: bool,
}

impl Default for SmsListQuery {
    fn default() -> Self {
        Self {
            page_index: 1,
            read_count: 20,
            box_type: BoxType::LocalInbox,
            sort_type: 0,
            ascending: false,
            unread_preferred: false,
        }
    }
}

impl SmsListQuery {
    /// Select a page. Invariant: `page_index >= 1`, `read_count` in `1..=50`.
    pub fn page(page_index: u32, read_count: u32) -> Result<Self, ValidationError> {
        if page_index == 0 {
            return Err(ValidationError::OutOfRange {
                field: "PageIndex",
                min: 1,
                max: u32::MAX,
                actual: page_index,
            });
        }
        if !(1..=SMS_LIST_MAX_READ_COUNT).contains(&read_count) {
            return Err(ValidationError::OutOfRange {
                field: "ReadCount",
                min: 1,
                max: SMS_LIST_MAX_READ_COUNT,
                actual: read_count,
            });
        }
        Ok(Self {
            page_index,
            read_count,
            ..Self::default()
        })
    }

    pub fn box_type(mut self, box_type: BoxType) -> Self {
        self.box_type = box_type;
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn unread_preferred(mut self, unread_preferred: bool) -> Self {
        self.unread_preferred = unread_preferred;
        self
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn read_count(&self) -> u32 {
        self.read_count
    }

    pub fn selected_box(&self) -> BoxType {
        self.box_type
    }

    pub fn sort_type(&self) -> u8 {
        self.sort_type
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn is_unread_preferred(&self) -> bool {
        self.unread_preferred
    }
}
