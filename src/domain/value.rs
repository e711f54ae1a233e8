use std::fmt;

use crate::domain::batch::sms_parts;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Device account user name (`Username`).
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// XML element name used by the login endpoint.
    pub const FIELD: &'static str = "Username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Device account password (`Password`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` output never contains the password itself.
pub struct Password(String);

impl Password {
    /// XML element name used by the login endpoint.
    pub const FIELD: &'static str = "Password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as sent to the device (`Phone`).
///
/// Invariant: non-empty after trimming. No normalization is performed; the device
/// receives the trimmed value verbatim.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// XML element name used by the send endpoint.
    pub const FIELD: &'static str = "Phone";

    /// Create a validated (non-empty) phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the device.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`Content`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// XML element name used by the send endpoint.
    pub const FIELD: &'static str = "Content";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (Unicode scalar values), as reported in `Length`.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Number of SMS parts this text occupies, see [`sms_parts`].
    pub fn parts(&self) -> usize {
        sms_parts(self.char_count())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Storage index of a message on the device (`Index`).
pub struct SmsIndex(u32);

impl SmsIndex {
    /// XML element name used by the SMS endpoints.
    pub const FIELD: &'static str = "Index";

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SmsIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Mobile data dial command (`Action`).
pub enum DialAction {
    Disconnect,
    Connect,
}

impl DialAction {
    /// XML element name used by the dial endpoint.
    pub const FIELD: &'static str = "Action";

    /// Wire value: `1` connects, `0` disconnects.
    pub fn code(self) -> u8 {
        match self {
            Self::Disconnect => 0,
            Self::Connect => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Mailbox selector for SMS listing (`BoxType`).
pub enum BoxType {
    #[default]
    LocalInbox,
    LocalSent,
    LocalDraft,
}

impl BoxType {
    /// XML element name used by the list endpoint.
    pub const FIELD: &'static str = "BoxType";

    pub fn code(self) -> u8 {
        match self {
            Self::LocalInbox => 1,
            Self::LocalSent => 2,
            Self::LocalDraft => 3,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Anti-CSRF token issued by `/api/webserver/token`.
///
/// A token authorizes exactly one request; the client fetches a new one before every call.
pub struct SessionToken(String);

impl SessionToken {
    /// Header carrying the token on authenticated requests.
    pub const HEADER: &'static str = "__RequestVerificationToken";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Vendor error code carried by the `<error>` envelope.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct DeviceErrorCode(i32);

impl DeviceErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the device.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known error kind, if one exists.
    pub fn known_kind(self) -> Option<KnownDeviceErrorCode> {
        KnownDeviceErrorCode::from_code(self.0)
    }

    /// Returns `true` if the device rejected the credentials, session or token.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl fmt::Display for DeviceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Well-known HiLink error codes.
///
/// Unknown codes are preserved as [`DeviceErrorCode`] and return `None` from
/// [`KnownDeviceErrorCode::from_code`].
pub enum KnownDeviceErrorCode {
    NotSupported,
    NoRights,
    Busy,
    FormatError,
    UsernameWrong,
    PasswordWrong,
    AlreadyLoggedIn,
    UsernameOrPasswordWrong,
    LoginAttemptsExceeded,
    WrongToken,
    WrongSession,
    WrongSessionToken,
}

impl KnownDeviceErrorCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            100002 => Self::NotSupported,
            100003 => Self::NoRights,
            100004 => Self::Busy,
            100005 => Self::FormatError,
            108001 => Self::UsernameWrong,
            108002 => Self::PasswordWrong,
            108003 => Self::AlreadyLoggedIn,
            108006 => Self::UsernameOrPasswordWrong,
            108007 => Self::LoginAttemptsExceeded,
            125001 => Self::WrongToken,
            125002 => Self::WrongSession,
            125003 => Self::WrongSessionToken,
            _ => return None,
        })
    }

    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::NoRights
                | Self::UsernameWrong
                | Self::PasswordWrong
                | Self::UsernameOrPasswordWrong
                | Self::LoginAttemptsExceeded
                | Self::WrongToken
                | Self::WrongSession
                | Self::WrongSessionToken
        )
    }
}
