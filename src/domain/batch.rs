//! SMS part counting and batch planning for sending one text to many recipients.

use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, PhoneNumber};

/// A batch must need strictly fewer SMS than this to be sent.
pub const BATCH_SMS_LIMIT: usize = 500;

const FIRST_PART: usize = 70;
const SECOND_PART: usize = 64;
const NEXT_PART: usize = 67;

/// Number of SMS parts a message of `char_count` characters occupies.
///
/// The first part holds 70 characters, the second 64 (134 total), and every
/// following part 67 (201 for three parts).
pub fn sms_parts(char_count: usize) -> usize {
    let two_parts = FIRST_PART + SECOND_PART;
    if char_count <= FIRST_PART {
        1
    } else if char_count <= two_parts {
        2
    } else if char_count <= two_parts + NEXT_PART {
        3
    } else {
        2 + (char_count - two_parts).div_ceil(NEXT_PART)
    }
}

/// Parse a recipient list: one phone number per line, blank lines skipped.
pub fn parse_recipients(text: &str) -> Vec<PhoneNumber> {
    text.lines()
        .filter_map(|line| PhoneNumber::new(line).ok())
        .collect()
}

#[derive(Debug, Clone)]
/// One message to send to a list of recipients, checked against [`BATCH_SMS_LIMIT`].
pub struct BatchPlan {
    recipients: Vec<PhoneNumber>,
    message: MessageText,
    parts_per_message: usize,
}

impl BatchPlan {
    /// Plan a batch, failing with [`ValidationError::BatchTooLarge`] when
    /// `recipients * parts` reaches [`BATCH_SMS_LIMIT`]. An empty recipient
    /// list is a valid plan that sends nothing.
    pub fn new(
        recipients: Vec<PhoneNumber>,
        message: MessageText,
    ) -> Result<Self, ValidationError> {
        let parts_per_message = message.parts();
        let total = recipients.len() * parts_per_message;
        if total >= BATCH_SMS_LIMIT {
            return Err(ValidationError::BatchTooLarge {
                total,
                limit: BATCH_SMS_LIMIT,
            });
        }
        Ok(Self {
            recipients,
            message,
            parts_per_message,
        })
    }

    pub fn recipients(&self) -> &[PhoneNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn parts_per_message(&self) -> usize {
        self.parts_per_message
    }

    /// Total SMS the batch will consume.
    pub fn total_sms(&self) -> usize {
        self.recipients.len() * self.parts_per_message
    }
}
