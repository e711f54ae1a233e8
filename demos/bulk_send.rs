//! Sends `message.txt` to every number in `number.txt`.
//!
//! The whole batch is refused before logging in when it would need 500 SMS or more.

mod common;

use std::time::Duration;

use hilink::{BatchPlan, MessageText, SendSms, parse_recipients};
use tracing::{info, warn};

const SEND_INTERVAL: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();

    let message_path =
        std::env::var("HILINK_MESSAGE_FILE").unwrap_or_else(|_| "message.txt".to_owned());
    let numbers_path =
        std::env::var("HILINK_NUMBERS_FILE").unwrap_or_else(|_| "number.txt".to_owned());

    let message = MessageText::new(std::fs::read_to_string(&message_path)?)?;
    let recipients = parse_recipients(&std::fs::read_to_string(&numbers_path)?);

    let plan = BatchPlan::new(recipients, message)?;
    info!(
        characters = plan.message().char_count(),
        parts = plan.parts_per_message(),
        recipients = plan.recipients().len(),
        total = plan.total_sms(),
        "batch planned"
    );

    let client = common::device_client()?;
    client.login(&common::credentials()?).await?;

    let mut failed = 0usize;
    for (position, phone) in plan.recipients().iter().enumerate() {
        if position > 0 {
            tokio::time::sleep(SEND_INTERVAL).await;
        }
        let request = SendSms::to_one(phone.clone(), plan.message().clone());
        match client.send_sms(&request).await {
            Ok(()) => info!(%phone, "sent"),
            Err(err) => {
                failed += 1;
                warn!(%phone, error = %err, "send failed");
            }
        }
    }

    println!(
        "sent {} of {} messages",
        plan.recipients().len() - failed,
        plan.recipients().len()
    );
    Ok(())
}
