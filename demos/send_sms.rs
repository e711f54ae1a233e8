mod common;

use hilink::{MessageText, PhoneNumber, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();

    let phone = PhoneNumber::new(common::required_env("HILINK_PHONE")?)?;
    let message = std::env::var("HILINK_MESSAGE")
        .unwrap_or_else(|_| "Hello from the hilink example.".to_owned());
    let text = MessageText::new(message)?;

    let client = common::device_client()?;
    client.login(&common::credentials()?).await?;
    client.send_sms(&SendSms::to_one(phone.clone(), text)).await?;

    println!("sent to {phone}");
    Ok(())
}
