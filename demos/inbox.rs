mod common;

use hilink::{SmsIndex, SmsListQuery};

/// Lists the newest inbox messages; `inbox delete <index>` deletes one first.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();

    let client = common::device_client()?;
    client.login(&common::credentials()?).await?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if let [action, index] = args.as_slice() {
        if action != "delete" {
            return Err(format!("unknown action {action:?}, expected delete").into());
        }
        client.delete_sms(SmsIndex::new(index.parse()?)).await?;
        println!("deleted {index}");
    }

    let count = client.sms_count().await?;
    println!(
        "inbox: {} ({} unread), outbox: {}, capacity: {}",
        count.local_inbox, count.local_unread, count.local_outbox, count.local_max
    );

    let list = client.sms_list(&SmsListQuery::default()).await?;
    for message in &list.messages {
        let marker = if message.is_unread() { "*" } else { " " };
        println!(
            "{marker} [{}] {} {}: {}",
            message.index, message.date, message.phone, message.content
        );
    }
    Ok(())
}
