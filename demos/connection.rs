mod common;

use hilink::DialAction;

/// Prints the status snapshot; `connection up` / `connection down` toggles mobile data first.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();

    let client = common::device_client()?;
    client.login(&common::credentials()?).await?;

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("up") => client.dial(DialAction::Connect).await?,
        Some("down") => client.dial(DialAction::Disconnect).await?,
        Some(other) => return Err(format!("unknown action {other:?}, expected up or down").into()),
        None => {}
    }

    let status = client.connection_status().await?;
    println!(
        "connected: {}, status: {}, network type: {}, signal: {}/5, wan ip: {}",
        status.is_connected(),
        status.connection_status,
        status.current_network_type,
        status.signal_icon,
        status.wan_ip_address
    );
    Ok(())
}
