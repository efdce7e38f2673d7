//! Visual Session Walkthrough Example
//!
//! This example drives a complete visual session against a live server:
//! start, push content, poll for a control message, inspect properties,
//! and end.
//!
//! Run with: RIVR_SERVER=cvnet.example.com RIVR_USER=ivrbridge RIVR_PASS=secret \
//!     cargo run --example session_walkthrough

use std::env;
use std::time::Duration;

use rivr_session_core::{SessionConfig, VisualSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for better output
    tracing_subscriber::fmt::init();

    let server = env::var("RIVR_SERVER").unwrap_or_else(|_| "127.0.0.1".to_string());
    let config = match (env::var("RIVR_USER"), env::var("RIVR_PASS")) {
        (Ok(username), Ok(password)) => SessionConfig::secure(server, username, password),
        _ => SessionConfig::new(server).with_port(8080),
    };

    let mut session = VisualSession::new(config)?;

    println!("📞 Visual Session Walkthrough");
    println!("=============================\n");

    if !session.start_session("7202950840", "12345").await? {
        println!("Server refused to start a session - is a call active?");
        return Ok(());
    }
    println!(
        "Started session {} for caller {} (network: {}/{})",
        session.session_id(),
        session.caller_id(),
        session.network_type(),
        session.network_quality()
    );

    // Push content to the caller's device
    if session.send_url("http://example.com/menu.html").await? {
        println!("Pushed menu page to the caller");
    }
    if session.send_text("Please pick an option from the menu").await? {
        println!("Pushed text prompt to the caller");
    }

    // Attach metadata and read it back
    session.add_property("Department", "Billing").await?;
    if let Some(properties) = session.update_properties().await? {
        println!("Session properties: {:?}", properties);
    }

    // Poll the control-message inbox for a caller selection
    for _ in 0..5 {
        if let Some(message) = session.get_control_message().await? {
            println!("Caller selected: {:?}", message);
            break;
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    if session.end_session().await? {
        println!("Session {} ended", session.session_id());
    }
    Ok(())
}
