//! Fetch vote data from a deployed endpoint and print a small summary.
//!
//! Run with the endpoint injected as a runtime override:
//! `cargo run --example fetch-results -- https://script.google.com/macros/s/<id>/exec`

use votes_client::{
    DefaultEndpoint, Params, RemoteClient, RuntimeOverride, format_number,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "votes_client=debug".into()),
        )
        .init();

    let override_url = std::env::args().nth(1);
    let client = RemoteClient::from_sources(&[&RuntimeOverride(override_url), &DefaultEndpoint])?;

    if !client.is_configured() {
        eprintln!("no endpoint configured; pass the deployment URL as the first argument");
        return Ok(());
    }

    let data = client
        .get("getVoteData", Params::new().set("year", 2024))
        .await?;

    if let Some(total) = data.get("totalVotes").and_then(|v| v.as_i64()) {
        println!("total votes: {}", format_number(total));
    } else {
        println!("{data:#}");
    }

    Ok(())
}
