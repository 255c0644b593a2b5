//! Battle Simulation Example
//!
//! Looks up two creatures on PokeAPI and battles them through the tool
//! dispatcher, printing the JSON each tool returns.
//!
//! Usage: cargo run --example simulate_battle -- pikachu charmander
//! Set RUST_LOG=debug to watch the catalog and engine work.

use anyhow::{Context, Result};
use duel_client::{CatalogConfig, DuelServer, PokeApiCatalog};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let first = args.next().unwrap_or_else(|| "pikachu".to_string());
    let second = args.next().unwrap_or_else(|| "charmander".to_string());

    let catalog =
        PokeApiCatalog::new(CatalogConfig::from_env()).context("Failed to build catalog")?;
    let server = DuelServer::new(catalog);

    println!("Tools:");
    for tool in server.list_tools() {
        println!("  {} - {}", tool.name, tool.description);
    }

    for name in [&first, &second] {
        let body = server
            .call_tool("get_pokemon", &json!({ "name_or_id": name }))
            .await;
        println!("\n{}", body);
    }

    let battle = server
        .call_tool(
            "simulate_battle",
            &json!({ "pokemon1": first, "pokemon2": second }),
        )
        .await;
    println!("\n{}", battle);

    let effectiveness = server
        .call_tool(
            "get_type_effectiveness",
            &json!({ "attacking_type": "electric", "defending_type": "water" }),
        )
        .await;
    println!("\n{}", effectiveness);

    Ok(())
}
