//! Walks through the read operations against a live account.
//!
//! Reads `LIGHTSPEED_CLIENT_ID`, `LIGHTSPEED_CLIENT_SECRET` and
//! `LIGHTSPEED_REFRESH_TOKEN` from the environment or a `.env` file.
//!
//! ```sh
//! RUST_LOG=lightspeed_retail=debug cargo run --example basics
//! ```

use lightspeed_retail::{LightspeedClient, LightspeedConfig, QueryOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lightspeed_retail=info".parse()?),
        )
        .with_target(false)
        .init();

    // Fails here on bad credentials instead of on the first read.
    let client = LightspeedClient::connect(LightspeedConfig::from_env()?).await?;

    // 1. Basic account information
    let account = client.account().await?;
    println!(
        "Account {} ({})",
        account.account_id,
        account.name.as_deref().unwrap_or("unnamed")
    );

    // 2. All categories
    let categories = client.categories().await?;
    println!("{} categories", categories.len());
    for category in &categories {
        println!(
            "  [{}] {}",
            category.category_id.as_deref().unwrap_or("?"),
            category.full_path_name.as_deref().unwrap_or("")
        );
    }

    // 3. Items with the default relations
    let items = client.items(&QueryOptions::new()).await?;
    println!("{} items", items.len());

    // 4. Items with caller options
    let options = QueryOptions::new()
        .limit(2)
        .load_relations(["Category", "ItemAttributes"]);
    for item in client.items(&options).await? {
        println!(
            "  {}: {}",
            item.description.as_deref().unwrap_or("?"),
            item.default_price()
        );
    }

    // 5. Items of one category
    let fab_lab = client
        .items_by_category("116", &QueryOptions::new())
        .await?;
    println!("Fab Lab items:");
    for item in &fab_lab {
        println!(
            "  {}: {} ({} on hand)",
            item.description.as_deref().unwrap_or("?"),
            item.default_price(),
            item.total_quantity()
        );
    }

    Ok(())
}
