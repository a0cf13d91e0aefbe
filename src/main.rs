use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starwars_favourites::{
    config::AppConfig,
    db::{connect, create_schema},
    params::Pagination,
    services::user_service,
    state::AppState,
};

const PAGE_SIZE: i64 = 100;

/// Prints every user's serialized catalog as JSON, one page at a time.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,starwars_favourites=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from(connect(&config).await?);
    create_schema(&state.orm).await?;

    let mut page = 1;
    loop {
        let resp = user_service::list_users(&state, Pagination::new(page, PAGE_SIZE)).await?;
        let users = resp.data.map(|list| list.items).unwrap_or_default();
        if users.is_empty() {
            break;
        }
        for user in &users {
            println!("{}", serde_json::to_string_pretty(user)?);
        }

        let total = resp.meta.and_then(|m| m.total).unwrap_or(0);
        if page * PAGE_SIZE >= total {
            break;
        }
        page += 1;
    }

    tracing::info!("catalog dump finished");
    Ok(())
}
