use server::{MinimumWageCache, MinimumWageProvider, ServerState};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "rateio={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let wage = &settings.minimum_wage;
    match &wage.source_url {
        Some(url) => tracing::info!("minimum wage source: {url}"),
        None => tracing::info!(
            "no minimum wage source, using default {}",
            engine::MoneyCents::new(wage.default_cents)
        ),
    }

    let provider = MinimumWageProvider::new(
        reqwest::Client::new(),
        wage.source_url.clone(),
        wage.default_cents,
        MinimumWageCache::new(wage.max_age()?).with_retry_after(wage.retry_after()?),
    );
    let state = ServerState::new(provider, settings.server.public_base_url.clone());

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|err| {
        tracing::error!("failed to bind server listener on {addr}: {err}");
        err
    })?;

    server::run_with_listener(state, listener).await?;
    Ok(())
}
