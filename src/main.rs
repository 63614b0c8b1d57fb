use clap::Parser;
use songs_service::{api, config::Config, context::Context, repositories, seed};
use structured_logger::{async_json::new_writer, Builder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::parse();

    Builder::with_level(&config.log_level)
        .with_target_writer("*", new_writer(tokio::io::stdout()))
        .init();

    let songs = repositories::songs::connect(&config).await?;

    let context = Context { config, songs };

    match context.config.app_component.as_str() {
        "api" => api::serve(context).await?,
        "seed" => seed::serve(context).await?,
        other => anyhow::bail!("unknown app component: {}", other),
    }

    Ok(())
}
