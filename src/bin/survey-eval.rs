#[path = "survey-eval/app.rs"]
mod app;
#[path = "survey-eval/args.rs"]
mod args;
#[path = "survey-eval/config/mod.rs"]
mod config;
#[path = "survey-eval/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
