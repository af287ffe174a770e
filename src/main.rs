#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Result;

use awsimport::app::import_generator::{sdk_errors, ImportGenerator};

fn init_logging() {
    // Logs go to stderr; stdout carries only the plan JSON so the output can
    // be piped straight into `pulumi import --file -`.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "awsimport=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn",
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        let category = sdk_errors::categorize_error(&e);
        tracing::error!(
            "Import plan generation failed ({}): {:#}",
            category.user_message(),
            e
        );
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Region, profile, and credentials come from the standard AWS environment
    // (env vars, shared config, instance metadata).
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let generator = ImportGenerator::new(&config);
    let plan = generator.generate_plan().await?;
    tracing::info!("Generated import plan with {} resource(s)", plan.len());

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
