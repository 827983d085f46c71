mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notifications_api::Client;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "notify")]
#[command(about = "Send notifications and inspect templates through the notifications API")]
struct Cli {
    /// Output format: pretty or json
    #[arg(long, default_value = "pretty", global = true)]
    output: String,

    /// Base URL of the API
    #[arg(long, env = "NOTIFY_API_URL", global = true)]
    base_url: Option<String>,

    /// Service ID used as the token issuer
    #[arg(long, env = "NOTIFY_SERVICE_ID", global = true)]
    service_id: Option<String>,

    /// API key used to sign requests
    #[arg(long, env = "NOTIFY_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Log every API request and its timing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an SMS
    SendSms(commands::send::SendArgs),
    /// Send an email
    SendEmail(commands::send::SendArgs),
    /// Send a letter
    SendLetter(commands::send::LetterArgs),
    /// Get a notification by ID
    Get(commands::notifications::GetArgs),
    /// List notifications
    List(commands::notifications::ListArgs),
    /// Get a template, optionally at a given version
    Template(commands::templates::TemplateArgs),
    /// List templates
    Templates(commands::templates::TemplatesArgs),
    /// Preview a template with personalisation
    Preview(commands::templates::PreviewArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref())?)
        .with_target(false)
        .init();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Pretty,
    };

    let client = Client::new(
        cli.base_url.as_deref().unwrap_or_default(),
        cli.service_id.as_deref().unwrap_or_default(),
        cli.api_key.as_deref().unwrap_or_default(),
    )?;

    match &cli.command {
        Commands::SendSms(args) => commands::send::run_sms(args, &client, &format).await?,
        Commands::SendEmail(args) => commands::send::run_email(args, &client, &format).await?,
        Commands::SendLetter(args) => commands::send::run_letter(args, &client, &format).await?,
        Commands::Get(args) => commands::notifications::run_get(args, &client, &format).await?,
        Commands::List(args) => commands::notifications::run_list(args, &client, &format).await?,
        Commands::Template(args) => commands::templates::run_template(args, &client, &format).await?,
        Commands::Templates(args) => {
            commands::templates::run_templates(args, &client, &format).await?
        }
        Commands::Preview(args) => commands::templates::run_preview(args, &client, &format).await?,
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise only warnings from the library are
/// shown. `--verbose` always turns on request logging.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> Result<EnvFilter> {
    let filter = match rust_log.filter(|s| !s.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid RUST_LOG value '{}'", directives))?,
        None => EnvFilter::new("notifications_api=warn,notify=info"),
    };
    if verbose {
        return Ok(filter.add_directive("notifications_api=debug".parse()?));
    }
    Ok(filter)
}
