//! The `send-sms`, `send-email` and `send-letter` subcommands.

use anyhow::{bail, Result};
use clap::Args;
use notifications_api::Client;

use super::parse_personalisation;
use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct SendArgs {
    /// Phone number or email address of the recipient
    #[arg(long)]
    pub to: String,

    /// Template to send
    #[arg(long)]
    pub template_id: String,

    /// Template placeholder as key=value (repeatable)
    #[arg(long = "personalisation", short = 'p')]
    pub personalisation: Vec<String>,
}

#[derive(Args)]
pub struct LetterArgs {
    /// Template to send
    #[arg(long)]
    pub template_id: String,

    /// Template placeholder as key=value (repeatable); must include the address lines
    #[arg(long = "personalisation", short = 'p')]
    pub personalisation: Vec<String>,
}

pub async fn run_sms(args: &SendArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let personalisation = parse_personalisation(&args.personalisation)?;
    tracing::info!("Sending SMS with template {}", args.template_id);
    let resp = client
        .send_sms(&args.to, &args.template_id, Some(personalisation))
        .await?;
    print_response(&resp, format);
    Ok(())
}

pub async fn run_email(args: &SendArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let personalisation = parse_personalisation(&args.personalisation)?;
    tracing::info!("Sending email with template {}", args.template_id);
    let resp = client
        .send_email(&args.to, &args.template_id, Some(personalisation))
        .await?;
    print_response(&resp, format);
    Ok(())
}

pub async fn run_letter(args: &LetterArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let personalisation = parse_personalisation(&args.personalisation)?;
    if !personalisation.contains_key("address_line_1") {
        bail!("a letter needs at least address_line_1 in its personalisation");
    }
    tracing::info!("Sending letter with template {}", args.template_id);
    let resp = client.send_letter(&args.template_id, personalisation).await?;
    print_response(&resp, format);
    Ok(())
}
