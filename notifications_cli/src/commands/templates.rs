//! The `template`, `templates` and `preview` subcommands.

use anyhow::{anyhow, Result};
use clap::Args;
use notifications_api::types::TemplateType;
use notifications_api::Client;

use super::parse_personalisation;
use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct TemplateArgs {
    /// Template ID
    pub id: String,

    /// Fetch this version instead of the latest
    #[arg(long)]
    pub version: Option<u32>,
}

#[derive(Args)]
pub struct TemplatesArgs {
    /// Only list templates of this type: sms, email or letter
    #[arg(long)]
    pub template_type: Option<String>,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Template ID
    pub id: String,

    /// Template placeholder as key=value (repeatable)
    #[arg(long = "personalisation", short = 'p')]
    pub personalisation: Vec<String>,
}

pub async fn run_template(args: &TemplateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = match args.version {
        Some(version) => client.get_template_version(&args.id, version).await?,
        None => client.get_template(&args.id).await?,
    };
    print_response(&resp, format);
    Ok(())
}

pub async fn run_templates(
    args: &TemplatesArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let template_type = args
        .template_type
        .as_deref()
        .map(|t| t.parse::<TemplateType>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let resp = client.get_all_templates(template_type).await?;
    print_response(&resp, format);
    Ok(())
}

pub async fn run_preview(args: &PreviewArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let personalisation = parse_personalisation(&args.personalisation)?;
    let resp = client
        .post_template_preview(&args.id, Some(personalisation))
        .await?;
    print_response(&resp, format);
    Ok(())
}
