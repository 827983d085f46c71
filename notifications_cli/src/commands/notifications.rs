//! The `get` and `list` subcommands.

use anyhow::Result;
use clap::Args;
use notifications_api::Client;

use crate::output::{print_pagination_summary, print_response, OutputFormat};

#[derive(Args)]
pub struct GetArgs {
    /// Notification ID
    pub id: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (e.g. delivered, sending, failed)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by template type: sms, email or letter
    #[arg(long)]
    pub template_type: Option<String>,
}

pub async fn run_get(args: &GetArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_notification(&args.id).await?;
    print_response(&resp, format);
    Ok(())
}

pub async fn run_list(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .list_notifications(args.status.as_deref(), args.template_type.as_deref())
        .await?;
    print_response(&resp, format);
    if let Some(listing) = &resp {
        print_pagination_summary(listing);
    }
    Ok(())
}
