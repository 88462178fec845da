//! Command-line entry point for the cyberdesk review console.

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use cyberdesk::documents::resolve_attachments;
use cyberdesk::models::StatusSummary;
use cyberdesk::{load_settings, server, ReportsClient};

#[derive(Parser)]
#[command(name = "cyberdesk", version, about = "Review console for cybercrime complaint reports")]
struct Cli {
    /// Reporting API base URL (overrides configuration).
    #[arg(long, global = true, env = "CYBERDESK_API_BASE")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web console.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on.
        #[arg(long, default_value_t = 8787)]
        port: u16,
    },
    /// Fetch the complaint list and print it.
    Fetch {
        /// Emit raw records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print aggregate status counts.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut settings = load_settings().await;
    if let Some(api_base) = cli.api_base {
        settings.api_base = api_base;
    }

    match cli.command {
        Command::Serve { host, port } => server::serve(&settings, &host, port).await,
        Command::Fetch { json } => fetch(&settings, json).await,
        Command::Stats => stats(&settings).await,
    }
}

async fn fetch(settings: &cyberdesk::Settings, json: bool) -> anyhow::Result<()> {
    let client = ReportsClient::new(settings);
    let complaints = client
        .fetch_complaints()
        .await
        .context("Failed to fetch complaints")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&complaints)?);
        return Ok(());
    }

    for complaint in &complaints {
        let reference = complaint.reference_number.as_deref().unwrap_or("-");
        let name = complaint.name.as_deref().unwrap_or("-");
        println!(
            "{:>5}  {:<16}  {:<12}  {:<24}  {}",
            complaint.id,
            reference,
            complaint.complaint_status().label(),
            name,
            complaint.created_at.format("%Y-%m-%d %H:%M"),
        );
        for attachment in resolve_attachments(&complaint.documents, &settings.api_base) {
            println!("       {} {}", style("→").dim(), attachment.url);
        }
    }
    println!("{} complaints", complaints.len());

    Ok(())
}

async fn stats(settings: &cyberdesk::Settings) -> anyhow::Result<()> {
    let client = ReportsClient::new(settings);
    let complaints = client
        .fetch_complaints()
        .await
        .context("Failed to fetch complaints")?;
    let summary = StatusSummary::summarize(&complaints);

    println!("{}", style("Complaint totals").bold());
    println!("  total        {}", style(summary.total).cyan());
    println!("  submitted    {}", summary.submitted);
    println!("  in progress  {}", summary.in_progress);
    println!("  resolved     {}", style(summary.resolved).green());
    println!("  draft        {}", style(summary.draft).dim());

    Ok(())
}
