// Sitedesk - local-first back office for a construction business
// Entry point: opens the workspace and runs one maintenance command.

use anyhow::{bail, Context};
use sitedesk::app::Workspace;
use sitedesk::services::backup;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitedesk=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sitedesk");

    let data_dir =
        std::env::var("SITEDESK_DATA_DIR").unwrap_or_else(|_| "sitedesk-data".to_string());

    let mut workspace = Workspace::open(data_dir)
        .await
        .context("failed to open workspace")?;

    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None | Some("status") => print_status(&workspace),
        Some("backup") => {
            let path = args.next().context("usage: sitedesk backup <file>")?;
            backup::export_backup(&workspace, Path::new(&path)).await?;
            println!("Backup written to {path}");
        }
        Some("restore") => {
            let path = args.next().context("usage: sitedesk restore <file>")?;
            backup::import_backup(&mut workspace, Path::new(&path)).await?;
            println!("Backup restored from {path}");
        }
        Some(other) => bail!("unknown command: {other}"),
    }

    Ok(())
}

fn print_status(workspace: &Workspace) {
    println!("{}", workspace.settings.get().company_name);
    println!("  clients:         {}", workspace.clients.list().len());
    println!("  budgets:         {}", workspace.budgets.len());
    println!("  inputs:          {}", workspace.inputs.len());
    println!("  compositions:    {}", workspace.compositions.len());
    println!("  activity logs:   {}", workspace.activity_logs.len());
    println!("  measurements:    {}", workspace.measurements.len());
    println!("  plannings:       {}", workspace.plannings.len());
    println!("  photo trackings: {}", workspace.photo_trackings.len());
    println!("  reminders:       {}", workspace.reminders.len());
}
