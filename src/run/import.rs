use crate::cli::ImportArgs;
use crate::commands::sync::trigger_sync;
use crate::error::{CliError, exit_codes};
use crate::import::{ImportReport, ImportSettings, import_devices, read_device_records};
use crate::output::{Output, json};
use crate::run::Context;
use std::future::Future;
use std::io;
use tracing::{info, warn};

pub async fn run_import(args: ImportArgs, context: &Context) -> Result<(), CliError> {
    let records = read_device_records(&args.csv)?;
    info!("📄 Read {} device(s) from '{}'", records.len(), args.csv.display());

    let client = context.connect().await?;
    let settings = ImportSettings::from(context.config().import());
    let report = import_devices(&client, &records, args.group_tag.as_deref(), settings, interrupted(tokio::signal::ctrl_c())).await?;

    // The Ctrl-C listener now owns SIGINT, so later interrupts have to end the process themselves
    tokio::spawn(async {
        interrupted(tokio::signal::ctrl_c()).await;
        eprintln!("Interrupted");
        std::process::exit(i32::from(exit_codes::INTERRUPTED));
    });

    match context.output() {
        Output::Table => {
            for device in &report.devices {
                println!("{}", ImportReport::status_line(device));
            }
        }
        Output::Json => println!("{}", json::to_json(&report.devices)?),
    }

    if report.failed() > 0 {
        warn!("⚠️ {} of {} device(s) could not be imported", report.failed(), report.devices.len());
    }
    if report.cleanup_failures > 0 {
        warn!("⚠️ {} import status record(s) are left behind", report.cleanup_failures);
    }

    if args.sync {
        trigger_sync(&client).await?;
    }
    Ok(())
}

/// Completes when `signal` fires. A signal handler that cannot be installed never completes.
async fn interrupted<F: Future<Output = io::Result<()>>>(signal: F) {
    if signal.await.is_err() {
        std::future::pending::<()>().await;
    }
}
