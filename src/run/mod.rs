//! Runs one parsed command: validates its input, signs in and prints the result.

mod devices;
mod enrollment_status_pages;
mod import;
mod profiles;

use crate::app_config::AppConfig;
use crate::auth::{Authenticator, authenticator_for};
use crate::cli::{Cli, Commands};
use crate::commands::{events, sync};
use crate::error::CliError;
use crate::graph::GraphClient;
use crate::output::Output;
use tracing::debug;

pub struct Context {
    config: AppConfig,
    interactive: bool,
    output: Output,
}

impl Context {
    /// Signs in and returns a client for the session. Called only once the input has been validated.
    pub async fn connect(&self) -> Result<GraphClient, CliError> {
        let authenticator: Box<dyn Authenticator> = authenticator_for(self.config.auth(), self.interactive)?;
        let session = authenticator.authenticate(&reqwest::Client::new()).await?;
        debug!("🔑 Signed in, the token expires at {}", session.expires_at());

        Ok(GraphClient::new(&session, &self.config)?)
    }

    pub fn output(&self) -> Output {
        self.output
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::load()?;
    config.auth_mut().apply_overrides(cli.tenant, cli.app_id, cli.app_secret);
    let context = Context {
        config,
        interactive: cli.interactive,
        output: Output::new(cli.json),
    };

    match cli.command {
        Commands::Device(args) => devices::run_device(args.command, &context).await,
        Commands::Imported(args) => devices::run_imported(args.command, &context).await,
        Commands::Import(args) => import::run_import(args, &context).await,
        Commands::Profile(args) => profiles::run_profile(args.command, &context).await,
        Commands::Esp(args) => enrollment_status_pages::run_esp(args.command, &context).await,
        Commands::Sync => {
            let client = context.connect().await?;
            sync::trigger_sync(&client).await?;
            println!("{}", context.output().message("Sync triggered")?);
            Ok(())
        }
        Commands::SyncInfo => {
            let client = context.connect().await?;
            println!("{}", context.output().item(&sync::get_sync_info(&client).await?)?);
            Ok(())
        }
        Commands::Events => {
            let client = context.connect().await?;
            println!("{}", context.output().list(&events::list_events(&client).await?)?);
            Ok(())
        }
    }
}
