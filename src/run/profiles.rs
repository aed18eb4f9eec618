use crate::cli::ProfileCommands;
use crate::commands::{assignments, profiles};
use crate::error::CliError;
use crate::output::json;
use crate::profile::{ProfileOptions, ProfileUpdate};
use crate::run::Context;
use tracing::info;

pub async fn run_profile(command: ProfileCommands, context: &Context) -> Result<(), CliError> {
    let output = context.output();
    match command {
        ProfileCommands::List => {
            let client = context.connect().await?;
            println!("{}", output.list(&profiles::list_profiles(&client).await?)?);
        }
        ProfileCommands::Get { id } => {
            let client = context.connect().await?;
            let profile = profiles::get_profile(&client, &id).await?;
            println!("{}", output.item(&ProfileOptions::from(&profile))?);
        }
        ProfileCommands::Create(args) => {
            let options = ProfileOptions::from(args);
            let client = context.connect().await?;
            println!("{}", output.item(&profiles::create_profile(&client, &options).await?)?);
        }
        ProfileCommands::Update(args) => {
            let id = args.id.clone();
            let update = ProfileUpdate::from(args);
            if update.is_empty() {
                return Err(CliError::InvalidArgument("supply at least one setting to change".to_string()));
            }

            let client = context.connect().await?;
            println!("{}", output.item(&profiles::update_profile(&client, &id, update).await?)?);
        }
        ProfileCommands::Delete { id } => {
            let client = context.connect().await?;
            profiles::delete_profile(&client, &id).await?;
            println!("{}", output.message(&format!("Deleted deployment profile {}", id))?);
        }
        ProfileCommands::Devices { id } => {
            let client = context.connect().await?;
            println!("{}", output.list(&profiles::list_assigned_devices(&client, &id).await?)?);
        }
        ProfileCommands::Export { id, output: target } => {
            let client = context.connect().await?;
            let file = json::to_json(&profiles::export_configuration(&client, &id).await?)?;
            match target {
                Some(path) => {
                    tokio::fs::write(&path, file).await?;
                    info!("💾 Wrote the offline configuration to '{}'", path.display());
                }
                None => println!("{}", file),
            }
        }
        ProfileCommands::Assign { id, group_id } => {
            let client = context.connect().await?;
            println!("{}", output.item(&assignments::assign_group(&client, &id, &group_id).await?)?);
        }
        ProfileCommands::Unassign { id, group_id } => {
            let client = context.connect().await?;
            assignments::unassign_group(&client, &id, &group_id).await?;
            println!("{}", output.message(&format!("Removed the assignment of {} to {}", id, group_id))?);
        }
        ProfileCommands::Assignments { id } => {
            let client = context.connect().await?;
            println!("{}", output.list(&assignments::list_assignments(&client, &id).await?)?);
        }
    }

    Ok(())
}
