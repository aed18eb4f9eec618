use crate::cli::{DeviceCommands, ImportedAddArgs, ImportedCommands};
use crate::commands::{devices, imported_devices};
use crate::domain::{DevicePropertiesUpdate, ImportedDeviceRequest};
use crate::error::CliError;
use crate::output::Output;
use crate::run::Context;

pub async fn run_device(command: DeviceCommands, context: &Context) -> Result<(), CliError> {
    let output = context.output();
    match command {
        DeviceCommands::List => {
            let client = context.connect().await?;
            println!("{}", output.list(&devices::list_devices(&client).await?)?);
        }
        DeviceCommands::Get { id, expand } => {
            let client = context.connect().await?;
            let device = devices::get_device(&client, &id, expand).await?;
            println!("{}", output.item(&device)?);
            if expand && output == Output::Table {
                for (label, profile) in [("Assigned profile", &device.deployment_profile), ("Intended profile", &device.intended_deployment_profile)] {
                    if let Some(profile) = profile {
                        println!("\n{}:\n{}", label, output.item(profile)?);
                    }
                }
            }
        }
        DeviceCommands::Find { serial_number } => {
            let client = context.connect().await?;
            println!("{}", output.list(&devices::find_devices_by_serial(&client, &serial_number).await?)?);
        }
        DeviceCommands::Set(args) => {
            let id = args.id.clone();
            let update = DevicePropertiesUpdate::from(args);
            if update.is_empty() {
                return Err(CliError::InvalidArgument("supply at least one property to change".to_string()));
            }

            let client = context.connect().await?;
            devices::update_device(&client, &id, &update).await?;
            println!("{}", output.message(&format!("Updated device {}", id))?);
        }
        DeviceCommands::Delete { id } => {
            let client = context.connect().await?;
            devices::delete_device(&client, &id).await?;
            println!("{}", output.message(&format!("Deleted device {}", id))?);
        }
    }

    Ok(())
}

pub async fn run_imported(command: ImportedCommands, context: &Context) -> Result<(), CliError> {
    let output = context.output();
    match command {
        ImportedCommands::List => {
            let client = context.connect().await?;
            println!("{}", output.list(&imported_devices::list_imported_devices(&client).await?)?);
        }
        ImportedCommands::Get { id } => {
            let client = context.connect().await?;
            println!("{}", output.item(&imported_devices::get_imported_device(&client, &id).await?)?);
        }
        ImportedCommands::Find { serial_number } => {
            let client = context.connect().await?;
            let found = imported_devices::find_imported_devices_by_serial(&client, &serial_number).await?;
            println!("{}", output.list(&found)?);
        }
        ImportedCommands::Add(ImportedAddArgs {
            serial_number,
            hash,
            group_tag,
            user,
        }) => {
            let request = ImportedDeviceRequest::new(&serial_number, &hash, group_tag.as_deref(), user.as_deref());
            let client = context.connect().await?;
            println!("{}", output.item(&imported_devices::add_imported_device(&client, &request).await?)?);
        }
        ImportedCommands::Delete { id } => {
            let client = context.connect().await?;
            imported_devices::delete_imported_device(&client, &id).await?;
            println!("{}", output.message(&format!("Deleted import status record {}", id))?);
        }
    }

    Ok(())
}
