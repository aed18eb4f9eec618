use crate::cli::EspCommands;
use crate::commands::enrollment_status_pages as pages;
use crate::domain::{EnrollmentStatusPageSettings, EnrollmentStatusPageUpdate};
use crate::error::CliError;
use crate::run::Context;

pub async fn run_esp(command: EspCommands, context: &Context) -> Result<(), CliError> {
    let output = context.output();
    match command {
        EspCommands::List => {
            let client = context.connect().await?;
            println!("{}", output.list(&pages::list_status_pages(&client).await?)?);
        }
        EspCommands::Get { id } => {
            let client = context.connect().await?;
            println!("{}", output.item(&pages::get_status_page(&client, &id).await?)?);
        }
        EspCommands::Create(args) => {
            let settings = EnrollmentStatusPageSettings::from(args.settings);
            let client = context.connect().await?;
            let page = pages::create_status_page(&client, &args.name, args.description.as_deref(), &settings).await?;
            println!("{}", output.item(&page)?);
        }
        EspCommands::Update(args) => {
            let id = args.id.clone();
            let update = EnrollmentStatusPageUpdate::from(args);
            if update.is_empty() {
                return Err(CliError::InvalidArgument("supply at least one setting to change".to_string()));
            }

            let client = context.connect().await?;
            println!("{}", output.item(&pages::update_status_page(&client, &id, update).await?)?);
        }
        EspCommands::Delete { id } => {
            let client = context.connect().await?;
            pages::delete_status_page(&client, &id).await?;
            println!("{}", output.message(&format!("Deleted enrollment status page {}", id))?);
        }
    }

    Ok(())
}
