use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::store::error::StoreError;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = super::open_store(&config)?;

    // Deleting an absent id is a no-op in the store; report it here
    // instead of silently doing nothing.
    let Some(task) = store.get_by_id(args.id).cloned() else {
        msg_print!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if config.confirm_destructive && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match store.delete(args.id) {
        Ok(()) => msg_success!(Message::TaskDeleted(args.id)),
        Err(StoreError::Storage(err)) => msg_error!(Message::StorageWriteFailed(err.to_string())),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
