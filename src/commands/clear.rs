use crate::libs::checked::CheckedSet;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::store::error::StoreError;
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Check off these task IDs instead of selecting interactively
    #[arg(long = "id")]
    ids: Vec<i64>,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = super::open_store(&config)?;

    let tasks = store.tasks().to_vec();
    if tasks.is_empty() {
        msg_print!(Message::NoTasksFound);
        return Ok(());
    }

    let mut checked = CheckedSet::new();
    if args.ids.is_empty() {
        let labels: Vec<String> = tasks
            .iter()
            .map(|t| match &t.desc {
                Some(desc) => format!("{} — {}", t.title, desc),
                None => t.title.clone(),
            })
            .collect();
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectDone.to_string())
            .items(&labels)
            .interact()?;
        for idx in picked {
            checked.toggle(tasks[idx].id);
        }
    } else {
        for id in args.ids {
            checked.toggle(id);
        }
    }

    // Ids given on the command line may no longer exist.
    checked.prune(&tasks);
    if checked.is_empty() {
        msg_warning!(Message::NoTasksSelected);
        return Ok(());
    }

    if config.confirm_destructive && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearDone(checked.len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match store.delete_many(checked.as_set()) {
        Ok(removed) => msg_success!(Message::TasksDeletedCount(removed)),
        Err(StoreError::Storage(err)) => msg_error!(Message::StorageWriteFailed(err.to_string())),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
