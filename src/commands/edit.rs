use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Mode, DESC_MAX_LEN};
use crate::store::error::StoreError;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i64,
    /// New title; prompted with the current one when omitted
    #[arg(short, long)]
    title: Option<String>,
    /// New description, up to 100 characters
    #[arg(short, long)]
    desc: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = super::open_store(&config)?;

    let Some(current) = store.get_by_id(args.id).cloned() else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    let interactive = args.title.is_none() && args.desc.is_none();
    let title = match args.title {
        Some(title) => title,
        None if interactive => prompt_title(&current.title)?,
        None => current.title.clone(),
    };
    let desc = match args.desc {
        Some(desc) => {
            if let Err(StoreError::DescTooLong(len)) = super::validate_desc(&desc) {
                msg_error!(Message::DescTooLong(len));
                return Ok(());
            }
            Some(desc)
        }
        None if interactive => prompt_desc(current.desc.as_deref().unwrap_or(""))?,
        None => current.desc.clone(),
    };

    match store.submit(Mode::Edit(args.id), &title, desc.as_deref()) {
        Ok(task) => msg_success!(Message::TaskUpdated(task.title)),
        Err(StoreError::EmptyTitle) => msg_error!(Message::TitleCannotBeEmpty),
        Err(StoreError::NotFound(id)) => msg_error!(Message::TaskNotFoundWithId(id)),
        Err(StoreError::Storage(err)) => msg_error!(Message::StorageWriteFailed(err.to_string())),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn prompt_title(current: &str) -> Result<String> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(current.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::TitleCannotBeEmpty.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(title)
}

fn prompt_desc(current: &str) -> Result<Option<String>> {
    let desc: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDesc.to_string())
        .with_initial_text(current.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.chars().count() > DESC_MAX_LEN {
                Err(Message::DescTooLong(input.chars().count()).to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(if desc.trim().is_empty() { None } else { Some(desc) })
}
