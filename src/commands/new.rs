use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Mode, DESC_MAX_LEN};
use crate::store::error::StoreError;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Task title; prompted interactively when omitted
    title: Option<String>,
    /// Optional description, up to 100 characters
    #[arg(short, long)]
    desc: Option<String>,
}

pub fn cmd(args: NewArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = super::open_store(&config)?;

    let interactive = args.title.is_none();
    let title = match args.title {
        Some(title) => title,
        None => prompt_title()?,
    };
    let desc = match args.desc {
        Some(desc) => {
            if let Err(StoreError::DescTooLong(len)) = super::validate_desc(&desc) {
                msg_error!(Message::DescTooLong(len));
                return Ok(());
            }
            Some(desc)
        }
        None if interactive => prompt_desc()?,
        None => None,
    };

    match store.submit(Mode::Create, &title, desc.as_deref()) {
        Ok(task) => msg_success!(Message::TaskCreated(task.title)),
        Err(StoreError::EmptyTitle) => msg_error!(Message::TitleCannotBeEmpty),
        Err(StoreError::Storage(err)) => msg_error!(Message::StorageWriteFailed(err.to_string())),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Prompts until a non-empty title is entered; the typed text is kept
/// on screen for correction instead of being discarded.
fn prompt_title() -> Result<String> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
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

fn prompt_desc() -> Result<Option<String>> {
    let desc: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDesc.to_string())
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
