pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;

use crate::libs::config::Config;
use crate::libs::storage::LocalStorage;
use crate::libs::task::DESC_MAX_LEN;
use crate::store::error::StoreError;
use crate::store::tasks::TaskStore;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a new task")]
    New(new::NewArgs),
    #[command(about = "List tasks, optionally filtered by a search query")]
    List(list::ListArgs),
    #[command(about = "Edit an existing task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Check off completed tasks and clear them")]
    Clear(clear::ClearArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::New(args) => new::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
        }
    }
}

/// Opens the task store on the configured storage directory.
pub(crate) fn open_store(config: &Config) -> Result<TaskStore> {
    let storage = match &config.data_dir {
        Some(dir) => LocalStorage::with_dir(dir.clone())?,
        None => LocalStorage::new()?,
    };
    Ok(TaskStore::open(Box::new(storage))?)
}

/// Boundary validation for the description field. The store itself does
/// not enforce the display bound, the input boundary does.
pub(crate) fn validate_desc(desc: &str) -> Result<(), StoreError> {
    let len = desc.chars().count();
    if len > DESC_MAX_LEN {
        return Err(StoreError::DescTooLong(len));
    }
    Ok(())
}
