use crate::libs::checked::CheckedSet;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search query matched against title and description
    query: Option<String>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let store = super::open_store(&config)?;
    if store.recovered_raw().is_some() {
        msg_warning!(Message::StoredDataRecovered);
    }

    let query = args.query.unwrap_or_default();
    let tasks = store.search(&query);
    if tasks.is_empty() {
        if query.is_empty() {
            msg_print!(Message::NoTasksFound);
        } else {
            msg_print!(Message::NoTasksMatchingQuery(query));
        }
        return Ok(());
    }

    // Checked state is session-local; a fresh invocation starts unchecked.
    View::tasks(&tasks, &CheckedSet::new());

    Ok(())
}
