//! # Tudo - local-first to-do tasks
//!
//! A command-line to-do task manager that keeps the full task list as a
//! single JSON document in the platform application-data directory.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, and delete tasks with optional descriptions
//! - **Search**: Case-insensitive substring search over titles and descriptions
//! - **Check & Clear**: Check off completed tasks and clear them in one pass
//! - **Durable Storage**: One well-known key, rewritten in full on every change
//! - **Safe Failure**: Malformed stored data and failed writes never lose the in-memory state
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
