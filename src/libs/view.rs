use super::checked::CheckedSet;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], checked: &CheckedSet) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if checked.contains(task.id) { "✓" } else { "" },
                task.title,
                task.desc.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }
}
