use serde::{Deserialize, Serialize};

/// Upper bound for the description field, enforced at the input boundary.
pub const DESC_MAX_LEN: usize = 100;

/// A single to-do item.
///
/// The serialized shape is exactly `{ "id": number, "title": string,
/// "desc"?: string }` — `desc` is omitted when absent so the stored
/// document stays compatible with data written by earlier versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Task {
    pub fn new(id: i64, title: &str, desc: Option<&str>) -> Self {
        Task {
            id,
            title: title.to_string(),
            desc: desc.map(|d| d.to_string()),
        }
    }

    /// Case-insensitive substring match against title or description.
    /// An absent description matches like an empty string.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.desc.as_deref().unwrap_or("").to_lowercase().contains(&query)
    }
}

/// Form submission mode: a new task or an edit of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(i64),
}
