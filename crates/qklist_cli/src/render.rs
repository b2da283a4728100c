//! Human-readable output for CLI results.
//!
//! # Invariants
//! - Rendering is pure; callers decide where the text goes.
//! - Row IDs are 1-based list positions, matching `complete` and `remove`.

use qklist_core::{ConfigError, Item, ListError};

const ID_WIDTH: usize = 5;
const PRIORITY_WIDTH: usize = 10;
const DONE_WIDTH: usize = 7;

/// Renders the item table, or a hint when the list is empty.
pub fn item_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "There are no items in the list yet.\n".to_string();
    }

    let header = format!(
        "{:<ID_WIDTH$}| {:<PRIORITY_WIDTH$}| {:<DONE_WIDTH$}| Description",
        "ID", "Priority", "Done"
    );
    let rule = "-".repeat(header.len());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for (id, item) in (1_usize..).zip(items) {
        out.push_str(&format!(
            "{:<ID_WIDTH$}| {:<PRIORITY_WIDTH$}| {:<DONE_WIDTH$}| {}\n",
            id,
            format!("({})", item.priority),
            item.done,
            item.description
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn added(item: &Item) -> String {
    format!(
        "item \"{}\" was added with priority {}",
        item.description, item.priority
    )
}

pub fn completed(id: i64, item: &Item) -> String {
    format!("item #{id} \"{}\" completed", item.description)
}

pub fn removed(id: i64, item: &Item) -> String {
    format!("item #{id} \"{}\" was removed", item.description)
}

/// One-line message per error kind, distinguishing caller mistakes from
/// storage failures.
pub fn list_error(err: &ListError) -> String {
    match err {
        ListError::DbRead { .. } => format!("could not read the item store ({err})"),
        ListError::DbWrite { .. } => format!("could not write the item store ({err})"),
        ListError::InvalidId { id, len } if *len == 0 => {
            format!("invalid item id {id}: the list is empty")
        }
        ListError::InvalidId { id, len } => {
            format!("invalid item id {id}: expected a value between 1 and {len}")
        }
        ListError::Validation(inner) => format!("{inner}"),
    }
}

pub fn config_error(err: &ConfigError) -> String {
    match err {
        ConfigError::File { .. } => {
            format!("{err}; run `qklist init` first or pass --config")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{item_table, list_error};
    use qklist_core::{Item, ListError};

    #[test]
    fn empty_list_renders_hint() {
        assert!(item_table(&[]).contains("no items"));
    }

    #[test]
    fn table_rows_use_one_based_ids() {
        let items = vec![
            Item {
                description: "Buy milk.".to_string(),
                priority: 2,
                done: true,
            },
            Item {
                description: "Call Bob.".to_string(),
                priority: 1,
                done: false,
            },
        ];

        let table = item_table(&items);
        let rows: Vec<_> = table.lines().collect();
        assert!(rows[0].starts_with("ID"));
        assert!(rows[2].starts_with("1    | (2)       | true   | Buy milk."));
        assert!(rows[3].starts_with("2    | (1)       | false  | Call Bob."));
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn invalid_id_message_mentions_range() {
        let message = list_error(&ListError::InvalidId { id: 9, len: 2 });
        assert!(message.contains("between 1 and 2"));
        let message = list_error(&ListError::InvalidId { id: 1, len: 0 });
        assert!(message.contains("empty"));
    }
}
