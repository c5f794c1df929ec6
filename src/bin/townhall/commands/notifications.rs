use anyhow::Result;
use chrono::Utc;
use clap::Args;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use serde::Serialize;

use townhall::{Session, SocialStore};

use crate::output::{format_age, OutputManager, TableDisplay};

#[derive(Args, Debug)]
pub struct NotificationsArgs {
    /// Show only unread notifications
    #[arg(long)]
    pub unread: bool,
}

#[derive(Serialize)]
struct NotificationRow {
    kind: String,
    from: String,
    content: String,
    read: bool,
    age: String,
}

#[derive(Serialize)]
struct NotificationView {
    unread: usize,
    rows: Vec<NotificationRow>,
}

impl TableDisplay for NotificationView {
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(["Kind", "From", "Content", "Read", "Age"]);
        for row in &self.rows {
            table.add_row([
                Cell::new(&row.kind),
                Cell::new(&row.from),
                Cell::new(&row.content),
                Cell::new(if row.read { "yes" } else { "no" }),
                Cell::new(&row.age),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.rows
            .iter()
            .map(|r| format!("[{}] {} ({})", r.kind, r.content, r.age))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn handle_notifications(
    args: NotificationsArgs,
    session: &Session,
    store: &SocialStore,
    output: &OutputManager,
) -> Result<()> {
    let now = Utc::now();

    // unread first, then newest first within each group
    let mut notifications: Vec<_> = store
        .notifications
        .iter()
        .filter(|n| !args.unread || !n.is_read)
        .collect();
    notifications.sort_by_key(|n| (n.is_read, std::cmp::Reverse(n.created_at)));

    let rows = notifications
        .iter()
        .map(|n| NotificationRow {
            kind: n.kind.as_str().to_string(),
            from: session.display_name(&n.from_user_id).to_string(),
            content: n.content.clone(),
            read: n.is_read,
            age: format_age(n.created_at, now),
        })
        .collect();

    output.display(&NotificationView {
        unread: store.unread_notification_count(),
        rows,
    })
}
