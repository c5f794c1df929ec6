use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use serde::Serialize;

use townhall::engine::stories::has_viewed_all;
use townhall::{Session, SocialStore};

use crate::output::{format_age, OutputManager, TableDisplay};
use crate::theme::ICONS;

#[derive(Args, Debug)]
pub struct StoriesArgs {
    /// View the story bar as this user (defaults to the session user)
    #[arg(long)]
    pub viewer: Option<String>,
}

#[derive(Serialize)]
struct StoryBarRow {
    author: String,
    active_stories: usize,
    seen_all: bool,
    latest: String,
}

#[derive(Serialize)]
struct StoryBarView {
    viewer: String,
    rows: Vec<StoryBarRow>,
}

impl TableDisplay for StoryBarView {
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(["", "Author", "Stories", "Latest"]);
        for row in &self.rows {
            let ring = if row.seen_all { ICONS.seen } else { ICONS.unseen };
            table.add_row([
                Cell::new(ring),
                Cell::new(&row.author),
                Cell::new(row.active_stories),
                Cell::new(&row.latest),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.rows
            .iter()
            .map(|r| {
                let state = if r.seen_all { "seen" } else { "new" };
                format!("{} [{}] {} stories, {}", r.author, state, r.active_stories, r.latest)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn handle_stories(
    args: StoriesArgs,
    session: &Session,
    store: &SocialStore,
    output: &OutputManager,
) -> Result<()> {
    let now = Utc::now();
    let viewer_id = args.viewer.as_deref().unwrap_or(&session.current_user().id);
    let Some(viewer) = session.user(viewer_id) else {
        bail!("unknown viewer '{viewer_id}'");
    };

    let groups = store.story_bar(viewer, now);
    let rows = groups
        .iter()
        .map(|group| {
            let latest = group
                .stories
                .last()
                .map(|s| format_age(s.created_at, now))
                .unwrap_or_default();
            StoryBarRow {
                author: session.display_name(&group.author_id).to_string(),
                active_stories: group.stories.len(),
                seen_all: has_viewed_all(&group.stories, &viewer.id),
                latest,
            }
        })
        .collect();

    output.display(&StoryBarView {
        viewer: viewer.id.clone(),
        rows,
    })
}
