use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use serde::Serialize;

use townhall::engine::polls;
use townhall::{FeedQuery, Session, SocialStore, Visibility};

use crate::output::{format_age, OutputManager, TableDisplay};

#[derive(Args, Debug)]
pub struct FeedArgs {
    /// View the feed as this user (defaults to the session user)
    #[arg(long)]
    pub viewer: Option<String>,

    /// Case-insensitive text filter
    #[arg(long)]
    pub search: Option<String>,

    /// Restrict to one visibility mode: company, department, specific, private
    #[arg(long)]
    pub visibility: Option<String>,
}

#[derive(Serialize)]
struct FeedRow {
    author: String,
    content: String,
    visibility: &'static str,
    reactions: usize,
    comments: usize,
    poll: Option<String>,
    age: String,
}

#[derive(Serialize)]
struct FeedView {
    viewer: String,
    rows: Vec<FeedRow>,
}

impl TableDisplay for FeedView {
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(["Author", "Content", "Visibility", "Reactions", "Comments", "Poll", "Age"]);
        for row in &self.rows {
            table.add_row([
                Cell::new(&row.author),
                Cell::new(&row.content),
                Cell::new(row.visibility),
                Cell::new(row.reactions),
                Cell::new(row.comments),
                Cell::new(row.poll.as_deref().unwrap_or("-")),
                Cell::new(&row.age),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.rows
            .iter()
            .map(|r| format!("{}: {} ({})", r.author, r.content, r.age))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn handle_feed(
    args: FeedArgs,
    session: &Session,
    store: &SocialStore,
    output: &OutputManager,
) -> Result<()> {
    let now = Utc::now();
    let viewer_id = args.viewer.as_deref().unwrap_or(&session.current_user().id);
    let Some(viewer) = session.user(viewer_id) else {
        bail!("unknown viewer '{viewer_id}'");
    };

    let mut query = FeedQuery::new();
    if let Some(search) = args.search {
        query = query.with_search(search);
    }
    if let Some(raw) = args.visibility.as_deref() {
        query = query.with_visibility(parse_visibility(raw)?);
    }

    let posts = store.visible_posts(viewer, &query, now);
    let rows = posts
        .iter()
        .map(|post| FeedRow {
            author: session.display_name(&post.author_id).to_string(),
            content: post.content.clone(),
            visibility: post.visibility.as_str(),
            reactions: post.reactions.iter().map(|b| b.count()).sum(),
            comments: post.comments.len(),
            poll: post.poll.as_ref().map(|poll| {
                if polls::has_voted(poll, &viewer.id) {
                    format!("{} ({} votes)", poll.question, polls::total_votes(poll))
                } else {
                    // results are gated until the viewer casts a vote
                    poll.question.clone()
                }
            }),
            age: format_age(post.created_at, now),
        })
        .collect();

    output.display(&FeedView {
        viewer: viewer.id.clone(),
        rows,
    })
}

fn parse_visibility(raw: &str) -> Result<Visibility> {
    match raw {
        "company" => Ok(Visibility::Company),
        "department" => Ok(Visibility::Department),
        "specific" => Ok(Visibility::Specific),
        "private" => Ok(Visibility::Private),
        other => bail!("unknown visibility mode '{other}'"),
    }
}
