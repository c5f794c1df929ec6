//! Session seed data: TOML on disk, or the built-in demo dataset.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use townhall::model::{
    Department, Notification, NotificationKind, Poll, Post, Story, StoryMedia, StoryMediaKind, User,
};
use townhall::visibility::Visibility;
use townhall::{Session, SocialStore};

#[derive(Debug, Deserialize)]
pub struct Seed {
    pub current_user: String,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<SeedPost>,
    #[serde(default)]
    pub stories: Vec<SeedStory>,
    #[serde(default)]
    pub notifications: Vec<SeedNotification>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPost {
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub visible_to: Vec<String>,
    #[serde(default)]
    pub visible_to_departments: Vec<String>,
    /// How long ago the post was created, for stable relative ordering.
    #[serde(default)]
    pub age_hours: i64,
    #[serde(default)]
    pub poll: Option<SeedPoll>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPoll {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub multiple_choice: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedStory {
    pub author: String,
    pub media_url: String,
    #[serde(default = "default_media_kind")]
    pub media_kind: StoryMediaKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub age_hours: i64,
}

fn default_media_kind() -> StoryMediaKind {
    StoryMediaKind::Image
}

#[derive(Debug, Deserialize)]
pub struct SeedNotification {
    pub kind: NotificationKind,
    pub from: String,
    pub content: String,
    #[serde(default)]
    pub age_hours: i64,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }

    /// Built-in dataset used when no seed file is given.
    pub fn demo() -> Self {
        toml::from_str(DEMO_SEED).expect("built-in demo seed parses")
    }

    /// Materializes the seed into a session and a populated store.
    pub fn into_state(self, now: DateTime<Utc>) -> Result<(Session, SocialStore)> {
        let session = Session::new(self.current_user, self.users, self.departments)?;
        let mut store = SocialStore::new();

        for seed in self.posts {
            let created = now - Duration::hours(seed.age_hours);
            let tagged = townhall::mentions::extract_mentions(&seed.content);
            let mut post = Post::new(seed.author, seed.content, seed.visibility, created)
                .with_visible_to(seed.visible_to)
                .with_visible_to_departments(seed.visible_to_departments)
                .with_tagged_users(tagged);
            if let Some(poll) = seed.poll {
                post = post.with_poll(Poll::new(poll.question, poll.options, poll.multiple_choice));
            }
            store
                .add_post(post)
                .context("seed post failed validation")?;
        }

        for seed in self.stories {
            let created = now - Duration::hours(seed.age_hours);
            let mut story = Story::new(
                seed.author,
                StoryMedia::new(seed.media_kind, seed.media_url),
                created,
            )
            .with_visibility(seed.visibility);
            if let Some(text) = seed.text {
                story = story.with_text(text, "#ffffff", "#222222");
            }
            store
                .add_story(story)
                .context("seed story failed validation")?;
        }

        for seed in self.notifications {
            store.notifications.push(Notification {
                id: townhall::id::generate_entity_id(),
                kind: seed.kind,
                from_user_id: seed.from,
                post_id: None,
                content: seed.content,
                is_read: false,
                created_at: now - Duration::hours(seed.age_hours),
            });
        }

        Ok((session, store))
    }
}

const DEMO_SEED: &str = r#"
current_user = "maya"

[[departments]]
id = "eng"
name = "Engineering"

[[departments]]
id = "sales"
name = "Sales"

[[users]]
id = "maya"
name = "Maya Lindqvist"
avatar = ""
department_id = "eng"

[[users]]
id = "tomas"
name = "Tomas Riva"
avatar = ""
department_id = "sales"

[[users]]
id = "june"
name = "June Park"
avatar = ""
department_id = "eng"

[[posts]]
author = "tomas"
content = "Q3 numbers are in. Great push everyone!"
age_hours = 26

[[posts]]
author = "june"
content = "Deploy window moved to Thursday, details in the runbook."
visibility = "department"
visible_to_departments = ["eng"]
age_hours = 5

[[posts]]
author = "maya"
content = "Team lunch vote, cc @june:"
age_hours = 2

[posts.poll]
question = "Where should we go?"
options = ["Pizza", "Sushi", "Salad bar"]

[[stories]]
author = "june"
media_url = "https://cdn.example.com/stories/offsite-1.jpg"
text = "Offsite day one"
age_hours = 3

[[stories]]
author = "tomas"
media_url = "https://cdn.example.com/stories/kickoff.jpg"
age_hours = 25

[[notifications]]
kind = "comment"
from = "june"
content = "June commented on your post"
age_hours = 1

[[notifications]]
kind = "like"
from = "tomas"
content = "Tomas reacted to your post"
age_hours = 4
"#;
