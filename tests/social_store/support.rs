#![allow(dead_code)]

pub(crate) use chrono::{DateTime, Duration, TimeZone, Utc};
pub(crate) use townhall::model::{
    Post, Story, StoryMedia, StoryMediaKind, User,
};
pub(crate) use townhall::{SocialStore, Visibility};

/// Fixed session start so expiry and ordering tests are deterministic.
pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

pub(crate) fn user(id: &str, department: &str) -> User {
    User::new(id, id, "", department)
}

pub(crate) fn post(author: &str, content: &str, visibility: Visibility, now: DateTime<Utc>) -> Post {
    Post::new(author, content, visibility, now)
}

pub(crate) fn story(author: &str, now: DateTime<Utc>) -> Story {
    Story::new(
        author,
        StoryMedia::new(StoryMediaKind::Image, "https://cdn.example.com/s.jpg"),
        now,
    )
}

/// A store pre-loaded with one post, returning the post id.
pub(crate) fn store_with_post(author: &str, content: &str) -> (SocialStore, String) {
    let mut store = SocialStore::new();
    let p = post(author, content, Visibility::Company, t0());
    let id = p.id.clone();
    store.add_post(p).unwrap();
    (store, id)
}
