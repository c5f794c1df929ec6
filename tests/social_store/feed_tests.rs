use crate::support::*;
use townhall::{FeedQuery, SortOrder};

fn seeded_store() -> SocialStore {
    let mut store = SocialStore::new();
    store
        .add_post(post("u1", "quarterly numbers", Visibility::Company, t0()))
        .unwrap();
    store
        .add_post(
            post("u2", "deploy runbook", Visibility::Department, t0() + Duration::hours(1))
                .with_visible_to_departments(["eng"]),
        )
        .unwrap();
    store
        .add_post(
            post("u2", "budget draft", Visibility::Specific, t0() + Duration::hours(2))
                .with_visible_to(["u3"]),
        )
        .unwrap();
    store
}

#[test]
fn feed_is_filtered_and_newest_first() {
    let store = seeded_store();
    let now = t0() + Duration::hours(3);

    let sales_feed = store.visible_posts(&user("u4", "sales"), &FeedQuery::new(), now);
    assert_eq!(sales_feed.len(), 1);
    assert_eq!(sales_feed[0].content, "quarterly numbers");

    let eng_feed = store.visible_posts(&user("u3", "eng"), &FeedQuery::new(), now);
    let contents: Vec<_> = eng_feed.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, vec!["budget draft", "deploy runbook", "quarterly numbers"]);
}

#[test]
fn ascending_order_flips_the_feed() {
    let store = seeded_store();
    let feed = store.visible_posts(
        &user("u3", "eng"),
        &FeedQuery::new().with_order(SortOrder::Asc),
        t0() + Duration::hours(3),
    );
    assert_eq!(feed.first().unwrap().content, "quarterly numbers");
}

#[test]
fn search_matches_content_case_insensitively() {
    let store = seeded_store();
    let feed = store.visible_posts(
        &user("u3", "eng"),
        &FeedQuery::new().with_search("RUNBOOK"),
        t0() + Duration::hours(3),
    );
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].content, "deploy runbook");
}

#[test]
fn visibility_mode_filter_layers_on_top_of_can_view() {
    let store = seeded_store();
    let feed = store.visible_posts(
        &user("u3", "eng"),
        &FeedQuery::new().with_visibility(Visibility::Department),
        t0() + Duration::hours(3),
    );
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].content, "deploy runbook");
}

#[test]
fn authors_see_their_scheduled_posts_in_the_feed_others_do_not() {
    let mut store = seeded_store();
    store
        .add_post(
            post("u1", "launch teaser", Visibility::Company, t0())
                .scheduled(t0() + Duration::hours(8)),
        )
        .unwrap();

    let now = t0() + Duration::hours(3);
    let own = store.visible_posts(&user("u1", "eng"), &FeedQuery::new(), now);
    assert!(own.iter().any(|p| p.content == "launch teaser"));

    let other = store.visible_posts(&user("u4", "sales"), &FeedQuery::new(), now);
    assert!(!other.iter().any(|p| p.content == "launch teaser"));
}

#[test]
fn author_only_post_edits_ignore_other_requesters() {
    let mut store = seeded_store();
    let post_id = store.posts[0].id.clone();

    store.update_post_content(&post_id, "u9", "hijacked", t0() + Duration::hours(4));
    assert_eq!(store.posts[0].content, "quarterly numbers");

    store.update_post_content(&post_id, "u1", "revised numbers", t0() + Duration::hours(4));
    assert_eq!(store.posts[0].content, "revised numbers");
    assert_eq!(store.posts[0].updated_at, t0() + Duration::hours(4));
}

#[test]
fn deleting_a_post_is_author_only() {
    let mut store = seeded_store();
    let post_id = store.posts[0].id.clone();

    store.delete_post(&post_id, "u9");
    assert!(store.post(&post_id).is_some());

    store.delete_post(&post_id, "u1");
    assert!(store.post(&post_id).is_none());
}
