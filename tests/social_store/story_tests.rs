use crate::support::*;
use townhall::engine::stories::{has_viewed_all, is_active};

#[test]
fn story_expires_exactly_at_the_24h_mark() {
    let s = story("u1", t0());
    assert!(is_active(&s, t0() + Duration::hours(23) + Duration::minutes(59)));
    assert!(!is_active(&s, t0() + Duration::hours(24)));
    assert!(!is_active(&s, t0() + Duration::hours(24) + Duration::seconds(1)));
}

#[test]
fn expired_story_leaves_the_bar_but_stays_in_the_archive() {
    let mut store = SocialStore::new();
    let s = story("u1", t0());
    let story_id = s.id.clone();
    store.add_story(s).unwrap();

    let viewer = user("u2", "eng");
    let just_before = t0() + Duration::hours(23) + Duration::minutes(59);
    assert_eq!(store.story_bar(&viewer, just_before).len(), 1);

    let just_after = t0() + Duration::hours(24) + Duration::seconds(1);
    assert!(store.story_bar(&viewer, just_after).is_empty());
    assert_eq!(store.story_archive("u1").len(), 1);
    assert!(store.story(&story_id).is_some());
}

#[test]
fn views_record_at_most_once_per_user() {
    let mut store = SocialStore::new();
    let s = story("u1", t0());
    let story_id = s.id.clone();
    store.add_story(s).unwrap();

    store.record_story_view(&story_id, "u2", t0() + Duration::minutes(5));
    store.record_story_view(&story_id, "u2", t0() + Duration::minutes(9));
    store.record_story_view(&story_id, "u3", t0() + Duration::minutes(10));

    let views = &store.story(&story_id).unwrap().views;
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].viewed_at, t0() + Duration::minutes(5));
}

#[test]
fn story_reactions_hold_one_slot_per_user() {
    let mut store = SocialStore::new();
    let s = story("u1", t0());
    let story_id = s.id.clone();
    store.add_story(s).unwrap();

    store.react_to_story(&story_id, "👍", "u2", t0());
    store.react_to_story(&story_id, "🔥", "u2", t0() + Duration::minutes(1));
    store.react_to_story(&story_id, "👍", "u3", t0() + Duration::minutes(2));

    let reactions = &store.story(&story_id).unwrap().reactions;
    assert_eq!(reactions.len(), 2);
    assert_eq!(reactions[0].emoji, "🔥");
    assert_eq!(reactions[0].user_id, "u2");
}

#[test]
fn story_bar_groups_run_oldest_first_per_author() {
    let mut store = SocialStore::new();
    let first = story("u1", t0());
    let second = story("u1", t0() + Duration::hours(1));
    let other = story("u2", t0() + Duration::minutes(30));
    let (first_id, second_id) = (first.id.clone(), second.id.clone());
    for s in [second, other, first] {
        store.add_story(s).unwrap();
    }

    let groups = store.story_bar(&user("u3", "eng"), t0() + Duration::hours(2));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].author_id, "u1");
    assert_eq!(
        groups[0].stories.iter().map(|s| s.id.clone()).collect::<Vec<_>>(),
        vec![first_id, second_id]
    );
    assert_eq!(groups[1].author_id, "u2");
}

#[test]
fn seen_state_needs_every_story_in_the_group_viewed() {
    let mut store = SocialStore::new();
    let a = story("u1", t0());
    let b = story("u1", t0() + Duration::minutes(10));
    let (a_id, b_id) = (a.id.clone(), b.id.clone());
    store.add_story(a).unwrap();
    store.add_story(b).unwrap();

    store.record_story_view(&a_id, "u2", t0() + Duration::hours(1));
    let groups = store.story_bar(&user("u2", "eng"), t0() + Duration::hours(2));
    assert!(!has_viewed_all(&groups[0].stories, "u2"));

    store.record_story_view(&b_id, "u2", t0() + Duration::hours(1));
    let groups = store.story_bar(&user("u2", "eng"), t0() + Duration::hours(2));
    assert!(has_viewed_all(&groups[0].stories, "u2"));
}

#[test]
fn promotion_is_author_only_and_upserts_by_name() {
    let mut store = SocialStore::new();
    let a = story("u1", t0());
    let b = story("u1", t0() + Duration::minutes(10));
    let (a_id, b_id) = (a.id.clone(), b.id.clone());
    store.add_story(a).unwrap();
    store.add_story(b).unwrap();

    // non-author: nothing happens
    store.promote_story_to_highlight(&a_id, "Offsite", "u2", t0());
    assert!(store.highlights.is_empty());
    assert!(!store.story(&a_id).unwrap().is_highlight);

    store.promote_story_to_highlight(&a_id, "Offsite", "u1", t0());
    store.promote_story_to_highlight(&b_id, "Offsite", "u1", t0());
    assert_eq!(store.highlights.len(), 1);
    assert_eq!(store.highlights[0].story_ids, vec![a_id.clone(), b_id]);
    assert_eq!(store.highlights[0].cover_story_id, a_id);
    assert_eq!(store.story(&a_id).unwrap().highlight_name.as_deref(), Some("Offsite"));
}

#[test]
fn highlighted_story_survives_expiry_in_the_highlight_view() {
    let mut store = SocialStore::new();
    let s = story("u1", t0());
    let story_id = s.id.clone();
    store.add_story(s).unwrap();
    store.promote_story_to_highlight(&story_id, "Launch", "u1", t0());

    let after_expiry = t0() + Duration::hours(30);
    assert!(store.story_bar(&user("u2", "eng"), after_expiry).is_empty());
    assert!(store.story(&story_id).unwrap().is_highlight);
    assert_eq!(store.highlights[0].story_ids, vec![story_id]);
}

#[test]
fn deleting_a_story_is_author_only() {
    let mut store = SocialStore::new();
    let s = story("u1", t0());
    let story_id = s.id.clone();
    store.add_story(s).unwrap();

    store.delete_story(&story_id, "u2");
    assert!(store.story(&story_id).is_some());

    store.delete_story(&story_id, "u1");
    assert!(store.story(&story_id).is_none());
}

#[test]
fn story_replies_append_with_timestamps() {
    let mut store = SocialStore::new();
    let s = story("u1", t0());
    let story_id = s.id.clone();
    store.add_story(s).unwrap();

    store.reply_to_story(&story_id, "u2", "nice!", t0() + Duration::minutes(1));
    store.reply_to_story(&story_id, "u3", "where is this?", t0() + Duration::minutes(2));

    let replies = &store.story(&story_id).unwrap().replies;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[1].message, "where is this?");
}
