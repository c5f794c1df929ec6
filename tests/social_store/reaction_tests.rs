use crate::support::*;
use townhall::model::ReactionBucket;

#[test]
fn department_scenario_with_reaction_toggle() {
    // post by u1 (eng) shared with the eng department
    let mut store = SocialStore::new();
    let p = post("U1", "release notes", Visibility::Department, t0())
        .with_visible_to_departments(["eng"]);
    let post_id = p.id.clone();
    store.add_post(p).unwrap();

    let u2 = user("U2", "sales");
    let u3 = user("U3", "eng");
    assert!(!townhall::can_view(&u2, store.post(&post_id).unwrap()));
    assert!(townhall::can_view(&u3, store.post(&post_id).unwrap()));

    store.toggle_post_reaction(&post_id, "👍", "U1");
    assert_eq!(
        store.post(&post_id).unwrap().reactions,
        vec![ReactionBucket {
            emoji: "👍".into(),
            users: vec!["U1".into()],
        }]
    );

    store.toggle_post_reaction(&post_id, "👍", "U1");
    assert!(store.post(&post_id).unwrap().reactions.is_empty());
}

#[test]
fn toggle_sequence_never_leaves_an_empty_bucket() {
    let (mut store, post_id) = store_with_post("u1", "hello");
    for (emoji, user) in [
        ("👍", "u1"),
        ("👍", "u2"),
        ("🎉", "u1"),
        ("👍", "u1"),
        ("🎉", "u1"),
        ("👍", "u2"),
    ] {
        store.toggle_post_reaction(&post_id, emoji, user);
        assert!(store
            .post(&post_id)
            .unwrap()
            .reactions
            .iter()
            .all(|b| !b.users.is_empty()));
    }
    assert!(store.post(&post_id).unwrap().reactions.is_empty());
}

#[test]
fn a_user_may_hold_reactions_under_several_emojis() {
    let (mut store, post_id) = store_with_post("u1", "hello");
    store.toggle_post_reaction(&post_id, "👍", "u2");
    store.toggle_post_reaction(&post_id, "❤", "u2");

    let reactions = &store.post(&post_id).unwrap().reactions;
    assert_eq!(reactions.len(), 2);
    assert!(reactions.iter().all(|b| b.contains("u2")));
}

#[test]
fn reactions_on_nested_replies_toggle_through_the_tree() {
    let (mut store, post_id) = store_with_post("u1", "hello");
    store.add_comment(&post_id, "u2", "top", None, t0());
    let comment_id = store.post(&post_id).unwrap().comments[0].id.clone();
    store.add_reply(&post_id, &comment_id, "u3", "reply", None, t0());
    let reply_id = store.post(&post_id).unwrap().comments[0].replies[0].id.clone();

    store.toggle_comment_reaction(&post_id, &reply_id, "🔥", "u1");
    let reply = &store.post(&post_id).unwrap().comments[0].replies[0];
    assert_eq!(reply.reactions.len(), 1);
    assert!(reply.reactions[0].contains("u1"));

    store.toggle_comment_reaction(&post_id, &reply_id, "🔥", "u1");
    let reply = &store.post(&post_id).unwrap().comments[0].replies[0];
    assert!(reply.reactions.is_empty());
}

#[test]
fn reacting_to_a_missing_post_changes_nothing() {
    let (mut store, _) = store_with_post("u1", "hello");
    let before = store.clone();
    store.toggle_post_reaction("gone", "👍", "u2");
    assert_eq!(store, before);
}
