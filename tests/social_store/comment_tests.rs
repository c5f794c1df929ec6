use crate::support::*;

#[test]
fn comments_append_in_order_with_optional_stars() {
    let (mut store, post_id) = store_with_post("u1", "hello");
    store.add_comment(&post_id, "u2", "first", None, t0());
    store.add_comment(&post_id, "u3", "second", Some(4), t0() + Duration::minutes(1));

    let comments = &store.post(&post_id).unwrap().comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "first");
    assert_eq!(comments[1].stars, Some(4));
    assert!(comments[0].parent_id.is_none());
}

#[test]
fn reply_insertion_preserves_sibling_comments() {
    let (mut store, post_id) = store_with_post("u1", "hello");
    store.add_comment(&post_id, "u2", "a", None, t0());
    store.add_comment(&post_id, "u3", "b", None, t0());
    store.add_comment(&post_id, "u4", "c", None, t0());

    let before = store.post(&post_id).unwrap().comments.clone();
    let target = before[1].id.clone();
    store.add_reply(&post_id, &target, "u5", "reply to b", None, t0());

    let after = &store.post(&post_id).unwrap().comments;
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].replies.len(), 1);
    assert_eq!(after[1].replies[0].parent_id.as_deref(), Some(target.as_str()));
}

#[test]
fn replies_nest_to_arbitrary_depth_with_mentions() {
    let (mut store, post_id) = store_with_post("u1", "hello");
    store.add_comment(&post_id, "u2", "top", None, t0());
    let mut parent = store.post(&post_id).unwrap().comments[0].id.clone();

    for depth in 0..4 {
        store.add_reply(
            &post_id,
            &parent,
            "u3",
            &format!("level {depth}"),
            Some("u2".to_string()),
            t0(),
        );
        let post = store.post(&post_id).unwrap();
        let mut node = &post.comments[0];
        for _ in 0..=depth {
            node = &node.replies[0];
        }
        assert_eq!(node.mention_name.as_deref(), Some("u2"));
        parent = node.id.clone();
    }
}

#[test]
fn reply_to_a_missing_comment_is_a_silent_no_op() {
    let (mut store, post_id) = store_with_post("u1", "hello");
    store.add_comment(&post_id, "u2", "only", None, t0());
    let before = store.clone();

    store.add_reply(&post_id, "does-not-exist", "u3", "lost", None, t0());
    assert_eq!(store, before);
}
