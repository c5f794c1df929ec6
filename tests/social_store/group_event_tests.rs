use crate::support::*;
use townhall::model::{Event, Group, Notification, NotificationKind};

#[test]
fn rsvp_toggles_attendance() {
    let mut store = SocialStore::new();
    let event = Event::new("All hands", "u1", t0(), t0() + Duration::hours(1));
    let event_id = event.id.clone();
    store.events.push(event);

    store.rsvp_event(&event_id, "u2");
    assert_eq!(store.events[0].attendees, vec!["u2"]);

    store.rsvp_event(&event_id, "u2");
    assert!(store.events[0].attendees.is_empty());
}

#[test]
fn group_owner_is_a_member_and_cannot_leave() {
    let mut store = SocialStore::new();
    let group = Group::new("Climbing", "u1", t0());
    let group_id = group.id.clone();
    store.add_group(group).unwrap();

    assert_eq!(store.groups[0].members, vec!["u1"]);

    store.join_group(&group_id, "u2");
    store.join_group(&group_id, "u2"); // joining twice stays a single membership
    assert_eq!(store.groups[0].members, vec!["u1", "u2"]);

    store.leave_group(&group_id, "u1");
    assert!(store.groups[0].members.contains(&"u1".to_string()));

    store.leave_group(&group_id, "u2");
    assert_eq!(store.groups[0].members, vec!["u1"]);
}

#[test]
fn group_deletion_is_owner_only() {
    let mut store = SocialStore::new();
    let group = Group::new("Climbing", "u1", t0());
    let group_id = group.id.clone();
    store.add_group(group).unwrap();

    store.delete_group(&group_id, "u2");
    assert_eq!(store.groups.len(), 1);

    store.delete_group(&group_id, "u1");
    assert!(store.groups.is_empty());
}

#[test]
fn empty_group_name_is_rejected_at_the_boundary() {
    let mut store = SocialStore::new();
    assert!(store.add_group(Group::new("  ", "u1", t0())).is_err());
    assert!(store.groups.is_empty());
}

fn notification(id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        kind: NotificationKind::Like,
        from_user_id: "u2".to_string(),
        post_id: None,
        content: "reacted to your post".to_string(),
        is_read: read,
        created_at: t0(),
    }
}

#[test]
fn notifications_mark_read_and_delete() {
    let mut store = SocialStore::new();
    store.notifications.push(notification("n1", false));
    store.notifications.push(notification("n2", false));

    store.mark_notification_read("n1");
    assert_eq!(store.unread_notification_count(), 1);

    // stale id: silent no-op
    store.mark_notification_read("gone");
    assert_eq!(store.unread_notification_count(), 1);

    store.mark_all_notifications_read();
    assert_eq!(store.unread_notification_count(), 0);

    store.delete_notification("n2");
    assert_eq!(store.notifications.len(), 1);
}
