//! Boundary validation for composer drafts.
//!
//! Invalid input is rejected here, before any store mutator runs; the store
//! itself has no invalid states to defend against.

use url::Url;

use crate::errors::{ValidationError, ValidationIssue, ValidationResult};
use crate::model::{Group, Poll, Post, Story};

/// Returns `true` if the provided string parses as a URL with a scheme.
pub fn is_valid_media_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// A post needs either body text or at least one attachment, and every
/// attachment URL must parse. An attached poll is validated with
/// [`validate_poll_draft`].
pub fn validate_post_draft(post: &Post) -> ValidationResult {
    let mut issues = Vec::new();

    if post.content.trim().is_empty() && post.attachments.is_empty() {
        issues.push(ValidationIssue::new(
            "content",
            "empty",
            "a post needs text or at least one attachment",
        ));
    }
    for attachment in &post.attachments {
        if !is_valid_media_url(&attachment.url) {
            issues.push(ValidationIssue::new(
                "attachments.url",
                "invalid_url",
                format!("'{}' is not a valid URL", attachment.url),
            ));
        }
    }
    if let Some(poll) = &post.poll
        && let Err(err) = validate_poll_draft(poll)
    {
        issues.extend(err.issues);
    }

    if issues.is_empty() { Ok(()) } else { Err(ValidationError::new(issues)) }
}

/// A poll needs a question and at least two non-empty options.
pub fn validate_poll_draft(poll: &Poll) -> ValidationResult {
    let mut issues = Vec::new();

    if poll.question.trim().is_empty() {
        issues.push(ValidationIssue::new("poll.question", "empty", "poll question is required"));
    }
    let filled = poll
        .options
        .iter()
        .filter(|opt| !opt.text.trim().is_empty())
        .count();
    if filled < 2 {
        issues.push(ValidationIssue::new(
            "poll.options",
            "too_few",
            "a poll needs at least two non-empty options",
        ));
    }

    if issues.is_empty() { Ok(()) } else { Err(ValidationError::new(issues)) }
}

/// A story needs media with a parseable URL.
pub fn validate_story_draft(story: &Story) -> ValidationResult {
    if is_valid_media_url(&story.media.url) {
        Ok(())
    } else {
        Err(ValidationError::single(
            "media.url",
            "invalid_url",
            format!("'{}' is not a valid URL", story.media.url),
        ))
    }
}

/// A group needs a non-empty name.
pub fn validate_group_draft(group: &Group) -> ValidationResult {
    if group.name.trim().is_empty() {
        Err(ValidationError::single("name", "empty", "group name is required"))
    } else {
        Ok(())
    }
}
