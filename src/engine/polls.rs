//! Poll voting and aggregation.

use crate::model::{Poll, PollOption};

/// Toggles `user_id`'s vote in `option_id`.
///
/// Single-choice polls reject a vote in a second option while a vote stands
/// elsewhere (silent no-op; the voter must retract first). Toggling within the
/// same option always works, and multiple-choice polls toggle each option
/// independently. An unknown `option_id` is a silent no-op.
pub fn vote(poll: &Poll, option_id: &str, user_id: &str) -> Poll {
    let has_voted_elsewhere = poll
        .options
        .iter()
        .any(|opt| opt.id != option_id && opt.votes.iter().any(|v| v == user_id));
    if !poll.multiple_choice && has_voted_elsewhere {
        return poll.clone();
    }

    let mut next = poll.clone();
    if let Some(option) = next.options.iter_mut().find(|opt| opt.id == option_id) {
        if option.votes.iter().any(|v| v == user_id) {
            option.votes.retain(|v| v != user_id);
        } else {
            option.votes.push(user_id.to_string());
        }
    }
    next
}

/// Total number of votes across all options.
pub fn total_votes(poll: &Poll) -> usize {
    poll.options.iter().map(|opt| opt.votes.len()).sum()
}

/// Share of the total held by `option`, as a rounded whole percentage.
/// Zero when the poll has no votes at all.
pub fn percentage(poll: &Poll, option: &PollOption) -> u32 {
    let total = total_votes(poll);
    if total == 0 {
        return 0;
    }
    (option.votes.len() as f64 / total as f64 * 100.0).round() as u32
}

/// Whether `user_id` holds a vote in any option. Results are shown to a viewer
/// only once this is true.
pub fn has_voted(poll: &Poll, user_id: &str) -> bool {
    poll.options.iter().any(|opt| opt.votes.iter().any(|v| v == user_id))
}
