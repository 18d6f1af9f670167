//! Status transition rules for inquiries and collaborations, plus the
//! one-shot completion stamps used by tasks, subtasks and contracts.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::error::{AppError, AppResult};
use crate::models::collaborations::CollaborationStatus;
use crate::models::inquiries::InquiryStatus;
use crate::models::milestones::MilestoneStatus;

/// Inquiries leave `pending` once. Every other source state is terminal.
pub fn check_inquiry_transition(from: InquiryStatus, to: InquiryStatus) -> AppResult<()> {
    match (from, to) {
        (InquiryStatus::Pending, InquiryStatus::Responded)
        | (InquiryStatus::Pending, InquiryStatus::Converted)
        | (InquiryStatus::Pending, InquiryStatus::Rejected) => Ok(()),
        _ => Err(AppError::invalid_transition(
            "Inquiry",
            from.to_value(),
            to.to_value(),
        )),
    }
}

pub fn is_terminal(status: CollaborationStatus) -> bool {
    matches!(
        status,
        CollaborationStatus::Completed | CollaborationStatus::Cancelled
    )
}

/// The status a collaboration moves to when it advances one stage.
pub fn next_status(status: CollaborationStatus) -> Option<CollaborationStatus> {
    match status {
        CollaborationStatus::Inquiry => Some(CollaborationStatus::Negotiation),
        CollaborationStatus::Negotiation => Some(CollaborationStatus::Contracted),
        CollaborationStatus::Contracted => Some(CollaborationStatus::InProgress),
        CollaborationStatus::InProgress => Some(CollaborationStatus::Completed),
        CollaborationStatus::Completed | CollaborationStatus::Cancelled => None,
    }
}

/// Collaborations advance one stage at a time or get cancelled from any
/// non-terminal state. Completing requires every milestone completed.
pub fn check_collaboration_transition<'a, I>(
    from: CollaborationStatus,
    to: CollaborationStatus,
    milestones: I,
) -> AppResult<()>
where
    I: IntoIterator<Item = &'a MilestoneStatus>,
{
    let refused = || AppError::invalid_transition("Collaboration", from.to_value(), to.to_value());

    if is_terminal(from) {
        return Err(refused());
    }
    if to == CollaborationStatus::Cancelled {
        return Ok(());
    }
    if next_status(from) != Some(to) {
        return Err(refused());
    }
    if to == CollaborationStatus::Completed {
        let open = milestones
            .into_iter()
            .filter(|s| **s != MilestoneStatus::Completed)
            .count();
        if open > 0 {
            return Err(AppError::Validation(format!(
                "{open} milestone(s) are not completed yet"
            )));
        }
    }
    Ok(())
}

/// Completion timestamp after a status change: stamped the first time
/// `completed` is true and never moved afterwards.
pub fn stamp_completion(
    existing: Option<DateTime<Utc>>,
    completed: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match existing {
        Some(at) => Some(at),
        None if completed => Some(now),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn pending_inquiry_can_leave_once() {
        for to in [
            InquiryStatus::Responded,
            InquiryStatus::Converted,
            InquiryStatus::Rejected,
        ] {
            assert!(check_inquiry_transition(InquiryStatus::Pending, to).is_ok());
        }
    }

    #[test]
    fn settled_inquiry_refuses_every_move() {
        for from in [
            InquiryStatus::Responded,
            InquiryStatus::Converted,
            InquiryStatus::Rejected,
        ] {
            for to in [
                InquiryStatus::Pending,
                InquiryStatus::Responded,
                InquiryStatus::Converted,
                InquiryStatus::Rejected,
            ] {
                let err = check_inquiry_transition(from, to).unwrap_err();
                assert!(matches!(err, AppError::InvalidTransition { .. }));
            }
        }
    }

    #[test]
    fn pending_to_pending_is_not_a_transition() {
        assert!(check_inquiry_transition(InquiryStatus::Pending, InquiryStatus::Pending).is_err());
    }

    #[test]
    fn collaboration_moves_forward_one_stage() {
        let none: [MilestoneStatus; 0] = [];
        assert!(
            check_collaboration_transition(
                CollaborationStatus::Negotiation,
                CollaborationStatus::Contracted,
                none.iter()
            )
            .is_ok()
        );
        let err = check_collaboration_transition(
            CollaborationStatus::Negotiation,
            CollaborationStatus::InProgress,
            none.iter(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Collaboration cannot move from negotiation to in-progress"
        );
    }

    #[test]
    fn collaboration_cannot_move_backwards() {
        let none: [MilestoneStatus; 0] = [];
        assert!(
            check_collaboration_transition(
                CollaborationStatus::Contracted,
                CollaborationStatus::Negotiation,
                none.iter()
            )
            .is_err()
        );
    }

    #[test]
    fn cancel_from_any_open_state_only() {
        let none: [MilestoneStatus; 0] = [];
        assert!(
            check_collaboration_transition(
                CollaborationStatus::InProgress,
                CollaborationStatus::Cancelled,
                none.iter()
            )
            .is_ok()
        );
        assert!(
            check_collaboration_transition(
                CollaborationStatus::Completed,
                CollaborationStatus::Cancelled,
                none.iter()
            )
            .is_err()
        );
        assert!(
            check_collaboration_transition(
                CollaborationStatus::Cancelled,
                CollaborationStatus::Inquiry,
                none.iter()
            )
            .is_err()
        );
    }

    #[test]
    fn completing_requires_all_milestones_done() {
        let open = [MilestoneStatus::Completed, MilestoneStatus::Delayed];
        let err = check_collaboration_transition(
            CollaborationStatus::InProgress,
            CollaborationStatus::Completed,
            open.iter(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let done = [MilestoneStatus::Completed, MilestoneStatus::Completed];
        assert!(
            check_collaboration_transition(
                CollaborationStatus::InProgress,
                CollaborationStatus::Completed,
                done.iter()
            )
            .is_ok()
        );
    }

    #[test]
    fn completion_is_stamped_once() {
        let now = Utc::now();
        let earlier = now - Duration::hours(3);

        assert_eq!(stamp_completion(None, false, now), None);
        assert_eq!(stamp_completion(None, true, now), Some(now));
        assert_eq!(stamp_completion(Some(earlier), true, now), Some(earlier));
        assert_eq!(stamp_completion(Some(earlier), false, now), Some(earlier));
    }
}
