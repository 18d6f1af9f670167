//! Display labels and semantic colours for every status-like enum.
//!
//! Each table is an exhaustive match, so adding a variant fails to compile
//! until it gets a label here. Raw strings from outside the type system go
//! through [`badge_from_raw`], which falls back to a neutral badge.

use serde::Serialize;

use crate::models::collaborations::{CollaborationStatus, CollaborationType};
use crate::models::contracts::ContractStatus;
use crate::models::inquiries::InquiryStatus;
use crate::models::milestones::MilestoneStatus;
use crate::models::subtasks::SubtaskStatus;
use crate::models::tasks::{TaskCategory, TaskPriority, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticColor {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: SemanticColor,
}

pub trait Labeled {
    fn label(&self) -> &'static str;

    fn color(&self) -> SemanticColor {
        SemanticColor::Neutral
    }

    fn badge(&self) -> Badge {
        Badge {
            label: self.label().to_string(),
            color: self.color(),
        }
    }
}

impl Labeled for CollaborationStatus {
    fn label(&self) -> &'static str {
        match self {
            CollaborationStatus::Inquiry => "문의",
            CollaborationStatus::Negotiation => "협상 중",
            CollaborationStatus::Contracted => "계약 완료",
            CollaborationStatus::InProgress => "진행 중",
            CollaborationStatus::Completed => "완료됨",
            CollaborationStatus::Cancelled => "취소됨",
        }
    }

    fn color(&self) -> SemanticColor {
        match self {
            CollaborationStatus::Inquiry
            | CollaborationStatus::Negotiation
            | CollaborationStatus::Contracted => SemanticColor::Warning,
            CollaborationStatus::InProgress => SemanticColor::Info,
            CollaborationStatus::Completed => SemanticColor::Success,
            CollaborationStatus::Cancelled => SemanticColor::Error,
        }
    }
}

impl Labeled for CollaborationType {
    fn label(&self) -> &'static str {
        match self {
            CollaborationType::Seeding => "시딩",
            CollaborationType::Advertisement => "광고",
            CollaborationType::Partnership => "파트너십",
            CollaborationType::Other => "기타",
        }
    }
}

impl Labeled for MilestoneStatus {
    fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "대기 중",
            MilestoneStatus::InProgress => "진행 중",
            MilestoneStatus::Completed => "완료됨",
            MilestoneStatus::Delayed => "지연됨",
        }
    }

    fn color(&self) -> SemanticColor {
        match self {
            MilestoneStatus::Pending => SemanticColor::Neutral,
            MilestoneStatus::InProgress => SemanticColor::Info,
            MilestoneStatus::Completed => SemanticColor::Success,
            MilestoneStatus::Delayed => SemanticColor::Error,
        }
    }
}

impl Labeled for TaskStatus {
    fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "대기 중",
            TaskStatus::InProgress => "진행 중",
            TaskStatus::Completed => "완료됨",
            TaskStatus::Canceled => "취소됨",
        }
    }

    fn color(&self) -> SemanticColor {
        match self {
            TaskStatus::Pending => SemanticColor::Neutral,
            TaskStatus::InProgress => SemanticColor::Info,
            TaskStatus::Completed => SemanticColor::Success,
            TaskStatus::Canceled => SemanticColor::Error,
        }
    }
}

impl Labeled for SubtaskStatus {
    fn label(&self) -> &'static str {
        match self {
            SubtaskStatus::Pending => "대기 중",
            SubtaskStatus::InProgress => "진행 중",
            SubtaskStatus::Completed => "완료됨",
        }
    }

    fn color(&self) -> SemanticColor {
        match self {
            SubtaskStatus::Pending => SemanticColor::Neutral,
            SubtaskStatus::InProgress => SemanticColor::Info,
            SubtaskStatus::Completed => SemanticColor::Success,
        }
    }
}

impl Labeled for TaskPriority {
    fn label(&self) -> &'static str {
        match self {
            TaskPriority::High => "높음",
            TaskPriority::Medium => "중간",
            TaskPriority::Low => "낮음",
        }
    }

    fn color(&self) -> SemanticColor {
        match self {
            TaskPriority::High => SemanticColor::Error,
            TaskPriority::Medium => SemanticColor::Warning,
            TaskPriority::Low => SemanticColor::Info,
        }
    }
}

impl Labeled for TaskCategory {
    fn label(&self) -> &'static str {
        match self {
            TaskCategory::Content => "콘텐츠",
            TaskCategory::Collaboration => "협업",
            TaskCategory::Personal => "개인",
            TaskCategory::Other => "기타",
        }
    }
}

impl Labeled for InquiryStatus {
    fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "대기 중",
            InquiryStatus::Responded => "응답 완료",
            InquiryStatus::Converted => "협업 전환",
            InquiryStatus::Rejected => "거절됨",
        }
    }

    fn color(&self) -> SemanticColor {
        match self {
            InquiryStatus::Pending => SemanticColor::Warning,
            InquiryStatus::Responded => SemanticColor::Info,
            InquiryStatus::Converted => SemanticColor::Success,
            InquiryStatus::Rejected => SemanticColor::Error,
        }
    }
}

impl Labeled for ContractStatus {
    fn label(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "초안",
            ContractStatus::Pending => "서명 대기",
            ContractStatus::Signed => "서명 완료",
            ContractStatus::Expired => "만료됨",
        }
    }

    fn color(&self) -> SemanticColor {
        match self {
            ContractStatus::Draft => SemanticColor::Neutral,
            ContractStatus::Pending => SemanticColor::Warning,
            ContractStatus::Signed => SemanticColor::Success,
            ContractStatus::Expired => SemanticColor::Error,
        }
    }
}

/// Badge for a status string of unknown provenance. Recognised
/// collaboration, milestone and task statuses get their usual badge;
/// anything else is shown verbatim in neutral.
pub fn badge_from_raw(raw: &str) -> Badge {
    if let Ok(status) = raw.parse::<CollaborationStatus>() {
        return status.badge();
    }
    match raw {
        "pending" => TaskStatus::Pending.badge(),
        "canceled" => TaskStatus::Canceled.badge(),
        "delayed" => MilestoneStatus::Delayed.badge(),
        other => Badge {
            label: other.to_string(),
            color: SemanticColor::Neutral,
        },
    }
}

/// What the creator should do next with a collaboration in `status`.
pub fn next_action(status: CollaborationStatus) -> &'static str {
    match status {
        CollaborationStatus::Inquiry => "문의에 답변하기",
        CollaborationStatus::Negotiation => "조건 협의하기",
        CollaborationStatus::Contracted => "컨텐츠 기획 시작하기",
        CollaborationStatus::InProgress => "진행 상황 업데이트하기",
        CollaborationStatus::Completed => "인사이트 확인하기",
        CollaborationStatus::Cancelled => "세부 정보 보기",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn collaboration_status_colors() {
        assert_eq!(CollaborationStatus::Inquiry.color(), SemanticColor::Warning);
        assert_eq!(CollaborationStatus::Negotiation.color(), SemanticColor::Warning);
        assert_eq!(CollaborationStatus::Contracted.color(), SemanticColor::Warning);
        assert_eq!(CollaborationStatus::InProgress.color(), SemanticColor::Info);
        assert_eq!(CollaborationStatus::Completed.color(), SemanticColor::Success);
        assert_eq!(CollaborationStatus::Cancelled.color(), SemanticColor::Error);
    }

    #[test]
    fn every_status_has_a_non_empty_label() {
        for status in CollaborationStatus::iter() {
            assert!(!status.label().is_empty());
            assert!(!next_action(status).is_empty());
        }
        for status in TaskStatus::iter() {
            assert!(!status.label().is_empty());
        }
        for kind in CollaborationType::iter() {
            assert!(!kind.label().is_empty());
        }
    }

    #[test]
    fn type_labels_are_neutral() {
        assert_eq!(CollaborationType::Seeding.badge().label, "시딩");
        assert_eq!(CollaborationType::Seeding.color(), SemanticColor::Neutral);
    }

    #[test]
    fn raw_badges_fall_back_to_the_raw_text() {
        assert_eq!(badge_from_raw("in-progress"), CollaborationStatus::InProgress.badge());
        assert_eq!(badge_from_raw("delayed").color, SemanticColor::Error);
        assert_eq!(
            badge_from_raw("archived"),
            Badge {
                label: "archived".to_string(),
                color: SemanticColor::Neutral
            }
        );
    }

    #[test]
    fn priority_badges() {
        assert_eq!(TaskPriority::High.badge().label, "높음");
        assert_eq!(TaskPriority::High.color(), SemanticColor::Error);
        assert_eq!(TaskPriority::Low.color(), SemanticColor::Info);
    }
}
