//! Collaboration progress: maps a collaboration's status and milestone
//! completion onto the fixed seven-stage pipeline shown to both parties.

use serde::Serialize;

use super::labels::{self, Badge, Labeled};
use crate::models::collaborations::{self, CollaborationStatus};
use crate::models::milestones::{self, MilestoneStatus};

/// Below this completed ratio an in-progress collaboration is still planning.
pub const PLANNING_THRESHOLD: f64 = 0.3;
/// Below this completed ratio an in-progress collaboration is in production.
pub const PRODUCTION_THRESHOLD: f64 = 0.7;

/// How many upcoming milestones a collaboration summary shows.
pub const UPCOMING_MILESTONE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    InitialInquiry,
    BusinessNegotiation,
    ContractSigning,
    ContentPlanning,
    Production,
    Review,
    Upload,
}

/// The pipeline, in order. A step index is a position in this array.
pub const STAGES: [Stage; 7] = [
    Stage::InitialInquiry,
    Stage::BusinessNegotiation,
    Stage::ContractSigning,
    Stage::ContentPlanning,
    Stage::Production,
    Stage::Review,
    Stage::Upload,
];

impl Stage {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::InitialInquiry => "최초 문의",
            Stage::BusinessNegotiation => "비즈니스 조율",
            Stage::ContractSigning => "계약 체결",
            Stage::ContentPlanning => "컨텐츠 기획",
            Stage::Production => "제작",
            Stage::Review => "검토",
            Stage::Upload => "업로드",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::InitialInquiry => "브랜드의 광고 관련 최초 문의 (일정 & 단가)",
            Stage::BusinessNegotiation => "크리에이터 회신 및 비즈니스 관련 조율",
            Stage::ContractSigning => "계약서 작성, 검토 및 체결",
            Stage::ContentPlanning => "광고 컨텐츠 기획안 작성 및 피드백",
            Stage::Production => "영상 촬영 및 편집",
            Stage::Review => "가편 전달, 브랜드 검토 및 피드백, 수정",
            Stage::Upload => "최종 컨텐츠 업로드",
        }
    }
}

/// Current step index (0..=6) for a collaboration.
///
/// An in-progress collaboration lands on planning, production or review by
/// its completed-milestone ratio. With no milestones at all it counts as
/// just started (planning). Cancelled collaborations report step 0.
pub fn current_step<'a, I>(status: CollaborationStatus, milestones: I) -> usize
where
    I: IntoIterator<Item = &'a MilestoneStatus>,
{
    let stage = match status {
        CollaborationStatus::Inquiry => Stage::InitialInquiry,
        CollaborationStatus::Negotiation => Stage::BusinessNegotiation,
        CollaborationStatus::Contracted => Stage::ContractSigning,
        CollaborationStatus::InProgress => in_progress_stage(milestones),
        CollaborationStatus::Completed => Stage::Upload,
        CollaborationStatus::Cancelled => Stage::InitialInquiry,
    };
    stage.index()
}

/// Like [`current_step`], for a status that arrived as an unchecked string.
/// Anything unrecognised falls back to step 0.
pub fn current_step_from_raw<'a, I>(raw_status: &str, milestones: I) -> usize
where
    I: IntoIterator<Item = &'a MilestoneStatus>,
{
    match raw_status.parse::<CollaborationStatus>() {
        Ok(status) => current_step(status, milestones),
        Err(_) => Stage::InitialInquiry.index(),
    }
}

fn in_progress_stage<'a, I>(milestones: I) -> Stage
where
    I: IntoIterator<Item = &'a MilestoneStatus>,
{
    let (completed, total) = milestones
        .into_iter()
        .fold((0usize, 0usize), |(done, total), status| {
            let done = done + usize::from(*status == MilestoneStatus::Completed);
            (done, total + 1)
        });

    if total == 0 {
        return Stage::ContentPlanning;
    }

    let progress = completed as f64 / total as f64;
    if progress < PLANNING_THRESHOLD {
        Stage::ContentPlanning
    } else if progress < PRODUCTION_THRESHOLD {
        Stage::Production
    } else {
        Stage::Review
    }
}

/// Pending or in-progress milestones, earliest due first, at most `limit`.
pub fn upcoming_milestones(
    milestones: &[milestones::Model],
    limit: usize,
) -> Vec<&milestones::Model> {
    let mut open: Vec<&milestones::Model> = milestones
        .iter()
        .filter(|m| matches!(m.status, MilestoneStatus::Pending | MilestoneStatus::InProgress))
        .collect();
    open.sort_by_key(|m| m.due_date);
    open.truncate(limit);
    open
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Done,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageView {
    pub index: usize,
    pub stage: Stage,
    pub label: &'static str,
    pub description: &'static str,
    pub state: StageState,
}

/// Everything the collaboration ticket renders about progress.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub current_step: usize,
    pub stages: Vec<StageView>,
    pub status: Badge,
    pub next_action: &'static str,
    pub upcoming_milestones: Vec<milestones::Model>,
}

pub fn progress_view(
    collaboration: &collaborations::Model,
    milestones: &[milestones::Model],
) -> ProgressView {
    let current = current_step(collaboration.status, milestones.iter().map(|m| &m.status));
    let stages = STAGES
        .iter()
        .map(|stage| {
            let index = stage.index();
            let state = match index.cmp(&current) {
                std::cmp::Ordering::Less => StageState::Done,
                std::cmp::Ordering::Equal => StageState::Current,
                std::cmp::Ordering::Greater => StageState::Upcoming,
            };
            StageView {
                index,
                stage: *stage,
                label: stage.label(),
                description: stage.description(),
                state,
            }
        })
        .collect();

    ProgressView {
        current_step: current,
        stages,
        status: collaboration.status.badge(),
        next_action: labels::next_action(collaboration.status),
        upcoming_milestones: upcoming_milestones(milestones, UPCOMING_MILESTONE_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
    }
}
