use chrono::{DateTime, Utc};

use workboard_domain::stage::{LifecycleFlags, Stage};

/// A person referenced by work orders as creator or assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// User fields supplied on creation; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
}

/// A card on the board, as stored.
///
/// `stage` is kept as the raw stored value: rows outside the known stages are
/// served as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrder {
    pub id: i32,
    pub created_by_id: i32,
    pub created_at_time: DateTime<Utc>,
    pub completed_at_time: Option<DateTime<Utc>>,
    pub assigned_to_id: Option<i32>,
    pub canceled: bool,
    pub active: bool,
    pub complete: bool,
    pub description: String,
    pub stage: u8,
}

impl WorkOrder {
    /// Returns this work order placed in `stage` with the stage-coupled flags
    /// recomputed. Every other field is carried over unchanged.
    pub fn moved_to(&self, stage: Stage) -> Self {
        let LifecycleFlags {
            complete,
            active,
            canceled,
        } = stage.flags();
        Self {
            stage: stage.as_u8(),
            complete,
            active,
            canceled,
            ..self.clone()
        }
    }
}

/// Work-order fields supplied on creation; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewWorkOrder {
    pub created_by_id: i32,
    pub created_at_time: DateTime<Utc>,
    pub completed_at_time: Option<DateTime<Utc>>,
    pub assigned_to_id: Option<i32>,
    pub canceled: bool,
    pub active: bool,
    pub complete: bool,
    pub description: String,
    pub stage: u8,
}

/// A work order with its creator and assignee resolved.
#[derive(Debug, Clone)]
pub struct WorkOrderView {
    pub work_order: WorkOrder,
    pub assigned_to: Option<User>,
    pub created_by: Option<User>,
}

/// Resource collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    WorkOrder,
}

/// Operations subject to an access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    List,
    Read,
    Create,
    Replace,
    Delete,
    MoveStage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkOrder {
        WorkOrder {
            id: 7,
            created_by_id: 2,
            created_at_time: Utc::now(),
            completed_at_time: None,
            assigned_to_id: Some(3),
            canceled: true,
            active: false,
            complete: false,
            description: "Fix login bug".into(),
            stage: 1,
        }
    }

    #[test]
    fn should_derive_flags_and_keep_other_fields_on_move() {
        let before = sample();
        for stage in Stage::ALL {
            let after = before.moved_to(stage);
            assert_eq!(after.stage, stage.as_u8());
            assert_eq!(after.complete, stage == Stage::Completed);
            assert_eq!(
                after.active,
                matches!(stage, Stage::InProgress | Stage::InReview)
            );
            assert!(!after.canceled);
            assert_eq!(after.id, before.id);
            assert_eq!(after.created_by_id, before.created_by_id);
            assert_eq!(after.created_at_time, before.created_at_time);
            assert_eq!(after.completed_at_time, before.completed_at_time);
            assert_eq!(after.assigned_to_id, before.assigned_to_id);
            assert_eq!(after.description, before.description);
        }
    }
}
