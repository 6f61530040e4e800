use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use workboard_domain::stage::{LifecycleFlags, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// A work order as served by the API, with creator and assignee embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
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
    #[serde(default)]
    pub assigned_to: Option<User>,
    #[serde(default)]
    pub created_by: Option<User>,
}

impl WorkOrder {
    /// `None` when the stored stage is outside the board's columns.
    pub fn known_stage(&self) -> Option<Stage> {
        Stage::from_u8(self.stage)
    }

    /// This card placed in `stage`, stage-coupled flags recomputed and every
    /// other field carried over.
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

/// Body sent when a card is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkOrder {
    pub description: String,
    pub stage: u8,
    pub complete: bool,
    pub active: bool,
    pub canceled: bool,
    pub created_by_id: i32,
    pub assigned_to_id: Option<i32>,
    pub created_at_time: DateTime<Utc>,
    pub completed_at_time: Option<DateTime<Utc>>,
}

impl NewWorkOrder {
    /// A fresh, unassigned card. New cards start with every flag cleared,
    /// whatever column they are added to.
    pub fn card(description: &str, stage: Stage, created_by_id: i32, now: DateTime<Utc>) -> Self {
        Self {
            description: description.to_owned(),
            stage: stage.as_u8(),
            complete: false,
            active: false,
            canceled: false,
            created_by_id,
            assigned_to_id: None,
            created_at_time: now,
            completed_at_time: None,
        }
    }

    /// The card as this client sent it, under `id`. Embedded users are
    /// unknown locally.
    pub fn as_work_order(&self, id: i32) -> WorkOrder {
        WorkOrder {
            id,
            created_by_id: self.created_by_id,
            created_at_time: self.created_at_time,
            completed_at_time: self.completed_at_time,
            assigned_to_id: self.assigned_to_id,
            canceled: self.canceled,
            active: self.active,
            complete: self.complete,
            description: self.description.clone(),
            stage: self.stage,
            assigned_to: None,
            created_by: None,
        }
    }
}
