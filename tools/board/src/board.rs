use chrono::Utc;

use workboard_domain::stage::Stage;

use crate::api::WorkOrderApi;
use crate::error::ClientError;
use crate::filter;
use crate::model::{NewWorkOrder, WorkOrder};
use crate::policy::{Policies, SyncPolicy};

const FETCH_FAILED: &str = "Failed to fetch work orders";
const UPDATE_FAILED: &str = "Failed to update work order";
const CREATE_FAILED: &str = "Failed to create work order";
const DELETE_FAILED: &str = "Failed to delete work order";

/// Id of a card added optimistically, until the server assigns one.
const PROVISIONAL_ID: i32 = 0;

/// Cards of one stage, in cache order.
#[derive(Debug)]
pub struct Column<'a> {
    pub stage: Stage,
    pub cards: Vec<&'a WorkOrder>,
}

/// Local cache of every work order plus the drag indicator and the last
/// user-visible error.
pub struct Board<A> {
    api: A,
    created_by_id: i32,
    policies: Policies,
    work_orders: Vec<WorkOrder>,
    dragging: Option<i32>,
    error: Option<String>,
}

impl<A: WorkOrderApi> Board<A> {
    pub fn new(api: A, created_by_id: i32) -> Self {
        Self {
            api,
            created_by_id,
            policies: Policies::default(),
            work_orders: Vec::new(),
            dragging: None,
            error: None,
        }
    }

    pub fn with_policies(mut self, policies: Policies) -> Self {
        self.policies = policies;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn work_orders(&self) -> &[WorkOrder] {
        &self.work_orders
    }

    /// Id of the card being dragged, if any.
    pub fn dragging(&self) -> Option<i32> {
        self.dragging
    }

    /// Message of the most recent failed operation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the cache with the server's full list.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.list().await {
            Ok(work_orders) => {
                self.work_orders = work_orders;
                self.error = None;
                self.warn_anomalies();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "work order fetch failed");
                self.error = Some(FETCH_FAILED.to_owned());
                Err(e)
            }
        }
    }

    pub fn begin_drag(&mut self, id: i32) {
        if self.position(id).is_some() {
            self.dragging = Some(id);
        }
    }

    /// Moves a card to `stage` and persists it with a full-entity replace.
    ///
    /// Moving to the current stage, or moving an unknown card, only clears
    /// the drag indicator.
    pub async fn move_card(&mut self, id: i32, stage: Stage) -> Result<(), ClientError> {
        self.dragging = None;
        let Some(index) = self.position(id) else {
            return Ok(());
        };
        let before = self.work_orders[index].clone();
        if before.stage == stage.as_u8() {
            return Ok(());
        }

        let moved = before.moved_to(stage);
        let optimistic = self.policies.move_card.applies_before_send();
        if optimistic {
            self.work_orders[index] = moved.clone();
        }

        match self.api.replace(&moved).await {
            Ok(()) => {
                if !optimistic {
                    self.work_orders[index] = moved;
                }
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id, stage = %stage, error = %e, "work order move failed");
                if optimistic {
                    self.work_orders[index] = before;
                }
                self.error = Some(UPDATE_FAILED.to_owned());
                Err(e)
            }
        }
    }

    /// Creates a card in `stage`. Returns `None` without a request when the
    /// description is blank.
    ///
    /// Under `Optimistic` a provisional card (id 0, never a server id) is
    /// shown until the server answers. `AdoptServer` inserts the server's
    /// record; `Confirmed` inserts the card as sent, under the server's id.
    pub async fn add_card(
        &mut self,
        stage: Stage,
        description: &str,
    ) -> Result<Option<i32>, ClientError> {
        if description.trim().is_empty() {
            return Ok(None);
        }
        let draft = NewWorkOrder::card(description, stage, self.created_by_id, Utc::now());
        let policy = self.policies.add_card;
        if policy.applies_before_send() {
            self.work_orders.push(draft.as_work_order(PROVISIONAL_ID));
        }

        let result = self.api.create(&draft).await;
        if policy.applies_before_send() {
            self.work_orders.retain(|w| w.id != PROVISIONAL_ID);
        }

        match result {
            Ok(created) => {
                let id = created.id;
                let card = match policy {
                    SyncPolicy::Confirmed => draft.as_work_order(id),
                    SyncPolicy::Optimistic | SyncPolicy::AdoptServer => created,
                };
                self.work_orders.push(card);
                self.error = None;
                self.warn_anomalies();
                Ok(Some(id))
            }
            Err(e) => {
                tracing::warn!(stage = %stage, error = %e, "work order create failed");
                self.error = Some(CREATE_FAILED.to_owned());
                Err(e)
            }
        }
    }

    /// Deletes a card on the server and drops it from the cache.
    pub async fn delete_card(&mut self, id: i32) -> Result<(), ClientError> {
        let optimistic = self.policies.delete_card.applies_before_send();
        let removed = match self.position(id) {
            Some(index) if optimistic => Some((index, self.work_orders.remove(index))),
            _ => None,
        };

        match self.api.delete(id).await {
            Ok(()) => {
                if !optimistic {
                    self.work_orders.retain(|w| w.id != id);
                }
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "work order delete failed");
                if let Some((index, work_order)) = removed {
                    self.work_orders.insert(index, work_order);
                }
                self.error = Some(DELETE_FAILED.to_owned());
                Err(e)
            }
        }
    }

    /// Cards matching `query`. Never touches the network.
    pub fn filtered(&self, query: &str) -> Vec<&WorkOrder> {
        self.work_orders
            .iter()
            .filter(|w| filter::matches(w, query))
            .collect()
    }

    /// One column per stage over the filtered cards. Cards with an unknown
    /// stage appear in no column.
    pub fn columns(&self, query: &str) -> Vec<Column<'_>> {
        let filtered = self.filtered(query);
        Stage::ALL
            .iter()
            .map(|&stage| Column {
                stage,
                cards: filtered
                    .iter()
                    .copied()
                    .filter(|w| w.stage == stage.as_u8())
                    .collect(),
            })
            .collect()
    }

    /// Distinct stored stage values outside the board's columns, ascending.
    pub fn anomalous_stages(&self) -> Vec<u8> {
        let mut stages: Vec<u8> = self
            .work_orders
            .iter()
            .filter(|w| w.known_stage().is_none())
            .map(|w| w.stage)
            .collect();
        stages.sort_unstable();
        stages.dedup();
        stages
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.work_orders.iter().position(|w| w.id == id)
    }

    fn warn_anomalies(&self) {
        for work_order in self.work_orders.iter().filter(|w| w.known_stage().is_none()) {
            tracing::warn!(
                id = work_order.id,
                stage = work_order.stage,
                "work order has unknown stage"
            );
        }
    }
}
