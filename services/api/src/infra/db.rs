use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use workboard_api_schema::{user_internal, work_order};

use crate::domain::repository::{UserRepository, WorkOrderRepository};
use crate::domain::types::{NewUser, NewWorkOrder, User, WorkOrder, WorkOrderView};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = user_internal::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = user_internal::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        let count = user_internal::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check user exists")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let model = user_internal::ActiveModel {
            id: NotSet,
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn replace(&self, user: &User) -> Result<(), ApiError> {
        let result = user_internal::ActiveModel {
            id: Set(user.id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
        }
        .update(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(ApiError::WriteConflict),
            Err(e) => Err(anyhow::Error::new(e).context("replace user").into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = user_internal::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: user_internal::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
    }
}

// ── Work order repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWorkOrderRepository {
    pub db: DatabaseConnection,
}

impl DbWorkOrderRepository {
    /// Resolve creator and assignee for each row with a single user query.
    async fn with_users(
        &self,
        models: Vec<work_order::Model>,
    ) -> Result<Vec<WorkOrderView>, ApiError> {
        let mut user_ids: Vec<i32> = models
            .iter()
            .flat_map(|m| std::iter::once(m.created_by_id).chain(m.assigned_to_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let users: HashMap<i32, User> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            user_internal::Entity::find()
                .filter(user_internal::Column::Id.is_in(user_ids))
                .all(&self.db)
                .await
                .context("load work order users")?
                .into_iter()
                .map(|m| (m.id, user_from_model(m)))
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let work_order = work_order_from_model(m);
                WorkOrderView {
                    created_by: users.get(&work_order.created_by_id).cloned(),
                    assigned_to: work_order
                        .assigned_to_id
                        .and_then(|id| users.get(&id).cloned()),
                    work_order,
                }
            })
            .collect())
    }
}

impl WorkOrderRepository for DbWorkOrderRepository {
    async fn list(&self) -> Result<Vec<WorkOrderView>, ApiError> {
        let models = work_order::Entity::find()
            .all(&self.db)
            .await
            .context("list work orders")?;
        self.with_users(models).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<WorkOrderView>, ApiError> {
        let Some(model) = work_order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find work order by id")?
        else {
            return Ok(None);
        };
        Ok(self.with_users(vec![model]).await?.pop())
    }

    async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        let count = work_order::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check work order exists")?;
        Ok(count > 0)
    }

    async fn create(&self, input: &NewWorkOrder) -> Result<WorkOrder, ApiError> {
        let model = work_order::ActiveModel {
            id: NotSet,
            created_by_id: Set(input.created_by_id),
            created_at_time: Set(input.created_at_time),
            completed_at_time: Set(input.completed_at_time),
            assigned_to_id: Set(input.assigned_to_id),
            canceled: Set(input.canceled),
            active: Set(input.active),
            complete: Set(input.complete),
            description: Set(input.description.clone()),
            stage: Set(input.stage as i16),
        }
        .insert(&self.db)
        .await
        .context("create work order")?;
        Ok(work_order_from_model(model))
    }

    async fn replace(&self, row: &WorkOrder) -> Result<(), ApiError> {
        let result = work_order::ActiveModel {
            id: Set(row.id),
            created_by_id: Set(row.created_by_id),
            created_at_time: Set(row.created_at_time),
            completed_at_time: Set(row.completed_at_time),
            assigned_to_id: Set(row.assigned_to_id),
            canceled: Set(row.canceled),
            active: Set(row.active),
            complete: Set(row.complete),
            description: Set(row.description.clone()),
            stage: Set(row.stage as i16),
        }
        .update(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(ApiError::WriteConflict),
            Err(e) => Err(anyhow::Error::new(e).context("replace work order").into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = work_order::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete work order")?;
        Ok(result.rows_affected > 0)
    }
}

fn work_order_from_model(model: work_order::Model) -> WorkOrder {
    // The column is a smallint; values that do not fit a stage byte are
    // clamped and surface as anomalous stages.
    let stage = u8::try_from(model.stage).unwrap_or(u8::MAX);
    WorkOrder {
        id: model.id,
        created_by_id: model.created_by_id,
        created_at_time: model.created_at_time,
        completed_at_time: model.completed_at_time,
        assigned_to_id: model.assigned_to_id,
        canceled: model.canceled,
        active: model.active,
        complete: model.complete,
        description: model.description,
        stage,
    }
}
