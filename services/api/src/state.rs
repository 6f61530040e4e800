use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::access::{AccessPolicy, AllowAll};
use crate::infra::db::{DbUserRepository, DbWorkOrderRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub access: Arc<dyn AccessPolicy>,
}

impl AppState {
    /// State with every operation permitted.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            access: Arc::new(AllowAll),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn work_order_repo(&self) -> DbWorkOrderRepository {
        DbWorkOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn access(&self) -> Arc<dyn AccessPolicy> {
        Arc::clone(&self.access)
    }
}
