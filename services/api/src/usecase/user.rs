use crate::domain::access::AccessPolicy;
use crate::domain::repository::UserRepository;
use crate::domain::types::{Capability, NewUser, Resource, User};
use crate::error::ApiError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: UserRepository, P: AccessPolicy> ListUsersUseCase<R, P> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.access.check(Resource::User, Capability::List)?;
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: UserRepository, P: AccessPolicy> GetUserUseCase<R, P> {
    pub async fn execute(&self, id: i32) -> Result<User, ApiError> {
        self.access.check(Resource::User, Capability::Read)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: UserRepository, P: AccessPolicy> CreateUserUseCase<R, P> {
    pub async fn execute(&self, input: NewUser) -> Result<User, ApiError> {
        self.access.check(Resource::User, Capability::Create)?;
        self.repo.create(&input).await
    }
}

// ── ReplaceUser ──────────────────────────────────────────────────────────────

pub struct ReplaceUserInput {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
}

pub struct ReplaceUserUseCase<R: UserRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: UserRepository, P: AccessPolicy> ReplaceUserUseCase<R, P> {
    pub async fn execute(&self, id: i32, input: ReplaceUserInput) -> Result<(), ApiError> {
        self.access.check(Resource::User, Capability::Replace)?;
        if input.id != Some(id) {
            return Err(ApiError::IdMismatch);
        }
        let user = User {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
        };
        match self.repo.replace(&user).await {
            Err(ApiError::WriteConflict) => {
                if self.repo.exists(id).await? {
                    Err(ApiError::WriteConflict)
                } else {
                    Err(ApiError::UserNotFound)
                }
            }
            other => other,
        }
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: UserRepository, P: AccessPolicy> DeleteUserUseCase<R, P> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        self.access.check(Resource::User, Capability::Delete)?;
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::UserNotFound)
        }
    }
}
