#[cfg(test)]
use mockall::automock;
use {
    super::entities,
    crate::{
        api::RestError,
        kernel::db::DB,
    },
    axum::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    tracing::instrument,
};

#[derive(Clone, FromRow, Debug)]
pub struct User {
    pub id:   entities::UserId,
    pub name: String,
}

impl User {
    pub fn get_user_entity(&self) -> entities::User {
        entities::User {
            id:   self.id,
            name: self.name.clone(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn get_user(&self, user_id: entities::UserId) -> Result<User, RestError>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        target = "metrics",
        name = "db_get_user",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_user",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_user(&self, user_id: entities::UserId) -> Result<User, RestError> {
        sqlx::query_as("SELECT * FROM marketplace_user WHERE id = $1")
            .bind(user_id)
            .fetch_one(self)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RestError::UserNotFound,
                _ => {
                    tracing::Span::current().record("result", "error");
                    tracing::error!(
                        error = e.to_string(),
                        user_id = user_id.to_string(),
                        "Failed to get user from db"
                    );
                    RestError::TemporarilyUnavailable
                }
            })
    }
}

#[derive(Debug)]
pub struct Repository {
    db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }

    pub async fn get_user(&self, user_id: entities::UserId) -> Result<entities::User, RestError> {
        let user = self.db.get_user(user_id).await?;
        Ok(user.get_user_entity())
    }
}
