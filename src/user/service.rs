use {
    super::{
        entities,
        repository::{
            Database,
            Repository,
        },
    },
    crate::api::RestError,
    std::{
        ops::Deref,
        sync::Arc,
    },
};

pub struct GetUserInput {
    pub user_id: entities::UserId,
}

pub struct ServiceInner {
    repo: Repository,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(db: impl Database) -> Self {
        Self(Arc::new(ServiceInner {
            repo: Repository::new(db),
        }))
    }

    pub async fn get_user(&self, input: GetUserInput) -> Result<entities::User, RestError> {
        self.repo.get_user(input.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::user::repository::{
            self,
            MockDatabase,
        },
        uuid::Uuid,
    };

    #[tokio::test]
    async fn existing_user_is_returned() {
        let row = repository::User {
            id:   Uuid::new_v4(),
            name: "ana".to_string(),
        };
        let user_id = row.id;
        let mut db = MockDatabase::default();
        db.expect_get_user()
            .withf(move |id| *id == user_id)
            .returning(move |_| Ok(row.clone()));
        let service = Service::new(db);

        let user = service.get_user(GetUserInput { user_id }).await.unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.name, "ana");
    }

    #[tokio::test]
    async fn missing_user_is_a_domain_outcome() {
        let mut db = MockDatabase::default();
        db.expect_get_user()
            .returning(|_| Err(RestError::UserNotFound));
        let service = Service::new(db);

        let result = service
            .get_user(GetUserInput {
                user_id: Uuid::new_v4(),
            })
            .await;
        assert!(matches!(result, Err(RestError::UserNotFound)));
    }
}
