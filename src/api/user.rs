use {
    crate::{
        api::{
            ErrorBodyResponse,
            RestError,
        },
        state::Store,
        user::{
            entities,
            service::GetUserInput,
        },
    },
    axum::{
        extract::{
            Path,
            State,
        },
        Json,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::sync::Arc,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone)]
pub struct User {
    /// The unique id of the user.
    #[schema(example = "59019ffc-9d0d-4c1e-85e8-2d4f7c64c6a9", value_type = String)]
    pub id:   entities::UserId,
    pub name: String,
}

impl From<entities::User> for User {
    fn from(user: entities::User) -> Self {
        Self {
            id:   user.id,
            name: user.name,
        }
    }
}

/// Query a user by their id.
#[utoipa::path(get, path = "/v1/users/{user_id}",
    params(("user_id" = String, description = "User id to query for")),
    responses(
    (status = 200, description = "The user with the specified id", body = User),
    (status = 404, description = "User was not found", body = ErrorBodyResponse),
),)]
pub async fn get_user(
    State(store): State<Arc<Store>>,
    Path(user_id): Path<entities::UserId>,
) -> Result<Json<User>, RestError> {
    let user = store.user_service.get_user(GetUserInput { user_id }).await?;
    Ok(Json(user.into()))
}
