use uuid::Uuid;

pub type UserId = Uuid;

/// Users are created and maintained outside this service; the auction flow
/// only ever reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id:   UserId,
    pub name: String,
}
