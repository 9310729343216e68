//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Uniqueness is checked by the application, not by the store
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}

/// Full-record active model: every column is written, the key only when known
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        Self {
            id: match user.id {
                Some(id) => Unchanged(id),
                None => NotSet,
            },
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
        }
    }
}
