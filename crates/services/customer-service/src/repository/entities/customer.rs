//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{Set, Unchanged};

use domain::Customer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            customer_id: model.customer_id,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
        }
    }
}

impl ActiveModel {
    /// Active model for inserting a new row; every column is set.
    pub fn for_insert(customer: Customer) -> Self {
        Self {
            customer_id: Set(customer.customer_id),
            ..Self::for_replace(customer)
        }
    }

    /// Active model that replaces every non-key column of an existing row.
    pub fn for_replace(customer: Customer) -> Self {
        Self {
            customer_id: Unchanged(customer.customer_id),
            first_name: Set(customer.first_name),
            middle_name: Set(customer.middle_name),
            last_name: Set(customer.last_name),
            email: Set(customer.email),
            phone: Set(customer.phone),
        }
    }
}
