//! Migration: Create the customer table.

use domain::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    // Client-supplied key, never generated here
                    .col(
                        ColumnDef::new(Customer::CustomerId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Customer::FirstName)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customer::MiddleName)
                            .string_len(MAX_NAME_LENGTH)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Customer::LastName)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customer::Email)
                            .string_len(MAX_EMAIL_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customer::Phone)
                            .string_len(MAX_PHONE_LENGTH)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Email is unique store-wide
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_email")
                    .table(Customer::Table)
                    .col(Customer::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The email index goes with the table
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Customer {
    Table,
    CustomerId,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Phone,
}
