use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderHistory::Id))
                    .col(string(OrderHistory::FullName))
                    .col(string(OrderHistory::Email))
                    .col(string(OrderHistory::Contact))
                    .col(string(OrderHistory::ProductTitle))
                    .col(integer(OrderHistory::Quantity))
                    .col(double(OrderHistory::TotalAmount))
                    .col(
                        timestamp_with_time_zone(OrderHistory::OrderDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_history_email")
                    .table(OrderHistory::Table)
                    .col(OrderHistory::Email)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderHistory {
    #[sea_orm(iden = "orders_history")]
    Table,
    Id,
    FullName,
    Email,
    Contact,
    ProductTitle,
    Quantity,
    TotalAmount,
    OrderDate,
}
