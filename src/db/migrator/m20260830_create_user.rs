use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

use crate::entities::prelude::*;
use crate::entities::user;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// The `user` table, derived from the entity so the session factory and the
/// migration driver consume one schema description.
pub(super) fn create_user_table(backend: DbBackend) -> TableCreateStatement {
    let schema = Schema::new(backend);
    schema.create_table_from_entity(User).if_not_exists().to_owned()
}

/// Non-unique lookup index on `name`. The unique index on `email` comes from
/// the entity's unique constraint.
pub(super) fn user_name_index() -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .name("idx_user_name")
        .table(User)
        .col(user::Column::Name)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        manager.create_table(create_user_table(backend)).await?;
        manager.create_index(user_name_index()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User).to_owned())
            .await?;

        Ok(())
    }
}
