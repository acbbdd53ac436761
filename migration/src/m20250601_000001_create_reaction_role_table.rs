use sea_orm_migration::{prelude::*, schema::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(create_table(manager.get_database_backend()))
            .await?;

        // A role may only be bound to a message once
        manager
            .create_index(
                Index::create()
                    .name("idx_reaction_role_message_id_role_id")
                    .table(ReactionRole::Table)
                    .col(ReactionRole::MessageId)
                    .col(ReactionRole::RoleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reaction_role_message_id_role_id")
                    .table(ReactionRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReactionRole::Table).to_owned())
            .await
    }
}

/// Emoji are 4-byte UTF-8 and must compare byte for byte, so MySQL/MariaDB gets an
/// explicit utf8mb4 binary collation instead of the server default.
fn create_table(backend: DatabaseBackend) -> TableCreateStatement {
    let mut table = Table::create()
        .table(ReactionRole::Table)
        .if_not_exists()
        .col(pk_auto(ReactionRole::Id))
        .col(string(ReactionRole::MessageId))
        .col(string(ReactionRole::RoleId))
        .col(string(ReactionRole::Reaction))
        .col(
            timestamp_with_time_zone(ReactionRole::CreatedAt)
                .default(Expr::current_timestamp()),
        )
        .to_owned();

    if backend == DatabaseBackend::MySql {
        table.character_set("utf8mb4").collate("utf8mb4_bin");
    }

    table
}

#[derive(DeriveIden)]
enum ReactionRole {
    Table,
    Id,
    MessageId,
    RoleId,
    Reaction,
    CreatedAt,
}
