use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Follows {
    Table,
    UserBeingFollowedId,
    UserFollowingId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Composite PK: an edge exists at most once
        m.create_table(
            Table::create()
                .table(Follows::Table)
                .col(ColumnDef::new(Follows::UserBeingFollowedId).uuid().not_null())
                .col(ColumnDef::new(Follows::UserFollowingId).uuid().not_null())
                .col(ColumnDef::new(Follows::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_follows")
                        .col(Follows::UserBeingFollowedId)
                        .col(Follows::UserFollowingId)
                )
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Follows::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_follows_followed")
                        .from_tbl(Follows::Table)
                        .from_col(Follows::UserBeingFollowedId)
                        .to_tbl(Users::Table)
                        .to_col(Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_follows_follower")
                        .from_tbl(Follows::Table)
                        .from_col(Follows::UserFollowingId)
                        .to_tbl(Users::Table)
                        .to_col(Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_follows_follower")
                .table(Follows::Table)
                .col(Follows::UserFollowingId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_follows_followed")
                .table(Follows::Table)
                .col(Follows::UserBeingFollowedId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Follows::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
