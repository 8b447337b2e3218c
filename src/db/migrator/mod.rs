use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::PostgresQueryBuilder;

mod m20260830_create_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260830_create_user::Migration)]
    }
}

impl Migrator {
    /// Renders the schema statements of every migration as Postgres SQL
    /// without opening a connection. The statements are the same ones the
    /// online path executes, so the two modes cannot drift apart.
    #[must_use]
    pub fn offline_sql() -> Vec<String> {
        let backend = DbBackend::Postgres;
        vec![
            m20260830_create_user::create_user_table(backend).to_string(PostgresQueryBuilder),
            m20260830_create_user::user_name_index().to_string(PostgresQueryBuilder),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_sql_covers_user_table_and_indexes() {
        let statements = Migrator::offline_sql();
        assert_eq!(statements.len(), 2);

        assert!(statements[0].contains("CREATE TABLE"));
        assert!(statements[0].contains("\"user\""));
        assert!(statements[0].contains("\"email\""));
        assert!(statements[0].contains("\"hashed_password\""));

        assert!(statements[1].contains("CREATE INDEX"));
        assert!(statements[1].contains("idx_user_name"));
    }

    #[test]
    fn offline_sql_is_deterministic() {
        assert_eq!(Migrator::offline_sql(), Migrator::offline_sql());
    }
}
