use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use chassis::Settings;
use chassis::db::migrator::Migrator;

/// One-shot schema migration driver.
#[derive(Parser)]
#[command(name = "migrate", about = "Bring the database schema in line with the entity schema")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Print the migration SQL without touching a live connection.
    Offline,
    /// Connect with DATABASE_URL and apply pending migrations. A failing
    /// migration aborts inside its transaction; nothing partial persists.
    Online,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.mode {
        Mode::Offline => {
            for statement in Migrator::offline_sql() {
                println!("{statement};");
            }
        }
        Mode::Online => {
            chassis::init_tracing("info");

            let settings = Settings::from_env()?;
            let mut opt = ConnectOptions::new(settings.async_database_url()?);
            opt.sqlx_logging(false);

            let conn = Database::connect(opt).await?;
            Migrator::up(&conn, None).await?;

            info!("Migrations applied");
        }
    }

    Ok(())
}
