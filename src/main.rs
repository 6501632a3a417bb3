use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use empdept::{api, config::Config, db};

#[derive(Parser)]
#[command(name = "empdept")]
#[command(about = "Department and employee records over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Port for HTTP API [env: EMPDEPT_PORT]
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind [env: EMPDEPT_HOST]
        #[arg(long)]
        host: Option<String>,

        /// SQLite database file [env: EMPDEPT_DB_PATH]
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Apply pending schema migrations and exit
    Migrate {
        /// SQLite database file [env: EMPDEPT_DB_PATH]
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "empdept=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn open_database(path: Option<PathBuf>) -> anyhow::Result<db::Database> {
    let path = match path {
        Some(path) => path,
        None => db::default_path()?,
    };
    tracing::info!("Using database at {}", path.display());

    let db = db::Database::open(path)?;
    db.migrate()?;
    Ok(db)
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let db = open_database(config.db_path.clone())?;
    let app = api::create_router(db);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("empdept server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::from_env();

    match cli.command {
        Some(Commands::Serve { port, host, db }) => {
            config.port = port.unwrap_or(config.port);
            config.host = host.unwrap_or(config.host);
            config.db_path = db.or(config.db_path);
            serve(config).await?;
        }
        Some(Commands::Migrate { db }) => {
            open_database(db.or(config.db_path))?;
            tracing::info!("Migrations up to date");
        }
        None => serve(config).await?,
    }

    Ok(())
}
