use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use league::{
    client::{
        config::ClientConfig,
        router as client_router,
        state::{setup_reqwest_client, ClientState},
    },
    server::{
        config::Config,
        router::{router, Backend},
        seed, startup,
        state::AppState,
    },
};

#[derive(Parser)]
#[command(name = "league", about = "Regional sports league services")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one of the services
    Serve {
        #[arg(value_enum)]
        service: Service,
    },
    /// Drop every table and run all migrations again
    RecreateDb,
    /// Load a service's store from CSV files
    Seed {
        #[arg(value_enum)]
        service: SeedTarget,
        /// Directory holding the CSV files
        #[arg(long, default_value = "data")]
        data: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Service {
    Users,
    Teams,
    Matches,
    Client,
}

#[derive(Clone, Copy, ValueEnum)]
enum SeedTarget {
    Teams,
    Matches,
}

async fn serve_backend(backend: Backend) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting {:?} service", backend);
    startup::serve(&config.bind_address, router(backend, AppState::new(db))).await?;

    Ok(())
}

async fn serve_client() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let address = config.bind_address.clone();
    let state = ClientState::new(setup_reqwest_client(), config);

    tracing::info!("Starting client service");
    startup::serve(&address, client_router::router(state)).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { service } => match service {
            Service::Users => serve_backend(Backend::Users).await?,
            Service::Teams => serve_backend(Backend::Teams).await?,
            Service::Matches => serve_backend(Backend::Matches).await?,
            Service::Client => serve_client().await?,
        },
        Command::RecreateDb => {
            let config = Config::from_env()?;
            startup::recreate_database(&config).await?;
        }
        Command::Seed { service, data } => {
            let config = Config::from_env()?;
            let db = startup::connect_to_database(&config).await?;

            match service {
                SeedTarget::Teams => seed::seed_teams(&db, &data).await?,
                SeedTarget::Matches => seed::seed_matches(&db, &data).await?,
            }
            tracing::info!("Seeded from {}", data.display());
        }
    }

    Ok(())
}
