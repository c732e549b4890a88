use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use client_desk::adapters::{
    connect_pool, InMemoryClientStore, PostgresClientRepository, TracingNavigator, TracingNotifier,
};
use client_desk::application::{ClientDetailController, LoadOutcome};
use client_desk::config::{AppConfig, LoggingConfig};
use client_desk::domain::client::ClientUpdate;
use client_desk::domain::foundation::{ClientId, DomainError, Money};
use client_desk::ports::ClientRepository;

/// Client Desk - inspect and edit a client with its projects and payments.
#[derive(Parser, Debug)]
#[command(name = "client-desk", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a client and print its detail view as JSON
    Show {
        client_id: ClientId,

        /// Read from a JSON fixture instead of PostgreSQL
        #[arg(long)]
        fixture: Option<PathBuf>,
    },

    /// Edit a client, then print the refreshed detail view
    Update {
        client_id: ClientId,

        #[arg(long)]
        name: String,

        #[arg(long)]
        contact_person: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        invoice_email: Option<String>,

        /// Exact amount, e.g. 1500000 or 1250.50
        #[arg(long)]
        contract_value: Option<Money>,

        #[arg(long)]
        classification: Option<String>,

        #[arg(long)]
        source: Option<String>,

        /// Read from a JSON fixture instead of PostgreSQL
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    let (client_id, fixture) = match &cli.command {
        Command::Show { client_id, fixture } => (client_id.clone(), fixture.clone()),
        Command::Update {
            client_id, fixture, ..
        } => (client_id.clone(), fixture.clone()),
    };

    let repository = open_repository(&config, fixture).await?;
    let controller = ClientDetailController::new(
        repository,
        Arc::new(TracingNotifier),
        Arc::new(TracingNavigator),
    );

    match controller.load(client_id.clone()).await {
        LoadOutcome::ClientUnavailable => bail!("Client {} could not be loaded", client_id),
        outcome => tracing::debug!(?outcome, "Initial load finished"),
    }

    if let Command::Update {
        name,
        contact_person,
        email,
        invoice_email,
        contract_value,
        classification,
        source,
        ..
    } = cli.command
    {
        let state = controller.state().await;
        let Some(current) = state.loaded() else {
            bail!("Client {} is not loaded", client_id);
        };

        let mut update = ClientUpdate::from_client(&current.client);
        update.name = name;
        update.contact_person = contact_person;
        update.email = email;
        if invoice_email.is_some() {
            update.invoice_email = invoice_email;
        }
        if let Some(value) = contract_value {
            update.contract_value = value;
        }
        if classification.is_some() {
            update.classification = classification;
        }
        if source.is_some() {
            update.source = source;
        }

        controller
            .submit_edit(update)
            .await
            .map_err(DomainError::from)
            .with_context(|| format!("Failed to update client {}", client_id))?;
    }

    let format = config.display.format();
    let resolver = config.display.status_resolver();
    let Some(view) = controller.view(&format, &resolver).await else {
        bail!("Client {} is not loaded", client_id);
    };

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

async fn open_repository(
    config: &AppConfig,
    fixture: Option<PathBuf>,
) -> anyhow::Result<Arc<dyn ClientRepository>> {
    if let Some(path) = fixture {
        let store = InMemoryClientStore::from_json_file(&path)
            .await
            .with_context(|| format!("Failed to open fixture {}", path.display()))?;
        tracing::info!(fixture = %path.display(), "Using fixture store");
        return Ok(Arc::new(store));
    }

    let url = config.database.require_url()?;
    let pool = connect_pool(&config.database, url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    tracing::info!("Using PostgreSQL store");
    Ok(Arc::new(PostgresClientRepository::new(pool)))
}
