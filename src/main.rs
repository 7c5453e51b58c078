use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stargazer::config::Config;
use stargazer::controller::{DetailController, TrackKind};
use stargazer::detail::DetailClient;
use stargazer::view::{ViewAction, ViewState};
use stargazer::{api, render, share};

#[derive(Parser)]
#[command(name = "stargazer")]
#[command(about = "Month-by-month stargazing calendar with AI-generated details")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Print the calendar for today
    Catalog {
        /// Only show objects whose name, description or month contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show AI-generated details for one object
    Show {
        /// Object id, e.g. `orion`
        id: String,
        /// Also print the share text
        #[arg(long)]
        share: bool,
    },
}

/// Initialize tracing with output to stderr (when stdout carries data) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "stargazer=debug,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(client: DetailClient, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting StarGazer server on port {}", port);

    let app = api::create_router(client);
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("StarGazer server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn show(client: DetailClient, id: String, with_share: bool) -> anyhow::Result<()> {
    let view = ViewState::default().apply(ViewAction::Select { id: id.clone() });
    let entry = view
        .selected_entry()
        .ok_or_else(|| anyhow::anyhow!("Unknown object id: {}", id))?;

    let controller = DetailController::new(client);
    let mut updates = controller.subscribe();
    controller.open(entry.clone());

    let mut last_message = None;
    loop {
        let state = updates.borrow_and_update().clone();
        let message = state.status_message(TrackKind::Text);
        if message.is_some() && message != last_message {
            eprintln!("{}", message.unwrap_or_default());
        }
        last_message = message;

        if !state.text.is_loading() && !state.image.is_loading() {
            break;
        }
        updates.changed().await?;
    }

    let state = controller.state();
    println!("{}", render::render_detail(&state));

    if with_share {
        if let Some(detail) = state.text.resolved() {
            println!("{}", share::object_share_text(entry, detail));
        }
    }

    controller.close();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Subcommands that print data keep stdout clean for it
    let use_stderr = matches!(
        cli.command,
        Some(Commands::Catalog { .. }) | Some(Commands::Show { .. })
    );
    init_tracing(use_stderr);

    let config = Config::from_env();
    let client = DetailClient::from_config(&config)?;

    match cli.command {
        Some(Commands::Serve { port }) => serve(client, port).await?,
        Some(Commands::Catalog { search }) => {
            let mut view = ViewState::default();
            if let Some(term) = search {
                view = view.apply(ViewAction::Search { term });
            }
            let today = chrono::Local::now().date_naive();
            print!("{}", render::render_catalog(&view.catalog_view(today)));
        }
        Some(Commands::Show { id, share }) => show(client, id, share).await?,
        None => serve(client, 3000).await?,
    }

    Ok(())
}
