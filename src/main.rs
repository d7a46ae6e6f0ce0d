//! CLI entry point for portfolio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portfolio-rs")]
#[command(author = "kuwaharu")]
#[command(version = "0.1.0")]
#[command(about = "A single-page portfolio site built from JSON and Markdown", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new project detail document
    New {
        /// Title of the project
        title: String,

        /// File name for the document (defaults to the slugified title)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip)
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Disable file watching and live reload
        #[arg(long)]
        r#static: bool,
    },

    /// List site content
    List {
        /// Type of content to list (skills, projects, career, details)
        #[arg(default_value = "projects")]
        r#type: String,
    },

    /// Render one project detail document
    Detail {
        /// Detail identifier (file name without .md)
        slug: String,

        /// Fetch from a running portfolio server instead of the local files
        #[arg(short, long)]
        remote: Option<String>,
    },

    /// Render a Markdown file (or stdin) to HTML
    Render {
        /// Markdown file to render
        file: Option<PathBuf>,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "portfolio_rs=debug,info"
    } else {
        "portfolio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing portfolio site in {:?}", target_dir);
            portfolio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::New { title, path } => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            tracing::info!("Creating detail document for: {}", title);
            portfolio_rs::commands::new::create_detail(&portfolio, &title, path.as_deref())?;
        }

        Commands::Generate { watch } => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            tracing::info!("Generating static files...");

            portfolio.generate().await?;
            println!("Generated successfully!");

            if watch {
                portfolio_rs::commands::generate::watch(&portfolio).await?;
            }
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| portfolio.config.server.ip.clone());
            let port = port.unwrap_or(portfolio.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            portfolio_rs::server::start(&portfolio, &ip, port, !r#static, open).await?;
        }

        Commands::List { r#type } => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            portfolio_rs::commands::list::run(&portfolio, &r#type)?;
        }

        Commands::Detail { slug, remote } => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            portfolio_rs::commands::detail::run(&portfolio, &slug, remote.as_deref()).await?;
        }

        Commands::Render { file } => {
            portfolio_rs::commands::render::run(file.as_deref())?;
        }

        Commands::Clean => {
            let portfolio = portfolio_rs::Portfolio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            portfolio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("portfolio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
