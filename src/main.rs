// src/main.rs

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use portfolio::application::{AppState, ErrorResponse, SiteConfig};
use portfolio::events::EventBus;
use portfolio::infrastructure::SiteWriter;
use portfolio::repositories::{BuiltinCatalogRepository, JsonCatalogRepository};
use portfolio::services::CatalogService;
use portfolio::AppResult;

#[derive(Parser, Debug)]
#[clap(name = "portfolio")]
#[clap(about = "Render a project portfolio as a static resume site", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one page per category filter
    Render {
        /// Catalog document (JSON); the built-in catalog when omitted
        #[clap(long, env = "PORTFOLIO_DATA")]
        data: Option<PathBuf>,

        #[clap(long, default_value = "site")]
        out: PathBuf,

        #[clap(long, default_value = "Portfolio / Resume")]
        title: String,
    },

    /// Print `id<TAB>category<TAB>title` for the projects under a filter
    List {
        #[clap(long, env = "PORTFOLIO_DATA")]
        data: Option<PathBuf>,

        /// All, Roblox, Unity or Tooling
        #[clap(long)]
        category: Option<String>,
    },

    /// Print the view frame for a filter as JSON
    Frame {
        #[clap(long, env = "PORTFOLIO_DATA")]
        data: Option<PathBuf>,

        #[clap(long)]
        category: Option<String>,
    },

    /// Load and validate a catalog
    Validate {
        #[clap(long, env = "PORTFOLIO_DATA")]
        data: Option<PathBuf>,
    },

    /// Write the built-in catalog as a JSON document
    Export {
        #[clap(long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render { data, out, title } => {
            let config = SiteConfig::default()
                .with_data_path(data)
                .with_output_dir(out)
                .with_page_title(title);
            let mut state = AppState::bootstrap(config).context("failed to load catalog")?;

            let writer = SiteWriter::from_config(&state.config, Arc::clone(&state.event_bus));
            let profile = Arc::clone(&state.profile);
            let site = writer
                .write(&mut state.view, &profile)
                .context("failed to write site")?;

            for page in &site.pages {
                println!("{}", page.display());
            }
        }

        Command::List { data, category } => {
            let mut state = AppState::bootstrap(SiteConfig::default().with_data_path(data))
                .context("failed to load catalog")?;
            if let Some(category) = category {
                state.view.select_category(&category)?;
            }

            for project in state.view.filtered_projects() {
                println!("{}\t{}\t{}", project.id, project.category, project.title);
            }
        }

        Command::Frame { data, category } => {
            match frame_json(SiteConfig::default().with_data_path(data), category) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    println!("{}", ErrorResponse::from(e).to_json());
                    process::exit(1);
                }
            }
        }

        Command::Validate { data } => {
            let state = AppState::bootstrap(SiteConfig::default().with_data_path(data))
                .context("catalog rejected")?;
            let catalog = state.view.catalog();

            println!(
                "{}: {} projects, profile '{}'",
                state.config.repository().describe(),
                catalog.len(),
                state.profile.name
            );
            for option in state.view.categories() {
                let count = catalog.get_all().iter().filter(|p| option.matches(p)).count();
                println!("  {:<8}{}", option.label(), count);
            }
        }

        Command::Export { out } => {
            let service = CatalogService::new(
                Arc::new(BuiltinCatalogRepository::new()),
                Arc::new(EventBus::new()),
            );
            let target = JsonCatalogRepository::new(out);
            let count = service
                .export(&target)
                .with_context(|| format!("failed to export to {}", target.path().display()))?;

            info!("exported {} projects", count);
            println!("{}", target.path().display());
        }
    }

    Ok(())
}

fn frame_json(config: SiteConfig, category: Option<String>) -> AppResult<String> {
    let mut state = AppState::bootstrap(config)?;
    if let Some(category) = category {
        state.view.select_category(&category)?;
    }

    Ok(serde_json::to_string_pretty(&state.view.frame())?)
}
