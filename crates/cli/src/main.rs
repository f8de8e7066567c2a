//! AquaCarbon CLI
//!
//! Terminal front end for the AquaCarbon blue carbon platform. Every command
//! mounts one screen from the configured catalog, applies the edits given as
//! flags, prints what the screen shows, and exits. Nothing is persisted
//! between runs except `config --save`.

mod output;
mod views;

use anyhow::{Context, Result};
use aquacarbon_core::config::AppConfig;
use aquacarbon_core::dashboard::{Dashboard, Tab};
use aquacarbon_core::explorer::ExplorerTab;
use aquacarbon_core::models::UserRole;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use views::marketplace::MarketplaceQuery;
use views::registry::RegistryQuery;

#[derive(Parser)]
#[command(author, version, about = "AquaCarbon - Blue Carbon Registry & Marketplace")]
struct Args {
    /// Output machine-readable JSON
    #[arg(long, global = true, overrides_with = "no_json")]
    json: bool,
    /// Output text even when the config file asks for JSON
    #[arg(long, global = true, overrides_with = "json")]
    no_json: bool,
    /// Catalog JSON document to load instead of the built-in data
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Role to sign in with (admin, verifier, community, buyer, researcher, company, farmer, ngo)
    #[arg(long, global = true)]
    role: Option<String>,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Show the dashboard overview for the role (default)
    Dashboard,
    /// List the tabs shown to the role
    Tabs,
    /// Browse the project registry
    Registry {
        /// Search project names and locations
        #[arg(short, long, default_value = "")]
        search: String,
        /// all, active, pending, under-review, verified
        #[arg(long, default_value = "all")]
        status: String,
        /// all, mangrove, coastal, seagrass
        #[arg(long = "type", default_value = "all")]
        project_type: String,
        /// grid or map
        #[arg(long, default_value = "grid")]
        view: String,
        /// Show details for a project id
        #[arg(long)]
        details: Option<String>,
    },
    /// Browse credit lots and fill the cart
    Marketplace {
        /// Search token ids and owners
        #[arg(short, long, default_value = "")]
        search: String,
        /// all, available, retired, pending
        #[arg(long, default_value = "all")]
        status: String,
        /// all, 0-25, 25-50, 50+
        #[arg(long, default_value = "all")]
        price: String,
        /// Add a credit lot to the cart (repeatable)
        #[arg(long)]
        add: Vec<String>,
        /// Remove a credit lot from the cart (repeatable, applied after adds)
        #[arg(long)]
        remove: Vec<String>,
    },
    /// Browse the credit ledger
    Explorer {
        /// transactions, certificates or audit
        #[arg(default_value = "transactions")]
        tab: ExplorerTab,
        /// Only transactions for this credit token id
        #[arg(long)]
        credit: Option<String>,
    },
    /// Compare reported and verified sequestration
    Mrv {
        /// Project id whose report is shown
        #[arg(long)]
        project: Option<String>,
        /// Only urgent notifications
        #[arg(long)]
        urgent: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write it to .aquacarbon/config.json
        #[arg(long)]
        save: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file, then environment, then flags
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::load()?;
    if let Some(path) = &args.data {
        config.data_path = Some(path.clone());
    }
    if let Some(raw) = &args.role {
        config.role = UserRole::parse(raw).with_context(|| "Invalid --role")?;
    }
    if let Some(json) = args.json_flag() {
        config.json = json;
    }
    Ok(config)
}

impl Args {
    /// `--json` or `--no-json`, whichever came last; `None` keeps the config value
    fn json_flag(&self) -> Option<bool> {
        if self.json {
            Some(true)
        } else if self.no_json {
            Some(false)
        } else {
            None
        }
    }
}

/// Log when a command opens a tab the role's menu doesn't list
fn note_tab(role: UserRole, tab: Tab) {
    let mut dashboard = Dashboard::login(role);
    if !dashboard.select(tab) {
        tracing::warn!(
            role = %role,
            tab = tab.as_str(),
            "Tab is not in this role's menu"
        );
    }
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    let json = config.json;
    let role = config.role;
    let command = args.command.unwrap_or(CliCommand::Dashboard);

    let open = || config.open_source();

    match command {
        CliCommand::Config { save } => {
            if save {
                let path = config.save()?;
                tracing::info!(path = %path.display(), "Config saved");
            }
            output::emit(json, &config, |c| {
                let data = c
                    .data_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string());
                format!(
                    "data: {}\nrole: {}\njson: {}\nmrv tolerance: {}\n",
                    data, c.role, c.json, c.mrv_tolerance
                )
            })
        }
        CliCommand::Dashboard => {
            let page = views::dashboard::build(open()?.as_ref(), role)?;
            output::emit(json, &page, views::dashboard::render)
        }
        CliCommand::Tabs => {
            let page = views::dashboard::menu(&Dashboard::login(role));
            output::emit(json, &page, |menu| views::dashboard::render_menu(menu))
        }
        CliCommand::Registry {
            search,
            status,
            project_type,
            view,
            details,
        } => {
            note_tab(role, Tab::Registry);
            let query = RegistryQuery {
                search,
                status,
                project_type,
                view,
                details,
            };
            let page = views::registry::build(open()?.as_ref(), &query)?;
            output::emit(json, &page, views::registry::render)
        }
        CliCommand::Marketplace {
            search,
            status,
            price,
            add,
            remove,
        } => {
            note_tab(role, Tab::Marketplace);
            let query = MarketplaceQuery {
                search,
                status,
                price,
                add,
                remove,
            };
            let page = views::marketplace::build(open()?.as_ref(), &query)?;
            output::emit(json, &page, views::marketplace::render)
        }
        CliCommand::Explorer { tab, credit } => {
            note_tab(role, Tab::Blockchain);
            let page = views::explorer::build(open()?.as_ref(), tab, credit.as_deref())?;
            output::emit(json, &page, views::explorer::render)
        }
        CliCommand::Mrv { project, urgent } => {
            note_tab(role, Tab::Mrv);
            let page = views::mrv::build(
                open()?.as_ref(),
                project.as_deref(),
                urgent,
                config.mrv_tolerance,
            )?;
            output::emit(json, &page, views::mrv::render)
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();
    run(Args::parse())
}
