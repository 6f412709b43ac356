//! Entry point: parse CLI, build the configuration and dispatch to command handlers.

use clap::Parser;
use rffl_codex::{
    cli::{Cli, Commands},
    commands::{
        archive::{handle_list, handle_show},
        league_report::{handle_league_report, ReportSection},
        snapshot::handle_snapshot,
    },
    Config,
};
use tracing::Level;

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if app.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .init();

    match app.command {
        Commands::League { league } => {
            let config =
                Config::from_env()?.with_overrides(league.league_id, league.season, None);
            handle_league_report(&config, &ReportSection::ALL).await?
        }
        Commands::Teams { league } => {
            let config =
                Config::from_env()?.with_overrides(league.league_id, league.season, None);
            handle_league_report(&config, &[ReportSection::Teams]).await?
        }
        Commands::Matchups { league } => {
            let config =
                Config::from_env()?.with_overrides(league.league_id, league.season, None);
            handle_league_report(&config, &[ReportSection::Matchups]).await?
        }
        Commands::Rosters { league } => {
            let config =
                Config::from_env()?.with_overrides(league.league_id, league.season, None);
            handle_league_report(&config, &[ReportSection::Rosters]).await?
        }
        Commands::Snapshot { league, data_dir } => {
            let config =
                Config::from_env()?.with_overrides(league.league_id, league.season, data_dir);
            handle_snapshot(&config).await?
        }
        Commands::List {
            season,
            category,
            data_dir,
        } => {
            let config = Config::storage_from_env()?.with_overrides(None, season, data_dir);
            handle_list(&config, category.as_deref())?
        }
        Commands::Show {
            season,
            category,
            name,
            table,
            data_dir,
        } => {
            let config = Config::storage_from_env()?.with_overrides(None, season, data_dir);
            handle_show(&config, &category, &name, table)?
        }
    }

    Ok(())
}
