mod browse;
mod config;
mod logging;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use config::AppConfig;
use fcc_gallery_adapters::{
    present_detail, present_event_row, EmbeddedCatalogSource, JsonFileCatalogSource, SystemClock,
};
use fcc_gallery_application::{
    ApplicationError, ApplicationService, BootstrapCatalogCommand, CatalogSource,
    ListEventsQuery, OpenEventCommand, ShowDetailQuery,
};

#[derive(Debug, Parser)]
#[command(
    name = "fcc-gallery",
    author,
    version,
    about = "Fight Club Championship event gallery"
)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// JSON file with the event list (defaults to the built-in championship events)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the gallery window
    Ui,
    /// Print every event with its number
    List,
    /// Print the detail view of one event
    Show { number: usize },
    /// Step through events from stdin (n, p, o <number>, c, l, q)
    Browse {
        #[arg(long)]
        start: Option<usize>,
    },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = AppConfig::default().with_catalog_path(cli.catalog);

    let service = match build_application_service(&config) {
        Ok(service) => service,
        Err(error) => {
            tracing::error!(%error, "failed to load event catalog");
            eprintln!("failed to bootstrap fcc-gallery: {error}");
            return ExitCode::from(1);
        }
    };

    match run_command(cli.command.unwrap_or(Command::Ui), service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> Result<ApplicationService, ApplicationError> {
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalogSource::new(path)),
        None => Box::new(EmbeddedCatalogSource),
    };
    ApplicationService::bootstrap_catalog(
        BootstrapCatalogCommand {
            confirmation_ms: config.confirmation_ms,
        },
        source.as_ref(),
        Box::new(SystemClock),
    )
}

fn run_command(
    command: Command,
    mut service: ApplicationService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command {
        Command::Ui => ui::launch_window(service, config).map_err(CommandError::Runtime),
        Command::List => {
            let catalog = service.list_events(ListEventsQuery);
            if catalog.is_empty() {
                println!("no events in catalog");
                return Ok(());
            }
            for (index, event) in catalog.iter().enumerate() {
                println!("{}", present_event_row(index, event));
            }
            Ok(())
        }
        Command::Show { number } => {
            let index = browse::event_index(number)
                .ok_or_else(|| CommandError::Usage("event numbers start at 1".to_string()))?;
            service
                .open_event(OpenEventCommand { index })
                .map_err(|error| CommandError::Usage(format!("invalid event number: {error}")))?;
            let view = service
                .show_detail(ShowDetailQuery)
                .ok_or_else(|| CommandError::Runtime("event did not open".to_string()))?;
            println!("{}", present_detail(&view));
            Ok(())
        }
        Command::Browse { start } => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            browse::run_browse(&mut service, start, stdin.lock(), &mut stdout)
                .map_err(|error| CommandError::Runtime(format!("browse failed: {error}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_ui() {
        let cli = Cli::try_parse_from(["fcc-gallery"]).expect("bare invocation should parse");
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn parse_show_with_catalog_override() {
        let cli = Cli::try_parse_from(["fcc-gallery", "show", "3", "--catalog", "events.json"])
            .expect("show should parse");
        assert_eq!(cli.command, Some(Command::Show { number: 3 }));
        assert_eq!(cli.catalog, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn parse_show_rejects_non_numeric_event() {
        assert!(Cli::try_parse_from(["fcc-gallery", "show", "abc"]).is_err());
    }

    #[test]
    fn show_rejects_event_past_the_catalog() {
        let service = build_application_service(&AppConfig::default()).expect("built-in catalog");
        let result = run_command(Command::Show { number: 6 }, service, &AppConfig::default());
        assert!(matches!(result, Err(CommandError::Usage(_))));

        let service = build_application_service(&AppConfig::default()).expect("built-in catalog");
        let result = run_command(Command::Show { number: 0 }, service, &AppConfig::default());
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }

    #[test]
    fn missing_catalog_file_fails_bootstrap() {
        let config = AppConfig::default()
            .with_catalog_path(Some(PathBuf::from("/nonexistent/fcc-events.json")));
        assert!(matches!(
            build_application_service(&config),
            Err(ApplicationError::Io(_))
        ));
    }
}
