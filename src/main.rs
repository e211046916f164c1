mod cli;
mod config;

use anyhow::Context;
use app_catalog::adapters::outbound::console::StderrProgressReporter;
use app_catalog::adapters::outbound::in_memory::InMemoryCatalogRepository;
use app_catalog::application::dto::{AccessRequest, OutputFormat, ScreenRequest};
use app_catalog::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use app_catalog::application::navigation::Tab;
use app_catalog::application::read_models::ScreenView;
use app_catalog::application::store::{Action, AppStore};
use app_catalog::application::use_cases::{RequestAccessUseCase, ShowScreenUseCase};
use app_catalog::ports::outbound::ProgressReporter;
use app_catalog::shared::{ExitCode, Result};
use cli::{Args, Command};
use config::ConfigFile;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

/// `--verbose` forces debug output; otherwise RUST_LOG decides, falling back to warnings only.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to determine the working directory")?;
    let config = config::resolve_config(args.config.as_deref(), &current_dir)?;
    let format = resolve_format(args.format, &config);

    // Create adapters (Dependency Injection)
    let repository = InMemoryCatalogRepository::new();
    let progress_reporter = StderrProgressReporter::new();
    let mut store = AppStore::new(repository, config.user_profile(), config.workflow_config())?;

    let view = match args.command {
        Command::Catalog(catalog) => {
            show_screen(&progress_reporter, &mut store, catalog.into_actions())?
        }
        Command::Details { app_id } => {
            show_screen(&progress_reporter, &mut store, vec![Action::SelectApp(app_id)])?
        }
        Command::MyApps => show_tab(&progress_reporter, &mut store, Tab::MyApps)?,
        Command::Analytics => show_tab(&progress_reporter, &mut store, Tab::Analytics)?,
        Command::Bundles => show_tab(&progress_reporter, &mut store, Tab::Bundles)?,
        Command::Request(request) => {
            let use_case = RequestAccessUseCase::new(&progress_reporter);
            let access_request = AccessRequest::new(request.app_id.clone(), request.form(), request.go_to);
            let response = use_case.execute(&mut store, access_request).await?;
            progress_reporter.report(&format!(
                "➡️  Next: {}",
                response.next_view.header.title
            ));
            response.success_view
        }
    };

    eprintln!("{}", FormatterFactory::progress_message(format));

    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&view)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Command line wins over the config file, which wins over the default.
fn resolve_format(cli: Option<OutputFormat>, config: &ConfigFile) -> OutputFormat {
    cli.or_else(|| config.output_format()).unwrap_or_default()
}

fn show_screen(
    progress_reporter: &StderrProgressReporter,
    store: &mut AppStore<InMemoryCatalogRepository>,
    actions: Vec<Action>,
) -> Result<ScreenView> {
    ShowScreenUseCase::new(progress_reporter).execute(store, ScreenRequest::new(actions))
}

fn show_tab(
    progress_reporter: &StderrProgressReporter,
    store: &mut AppStore<InMemoryCatalogRepository>,
    tab: Tab,
) -> Result<ScreenView> {
    show_screen(progress_reporter, store, vec![Action::Navigate(tab)])
}
