use std::fs;
use std::io::Read;
use std::path::Path;

use clap::Parser;

use commit_guard::checker::StatusReconciler;
use commit_guard::cli::{CheckArgs, Cli, Commands, PushArgs, RunArgs, ValidateArgs};
use commit_guard::config::{self, FileConfigLoader, Prepared, RepoSlug};
use commit_guard::github::{GitHubApi, PushPayload, ReqwestClient};
use commit_guard::output::{ColorMode, ErrorOutput, TextReporter};
use commit_guard::session::Session;
use commit_guard::{CommitGuardError, EXIT_SUCCESS, Result, exit_code_for, logging};

fn main() {
    let cli = Cli::parse();
    let color = ColorMode::from(cli.color);
    // A logger can only be missing here if one was installed already.
    let _ = logging::init(cli.verbose, color);

    let result = match &cli.command {
        Commands::Check(args) => run_check(args, color),
        Commands::Push(args) => run_push(args, color),
        Commands::Validate(args) => run_validate(args),
    };

    let exit_code = match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color).print_error(&e);
            exit_code_for(&e)
        }
    };
    std::process::exit(exit_code);
}

/// Validate the reposlug and configuration, then connect to the API.
///
/// Everything here fails before any network request is made.
fn connect(run: &RunArgs) -> Result<(Prepared, GitHubApi)> {
    let slug: RepoSlug = run.reposlug.parse()?;
    let prepared = config::prepare(&FileConfigLoader::new(), run.config.as_deref())?;
    log::info!(
        "loaded {} rules from {}",
        prepared.rules.len(),
        prepared.path.display()
    );
    let http = ReqwestClient::with_token(&prepared.settings.token)?;
    let api = GitHubApi::new(http, prepared.settings.api_url.clone(), slug);
    Ok((prepared, api))
}

fn run_check(args: &CheckArgs, color: ColorMode) -> Result<()> {
    let (prepared, api) = connect(&args.run)?;
    let reconciler = StatusReconciler::new(&api, prepared.settings.context.clone())
        .with_dry_run(args.run.dry_run);
    let reporter = TextReporter::stdout(args.output, color);

    let mut session =
        Session::new(&api, &prepared.rules, reconciler, reporter).with_force(args.run.force);
    let summary = session.run_pull(&args.query())?;
    log::info!(
        "{}: checked {} commits, {} violating, {} skipped, {} errors",
        api.slug(),
        summary.checked,
        summary.violating,
        summary.skipped,
        summary.errors
    );
    Ok(())
}

fn run_push(args: &PushArgs, color: ColorMode) -> Result<()> {
    let (prepared, api) = connect(&args.run)?;
    let payload = read_payload(args.payload_path())?;
    if payload.commits.len() > 1 {
        ErrorOutput::new(color).print_warning(
            &format!("push payload has {} commits", payload.commits.len()),
            Some("only the first commit is checked"),
        );
    }

    let reconciler = StatusReconciler::new(&api, prepared.settings.context.clone())
        .with_target_url(args.target_url.clone())
        .with_dry_run(args.run.dry_run);
    let reporter = TextReporter::stdout(args.output, color);

    let mut session =
        Session::new(&api, &prepared.rules, reconciler, reporter).with_force(args.run.force);
    let summary = session.run_push(&payload);
    log::info!("{}: checked {} commits", api.slug(), summary.checked);
    Ok(())
}

fn run_validate(args: &ValidateArgs) -> Result<()> {
    let prepared = config::prepare(&FileConfigLoader::new(), args.config.as_deref())?;
    println!("Configuration is valid ({} rules)", prepared.rules.len());
    Ok(())
}

/// Read the push event from a file, or from stdin when no path is given.
fn read_payload(path: Option<&Path>) -> Result<PushPayload> {
    let content = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CommitGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&content)?)
}
