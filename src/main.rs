use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_changelog::cli::{run_changelog_workflow, ChangelogWorkflowArgs, WorkflowResult};
use git_changelog::config;
use git_changelog::release::AssignMode;
use git_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    about = "Generate a changelog from fenced entries in merged pull request commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Directory inside the repository to read")]
    path: Option<String>,

    #[arg(short = 'r', long = "ref", help = "Revision to start the history walk from")]
    start_ref: Option<String>,

    #[arg(long, conflicts_with = "all", help = "Only list changes since the latest release")]
    current: bool,

    #[arg(long, help = "List changes of every release")]
    all: bool,

    #[arg(long, help = "Order releases by semantic version")]
    semver_order: bool,

    #[arg(long, help = "Show release branches and exit")]
    list_branches: bool,

    #[arg(long, help = "Render the changelog of a built-in sample history")]
    demo: bool,

    #[arg(long, help = "Enable debug logging on stderr")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-changelog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let mode = if args.current {
        Some(AssignMode::CurrentRelease)
    } else if args.all {
        Some(AssignMode::AllReleases)
    } else {
        None
    };

    let workflow_args = ChangelogWorkflowArgs {
        path: args.path,
        start_ref: args.start_ref,
        mode,
        semver_order: args.semver_order,
        demo: args.demo,
        list_branches: args.list_branches,
    };

    let result = match run_changelog_workflow(workflow_args, config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    match result {
        WorkflowResult::ReleaseBranches(branches) => {
            if branches.is_empty() {
                ui::display_status("No release branches found");
            } else {
                ui::display_release_branches(&branches);
            }
        }
        WorkflowResult::Demo {
            history,
            labels,
            report,
        } => {
            ui::display_commit_table(&history, &labels);
            for warning in &report.warnings {
                ui::display_boundary_warning(warning);
            }
            println!("{}", report.text);
        }
        WorkflowResult::Changelog(report) => {
            for warning in &report.warnings {
                ui::display_boundary_warning(warning);
            }
            if report.text.is_empty() {
                ui::display_status("No changelog entries found");
            } else {
                println!("{}", report.text);
            }
        }
    }

    Ok(())
}
