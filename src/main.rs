use anyhow::Result;
use clap::Parser;

use issue_branch::clipboard::SystemClipboard;
use issue_branch::config;
use issue_branch::git_ops::{Git2Repository, Repository};
use issue_branch::title::ParsedTitle;
use issue_branch::ui::{self, Logger};
use issue_branch::workflow::{run_workflow, WorkflowAction, WorkflowArgs};

#[derive(clap::Parser)]
#[command(
    name = "issue-branch",
    version,
    about = "Derive a git branch name and commit message from a GitHub issue title"
)]
struct Args {
    /// Issue title containing the issue number, e.g. "Fix login bug #42"
    title: String,

    #[arg(
        short,
        long,
        help = "Copy the branch name to the clipboard instead of creating the branch"
    )]
    copy_only: bool,

    #[arg(
        short,
        long,
        help = "Copy the commit message to the clipboard instead of creating the branch"
    )]
    title_only: bool,

    #[arg(long, help = "Preview what would happen without touching git or the clipboard")]
    dry_run: bool,

    #[arg(short, long, help = "Log each derivation step")]
    verbose: bool,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ui::display_error(&format!("Failed to parse github title: {:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let logger = Logger::new(args.verbose || config.behavior.verbose);

    let parsed = ParsedTitle::parse(&args.title, &config.patterns)?;
    logger.debug(&format!("extracted issue number: {}", parsed.issue_number));
    logger.debug(&format!(
        "description without issue number: {}",
        parsed.raw_description
    ));
    logger.debug(&format!("slug: {}", parsed.slug_description));
    logger.debug(&format!("branch name: {}", parsed.branch_name));

    if args.dry_run {
        ui::display_status("Dry run:");
        if args.copy_only {
            ui::display_success(&format!(
                "  would copy branch name to clipboard: {}",
                parsed.branch_name
            ));
        } else if args.title_only {
            ui::display_success(&format!(
                "  would copy commit message to clipboard: {}",
                parsed.commit_message
            ));
        } else {
            ui::display_success(&format!(
                "  would create and check out branch: {}",
                parsed.branch_name
            ));
            ui::display_success(&format!(
                "  would copy commit message to clipboard: {}",
                parsed.commit_message
            ));
        }
        return Ok(());
    }

    let workflow_args = WorkflowArgs {
        copy_only: args.copy_only,
        title_only: args.title_only,
    };

    // Discover the repository only when the branch will actually be created,
    // so the copy flags keep working outside a git checkout.
    let repo = if workflow_args.requires_repository() {
        Some(Git2Repository::discover()?)
    } else {
        None
    };

    let mut clipboard = SystemClipboard;
    let result = run_workflow(
        &parsed,
        &workflow_args,
        repo.as_ref().map(|r| r as &dyn Repository),
        &mut clipboard,
    )?;

    match result.action {
        WorkflowAction::CopiedBranchName => {
            ui::display_success(&format!("{} copied to clipboard", result.branch_name));
        }
        WorkflowAction::CopiedCommitMessage => {
            ui::display_success(&format!(
                "Commit message copied to clipboard: {}",
                result.commit_message
            ));
        }
        WorkflowAction::CreatedBranch => {
            ui::display_success(&format!(
                "Branch {} successfully created and checked out",
                result.branch_name
            ));
            ui::display_success(&format!(
                "Commit message copied to clipboard: {}",
                result.commit_message
            ));
        }
    }

    Ok(())
}
