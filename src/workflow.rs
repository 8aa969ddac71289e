//! Output dispatch: routes the derived strings to the clipboard and/or
//! the repository depending on the selected flags.

use crate::clipboard::ClipboardSink;
use crate::error::{IssueBranchError, Result};
use crate::git_ops::Repository;
use crate::title::ParsedTitle;

/// Flags selecting the workflow output path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowArgs {
    /// Copy the branch name to the clipboard, do not touch git
    pub copy_only: bool,

    /// Copy the commit message to the clipboard, do not touch git
    pub title_only: bool,
}

impl WorkflowArgs {
    /// Only the default path creates a branch; both copy flags leave
    /// the repository alone.
    pub fn requires_repository(&self) -> bool {
        !(self.copy_only || self.title_only)
    }
}

/// What the workflow actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    CopiedBranchName,
    CopiedCommitMessage,
    CreatedBranch,
}

/// Result of a successful workflow run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub action: WorkflowAction,
    pub branch_name: String,
    pub commit_message: String,
}

/// Dispatch the parsed title to the collaborators.
///
/// `copy_only` wins when both flags are set. `repo` is only consulted on
/// the default path; callers that know git is not needed may pass `None`.
pub fn run_workflow(
    parsed: &ParsedTitle,
    args: &WorkflowArgs,
    repo: Option<&dyn Repository>,
    clipboard: &mut dyn ClipboardSink,
) -> Result<WorkflowResult> {
    if args.copy_only {
        clipboard.write(&parsed.branch_name)?;
        return Ok(WorkflowResult {
            action: WorkflowAction::CopiedBranchName,
            branch_name: parsed.branch_name.clone(),
            commit_message: parsed.commit_message.clone(),
        });
    }

    if args.title_only {
        clipboard.write(&parsed.commit_message)?;
        return Ok(WorkflowResult {
            action: WorkflowAction::CopiedCommitMessage,
            branch_name: parsed.branch_name.clone(),
            commit_message: parsed.commit_message.clone(),
        });
    }

    let repo = repo.ok_or_else(|| IssueBranchError::branch("no repository available"))?;
    repo.create_and_checkout_branch(&parsed.branch_name)?;
    clipboard.write(&parsed.commit_message)?;

    Ok(WorkflowResult {
        action: WorkflowAction::CreatedBranch,
        branch_name: parsed.branch_name.clone(),
        commit_message: parsed.commit_message.clone(),
    })
}
