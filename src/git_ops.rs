use std::cell::RefCell;
use std::path::Path;

use git2::BranchType;

use crate::error::{IssueBranchError, Result};

/// Branch operations the workflow needs from a git repository.
///
/// Implemented by [`Git2Repository`] for real repositories and by
/// [`MockRepository`] in tests.
pub trait Repository {
    /// Check whether a local branch with this name exists.
    fn branch_exists(&self, name: &str) -> Result<bool>;

    /// Create `name` at the current HEAD commit and check it out.
    fn create_and_checkout_branch(&self, name: &str) -> Result<()>;
}

/// Wrapper around a git2 Repository for branch operations.
pub struct Git2Repository {
    repo: git2::Repository,
}

impl Git2Repository {
    /// Discover the repository containing the current working directory.
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn discover() -> Result<Self> {
        let repo = git2::Repository::discover(".")
            .map_err(|e| IssueBranchError::branch(format!("not in a git repository: {}", e)))?;
        Ok(Git2Repository { repo })
    }

    /// Open the repository at or above an explicit path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path).map_err(|e| {
            IssueBranchError::branch(format!("no git repository at '{}': {}", path.display(), e))
        })?;
        Ok(Git2Repository { repo })
    }
}

impl Repository for Git2Repository {
    fn branch_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_branch(name, BranchType::Local) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn create_and_checkout_branch(&self, name: &str) -> Result<()> {
        let refname = format!("refs/heads/{}", name);
        if !git2::Reference::is_valid_name(&refname) {
            return Err(IssueBranchError::branch(format!(
                "'{}' is not a valid branch name",
                name
            )));
        }
        if self.branch_exists(name)? {
            return Err(IssueBranchError::branch(format!(
                "branch '{}' already exists",
                name
            )));
        }

        // Branch off the current HEAD commit. Fails on an unborn branch
        // (repository without commits).
        let head_commit = self.repo.head()?.peel_to_commit()?;
        self.repo.branch(name, &head_commit, false)?;

        // Checkout the new branch and move HEAD onto it
        let obj = self.repo.revparse_single(&refname)?;
        self.repo.checkout_tree(&obj, None)?;
        self.repo.set_head(&refname)?;

        Ok(())
    }
}

/// Mock repository for exercising the workflow without touching git.
#[derive(Debug, Default)]
pub struct MockRepository {
    existing: Vec<String>,
    created: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a local branch
    pub fn with_existing_branch(mut self, name: impl Into<String>) -> Self {
        self.existing.push(name.into());
        self
    }

    /// Branches created through the trait, in creation order
    pub fn created_branches(&self) -> Vec<String> {
        self.created.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn branch_exists(&self, name: &str) -> Result<bool> {
        Ok(self.existing.iter().any(|b| b == name)
            || self.created.borrow().iter().any(|b| b == name))
    }

    fn create_and_checkout_branch(&self, name: &str) -> Result<()> {
        if self.branch_exists(name)? {
            return Err(IssueBranchError::branch(format!(
                "branch '{}' already exists",
                name
            )));
        }
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }
}
