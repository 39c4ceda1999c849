//! Git repository management for testing
//!
//! This module provides utilities for creating temporary git repositories
//! with a deterministic initial branch and test identity.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::{BranchType, Oid, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// Name of the branch HEAD points at in every fresh test repository.
pub const INITIAL_BRANCH: &str = "main";

/// A test guard that owns a temporary git repository. The directory is
/// removed when the guard is dropped.
pub struct GitRepoTestGuard {
  /// The temporary directory containing the git repository
  pub temp_dir: TempDir,
  /// The git repository
  pub repo: Repository,
}

impl GitRepoTestGuard {
  /// Create a new test git repository whose unborn HEAD points at
  /// [`INITIAL_BRANCH`], independent of the machine's `init.defaultBranch`.
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let temp_path = temp_dir.path();

    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(INITIAL_BRANCH);
    let repo = Repository::init_opts(temp_path, &opts).expect("Failed to initialize git repository");

    // Set test user configuration
    let mut config = repo.config().expect("Failed to get repository config");
    config
      .set_str("user.name", "Gonzo Test User")
      .expect("Failed to set user.name");
    config
      .set_str("user.email", "gonzo-test@example.com")
      .expect("Failed to set user.email");

    assert!(
      temp_path.join(".git").exists(),
      "Git repository was not properly initialized"
    );

    Self { temp_dir, repo }
  }

  /// Create a new test repository that already has one commit on
  /// [`INITIAL_BRANCH`].
  pub fn with_initial_commit() -> Self {
    let guard = Self::new();
    create_commit(&guard.repo, "README.md", "init\n", "Initial commit").expect("Failed to create initial commit");
    guard
  }

  /// Get the path to the git repository
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Create (and return) a directory `levels` deep below the repository
  /// root, e.g. `a/b/c` for three levels.
  pub fn nested_dir(&self, levels: usize) -> PathBuf {
    let mut dir = self.path().to_path_buf();
    for level in 0..levels {
      dir.push(format!("level{level}"));
    }
    fs::create_dir_all(&dir).expect("Failed to create nested directory");
    dir
  }

  /// Short name of the branch HEAD currently points at.
  pub fn head_branch(&self) -> Option<String> {
    let head = self.repo.find_reference("HEAD").ok()?;
    head
      .symbolic_target()
      .and_then(|target| target.strip_prefix("refs/heads/"))
      .map(str::to_string)
  }

  /// Whether a local branch with `name` exists.
  pub fn has_branch(&self, name: &str) -> bool {
    self.repo.find_branch(name, BranchType::Local).is_ok()
  }
}

impl Default for GitRepoTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

/// Helper function to create a commit on whatever HEAD points at
pub fn create_commit(repo: &Repository, file_name: &str, content: &str, message: &str) -> Result<Oid> {
  let workdir = repo.workdir().context("Repository has no working directory")?;
  let file_path = workdir.join(file_name);
  if let Some(parent) = file_path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&file_path, content)?;

  // Stage the file
  let mut index = repo.index()?;
  index.add_path(Path::new(file_name))?;
  index.write()?;

  let tree_id = index.write_tree()?;
  let tree = repo.find_tree(tree_id)?;

  let signature = Signature::now("Test User", "test@example.com")?;

  // Handle parent commits
  let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
  let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
  let oid = repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

  Ok(oid)
}

/// Helper function to create a branch in a repository
pub fn create_branch(repo: &Repository, branch_name: &str, start_point: Option<&str>) -> Result<()> {
  let head = if let Some(start) = start_point {
    repo
      .find_branch(start, BranchType::Local)?
      .into_reference()
      .peel_to_commit()?
  } else {
    repo.head()?.peel_to_commit()?
  };

  repo.branch(branch_name, &head, false)?;
  Ok(())
}

/// Helper function to checkout a branch
pub fn checkout_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let obj = repo
    .revparse_single(&format!("refs/heads/{branch_name}"))?
    .peel_to_commit()?;

  repo.checkout_tree(obj.as_object(), Some(git2::build::CheckoutBuilder::new().force()))?;
  repo.set_head(&format!("refs/heads/{branch_name}"))?;

  Ok(())
}
