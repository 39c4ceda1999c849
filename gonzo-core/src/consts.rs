//! Constants shared by the gonzo crates.

/// Name of the repository metadata entry looked for during discovery.
pub const GIT_DIR: &str = ".git";

/// Ref namespace holding local branches.
pub const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

/// Ref namespace holding remote-tracking branches.
pub const REMOTE_BRANCH_PREFIX: &str = "refs/remotes/";

/// Branches listed ahead of everything else, in this order.
pub const PRIORITY_BRANCHES: [&str; 3] = ["develop", "main", "master"];

/// The only answer accepted as a confirmation.
pub const CONFIRM_TOKEN: &str = "Y";

/// Remote used by push unless configured otherwise.
pub const DEFAULT_REMOTE: &str = "origin";

/// Ceiling for delegated commands unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "config.toml";

/// Platform-specific Git executable name
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Platform-specific Git executable name
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";
