//! Default configuration values

/// Workspace listing file name, looked up in the workspace base directory
pub const WORKSPACE_FILE: &str = "reactor.toml";

/// Global configuration file name, looked up in the config directory
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Descriptor file name used when a project does not name one
pub const DEFAULT_DESCRIPTOR: &str = "pom.xml";

/// Goals run against each project when none are given
pub const DEFAULT_GOALS: &str = "install";

/// Build tool invoked for each project
pub const DEFAULT_EXECUTABLE: &str = "mvn";

/// SCM connection prefix handled by the git status collaborator
pub const GIT_CONNECTION_PREFIX: &str = "scm:git:";
