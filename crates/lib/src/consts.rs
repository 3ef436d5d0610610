/// Application name used for binaries, environment variables and log targets.
pub const APP_NAME: &str = "srcmodel";

/// Environment variable that overrides the project root directory.
pub const PROJECT_DIR_ENV: &str = "SRCMODEL_PROJECT_DIR";

/// Root of the conventional source layout: `src/<component>/<role>`.
pub const CONVENTION_ROOT: &str = "src";

/// Include pattern used to project header directories into header files.
pub const HEADER_PATTERN: &str = "**/*.h";

/// Default build script name picked up by the CLI.
pub const DEFAULT_SCRIPT: &str = "build.lua";
