/// Executable name of the external Elm compiler
pub const ELM_COMPILER: &str = "elm";
/// Subcommand that compiles entry modules to JavaScript
pub const ELM_MAKE: &str = "make";
/// File extension of compiled plugin output
pub const COMPILED_EXTENSION: &str = "js";
/// Environment name conventionally used for release builds
pub const PRODUCTION_ENV: &str = "production";
