pub const DEFAULT_REGISTRY: &str = "https://search.maven.org";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_MANIFEST: &str = "dependencies.toml";
pub const DEFAULT_REPORT_DIR: &str = "target/dependency-age";
pub const DEFAULT_PROJECT_NAME: &str = "dependencies";

pub const SEARCH_ROWS: &str = "1000";

pub const HTTP_ERROR_TEXT: &str = "Maven Central HTTP Error - Try again ?";
pub const NOT_FOUND_TEXT: &str = "Version not found in Maven Central";
