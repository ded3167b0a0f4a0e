//! Default configuration values

/// Default changelog file name
pub const DEFAULT_FILE_NAME: &str = "CHANGELOG.md";

/// Default section title template
pub const DEFAULT_TITLE: &str = "Timeline: {day}-{month}-{year}";

/// Default remote used to resolve the repository URL
pub const DEFAULT_REMOTE: &str = "origin";

/// Default end reference of the log range
pub const DEFAULT_TO_REF: &str = "HEAD";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "datelog.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "datelog.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".datelog.toml",
        ".datelog.yaml",
    ]
}
