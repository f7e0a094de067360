//! Well-known names consulted during configuration resolution

/// Conventional resource file names probed during the resource scan, in
/// the order their stores are appended.
pub const CONFIG_RESOURCE_FILES: [&str; 3] = [
    "application.properties",
    "application.json",
    "application.yml",
];

/// Runtime property holding a colon-separated list of config file paths.
pub const CONFIG_PATHS_PROPERTY: &str = "stratum.configuration";

/// Environment variable holding a colon-separated list of config file paths.
pub const CONFIG_PATHS_ENV_VAR: &str = "STRATUM_CONFIGURATION";

/// Runtime property that suppresses the resource scan when set to `"true"`.
pub const RESOURCE_CONFIG_DISABLED_PROPERTY: &str = "stratum.configuration.resource.disabled";

/// Environment variable that suppresses the resource scan when set to `"true"`.
pub const RESOURCE_CONFIG_DISABLED_ENV_VAR: &str = "STRATUM_CONFIGURATION_RESOURCE_DISABLED";

/// Separator between the entries of a config path list.
pub const PATH_SEPARATOR: char = ':';

/// Quote characters that protect a path-list entry from splitting.
pub const PATH_QUOTE_CHARS: [char; 2] = ['"', '\''];

/// URL-style prefix stripped from the front of file paths.
pub const FILE_URL_PREFIX: &str = "file://";
