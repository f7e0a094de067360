//! Configuration loader builder
//!
//! Assembles the prioritized store list handed to the retriever runtime:
//! conventional resource files first, then path lists read from the
//! runtime property and the environment variable, then explicitly
//! registered stores. Store order defines override precedence when the
//! runtime later merges sources.

use crate::constants::{
    CONFIG_PATHS_ENV_VAR, CONFIG_PATHS_PROPERTY, CONFIG_RESOURCE_FILES, PATH_QUOTE_CHARS,
    PATH_SEPARATOR, RESOURCE_CONFIG_DISABLED_ENV_VAR, RESOURCE_CONFIG_DISABLED_PROPERTY,
};
use crate::environment::{Environment, ProcessEnvironment};
use crate::split::split_enclosed;
use crate::store::StoreOptions;
use log::info;

/// Toggles understood by [`ConfigurationLoaderBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Ask the retriever runtime to include its built-in default stores.
    /// Off unless enabled.
    DefaultStores,
    /// Scan the resource directory for conventional config files. On
    /// unless disabled.
    ResourceConfig,
}

#[derive(Debug, Clone)]
struct Features {
    default_stores: bool,
    resource_config: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            default_stores: false,
            resource_config: true,
        }
    }
}

/// Builder for [`ConfigurationLoader`].
///
/// Configuration methods chain; [`build`](Self::build) resolves all
/// applicable sources in a fixed priority order. The builder is not meant
/// for concurrent mutation; callers sharing one across threads serialize
/// access themselves.
pub struct ConfigurationLoaderBuilder {
    features: Features,
    stores: Vec<StoreOptions>,
    environment: Box<dyn Environment>,
}

impl ConfigurationLoaderBuilder {
    /// Builder over the real process environment.
    pub fn new() -> Self {
        Self {
            features: Features::default(),
            stores: Vec::new(),
            environment: Box::new(ProcessEnvironment::new()),
        }
    }

    /// Swap the ambient environment the builder reads from.
    pub fn with_environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Box::new(environment);
        self
    }

    /// Turn a feature on.
    pub fn enable_feature(mut self, feature: Feature) -> Self {
        self.set_feature(feature, true);
        self
    }

    /// Turn a feature off.
    pub fn disable_feature(mut self, feature: Feature) -> Self {
        self.set_feature(feature, false);
        self
    }

    fn set_feature(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::DefaultStores => self.features.default_stores = enabled,
            Feature::ResourceConfig => self.features.resource_config = enabled,
        }
    }

    /// Register an already-formed store.
    pub fn add_store(mut self, store: StoreOptions) -> Self {
        self.stores.push(store);
        self
    }

    /// Register a configuration file path; the decode format follows the
    /// path's extension.
    pub fn add_config_path(mut self, path: impl Into<String>) -> Self {
        self.stores.push(StoreOptions::file(path));
        self
    }

    /// Resolve all applicable sources into an immutable loader
    /// configuration.
    ///
    /// Each resolution step only appends; earlier entries are never
    /// removed or reordered. Building more than once is allowed; ambient
    /// values are re-read on every call and resolved in the same order.
    pub fn build(&self) -> ConfigurationLoader {
        let mut stores = Vec::new();

        // 1. conventional resource files, if the scan is enabled
        if self.resource_config_enabled() {
            for name in CONFIG_RESOURCE_FILES {
                if let Some(path) = self.environment.resource(name) {
                    stores.push(StoreOptions::file(path.to_string_lossy()));
                }
            }
        }

        // 2. config files from the runtime property
        self.append_path_list(&mut stores, self.environment.property(CONFIG_PATHS_PROPERTY));
        // 3. config files from the environment variable
        self.append_path_list(&mut stores, self.environment.var(CONFIG_PATHS_ENV_VAR));
        // 4. explicitly registered stores, in insertion order
        stores.extend(self.stores.iter().cloned());

        ConfigurationLoader {
            stores,
            include_default_stores: self.features.default_stores,
        }
    }

    /// The scan runs unless either disable switch is literally `"true"`
    /// or the feature is off.
    fn resource_config_enabled(&self) -> bool {
        let disabled_by_property = self
            .environment
            .property(RESOURCE_CONFIG_DISABLED_PROPERTY)
            .as_deref()
            == Some("true");
        let disabled_by_var = self
            .environment
            .var(RESOURCE_CONFIG_DISABLED_ENV_VAR)
            .as_deref()
            == Some("true");

        !disabled_by_property && !disabled_by_var && self.features.resource_config
    }

    fn append_path_list(&self, stores: &mut Vec<StoreOptions>, locations: Option<String>) {
        let Some(locations) = locations else { return };
        if locations.trim().is_empty() {
            return;
        }

        for entry in split_enclosed(&locations, PATH_SEPARATOR, &PATH_QUOTE_CHARS) {
            if entry.is_empty() {
                continue;
            }
            info!("adding config store: {entry}");
            stores.push(StoreOptions::file(entry));
        }
    }
}

impl Default for ConfigurationLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable product of [`ConfigurationLoaderBuilder::build`].
///
/// Holds the resolved stores in priority order plus the flag asking the
/// retriever runtime to add its own built-in default stores. This is the
/// sole artifact handed downstream; fetching and merging happen there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationLoader {
    stores: Vec<StoreOptions>,
    include_default_stores: bool,
}

impl ConfigurationLoader {
    /// Resolved stores in priority order.
    pub fn stores(&self) -> &[StoreOptions] {
        &self.stores
    }

    /// Whether the runtime should include its built-in default stores.
    pub fn include_default_stores(&self) -> bool {
        self.include_default_stores
    }

    /// Consume the loader, yielding the store list.
    pub fn into_stores(self) -> Vec<StoreOptions> {
        self.stores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ConfigFormat, StoreKind};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[derive(Default)]
    struct FakeEnvironment {
        properties: HashMap<String, String>,
        vars: HashMap<String, String>,
        resources: HashMap<String, PathBuf>,
    }

    impl FakeEnvironment {
        fn with_resources(names: &[&str]) -> Self {
            let resources = names
                .iter()
                .map(|name| ((*name).to_string(), PathBuf::from(format!("conf/{name}"))))
                .collect();
            Self {
                resources,
                ..Self::default()
            }
        }

        fn with_property(mut self, name: &str, value: &str) -> Self {
            self.properties.insert(name.to_string(), value.to_string());
            self
        }

        fn with_var(mut self, name: &str, value: &str) -> Self {
            self.vars.insert(name.to_string(), value.to_string());
            self
        }
    }

    impl Environment for FakeEnvironment {
        fn property(&self, name: &str) -> Option<String> {
            self.properties.get(name).cloned()
        }

        fn var(&self, name: &str) -> Option<String> {
            self.vars.get(name).cloned()
        }

        fn resource(&self, name: &str) -> Option<PathBuf> {
            self.resources.get(name).cloned()
        }
    }

    fn paths(loader: &ConfigurationLoader) -> Vec<&str> {
        loader
            .stores()
            .iter()
            .map(|store| store.path.as_str())
            .collect()
    }

    #[test]
    fn test_empty_environment_builds_an_empty_loader() {
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(FakeEnvironment::default())
            .build();

        assert!(loader.stores().is_empty());
        assert!(!loader.include_default_stores());
    }

    #[test]
    fn test_resource_scan_adds_conventional_files_in_order() {
        let environment = FakeEnvironment::with_resources(&[
            "application.yml",
            "application.json",
            "application.properties",
        ]);
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert_eq!(
            paths(&loader),
            vec![
                "conf/application.properties",
                "conf/application.json",
                "conf/application.yml",
            ]
        );
        assert_eq!(loader.stores()[0].format, ConfigFormat::Properties);
        assert_eq!(loader.stores()[1].format, ConfigFormat::Json);
        assert_eq!(loader.stores()[2].format, ConfigFormat::Yaml);
        assert!(loader.stores().iter().all(|store| store.optional));
    }

    #[test]
    fn test_resource_scan_only_adds_present_files() {
        let environment = FakeEnvironment::with_resources(&["application.yml"]);
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert_eq!(paths(&loader), vec!["conf/application.yml"]);
    }

    #[test]
    fn test_resource_scan_respects_the_feature_flag() {
        let environment = FakeEnvironment::with_resources(&["application.yml"]);
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .disable_feature(Feature::ResourceConfig)
            .build();

        assert!(loader.stores().is_empty());
    }

    #[test]
    fn test_resource_scan_disabled_by_property() {
        let environment = FakeEnvironment::with_resources(&["application.yml"])
            .with_property("stratum.configuration.resource.disabled", "true");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert!(loader.stores().is_empty());
    }

    #[test]
    fn test_resource_scan_disabled_by_env_var() {
        let environment = FakeEnvironment::with_resources(&["application.yml"])
            .with_var("STRATUM_CONFIGURATION_RESOURCE_DISABLED", "true");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert!(loader.stores().is_empty());
    }

    #[test]
    fn test_only_the_literal_string_true_disables_the_scan() {
        let environment = FakeEnvironment::with_resources(&["application.yml"])
            .with_property("stratum.configuration.resource.disabled", "1")
            .with_var("STRATUM_CONFIGURATION_RESOURCE_DISABLED", "TRUE");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert_eq!(paths(&loader), vec!["conf/application.yml"]);
    }

    #[test]
    fn test_default_stores_flag_is_forwarded() {
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(FakeEnvironment::default())
            .enable_feature(Feature::DefaultStores)
            .build();

        assert!(loader.include_default_stores());
        assert!(loader.stores().is_empty());
    }

    #[test]
    fn test_property_path_list_is_split_and_appended() {
        let environment = FakeEnvironment::default()
            .with_property("stratum.configuration", "/etc/a.yml:/etc/b.properties:/etc/c");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert_eq!(
            paths(&loader),
            vec!["/etc/a.yml", "/etc/b.properties", "/etc/c"]
        );
        assert_eq!(loader.stores()[0].format, ConfigFormat::Yaml);
        assert_eq!(loader.stores()[1].format, ConfigFormat::Properties);
        assert_eq!(loader.stores()[2].format, ConfigFormat::Json);
    }

    #[test]
    fn test_quoted_path_list_entry_is_not_split() {
        let environment = FakeEnvironment::default()
            .with_property("stratum.configuration", "/etc/a.yml:\"/etc/odd:name.yaml\"");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        // quotes are retained in the path, matching the splitter policy
        assert_eq!(paths(&loader), vec!["/etc/a.yml", "\"/etc/odd:name.yaml\""]);
    }

    #[test]
    fn test_blank_path_lists_contribute_nothing() {
        let environment = FakeEnvironment::default()
            .with_property("stratum.configuration", "   ")
            .with_var("STRATUM_CONFIGURATION", "");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert!(loader.stores().is_empty());
    }

    #[test]
    fn test_empty_path_list_tokens_are_skipped() {
        let environment =
            FakeEnvironment::default().with_property("stratum.configuration", "::/etc/a.json:");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .build();

        assert_eq!(paths(&loader), vec!["/etc/a.json"]);
    }

    #[test]
    fn test_resolution_order_is_resources_then_property_then_var_then_explicit() {
        let environment = FakeEnvironment::with_resources(&["application.yml"])
            .with_property("stratum.configuration", "/prop/a.yml")
            .with_var("STRATUM_CONFIGURATION", "/env/b.json");
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .add_store(StoreOptions::file("explicit/first.properties"))
            .add_config_path("file:///explicit/second.yaml")
            .build();

        assert_eq!(
            paths(&loader),
            vec![
                "conf/application.yml",
                "/prop/a.yml",
                "/env/b.json",
                "explicit/first.properties",
                "/explicit/second.yaml",
            ]
        );
    }

    #[test]
    fn test_add_store_keeps_the_given_options_verbatim() {
        let store = StoreOptions {
            kind: StoreKind::File,
            format: ConfigFormat::Yaml,
            path: "custom.data".to_string(),
            optional: false,
        };
        let loader = ConfigurationLoaderBuilder::new()
            .with_environment(FakeEnvironment::default())
            .add_store(store.clone())
            .build();

        assert_eq!(loader.stores(), &[store]);
    }

    #[test]
    fn test_build_is_repeatable() {
        let environment = FakeEnvironment::with_resources(&["application.json"])
            .with_var("STRATUM_CONFIGURATION", "/env/a.yml");
        let builder = ConfigurationLoaderBuilder::new()
            .with_environment(environment)
            .add_config_path("extra.properties");

        let first = builder.build();
        let second = builder.build();

        assert_eq!(first, second);
        assert_eq!(first.into_stores().len(), 3);
    }
}
