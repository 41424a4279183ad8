use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional behaviours a client can switch on at startup.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    CodeLens,
    ExternalReferences,
    LangPhp,
    LangPython,
    GoogleCloudPlatform,
    EventLogDebug,
    ActionLogDebug,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::CodeLens,
        Feature::ExternalReferences,
        Feature::LangPhp,
        Feature::LangPython,
        Feature::GoogleCloudPlatform,
        Feature::EventLogDebug,
        Feature::ActionLogDebug,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Feature::CodeLens => "code-lens",
            Feature::ExternalReferences => "external-references",
            Feature::LangPhp => "lang-php",
            Feature::LangPython => "lang-python",
            Feature::GoogleCloudPlatform => "google-cloud-platform",
            Feature::EventLogDebug => "event-log-debug",
            Feature::ActionLogDebug => "action-log-debug",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Feature switches, handed to consumers explicitly instead of living in
/// process-wide state. Everything is off by default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct FeatureFlags {
    pub code_lens: bool,
    pub external_references: bool,
    pub lang_php: bool,
    pub lang_python: bool,
    pub google_cloud_platform: bool,
    pub event_log_debug: bool,
    pub action_log_debug: bool,
}

impl FeatureFlags {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::CodeLens => self.code_lens,
            Feature::ExternalReferences => self.external_references,
            Feature::LangPhp => self.lang_php,
            Feature::LangPython => self.lang_python,
            Feature::GoogleCloudPlatform => self.google_cloud_platform,
            Feature::EventLogDebug => self.event_log_debug,
            Feature::ActionLogDebug => self.action_log_debug,
        }
    }

    pub fn set(&mut self, feature: Feature, on: bool) {
        let slot = match feature {
            Feature::CodeLens => &mut self.code_lens,
            Feature::ExternalReferences => &mut self.external_references,
            Feature::LangPhp => &mut self.lang_php,
            Feature::LangPython => &mut self.lang_python,
            Feature::GoogleCloudPlatform => &mut self.google_cloud_platform,
            Feature::EventLogDebug => &mut self.event_log_debug,
            Feature::ActionLogDebug => &mut self.action_log_debug,
        };
        *slot = on;
    }

    pub fn enable(&mut self, feature: Feature) {
        self.set(feature, true);
    }

    pub fn disable(&mut self, feature: Feature) {
        self.set(feature, false);
    }

    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_key(feature.key()), Some(feature));
        }
        assert_eq!(Feature::from_key("lang-cobol"), None);
    }

    #[test]
    fn enable_and_disable() {
        let mut flags = FeatureFlags::default();
        assert!(flags.enabled().is_empty());
        flags.enable(Feature::CodeLens);
        flags.enable(Feature::LangPython);
        assert!(flags.is_enabled(Feature::CodeLens));
        assert_eq!(flags.enabled(), vec![Feature::CodeLens, Feature::LangPython]);
        flags.disable(Feature::CodeLens);
        assert!(!flags.is_enabled(Feature::CodeLens));
    }

    #[test]
    fn serde_uses_kebab_keys() {
        let flags: FeatureFlags =
            serde_json::from_str(r#"{"google-cloud-platform": true}"#).unwrap();
        assert!(flags.is_enabled(Feature::GoogleCloudPlatform));
        assert!(serde_json::from_str::<FeatureFlags>(r#"{"bogus": true}"#).is_err());
        let json = serde_json::to_value(&flags).unwrap();
        assert_eq!(json["event-log-debug"], false);
    }
}
