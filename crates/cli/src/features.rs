use std::path::Path;

use clap::Subcommand;
use symscope_api::Feature;
use symscope_core::ClientConfig;
use symscope_core::config::default_config_path;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Subcommand, Default)]
pub enum FeatureCommands {
    /// List every feature and whether it is on
    #[default]
    List,
    /// Switch a feature on in the config file
    Enable {
        #[arg(value_parser = parse_feature)]
        feature: Feature,
    },
    /// Switch a feature off in the config file
    Disable {
        #[arg(value_parser = parse_feature)]
        feature: Feature,
    },
}

#[derive(Tabled)]
struct FeatureRow {
    #[tabled(rename = "Feature")]
    name: &'static str,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

fn parse_feature(key: &str) -> Result<Feature, String> {
    Feature::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = Feature::ALL.iter().map(Feature::key).collect();
        format!("unknown feature '{}', expected one of: {}", key, known.join(", "))
    })
}

pub fn run(cmd: FeatureCommands) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", apply(cmd, &default_config_path())?);
    Ok(())
}

/// Executes `cmd` against the config file at `path` and returns the text to print.
pub(crate) fn apply(cmd: FeatureCommands, path: &Path) -> symscope_core::Result<String> {
    let config = ClientConfig::load_from(path)?;

    match cmd {
        FeatureCommands::List => {
            let rows: Vec<FeatureRow> = Feature::ALL
                .into_iter()
                .map(|feature| FeatureRow {
                    name: feature.key(),
                    enabled: if config.features.is_enabled(feature) {
                        "yes".to_string()
                    } else {
                        "-".to_string()
                    },
                })
                .collect();
            let enabled = config.features.enabled();
            Ok(format!(
                "{}\n{} of {} enabled",
                Table::new(rows),
                enabled.len(),
                Feature::ALL.len()
            ))
        }
        FeatureCommands::Enable { feature } => toggle(config, path, feature, true),
        FeatureCommands::Disable { feature } => toggle(config, path, feature, false),
    }
}

fn toggle(
    mut config: ClientConfig,
    path: &Path,
    feature: Feature,
    on: bool,
) -> symscope_core::Result<String> {
    if on {
        config.features.enable(feature);
    } else {
        config.features.disable(feature);
    }
    config.save_to(path)?;
    info!(%feature, on, path = %path.display(), "updated feature switch");
    Ok(format!("{} {}", if on { "Enabled" } else { "Disabled" }, feature))
}
