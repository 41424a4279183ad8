use clap::ValueEnum;
use schemars::schema_for;
use symscope_api::{FeatureFlags, SymbolRecord};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaTarget {
    /// The record printed by `symbol --json`
    Symbol,
    /// The `features` object of the config file
    Features,
}

pub(crate) fn render(target: SchemaTarget) -> serde_json::Result<String> {
    let schema = match target {
        SchemaTarget::Symbol => schema_for!(SymbolRecord),
        SchemaTarget::Features => schema_for!(FeatureFlags),
    };
    serde_json::to_string_pretty(&schema)
}

pub fn run(target: SchemaTarget) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render(target)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_schema_names_record_fields() {
        let schema: serde_json::Value = serde_json::from_str(&render(SchemaTarget::Symbol).unwrap()).unwrap();
        let properties = &schema["properties"];
        for field in ["moniker", "references", "children", "hover_markdown"] {
            assert!(properties.get(field).is_some(), "missing {field}");
        }
    }

    #[test]
    fn feature_schema_uses_kebab_keys() {
        let schema = render(SchemaTarget::Features).unwrap();
        assert!(schema.contains("external-references"));
    }
}
