use schemars::schema_for;

use folio_core::entities::{ChatMessage, Project};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `folio schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.type_name)?, flags.format)
}

fn schema(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::Project => schema_for!(Project),
        SchemaType::ChatMessage => schema_for!(ChatMessage),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::schema;
    use crate::cli::root_commands::SchemaType;

    #[test]
    fn project_schema_lists_fields() {
        let value = schema(SchemaType::Project).expect("schema");
        let properties = value["properties"].as_object().expect("properties");
        for field in ["id", "title", "technologies", "category", "created_at"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn chat_message_schema_has_role() {
        let value = schema(SchemaType::ChatMessage).expect("schema");
        assert!(value["properties"]["role"].is_object());
    }
}
