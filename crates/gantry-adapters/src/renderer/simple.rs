//! Simple variable substitution renderer.
//!
//! Fills the built-in templates from a ClassMeta. By port contract this
//! never fails: an unknown template id or a serialization hiccup comes
//! back as diagnostic text, which the engine writes through into the
//! artifact file so the failure is visible on disk.

use gantry_core::{application::ports::TemplateRenderer, domain::ClassMeta};
use tracing::warn;

use crate::builtin_templates;

/// Simple renderer using basic variable substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, template_id: &str, namespace: &str, meta: &ClassMeta) -> String {
        let Some(body) = builtin_templates::template(template_id) else {
            warn!(template_id, "no template registered");
            return format!(
                "// gantry: no template registered for '{template_id}'\n// context: {}\n",
                context_json(meta)
            );
        };

        body.replace("{{NAMESPACE}}", namespace)
            .replace("{{CLASS_NAME}}", &meta.name)
            .replace("{{USINGS}}", &usings_block(meta))
            .replace("{{PROPERTIES}}", &property_block(meta))
            .replace("{{MAPPINGS}}", &mapping_block(meta))
            .replace("{{META_JSON}}", &context_json(meta))
    }
}

fn context_json(meta: &ClassMeta) -> String {
    serde_json::to_string(meta).unwrap_or_else(|e| format!("<unserializable meta: {e}>"))
}

/// `using X;` lines for every auxiliary namespace, deterministic order.
fn usings_block(meta: &ClassMeta) -> String {
    meta.namespaces
        .iter()
        .map(|ns| format!("using {ns};\n"))
        .collect()
}

/// Auto-property lines for command/response shapes.
fn property_block(meta: &ClassMeta) -> String {
    let lines: Vec<String> = meta
        .properties
        .iter()
        .map(|prop| {
            if prop.is_collection {
                format!(
                    "    public List<{}> {} {{ get; set; }} = new();",
                    prop.type_name, prop.name
                )
            } else {
                format!("    public {} {} {{ get; set; }}", prop.type_name, prop.name)
            }
        })
        .collect();
    lines.join("\n")
}

/// Fluent mapping lines for the persistence configuration.
fn mapping_block(meta: &ClassMeta) -> String {
    let lines: Vec<String> = meta
        .properties
        .iter()
        .map(|prop| {
            if prop.is_collection {
                let mut line = format!("        builder.HasMany(x => x.{})", prop.name);
                if let Some(paired) = &prop.paired_with {
                    line.push_str(&format!(".WithOne(x => x.{paired})"));
                }
                if let Some(fk) = &prop.foreign_key {
                    line.push_str(&format!(".HasForeignKey(x => x.{fk})"));
                }
                line.push(';');
                line
            } else if prop.is_value_object {
                format!(
                    "        builder.Property(x => x.{}).HasConversion<{}>();",
                    prop.name, prop.type_name
                )
            } else if let Some(fk) = &prop.foreign_key {
                match &prop.paired_with_many {
                    Some(many) => format!(
                        "        builder.HasOne(x => x.{}).WithMany(x => x.{many}).HasForeignKey(\"{fk}\");",
                        prop.name
                    ),
                    None => format!(
                        "        builder.Property<int>(\"{fk}\"); // {}",
                        prop.name
                    ),
                }
            } else {
                format!("        builder.Property(x => x.{});", prop.name)
            }
        })
        .collect();
    lines.join("\n")
}
