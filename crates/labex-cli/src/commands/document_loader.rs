//! JSON documents: label types, aliases, text and labels.
//!
//! ```json
//! {
//!   "text": "BRCA1 binds",
//!   "types": { "Gene": { "symbol": "text" }, "Token": { "pos": { "enum": ["NN", "VB"] } } },
//!   "aliases": { "G": "Gene" },
//!   "labels": [ { "type": "G", "begin": 0, "end": 5, "attrs": { "symbol": "BRCA1" } } ]
//! }
//! ```
//!
//! Every type is registered with an attribute-map payload. A document with
//! only `types` and `aliases` works as a schema for `check` and `dump`.

use std::path::Path;

use indexmap::IndexMap;
use labex_lib::{AttrKind, AttrMap, AttrValue, Document, Label, RegistryError, Span, TypeRegistry};
use serde::Deserialize;

use super::query_loader::read_input;
use crate::Result;
use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentFile {
    #[serde(default)]
    text: String,
    #[serde(default)]
    bounds: Option<Span>,
    #[serde(default)]
    types: IndexMap<String, IndexMap<String, AttrSpec>>,
    #[serde(default)]
    aliases: IndexMap<String, String>,
    #[serde(default)]
    labels: Vec<LabelRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttrSpec {
    Scalar(ScalarKind),
    Enum {
        #[serde(rename = "enum")]
        variants: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScalarKind {
    Text,
    Int,
}

impl From<AttrSpec> for AttrKind {
    fn from(spec: AttrSpec) -> Self {
        match spec {
            AttrSpec::Scalar(ScalarKind::Text) => AttrKind::Text,
            AttrSpec::Scalar(ScalarKind::Int) => AttrKind::Int,
            AttrSpec::Enum { variants } => AttrKind::Enum { variants },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelRecord {
    #[serde(rename = "type")]
    ty: String,
    begin: usize,
    end: usize,
    #[serde(default)]
    attrs: IndexMap<String, RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Text(String),
}

/// Registry and document built from one JSON file.
pub struct LoadedDocument {
    pub registry: TypeRegistry,
    pub document: Document,
}

pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    parse_document(&read_input(path)?)
}

pub fn parse_document(json: &str) -> Result<LoadedDocument> {
    let file: DocumentFile = serde_json::from_str(json).map_err(CliError::DocumentJson)?;

    let mut registry = TypeRegistry::new();
    for (name, attrs) in file.types {
        let mut builder = registry.register_dynamic(&name)?;
        for (attr, spec) in attrs {
            builder = builder.attribute(&attr, spec.into());
        }
    }
    for (alias, target) in &file.aliases {
        registry.alias(alias, target)?;
    }

    let mut builder = Document::builder(file.text);
    if let Some(bounds) = file.bounds {
        builder = builder.bounds(bounds);
    }
    for record in file.labels {
        builder.push(build_label(&registry, record)?);
    }
    let document = builder.build()?;

    tracing::debug!(
        types = registry.types().count(),
        labels = document.label_count(),
        "loaded document"
    );
    Ok(LoadedDocument { registry, document })
}

fn build_label(registry: &TypeRegistry, record: LabelRecord) -> Result<Label> {
    let descriptor = registry.resolve(&record.ty).map_err(RegistryError::from)?;

    let mut attrs = AttrMap::new();
    for (name, raw) in record.attrs {
        let Some(attribute) = descriptor.attribute(&name) else {
            return Err(CliError::DocumentSchema(format!(
                "label type `{}` has no attribute `{name}`",
                descriptor.name()
            )));
        };
        let value = match raw {
            RawValue::Int(n) => AttrValue::Int(n),
            RawValue::Text(text) => {
                if attribute.kind().is_enum() && attribute.enum_ordinal(&text).is_none() {
                    return Err(CliError::DocumentSchema(format!(
                        "`{text}` is not a constant of `{}.{name}`",
                        descriptor.name()
                    )));
                }
                AttrValue::Text(text)
            }
        };
        attrs.insert(name, value);
    }

    let span = Span::new(record.begin, record.end);
    Ok(Label::new(descriptor.id(), span, attrs))
}
