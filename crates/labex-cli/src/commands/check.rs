use std::path::PathBuf;

use labex_lib::{QueryBuilder, TypeRegistry};

use super::document_loader::load_document;
use super::query_loader::load_query;
use crate::Result;
use crate::error::CliError;

pub struct CheckArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let source = load_query(args.query_path.as_deref(), args.query_text.as_deref())?;
    let registry = match args.doc_path.as_deref() {
        Some(path) => Some(load_document(path)?.registry),
        None => None,
    };

    // Silent on success (like cargo check)
    check(&source, registry.as_ref(), args.color)
}

/// Parses `source`, and resolves and lowers it when a registry is given.
fn check(source: &str, registry: Option<&TypeRegistry>, color: bool) -> Result<()> {
    let parsed = QueryBuilder::new(source)
        .parse()
        .map_err(|err| CliError::Compile(err.into()))?;

    let Some(registry) = registry else {
        if parsed.is_valid() {
            return Ok(());
        }
        let rendered = parsed.diagnostics().render_filtered_colored(source, color);
        return Err(CliError::Diagnostics(rendered));
    };

    match parsed.analyze(registry).compile() {
        Ok(_) => Ok(()),
        Err(err) => match err.diagnostics() {
            Some(diag) => Err(CliError::Diagnostics(
                diag.render_filtered_colored(source, color),
            )),
            None => Err(CliError::Compile(err.into())),
        },
    }
}

#[cfg(test)]
mod tests {
    use labex_lib::{AttrKind, TypeRegistry};

    use super::check;
    use crate::error::CliError;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register_dynamic("Gene")
            .unwrap()
            .attribute("symbol", AttrKind::Text);
        registry
    }

    #[test]
    fn syntax_only_without_registry() {
        assert!(check("Kinase+", None, false).is_ok());
        assert!(matches!(
            check("(Kinase", None, false),
            Err(CliError::Diagnostics(_))
        ));
    }

    #[test]
    fn resolves_names_with_registry() {
        let registry = registry();

        assert!(check(r#"Gene<symbol="TP53">"#, Some(&registry), false).is_ok());

        let Err(CliError::Diagnostics(rendered)) = check("Gene<kind=1>", Some(&registry), false)
        else {
            panic!("unknown attribute should be reported");
        };
        assert!(rendered.contains("kind"), "{rendered}");
    }
}
