//! Shared fixtures for compiler tests.

use labex_core::{AttrEnum, AttrKind, TypeRegistry};

#[derive(Clone, Copy)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Determiner,
}

impl AttrEnum for Pos {
    const VARIANTS: &'static [&'static str] = &["NN", "VB", "JJ", "DT"];

    fn ordinal(self) -> usize {
        self as usize
    }
}

pub struct Token {
    pub text: String,
    pub pos: Pos,
    pub length: i64,
}

/// Registry used across compiler tests.
///
/// - `Token { text, pos: NN|VB|JJ|DT, length }`, alias `Tok`
/// - `Gene { text, symbol }`
/// - `Protein { text }`
/// - `Disease { text, severity: MILD|SEVERE }`
/// - `Sentence` with no attributes
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register::<Token>("Token")
        .unwrap()
        .text("text", |t| Some(t.text.as_str()))
        .enumeration("pos", |t| Some(t.pos))
        .int("length", |t| Some(t.length));
    registry
        .register_dynamic("Gene")
        .unwrap()
        .attribute("text", AttrKind::Text)
        .attribute("symbol", AttrKind::Text);
    registry
        .register_dynamic("Protein")
        .unwrap()
        .attribute("text", AttrKind::Text);
    registry
        .register_dynamic("Disease")
        .unwrap()
        .attribute("text", AttrKind::Text)
        .attribute(
            "severity",
            AttrKind::Enum {
                variants: vec!["MILD".into(), "SEVERE".into()],
            },
        );
    registry.register_dynamic("Sentence").unwrap();
    registry.alias("Tok", "Token").unwrap();
    registry
}
