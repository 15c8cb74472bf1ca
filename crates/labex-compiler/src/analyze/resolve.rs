//! Type and predicate resolution against a [`TypeRegistry`].
//!
//! Every well-formed type match is turned into a [`LabelTest`]: its name is
//! resolved through the alias registry, each `attr=literal|...` predicate is
//! bound to the type's attribute accessor, and literals are checked against
//! the attribute kind. Regex literals are parsed up front so syntax errors
//! point inside the pattern.

use indexmap::IndexMap;
use regex_syntax::ast;
use rowan::{TextRange, TextSize};

use labex_core::{
    AttrKind, Attribute, Comparator, LabelTest, Predicate, RegexMatcher, TypeDescriptor,
    TypeRegistry,
};

use crate::analyze::literal::{self, Literal};
use crate::analyze::visitor::Visitor;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::ast::{Predicate as PredicateNode, TypeMatch};
use crate::parser::{Root, SyntaxToken};

pub type LabelTests = IndexMap<TypeMatch, LabelTest>;

pub fn resolve_types(ast: &Root, registry: &TypeRegistry, diag: &mut Diagnostics) -> LabelTests {
    let mut resolver = TypeResolver {
        registry,
        diag,
        tests: IndexMap::new(),
    };
    resolver.visit(ast);
    resolver.tests
}

struct TypeResolver<'r, 'd> {
    registry: &'r TypeRegistry,
    diag: &'d mut Diagnostics,
    tests: LabelTests,
}

impl Visitor for TypeResolver<'_, '_> {
    fn visit_type_match(&mut self, node: &TypeMatch) {
        if let Some(test) = self.resolve(node) {
            self.tests.insert(node.clone(), test);
        }
    }
}

impl TypeResolver<'_, '_> {
    fn resolve(&mut self, node: &TypeMatch) -> Option<LabelTest> {
        let name = node.name()?;
        let descriptor = match self.registry.resolve(name.text()) {
            Ok(descriptor) => descriptor,
            Err(_) => {
                self.diag
                    .report(DiagnosticKind::UnknownType, name.text_range())
                    .message(name.text())
                    .emit();
                return None;
            }
        };

        let mut predicates = Vec::new();
        let mut valid = true;
        for predicate in node.predicates() {
            match self.resolve_predicate(descriptor, &predicate) {
                Some(resolved) => predicates.push(resolved),
                None => valid = false,
            }
        }
        if !valid {
            return None;
        }

        Some(LabelTest {
            ty: descriptor.id(),
            type_name: descriptor.name().to_owned(),
            predicates,
        })
    }

    fn resolve_predicate(
        &mut self,
        descriptor: &TypeDescriptor,
        node: &PredicateNode,
    ) -> Option<Predicate> {
        let attr_token = node.attribute()?;
        let Some(attribute) = descriptor.attribute(attr_token.text()) else {
            self.diag
                .report(DiagnosticKind::UnknownAttribute, attr_token.text_range())
                .message(format!(
                    "`{}` has no attribute `{}`",
                    descriptor.name(),
                    attr_token.text()
                ))
                .emit();
            return None;
        };

        let mut comparators = Vec::new();
        let mut valid = true;
        for token in node.literals() {
            match self.comparator(attribute, &token) {
                Some(comparator) => comparators.push(comparator),
                None => valid = false,
            }
        }
        // An empty list means the parser already reported a missing literal
        if !valid || comparators.is_empty() {
            return None;
        }

        Some(Predicate::new(attribute.clone(), comparators))
    }

    fn comparator(&mut self, attribute: &Attribute, token: &SyntaxToken) -> Option<Comparator> {
        let literal = literal::decode(token, self.diag)?;
        let range = token.text_range();
        let what = literal.describe();

        match literal {
            Literal::Text(text) => Some(Comparator::Exact(text)),
            Literal::Insensitive(text) => Some(Comparator::case_insensitive(&text)),
            Literal::Regex { pattern, range } => self.regex(&pattern, range),
            Literal::Enum(constant) => {
                if !attribute.kind().is_enum() {
                    self.incompatible(attribute, what, range);
                    return None;
                }
                match attribute.enum_ordinal(&constant) {
                    Some(ordinal) => Some(Comparator::Enum {
                        ordinal,
                        name: constant,
                    }),
                    None => {
                        let mut report = self
                            .diag
                            .report(DiagnosticKind::UnknownEnumConstant, range)
                            .message(format!(
                                "`{}` has no constant `{constant}`",
                                attribute.name()
                            ));
                        if let AttrKind::Enum { variants } = attribute.kind() {
                            report =
                                report.hint(format!("expected one of: {}", variants.join(", ")));
                        }
                        report.emit();
                        None
                    }
                }
            }
            Literal::Int(value) => {
                if attribute.kind().is_enum() {
                    self.incompatible(attribute, what, range);
                    return None;
                }
                Some(Comparator::Int(value))
            }
        }
    }

    fn incompatible(&mut self, attribute: &Attribute, what: &str, range: TextRange) {
        self.diag
            .report(DiagnosticKind::IncompatibleLiteral, range)
            .message(format!(
                "{what} literal cannot be compared with {} attribute `{}`",
                attribute.kind(),
                attribute.name()
            ))
            .emit();
    }

    fn regex(&mut self, pattern: &str, range: TextRange) -> Option<Comparator> {
        // Octal off so `\1` is rejected as a backreference
        let parsed = ast::parse::ParserBuilder::new()
            .octal(false)
            .build()
            .parse(pattern);
        if let Err(e) = parsed {
            self.diag
                .report(DiagnosticKind::InvalidRegex, map_regex_span(e.span(), range))
                .message(e.kind().to_string())
                .emit();
            return None;
        }

        match RegexMatcher::new(pattern) {
            Ok(matcher) => Some(Comparator::Regex(matcher)),
            Err(message) => {
                self.diag
                    .report(DiagnosticKind::InvalidRegex, range)
                    .message(message)
                    .emit();
                None
            }
        }
    }
}

/// Maps a span within the regex pattern to a span in the expression source.
fn map_regex_span(span: &ast::Span, pattern_range: TextRange) -> TextRange {
    let start = pattern_range.start() + TextSize::from(span.start.offset as u32);
    let end = pattern_range.start() + TextSize::from(span.end.offset as u32);
    TextRange::new(start, end.min(pattern_range.end()))
}
