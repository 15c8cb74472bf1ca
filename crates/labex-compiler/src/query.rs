//! Staged compilation pipeline.
//!
//! `QueryBuilder` → [`QueryParsed`] → [`QueryAnalyzed`] → [`Program`].
//! Each stage keeps the source and accumulated diagnostics so callers can
//! render errors or dump intermediate results.

use std::ops::Deref;

use labex_core::{Program, TypeRegistry};
use rowan::TextRange;

use crate::Diagnostics;
use crate::analyze::{self, Analysis};
use crate::compile::{CompileError, Compiler};
use crate::diagnostics::DiagnosticKind;
use crate::parser::{CstPrinter, Parser, ParseResult, Root, lexer::lex};

const DEFAULT_PARSE_FUEL: u32 = 1_000_000;
const DEFAULT_PARSE_MAX_DEPTH: u32 = 512;

pub struct QueryConfig {
    pub parse_fuel: u32,
    pub parse_max_depth: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            parse_fuel: DEFAULT_PARSE_FUEL,
            parse_max_depth: DEFAULT_PARSE_MAX_DEPTH,
        }
    }
}

pub struct QueryBuilder<'q> {
    src: &'q str,
    config: QueryConfig,
}

impl<'q> QueryBuilder<'q> {
    pub fn new(src: &'q str) -> Self {
        Self {
            src,
            config: QueryConfig::default(),
        }
    }

    pub fn with_parse_fuel(mut self, fuel: u32) -> Self {
        self.config.parse_fuel = fuel;
        self
    }

    pub fn with_parse_recursion_limit(mut self, limit: u32) -> Self {
        self.config.parse_max_depth = limit;
        self
    }

    /// Fails only when parser fuel runs out; syntax errors are diagnostics.
    pub fn parse(self) -> crate::Result<QueryParsed<'q>> {
        let ParseResult {
            root,
            diagnostics,
            fuel_consumed,
        } = Parser::new(self.src, lex(self.src))
            .with_exec_fuel(Some(self.config.parse_fuel))
            .with_recursion_fuel(Some(self.config.parse_max_depth))
            .parse()?;

        Ok(QueryParsed {
            src: self.src,
            ast: root,
            diag: diagnostics,
            fuel_consumed,
        })
    }
}

#[derive(Debug)]
pub struct QueryParsed<'q> {
    src: &'q str,
    ast: Root,
    diag: Diagnostics,
    fuel_consumed: u32,
}

impl<'q> QueryParsed<'q> {
    /// Resolves names against `registry` and validates quantifier bounds.
    pub fn analyze(mut self, registry: &TypeRegistry) -> QueryAnalyzed<'q> {
        let analysis = analyze::analyze(&self.ast, registry, &mut self.diag);
        QueryAnalyzed {
            query_parsed: self,
            analysis,
        }
    }

    pub fn source(&self) -> &'q str {
        self.src
    }

    pub fn root(&self) -> &Root {
        &self.ast
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn is_valid(&self) -> bool {
        !self.diag.has_errors()
    }

    pub fn parse_fuel_consumed(&self) -> u32 {
        self.fuel_consumed
    }

    pub fn dump_cst(&self) -> String {
        CstPrinter::new(self.ast.as_cst()).dump()
    }

    pub fn dump_cst_full(&self) -> String {
        CstPrinter::new(self.ast.as_cst())
            .with_trivia(true)
            .with_spans(true)
            .dump()
    }

    pub fn dump_diagnostics(&self) -> String {
        self.diag.render_filtered(self.src)
    }

    /// Parse errors only; use [`QueryParsed::analyze`] to check names.
    pub fn into_checked(self) -> crate::Result<Self> {
        if self.diag.has_errors() {
            return Err(crate::Error::QueryParseError(self.diag));
        }
        Ok(self)
    }
}

pub struct QueryAnalyzed<'q> {
    query_parsed: QueryParsed<'q>,
    analysis: Analysis,
}

pub type Query<'q> = QueryAnalyzed<'q>;

impl QueryAnalyzed<'_> {
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Lowers to a program. Any diagnostic so far makes this fail.
    pub fn compile(self) -> crate::Result<Program> {
        let QueryAnalyzed {
            query_parsed,
            analysis,
        } = self;
        let QueryParsed { src, ast, diag, .. } = query_parsed;

        if diag.has_errors() {
            let has_parse_error = diag.iter().any(|d| !d.kind().is_semantic_error());
            return Err(if has_parse_error {
                crate::Error::QueryParseError(diag)
            } else {
                crate::Error::QueryAnalyzeError(diag)
            });
        }

        Compiler::compile(&ast, &analysis, src).map_err(|error| {
            let mut diag = diag;
            report_compile_error(&mut diag, &ast, &error);
            crate::Error::QueryAnalyzeError(diag)
        })
    }
}

fn report_compile_error(diag: &mut Diagnostics, ast: &Root, error: &CompileError) {
    let range = ast.as_cst().text_range();
    let range = if range.is_empty() {
        TextRange::empty(range.start())
    } else {
        range
    };
    diag.report(DiagnosticKind::PatternTooLarge, range)
        .message(error.to_string())
        .hint("reduce explicit repetition counts or nesting")
        .emit();
}

impl<'q> Deref for QueryAnalyzed<'q> {
    type Target = QueryParsed<'q>;

    fn deref(&self) -> &Self::Target {
        &self.query_parsed
    }
}
