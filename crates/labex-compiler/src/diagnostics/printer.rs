//! Renders diagnostics as annotated source snippets.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::message::DiagnosticMessage;

pub struct DiagnosticsPrinter<'s> {
    diagnostics: Vec<DiagnosticMessage>,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'s> DiagnosticsPrinter<'s> {
    pub(crate) fn new(diagnostics: Vec<DiagnosticMessage>, source: &'s str) -> Self {
        Self {
            diagnostics,
            source,
            path: None,
            colored: false,
        }
    }

    /// File name shown in the snippet header.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Writes every diagnostic, separated by blank lines.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = match self.colored {
            true => Renderer::styled(),
            false => Renderer::plain(),
        };

        let mut first = true;
        for diag in &self.diagnostics {
            if !first {
                w.write_char('\n')?;
            }
            first = false;
            write!(w, "{}", renderer.render(&self.report(diag)))?;
        }
        Ok(())
    }

    /// The error group, plus a help group when a fix is attached.
    fn report<'d>(&'d self, diag: &'d DiagnosticMessage) -> Vec<Group<'d>> {
        let primary = self.visible(diag.range);

        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(primary.clone()).label(&diag.message));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in &diag.related {
            let span = self.visible(related.range);
            snippet = snippet.annotation(AnnotationKind::Context.span(span).label(&related.message));
        }

        let mut groups = vec![Level::ERROR.primary_title(&diag.message).element(snippet)];
        if let Some(fix) = &diag.fix {
            let patched = Snippet::source(self.source)
                .line_start(1)
                .patch(Patch::new(primary, &fix.replacement));
            groups.push(Level::HELP.secondary_title(&fix.description).element(patched));
        }
        groups
    }

    /// Byte range to underline; an empty range covers the next byte, if any.
    fn visible(&self, range: TextRange) -> Range<usize> {
        let start = usize::from(range.start());
        let end = usize::from(range.end());
        if start < end {
            start..end
        } else {
            start..(start + 1).min(self.source.len())
        }
    }
}
