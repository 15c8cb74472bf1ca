use std::fmt::{self, Write};

use rowan::{NodeOrToken, TextRange};

use super::cst::{SyntaxElement, SyntaxNode};

/// Indented CST dump: one node or token per line, two spaces per level.
pub struct CstPrinter<'a> {
    root: &'a SyntaxNode,
    trivia: bool,
    spans: bool,
}

impl<'a> CstPrinter<'a> {
    pub fn new(root: &'a SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    /// Appends ` [start..end]` to every line.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        self.write_element(&NodeOrToken::Node(self.root.clone()), 0, w)
    }

    fn write_element(&self, element: &SyntaxElement, depth: usize, w: &mut impl Write) -> fmt::Result {
        match element {
            NodeOrToken::Node(node) => {
                self.write_indent(depth, w)?;
                write!(w, "{:?}", node.kind())?;
                self.write_span(node.text_range(), w)?;
                w.write_char('\n')?;
                node.children_with_tokens()
                    .try_for_each(|child| self.write_element(&child, depth + 1, w))
            }
            NodeOrToken::Token(token) if self.trivia || !token.kind().is_trivia() => {
                self.write_indent(depth, w)?;
                write!(w, "{:?}", token.kind())?;
                self.write_span(token.text_range(), w)?;
                writeln!(w, " {:?}", token.text())
            }
            NodeOrToken::Token(_) => Ok(()),
        }
    }

    fn write_indent(&self, depth: usize, w: &mut impl Write) -> fmt::Result {
        (0..depth).try_for_each(|_| w.write_str("  "))
    }

    fn write_span(&self, range: TextRange, w: &mut impl Write) -> fmt::Result {
        if !self.spans {
            return Ok(());
        }
        write!(w, " [{}..{}]", u32::from(range.start()), u32::from(range.end()))
    }
}
