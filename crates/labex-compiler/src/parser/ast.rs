//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(Alt, Alt);
ast_node!(Seq, Seq);
ast_node!(TypeMatch, TypeMatch);
ast_node!(Predicate, Predicate);
ast_node!(Capture, Capture);
ast_node!(Group, Group);
ast_node!(NamedGroup, NamedGroup);
ast_node!(Pin, Pin);
ast_node!(Lookahead, Lookahead);
ast_node!(Quantifier, Quantifier);
ast_node!(Bounds, Bounds);
ast_node!(Contains, Contains);
ast_node!(TextGap, TextGap);

/// Any expression that can appear in a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Alt(Alt),
    Seq(Seq),
    TypeMatch(TypeMatch),
    Capture(Capture),
    Group(Group),
    NamedGroup(NamedGroup),
    Pin(Pin),
    Lookahead(Lookahead),
    Quantifier(Quantifier),
    Contains(Contains),
    TextGap(TextGap),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Alt => Alt::cast(node).map(Expr::Alt),
            SyntaxKind::Seq => Seq::cast(node).map(Expr::Seq),
            SyntaxKind::TypeMatch => TypeMatch::cast(node).map(Expr::TypeMatch),
            SyntaxKind::Capture => Capture::cast(node).map(Expr::Capture),
            SyntaxKind::Group => Group::cast(node).map(Expr::Group),
            SyntaxKind::NamedGroup => NamedGroup::cast(node).map(Expr::NamedGroup),
            SyntaxKind::Pin => Pin::cast(node).map(Expr::Pin),
            SyntaxKind::Lookahead => Lookahead::cast(node).map(Expr::Lookahead),
            SyntaxKind::Quantifier => Quantifier::cast(node).map(Expr::Quantifier),
            SyntaxKind::Contains => Contains::cast(node).map(Expr::Contains),
            SyntaxKind::TextGap => TextGap::cast(node).map(Expr::TextGap),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Alt(n) => n.as_cst(),
            Expr::Seq(n) => n.as_cst(),
            Expr::TypeMatch(n) => n.as_cst(),
            Expr::Capture(n) => n.as_cst(),
            Expr::Group(n) => n.as_cst(),
            Expr::NamedGroup(n) => n.as_cst(),
            Expr::Pin(n) => n.as_cst(),
            Expr::Lookahead(n) => n.as_cst(),
            Expr::Quantifier(n) => n.as_cst(),
            Expr::Contains(n) => n.as_cst(),
            Expr::TextGap(n) => n.as_cst(),
        }
    }
}

fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

impl Root {
    /// `None` only for an empty tree, which the parser never builds.
    pub fn body(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Alt {
    pub fn branches(&self) -> impl Iterator<Item = Seq> + '_ {
        self.0.children().filter_map(Seq::cast)
    }
}

impl Seq {
    pub fn items(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl TypeMatch {
    pub fn name(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::Id)
    }

    pub fn predicates(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::Predicates)
            .flat_map(|n| n.children().filter_map(Predicate::cast))
    }
}

impl Predicate {
    pub fn attribute(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::Id)
    }

    /// Literal alternatives in source order.
    pub fn literals(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind().is_literal())
    }
}

impl Capture {
    pub fn name(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::Id)
    }

    pub fn type_match(&self) -> Option<TypeMatch> {
        self.0.children().find_map(TypeMatch::cast)
    }
}

impl Group {
    pub fn body(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl NamedGroup {
    pub fn name(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::Id)
    }

    pub fn body(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Pin {
    pub fn body(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Lookahead {
    pub fn is_negative(&self) -> bool {
        find_token(&self.0, SyntaxKind::NegLookaheadOpen).is_some()
    }

    pub fn body(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

/// Repetition operator of a quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantifierOp {
    /// `?`
    Optional,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `{m}`, `{m,}`, `{m,n}`
    Bounded,
}

/// How a quantifier competes with what follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Binding {
    #[default]
    Greedy,
    Lazy,
    Possessive,
}

impl Quantifier {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.0.children().find_map(Bounds::cast)
    }

    fn operator_tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::Question | SyntaxKind::Star | SyntaxKind::Plus
                )
            })
    }

    /// The repetition operator token, absent for `{...}` forms.
    pub fn operator(&self) -> Option<SyntaxToken> {
        if self.bounds().is_some() {
            return None;
        }
        self.operator_tokens().next()
    }

    /// The `?`/`+` binding modifier token, if written.
    pub fn modifier(&self) -> Option<SyntaxToken> {
        let skip = usize::from(self.bounds().is_none());
        self.operator_tokens().nth(skip)
    }

    pub fn op(&self) -> Option<QuantifierOp> {
        if self.bounds().is_some() {
            return Some(QuantifierOp::Bounded);
        }
        match self.operator()?.kind() {
            SyntaxKind::Question => Some(QuantifierOp::Optional),
            SyntaxKind::Star => Some(QuantifierOp::Star),
            SyntaxKind::Plus => Some(QuantifierOp::Plus),
            _ => None,
        }
    }

    pub fn binding(&self) -> Binding {
        match self.modifier().map(|t| t.kind()) {
            Some(SyntaxKind::Question) => Binding::Lazy,
            Some(SyntaxKind::Plus) => Binding::Possessive,
            _ => Binding::Greedy,
        }
    }
}

impl Bounds {
    pub fn min(&self) -> Option<SyntaxToken> {
        self.ints_around_comma().0
    }

    /// Upper bound token. `{m}` has none but is not open-ended; see [`Bounds::is_open`].
    pub fn max(&self) -> Option<SyntaxToken> {
        self.ints_around_comma().1
    }

    /// `{m,}` form.
    pub fn is_open(&self) -> bool {
        self.has_comma() && self.max().is_none()
    }

    pub fn has_comma(&self) -> bool {
        find_token(&self.0, SyntaxKind::Comma).is_some()
    }

    fn ints_around_comma(&self) -> (Option<SyntaxToken>, Option<SyntaxToken>) {
        let mut before = None;
        let mut after = None;
        let mut seen_comma = false;
        for token in self.0.children_with_tokens().filter_map(|it| it.into_token()) {
            match token.kind() {
                SyntaxKind::Comma => seen_comma = true,
                SyntaxKind::Int if !seen_comma => before = Some(token),
                SyntaxKind::Int => after = Some(token),
                _ => {}
            }
        }
        (before, after)
    }
}

impl Contains {
    /// The item whose span is searched.
    pub fn inner(&self) -> Option<Expr> {
        self.0
            .children_with_tokens()
            .take_while(|it| it.kind() != SyntaxKind::ContainsOpen)
            .filter_map(|it| it.into_node())
            .find_map(Expr::cast)
    }

    /// The type searched for inside `[^...]`.
    pub fn target(&self) -> Option<TypeMatch> {
        self.0
            .children_with_tokens()
            .skip_while(|it| it.kind() != SyntaxKind::ContainsOpen)
            .filter_map(|it| it.into_node())
            .find_map(TypeMatch::cast)
    }
}

impl TextGap {
    pub fn arrow(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::Arrow)
    }
}
