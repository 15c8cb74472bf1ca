//! Syntax kinds for label expressions.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `LabexLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    /// `(?<name>` opens a named group
    #[token("(?<")]
    NamedGroupOpen,

    #[token("(?=")]
    LookaheadOpen,

    #[token("(?!")]
    NegLookaheadOpen,

    #[token(")")]
    ParenClose,

    /// `[^Type]` containment test on the preceding item
    #[token("[^")]
    ContainsOpen,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token("|")]
    Pipe,

    /// No text other than whitespace between neighbours
    #[token("->")]
    Arrow,

    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token("=")]
    Equals,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    StringLiteral,

    #[regex(r#"r"(?:[^"\\]|\\.)*""#)]
    RegexLiteral,

    /// Case-insensitive string
    #[regex(r#"i"(?:[^"\\]|\\.)*""#)]
    InsensitiveLiteral,

    /// `e<NAME>` enum constant
    #[regex(r"e<[A-Za-z_][A-Za-z0-9_.]*>")]
    EnumLiteral,

    /// Optionally signed decimal integer
    #[regex(r"[-+]?[0-9]+")]
    Int,

    /// Type, attribute or capture name. Dots allow namespaced type names.
    #[regex(r"[A-Za-z_][A-Za-z0-9_.]*")]
    Id,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Root,
    Alt,
    Seq,
    TypeMatch,
    Predicates,
    Predicate,
    Capture,
    Group,
    NamedGroup,
    Pin,
    Lookahead,
    Quantifier,
    Bounds,
    Contains,
    TextGap,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            StringLiteral | RegexLiteral | InsensitiveLiteral | EnumLiteral | Int
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabexLang {}

impl Language for LabexLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<LabexLang>;
pub type SyntaxToken = rowan::SyntaxToken<LabexLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                // SAFETY: bounded by `__LAST` above
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that start an atom.
    pub const ATOM_FIRST: TokenSet = TokenSet::new(&[
        Id,
        ParenOpen,
        NamedGroupOpen,
        LookaheadOpen,
        NegLookaheadOpen,
        BracketOpen,
    ]);

    pub const QUANTIFIERS: TokenSet = TokenSet::new(&[Question, Star, Plus, BraceOpen]);

    /// Binding modifiers directly after a quantifier: lazy `?`, possessive `+`.
    pub const MODIFIERS: TokenSet = TokenSet::new(&[Question, Plus]);

    pub const LITERALS: TokenSet = TokenSet::new(&[
        StringLiteral,
        RegexLiteral,
        InsensitiveLiteral,
        EnumLiteral,
        Int,
    ]);

    pub const LOOKAHEAD_OPENERS: TokenSet = TokenSet::new(&[LookaheadOpen, NegLookaheadOpen]);

    /// Closers that end a nested body.
    pub const CLOSERS: TokenSet = TokenSet::new(&[ParenClose, BracketClose]);

    /// Where a malformed predicate list gives up.
    pub const PREDICATE_RECOVERY: TokenSet =
        TokenSet::new(&[Comma, AngleClose, ParenClose, BracketClose]);

    /// Where a malformed literal gives up: also at the next alternative.
    pub const LITERAL_RECOVERY: TokenSet = PREDICATE_RECOVERY.union(TokenSet::single(Pipe));
}
