use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unclosed delimiters swallow the rest of the expression
    UnclosedGroup,
    UnclosedLookahead,
    UnclosedPin,
    UnclosedPredicates,
    UnclosedBounds,

    // Something required is missing
    ExpectedExpression,
    ExpectedTypeName,
    ExpectedCaptureName,
    ExpectedAttributeName,
    ExpectedLiteral,
    ExpectedBound,

    // Something is where it doesn't belong
    EmptyPin,
    DanglingArrow,
    ContainsWithoutTarget,
    QuantifierWithoutTarget,
    InvalidEscape,
    UnexpectedToken,

    // Quantifier bounds
    InvalidQuantifierBounds,
    BoundTooLarge,

    // Resolution against the type registry
    UnknownType,
    UnknownAttribute,
    UnknownEnumConstant,
    IncompatibleLiteral,
    IntegerOutOfRange,
    InvalidRegex,

    // Whole-expression limits
    PatternTooLarge,
}

impl DiagnosticKind {
    /// Whether this kind suppresses `other` when spans overlap.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Unclosed delimiters. Suppressed by root-cause errors at the same position.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedGroup
                | Self::UnclosedLookahead
                | Self::UnclosedPin
                | Self::UnclosedPredicates
                | Self::UnclosedBounds
        )
    }

    /// The user omitted something required.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression
                | Self::ExpectedTypeName
                | Self::ExpectedCaptureName
                | Self::ExpectedAttributeName
                | Self::ExpectedLiteral
                | Self::ExpectedBound
        )
    }

    /// Resolution errors only make sense on a well-formed expression.
    pub fn is_semantic_error(&self) -> bool {
        *self >= Self::InvalidQuantifierBounds
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::ExpectedLiteral => Some(r#"e.g. `"text"`, `r"re.*"`, `i"Text"`, `e<NAME>` or `42`"#),
            Self::ContainsWithoutTarget => Some("e.g. `[A B][^T]`"),
            Self::DanglingArrow => Some("e.g. `A -> B`"),
            Self::BoundTooLarge => Some("use `*` or `+` for unbounded repetition"),
            _ => None,
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnclosedLookahead => "missing closing `)` for lookahead",
            Self::UnclosedPin => "missing closing `]`",
            Self::UnclosedPredicates => "missing closing `>`",
            Self::UnclosedBounds => "missing closing `}`",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedTypeName => "expected label type name",
            Self::ExpectedCaptureName => "expected capture name",
            Self::ExpectedAttributeName => "expected attribute name",
            Self::ExpectedLiteral => "expected literal",
            Self::ExpectedBound => "expected repetition count",

            Self::EmptyPin => "empty `[]` is not allowed",
            Self::DanglingArrow => "`->` must be followed by an expression",
            Self::ContainsWithoutTarget => "`[^...]` has nothing to look inside",
            Self::QuantifierWithoutTarget => "quantifier has nothing to repeat",
            Self::InvalidEscape => "invalid escape sequence",
            Self::UnexpectedToken => "unexpected token",

            Self::InvalidQuantifierBounds => "invalid repetition bounds",
            Self::BoundTooLarge => "repetition count too large",

            Self::UnknownType => "unknown label type",
            Self::UnknownAttribute => "unknown attribute",
            Self::UnknownEnumConstant => "unknown enum constant",
            Self::IncompatibleLiteral => "literal does not fit attribute",
            Self::IntegerOutOfRange => "integer literal out of range",
            Self::InvalidRegex => "invalid regular expression",

            Self::PatternTooLarge => "expression too large",
        }
    }

    /// Template for custom messages. `{}` is replaced by caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownType => "`{}` is not a registered label type".to_string(),
            Self::UnknownAttribute => "{}".to_string(),
            Self::UnknownEnumConstant => "{}".to_string(),
            Self::IncompatibleLiteral => "{}".to_string(),

            Self::UnclosedGroup
            | Self::UnclosedLookahead
            | Self::UnclosedPin
            | Self::UnclosedPredicates
            | Self::UnclosedBounds => format!("{}; {{}}", self.fallback_message()),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// `None` renders the fallback message, `Some(detail)` fills the template.
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Underlined in output.
    pub(crate) range: TextRange,
    /// Errors inside another error's suppression range may be hidden.
    /// Defaults to `range`; the parser widens it to the enclosing delimiter.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
            hints: kind.default_hint().map(str::to_owned).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
