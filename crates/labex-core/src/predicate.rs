//! Compiled attribute predicates.
//!
//! A [`Predicate`] pairs a resolved [`Attribute`] with one or more
//! comparators joined by `|`. Evaluation reads the attribute once and tries
//! comparators in order, stopping at the first that accepts. An attribute
//! that is absent from the payload fails the predicate; it is never an error.

use std::any::Any;
use std::fmt;

use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::{Anchored, Input};

use crate::{AttrValue, Attribute};

/// Heap bound for a compiled DFA and for the determinizer building it.
const DFA_SIZE_LIMIT: usize = 8 << 20;

/// Whole-value regex matcher compiled to a DFA.
#[derive(Clone)]
pub struct RegexMatcher {
    pattern: String,
    dfa: dense::DFA<Vec<u32>>,
}

impl RegexMatcher {
    /// Compiles `pattern` so that it must match the entire value.
    ///
    /// Fails when the pattern does not fit in [`DFA_SIZE_LIMIT`].
    pub fn new(pattern: &str) -> Result<Self, String> {
        let anchored = format!("(?:{pattern})$");
        let config = dense::Config::new()
            .start_kind(StartKind::Anchored)
            .dfa_size_limit(Some(DFA_SIZE_LIMIT))
            .determinize_size_limit(Some(DFA_SIZE_LIMIT));
        let dfa = dense::Builder::new()
            .configure(config)
            .build(&anchored)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            pattern: pattern.to_owned(),
            dfa,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_full_match(&self, text: &str) -> bool {
        let input = Input::new(text).anchored(Anchored::Yes);
        matches!(self.dfa.try_search_fwd(&input), Ok(Some(_)))
    }
}

impl fmt::Debug for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegexMatcher").field(&self.pattern).finish()
    }
}

#[derive(Debug, Clone)]
pub enum Comparator {
    /// Textual representation equals the literal.
    Exact(String),
    /// Textual representation fully matches the regex.
    Regex(RegexMatcher),
    /// Lowercased textual representation equals the (lowercased) literal.
    CaseInsensitive(String),
    /// Enum ordinal identity.
    Enum { ordinal: usize, name: String },
    /// Integer representation equals the literal.
    Int(i64),
}

impl Comparator {
    pub fn case_insensitive(literal: &str) -> Self {
        Comparator::CaseInsensitive(literal.to_lowercase())
    }

    pub fn accepts(&self, value: &AttrValue) -> bool {
        match self {
            Comparator::Exact(expected) => value.text() == expected.as_str(),
            Comparator::Regex(regex) => regex.is_full_match(&value.text()),
            Comparator::CaseInsensitive(expected) => value.text().to_lowercase() == *expected,
            Comparator::Enum { ordinal, .. } => value.enum_ordinal() == Some(*ordinal),
            Comparator::Int(expected) => value.as_int() == Some(*expected),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Exact(s) => write!(f, "{s:?}"),
            Comparator::Regex(r) => write!(f, "r{:?}", r.pattern()),
            Comparator::CaseInsensitive(s) => write!(f, "i{s:?}"),
            Comparator::Enum { name, .. } => write!(f, "e<{name}>"),
            Comparator::Int(n) => write!(f, "{n}"),
        }
    }
}

/// `attribute = c1 | c2 | ...`
#[derive(Debug, Clone)]
pub struct Predicate {
    attribute: Attribute,
    comparators: Vec<Comparator>,
}

impl Predicate {
    pub fn new(attribute: Attribute, comparators: Vec<Comparator>) -> Self {
        debug_assert!(!comparators.is_empty(), "predicate without comparators");
        Self {
            attribute,
            comparators,
        }
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    pub fn matches(&self, payload: &dyn Any) -> bool {
        let Some(value) = self.attribute.read(payload) else {
            return false;
        };
        self.comparators.iter().any(|c| c.accepts(&value))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.attribute.name())?;
        for (i, comparator) in self.comparators.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{comparator}")?;
        }
        Ok(())
    }
}

/// Conjunction of predicates, as attached to one type match.
pub fn all_match(predicates: &[Predicate], payload: &dyn Any) -> bool {
    predicates.iter().all(|p| p.matches(payload))
}
