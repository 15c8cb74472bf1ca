//! Materializer transforms effect logs into captures.

use labex_core::{CaptureId, Label, Program, Span};

use super::effect::RuntimeEffect;

/// Materializer transforms effect logs into output values.
pub trait Materializer<'s> {
    type Output;

    fn materialize(&self, effects: &[RuntimeEffect<'s>]) -> Self::Output;
}

/// One visible binding.
#[derive(Debug, Clone, Copy)]
pub struct Capture<'s> {
    pub span: Span,
    /// Set when the binding came from `name:Type`.
    pub label: Option<&'s Label>,
}

/// Capture bindings of a match, indexed by capture name.
///
/// Every name the program declares has an entry; names not bound on the
/// successful path stay empty.
#[derive(Debug, Clone)]
pub struct Captures<'s> {
    names: &'s [String],
    bound: Vec<Option<Capture<'s>>>,
}

impl<'s> Captures<'s> {
    /// No bindings for any of `program`'s names.
    pub fn empty(program: &'s Program) -> Self {
        Self {
            names: program.captures(),
            bound: vec![None; program.captures().len()],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Capture<'s>> {
        let index = self.names.iter().position(|n| n == name)?;
        self.bound[index].as_ref()
    }

    pub fn span(&self, name: &str) -> Option<Span> {
        self.get(name).map(|capture| capture.span)
    }

    pub fn label(&self, name: &str) -> Option<&'s Label> {
        self.get(name).and_then(|capture| capture.label)
    }

    /// Bound captures in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'s str, &Capture<'s>)> + '_ {
        let names = self.names;
        names
            .iter()
            .zip(&self.bound)
            .filter_map(|(name, capture)| Some((name.as_str(), capture.as_ref()?)))
    }

    /// Number of bound captures.
    pub fn len(&self) -> usize {
        self.bound.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bind(&mut self, id: CaptureId, capture: Capture<'s>) {
        if let Some(slot) = self.bound.get_mut(id.index()) {
            *slot = Some(capture);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bound.fill(None);
    }
}

/// Materializer that binds each capture name to its last effect.
pub struct CaptureMaterializer<'s> {
    program: &'s Program,
}

impl<'s> CaptureMaterializer<'s> {
    pub fn new(program: &'s Program) -> Self {
        Self { program }
    }
}

impl<'s> Materializer<'s> for CaptureMaterializer<'s> {
    type Output = Captures<'s>;

    fn materialize(&self, effects: &[RuntimeEffect<'s>]) -> Captures<'s> {
        let mut captures = Captures::empty(self.program);
        // Later bindings of a repeated name overwrite earlier ones
        for effect in effects {
            let capture = match *effect {
                RuntimeEffect::Label { label, .. } => Capture {
                    span: label.span(),
                    label: Some(label),
                },
                RuntimeEffect::Span { span, .. } => Capture { span, label: None },
            };
            captures.bind(effect.capture(), capture);
        }
        captures
    }
}
