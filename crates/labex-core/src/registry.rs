//! Label type registry: names, aliases, and typed attribute accessors.
//!
//! Every label type registers the attributes it exposes together with an
//! accessor that reads the attribute from a payload. The compiler resolves
//! type and attribute names against this registry once, so matching never
//! looks anything up by name.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::{AttrValue, LabelTypeId};

/// Enumerated attribute domain.
pub trait AttrEnum: Copy + Send + Sync + 'static {
    /// Constant names, indexed by ordinal.
    const VARIANTS: &'static [&'static str];

    fn ordinal(self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrKind {
    Text,
    Int,
    Enum { variants: Vec<String> },
}

impl AttrKind {
    pub fn enumeration<E: AttrEnum>() -> Self {
        AttrKind::Enum {
            variants: E::VARIANTS.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, AttrKind::Enum { .. })
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrKind::Text => f.write_str("text"),
            AttrKind::Int => f.write_str("int"),
            AttrKind::Enum { .. } => f.write_str("enum"),
        }
    }
}

type Accessor = Arc<dyn Fn(&dyn Any) -> Option<AttrValue> + Send + Sync>;

/// A named, typed attribute a label type exposes.
#[derive(Clone)]
pub struct Attribute {
    name: String,
    kind: AttrKind,
    accessor: Accessor,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &AttrKind {
        &self.kind
    }

    /// Reads the attribute. `None` when the payload has a different type or
    /// the attribute is absent.
    pub fn read(&self, payload: &dyn Any) -> Option<AttrValue> {
        (self.accessor)(payload)
    }

    /// Ordinal of an enum constant, if this is an enum attribute declaring it.
    pub fn enum_ordinal(&self, constant: &str) -> Option<usize> {
        match &self.kind {
            AttrKind::Enum { variants } => variants.iter().position(|v| v == constant),
            _ => None,
        }
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    id: LabelTypeId,
    name: String,
    attributes: IndexMap<String, Attribute>,
}

impl TypeDescriptor {
    pub fn id(&self) -> LabelTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    fn insert(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute.name.clone(), attribute);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label type `{0}`")]
pub struct UnknownType(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("label type `{0}` is already registered")]
    DuplicateType(String),

    #[error("alias `{0}` collides with an existing type or alias")]
    DuplicateAlias(String),

    #[error(transparent)]
    UnknownType(#[from] UnknownType),
}

/// Registered label types and their aliases.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
    names: HashMap<String, LabelTypeId>,
    aliases: IndexMap<String, LabelTypeId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type whose payload is a `T`.
    pub fn register<T: Any + Send + Sync>(
        &mut self,
        name: &str,
    ) -> Result<TypeBuilder<'_, T>, RegistryError> {
        let descriptor = self.insert_type(name)?;
        Ok(TypeBuilder {
            descriptor,
            _payload: PhantomData,
        })
    }

    /// Registers a type whose payload is an [`AttrMap`].
    pub fn register_dynamic(&mut self, name: &str) -> Result<DynamicTypeBuilder<'_>, RegistryError> {
        let descriptor = self.insert_type(name)?;
        Ok(DynamicTypeBuilder { descriptor })
    }

    fn insert_type(&mut self, name: &str) -> Result<&mut TypeDescriptor, RegistryError> {
        if self.names.contains_key(name) {
            return Err(RegistryError::DuplicateType(name.to_owned()));
        }
        let id = LabelTypeId::new(self.types.len() as u32);
        self.names.insert(name.to_owned(), id);
        self.types.push(TypeDescriptor {
            id,
            name: name.to_owned(),
            attributes: IndexMap::new(),
        });
        Ok(&mut self.types[id.index()])
    }

    /// Makes `alias` resolve to the same type as `target`.
    ///
    /// `target` may itself be an alias.
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<LabelTypeId, RegistryError> {
        if self.names.contains_key(alias) {
            return Err(RegistryError::DuplicateAlias(alias.to_owned()));
        }
        let id = self.resolve(target)?.id();
        self.names.insert(alias.to_owned(), id);
        self.aliases.insert(alias.to_owned(), id);
        Ok(id)
    }

    pub fn resolve(&self, name: &str) -> Result<&TypeDescriptor, UnknownType> {
        self.names
            .get(name)
            .map(|id| &self.types[id.index()])
            .ok_or_else(|| UnknownType(name.to_owned()))
    }

    pub fn id_of(&self, name: &str) -> Option<LabelTypeId> {
        self.names.get(name).copied()
    }

    pub fn get(&self, id: LabelTypeId) -> Option<&TypeDescriptor> {
        self.types.get(id.index())
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// `(alias, canonical type name)` pairs in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, id)| (alias.as_str(), self.types[id.index()].name()))
    }

    /// Every resolvable name: canonical names and aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }
}

/// Declares attributes for a statically typed payload.
pub struct TypeBuilder<'r, T> {
    descriptor: &'r mut TypeDescriptor,
    _payload: PhantomData<fn(&T)>,
}

impl<T: Any + Send + Sync> TypeBuilder<'_, T> {
    pub fn id(&self) -> LabelTypeId {
        self.descriptor.id
    }

    pub fn text<F>(self, name: &str, read: F) -> Self
    where
        F: Fn(&T) -> Option<&str> + Send + Sync + 'static,
    {
        self.accessor(name, AttrKind::Text, move |payload: &T| {
            read(payload).map(|s| AttrValue::Text(s.to_owned()))
        })
    }

    pub fn int<F>(self, name: &str, read: F) -> Self
    where
        F: Fn(&T) -> Option<i64> + Send + Sync + 'static,
    {
        self.accessor(name, AttrKind::Int, move |payload: &T| {
            read(payload).map(AttrValue::Int)
        })
    }

    pub fn enumeration<E, F>(self, name: &str, read: F) -> Self
    where
        E: AttrEnum,
        F: Fn(&T) -> Option<E> + Send + Sync + 'static,
    {
        self.accessor(name, AttrKind::enumeration::<E>(), move |payload: &T| {
            read(payload).map(|value| {
                let ordinal = value.ordinal();
                AttrValue::Enum {
                    ordinal,
                    name: E::VARIANTS.get(ordinal).copied().unwrap_or("?").to_owned(),
                }
            })
        })
    }

    fn accessor<F>(self, name: &str, kind: AttrKind, read: F) -> Self
    where
        F: Fn(&T) -> Option<AttrValue> + Send + Sync + 'static,
    {
        let accessor: Accessor =
            Arc::new(move |payload: &dyn Any| payload.downcast_ref::<T>().and_then(&read));
        self.descriptor.insert(Attribute {
            name: name.to_owned(),
            kind,
            accessor,
        });
        self
    }
}

/// Attribute bag payload for types declared at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap(IndexMap<String, AttrValue>);

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Declares attributes for an [`AttrMap`] payload.
pub struct DynamicTypeBuilder<'r> {
    descriptor: &'r mut TypeDescriptor,
}

impl DynamicTypeBuilder<'_> {
    pub fn id(&self) -> LabelTypeId {
        self.descriptor.id
    }

    /// Declares an attribute read from the map by name.
    ///
    /// Text stored under an enum attribute is mapped onto the declared
    /// constant of the same name.
    pub fn attribute(self, name: &str, kind: AttrKind) -> Self {
        let key = name.to_owned();
        let variants = match &kind {
            AttrKind::Enum { variants } => Some(variants.clone()),
            _ => None,
        };
        let accessor: Accessor = Arc::new(move |payload: &dyn Any| {
            let value = payload.downcast_ref::<AttrMap>()?.get(&key)?;
            match (&variants, value) {
                (Some(variants), AttrValue::Text(text)) => {
                    let ordinal = variants.iter().position(|v| v == text)?;
                    Some(AttrValue::Enum {
                        ordinal,
                        name: text.clone(),
                    })
                }
                _ => Some(value.clone()),
            }
        });
        self.descriptor.insert(Attribute {
            name: name.to_owned(),
            kind,
            accessor,
        });
        self
    }
}
