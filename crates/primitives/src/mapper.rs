//! Tuple-to-entity mapping
//!
//! A mapper turns a raw [`Tuple`] into an immutable domain entity. It
//! selects exactly the attribute set the entity declares, drops everything
//! else, and hands the selection to the entity's constructor.
//!
//! ## Contract
//!
//! - A declared attribute missing from the tuple fails with
//!   `MissingAttribute` before the constructor runs
//! - Undeclared attributes never reach the entity
//! - Hydration is all-or-nothing: a fully built entity or an error

use bucketdb_core::{StoreError, StoreResult, Tuple, Value};
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::debug;

/// A domain entity hydrated from one relation
pub trait Entity: Sized {
    /// Relation the entity is read from
    const RELATION: &'static str;

    /// The exact attribute set the mapper selects
    const ATTRIBUTES: &'static [&'static str];

    /// Build the entity from its selected attributes
    ///
    /// This is the only path from tuple data to an entity.
    fn from_attributes(attributes: Attributes) -> StoreResult<Self>;
}

/// The declared attributes selected out of one tuple
#[derive(Debug)]
pub struct Attributes {
    relation: &'static str,
    values: HashMap<&'static str, Value>,
}

impl Attributes {
    /// Select `declared` out of `tuple`
    ///
    /// Fails on the first declared attribute (in declaration order) that the
    /// tuple lacks.
    pub fn select(
        tuple: &Tuple,
        relation: &'static str,
        declared: &'static [&'static str],
    ) -> StoreResult<Self> {
        let mut values = HashMap::with_capacity(declared.len());
        for &attribute in declared {
            let value = tuple
                .get(attribute)
                .ok_or(StoreError::MissingAttribute { relation, attribute })?;
            values.insert(attribute, value.clone());
        }
        Ok(Self { relation, values })
    }

    /// Take a declared attribute as an owned string
    pub fn string(&mut self, attribute: &'static str) -> StoreResult<String> {
        match self.value(attribute)? {
            Value::String(s) => Ok(s),
            other => Err(StoreError::WrongType {
                relation: self.relation,
                attribute,
                expected: "String",
                actual: other.type_name(),
            }),
        }
    }

    /// Take a declared attribute as-is
    pub fn value(&mut self, attribute: &'static str) -> StoreResult<Value> {
        self.values.remove(attribute).ok_or(StoreError::MissingAttribute {
            relation: self.relation,
            attribute,
        })
    }
}

/// Hydrates tuples into entities of type `E`
pub struct Mapper<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Mapper<E> {
    /// Create a mapper
    pub const fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }

    /// Hydrate one tuple
    pub fn hydrate(&self, tuple: &Tuple) -> StoreResult<E> {
        let attributes = Attributes::select(tuple, E::RELATION, E::ATTRIBUTES)?;
        E::from_attributes(attributes).map_err(|e| {
            debug!(relation = E::RELATION, id = ?tuple.id(), error = %e, "hydration failed");
            e
        })
    }

    /// Hydrate every tuple, failing on the first that cannot be mapped
    pub fn hydrate_all<'a, I>(&self, tuples: I) -> StoreResult<Vec<E>>
    where
        I: IntoIterator<Item = &'a Tuple>,
    {
        tuples.into_iter().map(|t| self.hydrate(t)).collect()
    }
}

impl<E: Entity> Default for Mapper<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Mapper<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Mapper<E> {}

impl<E> std::fmt::Debug for Mapper<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("entity", &std::any::type_name::<E>())
            .finish()
    }
}
