//! Object Type Registry
//!
//! Binds every registered [`ObjectKind`] to a dense type index, in
//! registration order. The index is the first component of the compact
//! per-cell encoding consumed by array-based observation formats.
//!
//! A registry is an explicit value: build it once at startup, then share it
//! by reference. [`ObjectRegistry::standard`] is the lazily-built registry of
//! every kind, read-only for the rest of the process.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{GridObject, ObjectKind};
use crate::error::{GridError, GridResult};

static STANDARD_REGISTRY: Lazy<ObjectRegistry> =
    Lazy::new(|| ObjectRegistry::with_kinds(ObjectKind::ALL));

/// `(type_index, state_index, color_index)` of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellEncoding {
    pub type_index: u8,
    pub state_index: u8,
    pub color_index: u8,
}

impl CellEncoding {
    #[inline]
    pub fn as_array(&self) -> [u8; 3] {
        [self.type_index, self.state_index, self.color_index]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    kinds: Vec<ObjectKind>,
    indices: HashMap<ObjectKind, usize>,
    names: HashMap<&'static str, ObjectKind>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kinds` in order; repeated kinds keep their first index.
    pub fn with_kinds(kinds: impl IntoIterator<Item = ObjectKind>) -> Self {
        let mut registry = Self::new();
        for kind in kinds {
            registry.register(kind);
        }
        log::debug!("object registry built with {} kinds", registry.len());
        registry
    }

    /// The registry of every object kind, built on first use.
    pub fn standard() -> &'static ObjectRegistry {
        &STANDARD_REGISTRY
    }

    /// Binds `kind` to the next free index and returns it. Registering an
    /// already bound kind is a no-op returning its existing index.
    pub fn register(&mut self, kind: ObjectKind) -> usize {
        if let Some(&index) = self.indices.get(&kind) {
            log::trace!("{} already registered at index {}", kind, index);
            return index;
        }

        let index = self.kinds.len();
        self.kinds.push(kind);
        self.indices.insert(kind, index);
        self.names.insert(kind.name(), kind);
        self.names.insert(kind.snake_name(), kind);
        index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Registered kinds, position = type index.
    pub fn kinds(&self) -> &[ObjectKind] {
        &self.kinds
    }

    pub fn is_registered(&self, kind: ObjectKind) -> bool {
        self.indices.contains_key(&kind)
    }

    #[inline]
    pub fn type_index(&self, kind: ObjectKind) -> Option<usize> {
        self.indices.get(&kind).copied()
    }

    #[inline]
    pub fn kind_at(&self, index: usize) -> Option<ObjectKind> {
        self.kinds.get(index).copied()
    }

    /// Lookup by CamelCase or snake_case name; unregistered kinds are not
    /// found.
    pub fn kind_by_name(&self, name: &str) -> Option<ObjectKind> {
        self.names.get(name).copied()
    }

    pub fn encode(&self, object: &GridObject) -> GridResult<CellEncoding> {
        let kind = object.kind();
        let type_index = self.type_index(kind).ok_or(GridError::Unregistered(kind))?;
        Ok(CellEncoding {
            type_index: type_index as u8,
            state_index: object.state_index(),
            color_index: object.color().index(),
        })
    }
}

// ========== Tests ==========
