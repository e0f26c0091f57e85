#![deny(missing_docs)]

//! # Definitions Table
//!
//! Caller-owned accumulator of component schemas. A structured type claims its
//! component name before its body is computed (a pending slot), so any
//! re-entrant encounter during the same pass can emit a `$ref` immediately.
//!
//! Thread one table through every resolution that feeds one document. Tables
//! built independently are combined with [`Definitions::merge`].

use crate::descriptor::TypeKey;
use crate::error::{AppError, AppResult};
use crate::schema::Schema;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Pending,
    Resolved(Schema),
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    owner: TypeKey,
    slot: Slot,
}

/// Outcome of claiming a component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The name was free and is now pending for the caller to fill.
    Fresh,
    /// The same type already holds the name (pending or resolved).
    Existing,
}

/// How [`Definitions::merge`] treats a name held by different owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Fail with `NameCollision`.
    #[default]
    RejectCollisions,
    /// The incoming definition replaces the existing one.
    LastWriterWins,
}

/// Component name -> schema, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    entries: IndexMap<String, Entry>,
}

impl Definitions {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `name` for `owner`.
    ///
    /// Fails with `NameCollision` when a different type already holds the name.
    pub fn claim(&mut self, name: &str, owner: &TypeKey) -> AppResult<Claim> {
        if let Some(entry) = self.entries.get(name) {
            if &entry.owner != owner {
                return Err(AppError::NameCollision {
                    name: name.to_string(),
                    existing: entry.owner.to_string(),
                    incoming: owner.to_string(),
                });
            }
            return Ok(Claim::Existing);
        }

        debug!(component = name, %owner, "registered component");
        self.entries.insert(
            name.to_string(),
            Entry {
                owner: owner.clone(),
                slot: Slot::Pending,
            },
        );
        Ok(Claim::Fresh)
    }

    /// Stores the body of a claimed component.
    pub fn fill(&mut self, name: &str, schema: Schema) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.slot = Slot::Resolved(schema);
        }
    }

    /// The resolved schema for `name`; `None` when absent or still pending.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        match self.entries.get(name).map(|e| &e.slot) {
            Some(Slot::Resolved(schema)) => Some(schema),
            _ => None,
        }
    }

    /// Whether `name` is claimed (pending or resolved).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether `name` is claimed but its body is not yet stored.
    pub fn is_pending(&self, name: &str) -> bool {
        matches!(self.entries.get(name).map(|e| &e.slot), Some(Slot::Pending))
    }

    /// Number of claimed names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved components in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.entries.iter().filter_map(|(name, entry)| match &entry.slot {
            Slot::Resolved(schema) => Some((name.as_str(), schema)),
            Slot::Pending => None,
        })
    }

    /// Consumes the table, keeping resolved components.
    pub fn into_schemas(self) -> IndexMap<String, Schema> {
        self.entries
            .into_iter()
            .filter_map(|(name, entry)| match entry.slot {
                Slot::Resolved(schema) => Some((name, schema)),
                Slot::Pending => None,
            })
            .collect()
    }

    /// Renders `{"schemas": {...}}` for placement under `components`.
    pub fn to_components(&self) -> Value {
        let schemas: Map<String, Value> = self
            .iter()
            .map(|(name, schema)| (name.to_string(), schema.to_value()))
            .collect();
        json!({ "schemas": schemas })
    }

    /// Folds `other` into this table.
    ///
    /// The same owner under the same name keeps the existing entry. A
    /// different owner is handled per `policy`.
    pub fn merge(&mut self, other: Definitions, policy: MergePolicy) -> AppResult<()> {
        if policy == MergePolicy::RejectCollisions {
            for (name, incoming) in &other.entries {
                if let Some(existing) = self.entries.get(name) {
                    if existing.owner != incoming.owner {
                        return Err(AppError::NameCollision {
                            name: name.clone(),
                            existing: existing.owner.to_string(),
                            incoming: incoming.owner.to_string(),
                        });
                    }
                }
            }
        }

        for (name, incoming) in other.entries {
            match self.entries.get_mut(&name) {
                None => {
                    self.entries.insert(name, incoming);
                }
                Some(existing) if existing.owner == incoming.owner => {
                    if existing.slot == Slot::Pending {
                        existing.slot = incoming.slot;
                    }
                }
                Some(existing) => {
                    warn!(
                        component = %name,
                        replaced = %existing.owner,
                        by = %incoming.owner,
                        "last writer wins on component name"
                    );
                    *existing = incoming;
                }
            }
        }
        Ok(())
    }

    /// Current size, for [`Definitions::rollback`].
    pub(crate) fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Drops every entry claimed after `checkpoint`.
    pub(crate) fn rollback(&mut self, checkpoint: usize) {
        if self.entries.len() > checkpoint {
            debug!(
                dropped = self.entries.len() - checkpoint,
                "rolled back failed resolution"
            );
            self.entries.truncate(checkpoint);
        }
    }
}
