use std::collections::HashMap;

use crate::actor_framework::Entity;

/// Whether an add created a new record or merged into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Merged,
}

/// Keyed collection of records, listed in insertion order.
///
/// At most one record exists per key. Adding a record whose key is already
/// present merges it into the stored record via [`Entity::merge`]; records are
/// never removed.
#[derive(Debug, Clone)]
pub struct Inventory<T: Entity> {
    index: HashMap<T::Id, usize>,
    records: Vec<T>,
}

impl<T: Entity> Default for Inventory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Inventory<T> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, item: T) -> AddOutcome {
        match self.index.get(item.id()) {
            Some(&slot) => {
                self.records[slot].merge(item);
                AddOutcome::Merged
            }
            None => {
                self.index.insert(item.id().clone(), self.records.len());
                self.records.push(item);
                AddOutcome::Inserted
            }
        }
    }

    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn total_value(&self) -> f64 {
        self.records.iter().fold(0.0, |acc, record| acc + record.value())
    }

    #[cfg(test)]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
