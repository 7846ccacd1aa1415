//! Per-control effect collection.

use lumen_core::{LumenError, Result, TickTime};
use smallvec::SmallVec;
use tracing::debug;

use crate::effect::Effect;

struct Entry {
    name: String,
    effect: Box<dyn Effect>,
}

/// The named, ordered set of effects a control owns.
///
/// Effects are applied in insertion order, once per tick. Inserting under
/// an existing name replaces that effect; callers use one name per driven
/// property, since two effects writing the same property would silently
/// last-write-win within a tick.
#[derive(Default)]
pub struct EffectSet {
    effects: SmallVec<[Entry; 2]>,
}

impl EffectSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect under `name`, replacing any effect already there.
    pub fn insert(&mut self, name: impl Into<String>, effect: Box<dyn Effect>) {
        let name = name.into();
        if let Some(entry) = self.effects.iter_mut().find(|e| e.name == name) {
            debug!(name = %name, "replacing effect");
            entry.effect = effect;
        } else {
            self.effects.push(Entry { name, effect });
        }
    }

    /// Apply every effect once, in insertion order.
    pub fn apply_all(&mut self, tick: &TickTime) {
        for entry in &mut self.effects {
            entry.effect.apply(tick);
        }
    }

    /// Stop the named effect in place.
    pub fn stop(&mut self, name: &str) -> Result<()> {
        match self.effects.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.effect.stop();
                Ok(())
            }
            None => Err(LumenError::NotFound(format!("effect '{name}'"))),
        }
    }

    /// Remove the named effect. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.name != name);
        self.effects.len() != before
    }

    /// Drop every stopped effect.
    pub fn retain_active(&mut self) {
        self.effects.retain(|e| e.effect.is_active());
    }

    /// Whether an effect is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name == name)
    }

    /// Number of effects, stopped ones included.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the set holds no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Registered names, in application order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|e| e.name.as_str())
    }
}
