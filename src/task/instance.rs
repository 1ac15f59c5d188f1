use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::foundation::error::{TaskError, TaskResult};
use crate::task::palette::ColorAssignment;
use crate::task::symbols::{Symbol, SymbolSet};

/// One fully specified insertion task.
///
/// Immutable once built: every rendered frame is a pure function of this value and a frame index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TaskInstanceDef")]
pub struct TaskInstance {
    initial: Vec<Symbol>,
    inserted: Symbol,
    insertion_index: usize,
    colors: ColorAssignment,
}

impl TaskInstance {
    /// Assemble an instance from explicit parts.
    ///
    /// `insertion_index` is 1-based: the inserted symbol's position in the final sequence, so it
    /// ranges over `1..=initial.len() + 1`.
    pub fn new(
        initial: Vec<Symbol>,
        inserted: Symbol,
        insertion_index: usize,
        colors: ColorAssignment,
    ) -> TaskResult<Self> {
        let unique: BTreeSet<&Symbol> = initial.iter().collect();
        if unique.len() != initial.len() {
            return Err(TaskError::invalid_config(
                "initial sequence must not repeat symbols",
            ));
        }
        if unique.contains(&inserted) {
            return Err(TaskError::invalid_config(format!(
                "inserted symbol {inserted} already appears in the sequence"
            )));
        }
        if insertion_index == 0 || insertion_index > initial.len() + 1 {
            return Err(TaskError::invalid_config(format!(
                "insertion index {insertion_index} outside 1..={}",
                initial.len() + 1
            )));
        }
        if let Some(missing) = initial
            .iter()
            .chain(std::iter::once(&inserted))
            .find(|s| colors.color_of(s).is_none())
        {
            return Err(TaskError::invalid_config(format!(
                "symbol {missing} has no color"
            )));
        }
        Ok(Self {
            initial,
            inserted,
            insertion_index,
            colors,
        })
    }

    /// The sequence before insertion.
    pub fn initial(&self) -> &[Symbol] {
        &self.initial
    }

    /// The symbol being inserted.
    pub fn inserted(&self) -> &Symbol {
        &self.inserted
    }

    /// 1-based position of the inserted symbol in the final sequence.
    pub fn insertion_index(&self) -> usize {
        self.insertion_index
    }

    /// 0-based slot of the inserted symbol in the final layout.
    pub fn insertion_slot(&self) -> usize {
        self.insertion_index - 1
    }

    /// Per-symbol colors, fixed for every frame.
    pub fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    /// Length of the initial sequence.
    pub fn len(&self) -> usize {
        self.initial.len()
    }

    /// Return `true` when the initial sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty()
    }

    /// `initial[..slot] + [inserted] + initial[slot..]`.
    pub fn final_sequence(&self) -> Vec<Symbol> {
        let slot = self.insertion_slot();
        let mut out = Vec::with_capacity(self.initial.len() + 1);
        out.extend_from_slice(&self.initial[..slot]);
        out.push(self.inserted.clone());
        out.extend_from_slice(&self.initial[slot..]);
        out
    }

    /// Final-layout slot of the symbol at `initial_slot` in the initial sequence.
    pub fn final_slot_of(&self, initial_slot: usize) -> usize {
        if initial_slot < self.insertion_slot() {
            initial_slot
        } else {
            initial_slot + 1
        }
    }
}

/// Unchecked wire form of [`TaskInstance`]; deserialization goes through [`TaskInstance::new`].
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskInstanceDef {
    initial: Vec<Symbol>,
    inserted: Symbol,
    insertion_index: usize,
    colors: ColorAssignment,
}

impl TryFrom<TaskInstanceDef> for TaskInstance {
    type Error = TaskError;

    fn try_from(def: TaskInstanceDef) -> TaskResult<Self> {
        Self::new(def.initial, def.inserted, def.insertion_index, def.colors)
    }
}

/// Samples [`TaskInstance`]s from a symbol pool.
///
/// Draw order is fixed: length, sequence, inserted symbol, index, colors. The same seed therefore
/// reproduces the same instance.
#[derive(Clone, Debug)]
pub struct TaskBuilder {
    pool: Vec<Symbol>,
    min_length: usize,
    max_length: usize,
}

impl TaskBuilder {
    /// Create a builder over `pool` drawing sequence lengths from `min_length..=max_length`.
    pub fn new(pool: Vec<Symbol>, min_length: usize, max_length: usize) -> TaskResult<Self> {
        if min_length == 0 {
            return Err(TaskError::invalid_config("min_length must be >= 1"));
        }
        if min_length > max_length {
            return Err(TaskError::invalid_config(format!(
                "min_length ({min_length}) must be <= max_length ({max_length})"
            )));
        }
        let unique: BTreeSet<&Symbol> = pool.iter().collect();
        if unique.len() != pool.len() {
            return Err(TaskError::invalid_config("symbol pool must not repeat symbols"));
        }
        Ok(Self {
            pool,
            min_length,
            max_length,
        })
    }

    /// Builder over one of the built-in sets.
    pub fn for_set(set: SymbolSet, min_length: usize, max_length: usize) -> TaskResult<Self> {
        Self::new(set.symbols(), min_length, max_length)
    }

    /// Sample one instance.
    #[tracing::instrument(skip(self, rng), fields(pool = self.pool.len()))]
    pub fn build(&self, rng: &mut dyn RngCore) -> TaskResult<TaskInstance> {
        let n = rng.gen_range(self.min_length..=self.max_length);
        if self.pool.len() < n + 1 {
            return Err(TaskError::InsufficientSymbols {
                requested: n + 1,
                available: self.pool.len(),
            });
        }

        let mut shuffled = self.pool.clone();
        shuffled.shuffle(rng);
        let rest = shuffled.split_off(n);
        let initial = shuffled;

        let inserted = rest
            .choose(rng)
            .cloned()
            .ok_or_else(|| TaskError::invalid_config("no symbol left to insert"))?;
        let insertion_index = rng.gen_range(1..=n + 1);

        let mut task_symbols = initial.clone();
        task_symbols.push(inserted.clone());
        let colors = ColorAssignment::draw(&task_symbols, rng)?;

        tracing::debug!(len = n, %inserted, insertion_index, "built task instance");
        TaskInstance::new(initial, inserted, insertion_index, colors)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/instance.rs"]
mod tests;
