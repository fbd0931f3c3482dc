//! The process-wide calculator registry.
//!
//! The registry is assembled through an explicit build step: bootstrap code
//! registers every calculator on a `RegistryBuilder`, then `build` freezes
//! the table into an immutable `CalculatorRegistry`. All calculation traffic
//! happens after the freeze, so lookups are plain reads with no locking and
//! no import-order dependency.

use crate::contract::Calculator;
use crate::error::{CalcError, CalcResult};
use crate::inputs::CalculatorInputs;
use fincalc_types::{CalculatorDescriptor, Outputs};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Accumulates calculators during bootstrap.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, Arc<dyn Calculator>>,
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Registers a calculator under its own id.
    ///
    /// Duplicate ids are rejected rather than silently overwritten; two
    /// calculators claiming the same id is a bootstrap bug.
    pub fn register(&mut self, calculator: Arc<dyn Calculator>) -> CalcResult<&mut Self> {
        let id = calculator.id().to_string();
        if self.entries.contains_key(&id) {
            return Err(CalcError::DuplicateCalculator { id });
        }
        debug!(calculator = %id, "registered calculator");
        self.entries.insert(id, calculator);
        Ok(self)
    }

    /// Freezes the table. The registry is read-only from here on.
    #[must_use]
    pub fn build(self) -> CalculatorRegistry {
        info!(calculators = self.entries.len(), "calculator registry built");
        CalculatorRegistry { entries: self.entries }
    }
}

/// Immutable id → calculator table; O(1) lookup for the UI layer.
pub struct CalculatorRegistry {
    entries: HashMap<String, Arc<dyn Calculator>>,
}

impl CalculatorRegistry {
    /// Looks up a calculator by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Calculator> {
        self.entries.get(id).map(|c| c.as_ref())
    }

    /// Looks up a calculator and clones its shared handle, for callers that
    /// dispatch work across threads.
    #[must_use]
    pub fn get_shared(&self, id: &str) -> Option<Arc<dyn Calculator>> {
        self.entries.get(id).cloned()
    }

    /// Descriptors of every registered calculator, sorted by id so catalog
    /// views are stable.
    #[must_use]
    pub fn list(&self) -> Vec<CalculatorDescriptor> {
        let mut descriptors: Vec<_> = self.entries.values().map(|c| c.descriptor()).collect();
        descriptors.sort_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dispatches one calculation by id.
    pub fn calculate(&self, id: &str, inputs: &CalculatorInputs) -> CalcResult<Outputs> {
        match self.get(id) {
            Some(calculator) => {
                debug!(calculator = %id, "dispatching calculation");
                calculator.calculate(inputs)
            }
            None => Err(CalcError::UnknownCalculator { id: id.to_string() }),
        }
    }
}
