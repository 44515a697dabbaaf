//! Generation configuration.
//!
//! One value per generation run, threaded explicitly through emission and the synthesizers so independent runs
//! never share state.

/// Default channel capacity for generated synchronization fields.
pub const DEFAULT_CHAN_SIZE: usize = 100;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Capacity of every generated channel. Zero means rendezvous.
    pub chan_size: usize,
    /// Make result-less methods wait for a gate value before returning.
    pub blocking_return: bool,
    /// Qualify locally declared types (and the implemented traits) with this path prefix.
    pub alias: Option<String>,
    /// Wrap the generated items in `pub mod <module> { use super::*; ... }`.
    pub module: Option<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            chan_size: DEFAULT_CHAN_SIZE,
            blocking_return: false,
            alias: None,
            module: None,
        }
    }
}

impl GenerateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chan_size(mut self, chan_size: usize) -> Self {
        self.chan_size = chan_size;
        self
    }

    pub fn with_blocking_return(mut self, blocking_return: bool) -> Self {
        self.blocking_return = blocking_return;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }
}
