//! Thin adapter between the leaf computations and a processor-graph host.
//!
//! The host discovers a processor through its [`ProcessorInfo`], drives its
//! [`FloatProperty`] values from whatever UI it has, and calls
//! [`Processor::process`] whenever new input arrives. Port wiring and
//! scheduling stay on the host side.

use crate::error::{Error, Result};

/// Maturity of a processor, as shown by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeState {
    Broken,
    Experimental,
    Stable,
}

/// Static description used by the host to register and list a processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessorInfo {
    /// Globally unique identifier, reverse-DNS style.
    pub class_identifier: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Grouping shown in the host's processor list.
    pub category: &'static str,
    pub code_state: CodeState,
    /// Free-form search tags; empty when there are none.
    pub tags: &'static [&'static str],
}

/// A processing strategy the host can plug into its graph.
///
/// `process` receives the current input (if any upstream data exists) and
/// returns the data to publish on the output, or `None` to publish nothing.
pub trait Processor {
    type Data;

    fn info(&self) -> &ProcessorInfo;

    fn process(&self, input: Option<&Self::Data>) -> Option<Self::Data>;
}

/// A bounded scalar parameter.
///
/// Values written through [`FloatProperty::set`] are clamped into
/// `[min, max]`, matching how the host's sliders behave.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatProperty {
    identifier: String,
    display_name: String,
    value: f32,
    min: f32,
    max: f32,
}

impl FloatProperty {
    /// Creates a property; `initial` is clamped into range.
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        initial: f32,
        min: f32,
        max: f32,
    ) -> Self {
        debug_assert!(min <= max, "property range is inverted");
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            value: initial.clamp(min, max),
            min,
            max,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Sets the value, clamping it into range.
    ///
    /// Returns the value actually stored. NaN and infinities are rejected and
    /// leave the property unchanged.
    pub fn set(&mut self, value: f32) -> Result<f32> {
        if !value.is_finite() {
            return Err(Error::NonFiniteProperty {
                identifier: self.identifier.clone(),
                value,
            });
        }

        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            log::warn!(
                "Property '{}' value {} outside [{}, {}], clamped to {}",
                self.identifier,
                value,
                self.min,
                self.max,
                clamped
            );
        }
        self.value = clamped;
        Ok(clamped)
    }
}
