//! Dispatch configuration.

/// How the equality dispatcher chains custom implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqualityChaining {
    /// Try the left operand's custom equality, then the right operand's with
    /// the arguments reversed, then the host default.
    ///
    /// Lets a wrapper match its wrapped value from either side. The combined
    /// relation is not guaranteed to be transitive.
    #[default]
    Bidirectional,

    /// Only the left operand's custom equality is consulted before the host
    /// default.
    ReceiverOnly,
}

/// Dispatch registry configuration.
#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    /// Chaining policy of the equality dispatcher.
    pub chaining: EqualityChaining,

    /// Emit a `trace` event each time a dispatcher falls through to the host default.
    pub trace_fallthrough: bool,
}

impl DispatchConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the equality chaining policy.
    pub fn chaining(mut self, chaining: EqualityChaining) -> Self {
        self.chaining = chaining;
        self
    }

    /// Enable or disable fallthrough tracing.
    pub fn trace_fallthrough(mut self, enabled: bool) -> Self {
        self.trace_fallthrough = enabled;
        self
    }
}
