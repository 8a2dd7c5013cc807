/// Configuration options for the interpreter driver.
///
/// # Example
///
/// ```
/// use tessera_core::interpreter::InterpreterOptions;
///
/// let options = InterpreterOptions {
///     max_steps: Some(10_000),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct InterpreterOptions {
    /// Maximum number of instructions executed per run (if Some).
    ///
    /// Set to `None` for no limit.
    ///
    /// Default: Some(1_000_000)
    pub max_steps: Option<usize>,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            max_steps: Some(1_000_000),
        }
    }
}
