//! Values the demo assigns at runtime.

/// What the demo writes into its zero-initialized storage.
///
/// There is no file or command-line source for this; `Default` holds the
/// fixed literals and other values are only set programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Assigned to `globalVar`.
    pub global_value: i32,
    /// Assigned to `staticVar`.
    pub static_value: i32,
    /// Formatted into the message buffer, truncated to its capacity.
    pub message: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            global_value: 10,
            static_value: 20,
            message: "Hello BSS".to_string(),
        }
    }
}
