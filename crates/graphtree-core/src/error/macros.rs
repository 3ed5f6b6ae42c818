//! Error macros for graphtree

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphTreeError::UsageError($msg.to_string()))
    };
}
