//! Error macros for pathweave

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathError::invalid_value($context, $value))
    };
}

/// Macro for failing on a node reference key that is not in the graph
#[macro_export]
macro_rules! bail_not_found {
    ($key:expr) => {
        return Err($crate::error::PathError::node_not_found($key))
    };
}
