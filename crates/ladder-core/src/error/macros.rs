//! Error macros for ladder

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::LadderError::invalid_value($context, $value))
    };
}

/// Macro for creating graph format errors
#[macro_export]
macro_rules! bail_graph {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::LadderError::graph_format($line, format!($($arg)+)))
    };
}
