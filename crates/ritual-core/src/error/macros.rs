//! Error macros for ritual

/// Macro for returning invalid argument errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RitualError::invalid_argument(
            $context, $value,
        ))
    };
}

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RitualError::UsageError($msg.to_string()))
    };
}

/// Macro for returning graph text parse errors
#[macro_export]
macro_rules! bail_input {
    ($($arg:tt)*) => {
        return Err($crate::error::RitualError::invalid_input(format!($($arg)*)))
    };
}
