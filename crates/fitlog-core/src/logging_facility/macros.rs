//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! Callers must depend on `fitlog-core-types` for the event name constants.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use fitlog_core::log_op_start;
/// log_op_start!("add_workout");
/// log_op_start!("add_workout", collection = "workouts");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fitlog_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fitlog_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use fitlog_core::log_op_end;
/// log_op_end!("add_workout", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fitlog_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = fitlog_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `FlError`.
///
/// # Example
///
/// ```
/// # use fitlog_core::{log_op_error, errors::FitlogError};
/// let err = FitlogError::invalid_field("mood", "must be between 1 and 10");
/// log_op_error!("add_mood_entry", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::FlError;
        let fl_err: FlError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fitlog_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?fl_err.kind(),
            err.code = fl_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::FlError;
        let fl_err: FlError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = fitlog_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?fl_err.kind(),
            err.code = fl_err.code(),
            $($field)*
        );
    }};
}
