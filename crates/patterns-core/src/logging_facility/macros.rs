//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use patterns_core::log_op_start;
/// log_op_start!("home");
/// log_op_start!("home", stack_depth = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use patterns_core::log_op_end;
/// log_op_end!("home", duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation that ended in an error
///
/// Recoverable kinds (see [`ExErrorKind::is_recoverable`]) are emitted at
/// WARN, everything else at ERROR. Either way exactly one `end_error` event
/// is emitted, carrying `err.kind`, `err.code` and `err.message`.
///
/// [`ExErrorKind::is_recoverable`]: crate::errors::ExErrorKind::is_recoverable
///
/// # Example
///
/// ```
/// # use patterns_core::{log_op_error, errors::PatternError};
/// let err = PatternError::PatternNotFound { name: "visitor".to_string() };
/// log_op_error!("find_pattern", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        if ex_err.kind().is_recoverable() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = $crate::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                err.message = ex_err.message(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = $crate::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                err.message = ex_err.message(),
                $($field)*
            );
        }
    }};
}
