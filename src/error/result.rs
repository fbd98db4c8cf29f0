//! Result type alias for emoji operations.

use super::emoji_error::EmojiError;

/// Type alias for Results using [`EmojiError`].
pub type EmojiResult<T> = Result<T, EmojiError>;

/// Extension trait for the degrade-instead-of-fail paths.
pub trait ResultExt<T> {
    /// Return the value, or log the error at warn level and return `T::default()`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use atomicx_emoji::error::ResultExt;
    ///
    /// let records = read_table(&path).log_and_default("load_catalog");
    /// ```
    fn log_and_default(self, operation: &str) -> T
    where
        T: Default;
}

impl<T> ResultExt<T> for EmojiResult<T> {
    fn log_and_default(self, operation: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    operation,
                    code = err.error_code(),
                    category = err.category().as_str(),
                    "{}",
                    err
                );
                T::default()
            }
        }
    }
}
