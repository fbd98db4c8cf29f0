//! Error handling for the emoji transcoder.
//!
//! The crate degrades instead of failing: a missing table gives an empty
//! catalog, an undecodable asset gives no glyph, a failed store write keeps
//! the in-memory list. The types here exist for the `try_*` entry points and
//! for log lines on the degradation paths.
//!
//! - **Error Categories**: [`ErrorCategory`] groups failures by origin
//! - **Unified Error Type**: [`EmojiError`]
//! - **Result Type Alias**: [`EmojiResult<T>`] plus [`ResultExt`]
//!
//! | Category | Description |
//! |----------|-------------|
//! | Resource | Packaged tables and assets are missing or unreadable |
//! | Data | A packaged file exists but does not parse/decode |
//! | Storage | The key-value store rejected a read or write |

mod category;
mod emoji_error;
mod result;

pub use category::ErrorCategory;
pub use emoji_error::EmojiError;
pub use result::{EmojiResult, ResultExt};
