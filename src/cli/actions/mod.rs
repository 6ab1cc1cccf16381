//! Actions for fixing comment style issues.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (byte-range replacement)
//!     ↓
//! execute (file modification)
//! ```
//!
//! ## Actions
//!
//! - [`ReplaceComment`]: Rewrite comment groups as starred blocks (fix)

mod operation;
mod replace_comment;
mod traits;

pub use operation::{FileApplyResult, Operation};
pub use replace_comment::ReplaceComment;
pub use traits::{Action, ActionStats};
