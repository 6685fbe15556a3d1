//! Dependency injection infrastructure.
//!
//! Services are plain structs whose fields are resolved from the root
//! [`Context`](crate::context::Context) at tool execution time:
//!
//! ```ignore
//! use crate::context::Context;
//! use crate::di::FromContext;
//!
//! #[derive(FromContext, Clone)]
//! pub struct CommandExecutor {
//!     root: ProjectRoot,     // FromRef<Context> generated by #[derive(Context)]
//!     config: Arc<Config>,
//! }
//!
//! let executor = CommandExecutor::from_ref(&ctx);
//! ```

/// Extract a value from a reference to `T`.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any `Clone` type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

pub use di_macros::{Context, FromContext};
