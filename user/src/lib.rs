pub mod error;
pub mod session;
pub mod storage;

pub use error::{Result as UserResult, UserError};
pub use session::{Session, SESSION_KEY};
pub use storage::{MemoryStorage, RedbStorage, StorageArea};

// Re-export identity types so callers only need one import path.
pub use authz::types::{Identity, Role, UserId};
