mod file;
mod manager;
mod memory;

pub use self::file::FileSessionStore;
pub use self::manager::{DynSessionManager, SessionEvent, SessionManager};
pub use self::memory::MemorySessionStore;
