//! Note store, persistence mirror, projection, and session state.

mod confirm;
mod mirror;
mod projection;
mod session;
mod store;

pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use mirror::{JsonFileMirror, MemoryMirror, Mirror, MirrorError};
pub use projection::project;
pub use session::{Draft, Session};
pub use store::{NoteStore, StoreError, StoreResult, UpdateFields};
