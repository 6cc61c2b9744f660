// Application layer - the in-memory session the CLI drives.
// The domain core underneath is pure and stateless; this is the only place
// that owns mutable state, and it lives no longer than the process.

pub mod error;
pub mod session;

pub use error::*;
pub use session::*;
