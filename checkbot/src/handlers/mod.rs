//! Handlers of the checkbot chain.

mod logging;
mod session;

pub use logging::LoggingHandler;
pub use session::SessionHandler;
