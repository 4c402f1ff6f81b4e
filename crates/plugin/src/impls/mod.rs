//! Bundled interceptor implementations.

mod call_logger;

pub use call_logger::CallLogger;
