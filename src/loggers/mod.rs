//! Logger wrappers: swapping, serializing and dispatching to a consumer thread

pub mod async_logger;
mod consumer;
pub mod nonblocking;
pub mod serializing;
pub mod swap;

pub use async_logger::AsyncLogger;
pub use nonblocking::{LifecycleState, NonblockingLogger};
pub use serializing::{SerializingLogger, SyncWriter};
pub use swap::SwapLogger;
