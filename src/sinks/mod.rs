//! Terminal sinks that encode records onto a writer

pub mod json;
pub mod logfmt;
pub mod prefix;

pub use json::JsonLogger;
pub use logfmt::LogfmtLogger;
pub use prefix::PrefixLogger;
