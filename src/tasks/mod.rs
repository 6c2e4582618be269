//! Background Tasks Module
//!
//! - TTL Cleanup: purges expired entries from in-process caches

mod cleanup;

pub use cleanup::spawn_cleanup_task;
