//! Table actor system: authority, configuration, and replication messages.

pub mod actor;
pub mod config;
pub mod messages;

pub use actor::{TableActor, TableHandle};
pub use config::TableConfig;
pub use messages::{Origin, TableEvent, TableMessage, TableResponse};
