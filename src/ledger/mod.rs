//! Fjall-based persistence for the operation log.
//!
//! Every successful computation — whether it arrived over HTTP or from the
//! CLI — is appended here as an [`OperationRecord`]. The log is append-only:
//! records are never updated or deleted, ids strictly increase in insertion
//! order, and each `append` is fsynced before it returns so a crash right
//! after a successful append cannot lose the record.
//!
//! ## Lifecycle
//!
//! ```rust,ignore
//! use mathbox::ledger::OpLogStore;
//!
//! let store = OpLogStore::open("data/oplog")?;
//! store.initialize()?; // idempotent, safe on every process start
//! let id = store.append(Operation::Power, "base=2,exponent=10".into(), "1024".into())?;
//! ```
//!
//! `initialize` performs checked creation of the `records` partition and
//! recovers the next id from the highest existing key, so repeated or
//! concurrent initialization is harmless. Appending before initialization
//! fails with [`LedgerError::NotInitialized`].

pub mod error;
pub mod store;

pub use error::{LedgerError, Result};
pub use store::{OpLogStore, OperationRecord};
