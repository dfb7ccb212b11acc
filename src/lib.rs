/// Single account record and the checked balance changes it accepts.
/// State is modified by applying events produced by those checks.
pub mod account;

/// Typed requests decoded from the wire, before they reach the ledger.
pub mod command;

/// Ledger store interface, plus the "in memory" implementation guarded by a
/// single lock.
///
/// NOTE: the trait is the seam where a sharded or persistent store would
/// replace the in memory one; handlers only see [`store::SharedLedger`].
pub mod store;

/// HTTP routing, handlers and the service bootstrap around a ledger.
pub mod http;

pub mod config;
pub mod logging;
