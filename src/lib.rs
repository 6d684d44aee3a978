/// The fixed set of bill denominations, largest first.
pub mod denomination;

/// Bills of a single denomination, plus the errors shared by all
/// register operations.
pub mod bundle;

/// A till holding one bundle per denomination: deposits, withdrawals
/// and making change.
pub mod register;

/// Commands a session sends to the register, parsed from text tokens.
pub mod command;

/// Command processor interface, plus "in memory" implementation that
/// owns the session register.
pub mod processor;

/// Ideally, this module should exist in its own crate, as a way to
/// drive the register from a terminal. It lives here so the integration
/// tests can run whole sessions.
pub mod bin_utils;
