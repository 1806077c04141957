//! Errors raised by the wallet session and its platform seams.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is not a `0x`-prefixed hex address
    #[error("Invalid wallet id {0:?}: expected 0x followed by 1 to 64 hex digits")]
    InvalidWalletId(String),

    /// The platform storage rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// The user dismissed the connection request
    #[error("Wallet connection cancelled")]
    ConnectionCancelled,

    /// No wallet could be found on this platform
    #[error("No wallet available: {0}")]
    WalletUnavailable(String),

    /// The connector failed for a platform specific reason
    #[error("Wallet connector failed: {0}")]
    Connector(String),
}
