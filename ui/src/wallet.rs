//! Wallet identity and the platform seam used to obtain one.
use std::fmt;
use std::sync::Arc;

use crate::Error;

/// Environment variable read by [EnvConnector].
pub const WALLET_ID_ENV: &str = "SPOTNET_WALLET_ID";

const MAX_HEX_DIGITS: usize = 64;

/// A Starknet style account address, `0x` followed by hex digits, kept lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletId(String);

impl WalletId {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| Error::InvalidWalletId(raw.to_string()))?;

        if digits.is_empty()
            || digits.len() > MAX_HEX_DIGITS
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidWalletId(raw.to_string()));
        }

        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for display, see [shorten].
    pub fn short(&self) -> String {
        shorten(&self.0)
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<WalletId> for String {
    fn from(id: WalletId) -> Self {
        id.0
    }
}

/// First four and last four characters joined by `...`. Ids of eight
/// characters or fewer are returned as is.
pub fn shorten(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 8 {
        return id.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

pub trait WalletConnector: Send + Sync {
    fn connect(&self) -> Result<WalletId, Error>;
}

// Context wrapper so any connector can be shared between components
#[derive(Clone)]
pub struct ConnectorProvider {
    inner: Arc<dyn WalletConnector>,
}

impl ConnectorProvider {
    pub fn new<C: WalletConnector + 'static>(connector: C) -> Self {
        Self {
            inner: Arc::new(connector),
        }
    }

    pub fn connect(&self) -> Result<WalletId, Error> {
        self.inner.connect()
    }
}

/// Connects to the wallet named by `SPOTNET_WALLET_ID`.
#[derive(Clone, Copy, Default)]
pub struct EnvConnector;

impl WalletConnector for EnvConnector {
    fn connect(&self) -> Result<WalletId, Error> {
        match std::env::var(WALLET_ID_ENV) {
            Ok(raw) => WalletId::parse(&raw),
            Err(std::env::VarError::NotPresent) => {
                Err(Error::WalletUnavailable(format!("{WALLET_ID_ENV} is not set")))
            }
            Err(err) => Err(Error::Connector(err.to_string())),
        }
    }
}
