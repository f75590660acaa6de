//! # ERC20 SDK Error
//!
//! This crate provides the unified error type for the ERC20 multi-chain SDK.
//! Every crate in the workspace returns [`Erc20Error`]; callers can match on
//! the enum variants directly or on the stable numeric [`ErrorCode`] when the
//! error crosses an FFI or serialization boundary.
//!
//! ## Example
//!
//! ```
//! use erc20sdk_error::{Erc20Error, ErrorCode, Result};
//!
//! fn pick_chain(chain_type: u32) -> Result<()> {
//!     if chain_type > 3 {
//!         return Err(Erc20Error::NotSupportedChainType(chain_type));
//!     }
//!     Ok(())
//! }
//!
//! let err = pick_chain(99).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::NotSupportedChainType);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use thiserror::Error;

/// The error type for all ERC20 SDK operations.
///
/// Failures raised by the underlying EVM library (RPC transport, ABI
/// encoding, address parsing) are carried through with their message intact
/// rather than reclassified. Nothing at this layer retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Erc20Error {
    // ============ Configuration / dispatch errors ============
    /// The chain-type constant does not map to a supported chain
    #[error("chain type {0} is not supported")]
    NotSupportedChainType(u32),

    /// The transaction request could not be assembled
    #[error("invalid transaction: {0}")]
    InvalidTx(String),

    /// A read or write was attempted before a provider was configured
    #[error("no provider configured, call set_provider first")]
    MissingProvider,

    /// A contract call was attempted before a contract address was configured
    #[error("no contract address configured, call set_contract_address first")]
    MissingContractAddress,

    /// An address string could not be parsed into an EVM address
    #[error("invalid address {0}")]
    InvalidAddress(String),

    /// The provider URL is not a valid URL
    #[error("invalid provider URL: {0}")]
    InvalidProviderUrl(String),

    // ============ Decoding errors ============
    /// The remote call returned data that does not decode as the expected
    /// type. The raw response is embedded as hex for diagnosis.
    #[error("return data does not match {expected} (raw response: 0x{raw})")]
    TypeAssert {
        /// Signature of the call whose return type was expected
        expected: String,
        /// Hex dump of the undecodable response body
        raw: String,
    },

    /// ABI parsing or argument encoding failed
    #[error("ABI error: {0}")]
    Abi(String),

    // ============ Pass-through errors ============
    /// The RPC request failed inside the provider
    #[error("RPC request failed: {0}")]
    Rpc(String),

    /// The remote endpoint answered with a non-success HTTP response
    #[error("remote responded with HTTP {http_code}: {body}")]
    Response {
        /// HTTP status code returned by the endpoint
        http_code: u16,
        /// Raw origin body of the failing response
        body: String,
    },

    /// Unknown/other error
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type using [`Erc20Error`]
pub type Result<T> = std::result::Result<T, Erc20Error>;

/// Stable numeric error codes for programmatic handling.
///
/// The values for unsupported chains, invalid transactions and failed type
/// assertions are part of the SDK's public contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    /// Unknown error
    Unknown = 0,
    /// Chain type not supported
    NotSupportedChainType = 10001,
    /// Invalid transaction
    InvalidTx = 10002,
    /// Provider not configured
    MissingProvider = 10003,
    /// Contract address not configured
    MissingContractAddress = 10004,
    /// Invalid address string
    InvalidAddress = 10005,
    /// Invalid provider URL
    InvalidProviderUrl = 10006,
    /// Return data failed the type assertion
    TypeAssert = 20001,
    /// ABI parse/encode error
    Abi = 20002,
    /// RPC failure
    Rpc = 30001,
    /// Non-success HTTP response
    Response = 30002,
}

impl Erc20Error {
    /// Returns the stable error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Erc20Error::NotSupportedChainType(_) => ErrorCode::NotSupportedChainType,
            Erc20Error::InvalidTx(_) => ErrorCode::InvalidTx,
            Erc20Error::MissingProvider => ErrorCode::MissingProvider,
            Erc20Error::MissingContractAddress => ErrorCode::MissingContractAddress,
            Erc20Error::InvalidAddress(_) => ErrorCode::InvalidAddress,
            Erc20Error::InvalidProviderUrl(_) => ErrorCode::InvalidProviderUrl,
            Erc20Error::TypeAssert { .. } => ErrorCode::TypeAssert,
            Erc20Error::Abi(_) => ErrorCode::Abi,
            Erc20Error::Rpc(_) => ErrorCode::Rpc,
            Erc20Error::Response { .. } => ErrorCode::Response,
            Erc20Error::Other(_) => ErrorCode::Unknown,
        }
    }

    /// Attaches an HTTP status code and origin body, turning any error into
    /// a [`Erc20Error::Response`] that keeps the original message as prefix.
    pub fn with_response(self, http_code: u16, body: impl Into<String>) -> Self {
        Erc20Error::Response {
            http_code,
            body: format!("{}: {}", self, body.into()),
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context is appended to a fresh error value; the original is consumed,
/// never mutated in place.
pub trait ErrorContext<T> {
    /// Adds context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;

    /// Adds context using a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T> ErrorContext<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Erc20Error::Other(format!("{}: {}", ctx.into(), e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Erc20Error::Other(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| Erc20Error::Other(ctx.into()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.ok_or_else(|| Erc20Error::Other(f()))
    }
}

impl From<hex::FromHexError> for Erc20Error {
    fn from(err: hex::FromHexError) -> Self {
        Erc20Error::Abi(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Erc20Error::NotSupportedChainType(42);
        assert_eq!(err.to_string(), "chain type 42 is not supported");

        let err = Erc20Error::TypeAssert {
            expected: "decimals()".to_string(),
            raw: "1234".to_string(),
        };
        assert!(err.to_string().contains("decimals()"));
        assert!(err.to_string().contains("0x1234"));
    }

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::NotSupportedChainType as u32, 10001);
        assert_eq!(ErrorCode::InvalidTx as u32, 10002);
        assert_eq!(ErrorCode::TypeAssert as u32, 20001);
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            Erc20Error::NotSupportedChainType(7).code(),
            ErrorCode::NotSupportedChainType
        );
        assert_eq!(Erc20Error::MissingProvider.code(), ErrorCode::MissingProvider);
        assert_eq!(
            Erc20Error::TypeAssert {
                expected: "name()".into(),
                raw: String::new()
            }
            .code(),
            ErrorCode::TypeAssert
        );
        assert_eq!(Erc20Error::Other("boom".into()).code(), ErrorCode::Unknown);
    }

    #[test]
    fn test_with_response_keeps_origin_body() {
        let err = Erc20Error::Rpc("eth_call reverted".into()).with_response(502, "bad gateway");
        match &err {
            Erc20Error::Response { http_code, body } => {
                assert_eq!(*http_code, 502);
                assert!(body.contains("eth_call reverted"));
                assert!(body.contains("bad gateway"));
            }
            other => panic!("expected Response, got {other:?}"),
        }
        assert_eq!(err.code(), ErrorCode::Response);
    }

    #[test]
    fn test_context_appends_without_mutating_kind() {
        let res: Result<()> = Err(Erc20Error::Rpc("timeout".into()));
        let err = res.context("querying name").unwrap_err();
        assert!(err.to_string().starts_with("querying name"));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_context_on_option() {
        let missing: Option<u8> = None;
        let err = missing.with_context(|| "decimals absent".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "decimals absent");
    }
}
