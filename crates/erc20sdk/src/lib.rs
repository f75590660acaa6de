//! # ERC20 SDK - Chain-Agnostic ERC20 Token Client
//!
//! The SDK exposes one trait, [`Erc20Client`], for every supported chain.
//! Pick a chain with a [`ChainType`] constant, construct a client through
//! [`new_client`], point it at a token contract and call ERC20 methods.
//! Reads return decoded values; writes return unsigned transaction requests
//! for the caller's own signing and sending pipeline.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `default` | All supported chains |
//! | `ethereum` | Ethereum client |
//! | `binance` | Binance Smart Chain client |
//! | `okex` | OKX Chain client |
//!
//! ## Quick Start
//!
//! ```no_run
//! use erc20sdk::prelude::*;
//!
//! # async fn erc20() -> erc20sdk_error::Result<()> {
//! let mut client = erc20sdk::new_client(erc20sdk::TYPE_ETH, "https://eth.llamarpc.com")?;
//! client.set_contract_address("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
//!
//! let symbol = client.symbol().await?;
//! println!("token symbol: {symbol}");
//!
//! client.set_account("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
//! let tx = client.approve(
//!     "0xdAC17F958D2ee523a2206206994597C13D831ec7",
//!     U256::from(100u64),
//! )?;
//! // sign and broadcast `tx` externally
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use erc20sdk_client::Erc20Client;
use erc20sdk_error::{Erc20Error, Result};

// ============================================================================
// Core re-exports (always available)
// ============================================================================

pub use erc20sdk_client as client;
pub use erc20sdk_client::{CrossChainOption, DeployErc20Param, DynSolValue};
pub use erc20sdk_error as error;
pub use erc20sdk_error::ErrorCode;

// ============================================================================
// Chain-specific re-exports
// ============================================================================

/// Ethereum client functionality
#[cfg(feature = "ethereum")]
#[cfg_attr(docsrs, doc(cfg(feature = "ethereum")))]
pub mod ethereum {
    pub use erc20sdk_ethereum::*;
}

/// Binance Smart Chain client functionality
#[cfg(feature = "binance")]
#[cfg_attr(docsrs, doc(cfg(feature = "binance")))]
pub mod binance {
    pub use erc20sdk_binance::*;
}

/// OKX Chain client functionality
#[cfg(feature = "okex")]
#[cfg_attr(docsrs, doc(cfg(feature = "okex")))]
pub mod okex {
    pub use erc20sdk_okex::*;
}

// ============================================================================
// Chain types and factory
// ============================================================================

/// Chain-type constant for Ethereum
pub const TYPE_ETH: u32 = 1;
/// Chain-type constant for Binance Smart Chain
pub const TYPE_BSC: u32 = 2;
/// Chain-type constant for OKX Chain
pub const TYPE_OKEX: u32 = 3;

/// The chains the SDK can construct a client for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    /// Ethereum
    Ethereum,
    /// Binance Smart Chain
    BinanceSmartChain,
    /// OKX Chain
    Okex,
}

impl ChainType {
    /// Returns the chain-type constant for this chain.
    pub const fn id(self) -> u32 {
        match self {
            ChainType::Ethereum => TYPE_ETH,
            ChainType::BinanceSmartChain => TYPE_BSC,
            ChainType::Okex => TYPE_OKEX,
        }
    }
}

impl TryFrom<u32> for ChainType {
    type Error = Erc20Error;

    fn try_from(chain_type: u32) -> Result<Self> {
        match chain_type {
            TYPE_ETH => Ok(ChainType::Ethereum),
            TYPE_BSC => Ok(ChainType::BinanceSmartChain),
            TYPE_OKEX => Ok(ChainType::Okex),
            other => Err(Erc20Error::NotSupportedChainType(other)),
        }
    }
}

/// Constructs an ERC20 client for the given chain-type constant, connected
/// to the given RPC endpoint.
///
/// Unknown constants, and constants whose chain feature is disabled, fail
/// with [`Erc20Error::NotSupportedChainType`]. The URL is validated before
/// the client is handed out, so a returned client is always usable.
pub fn new_client(chain_type: u32, rpc_url: &str) -> Result<Box<dyn Erc20Client>> {
    let chain = ChainType::try_from(chain_type)?;
    log::debug!("constructing {chain:?} ERC20 client");

    #[allow(unreachable_patterns)]
    let mut cli: Box<dyn Erc20Client> = match chain {
        #[cfg(feature = "ethereum")]
        ChainType::Ethereum => Box::new(erc20sdk_ethereum::EthereumClient::new(
            erc20sdk_ethereum::ETHEREUM_MAINNET,
        )),
        #[cfg(feature = "binance")]
        ChainType::BinanceSmartChain => Box::new(erc20sdk_binance::BinanceClient::new()),
        #[cfg(feature = "okex")]
        ChainType::Okex => Box::new(erc20sdk_okex::OkexClient::new()),
        _ => return Err(Erc20Error::NotSupportedChainType(chain_type)),
    };

    cli.set_provider(rpc_url)?;
    Ok(cli)
}

// ============================================================================
// Prelude - commonly used types
// ============================================================================

/// Prelude module for convenient imports
///
/// ```ignore
/// use erc20sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{new_client, ChainType, TYPE_BSC, TYPE_ETH, TYPE_OKEX};
    pub use erc20sdk_client::{
        Address, CrossChainOption, DeployErc20Param, DynSolValue, Erc20Client,
        TransactionRequest, U256,
    };
    pub use erc20sdk_error::{Erc20Error, ErrorCode, Result};
}

// ============================================================================
// Version information
// ============================================================================

/// Returns the ERC20 SDK version
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns enabled chain features as a vector
pub fn enabled_chains() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut chains = Vec::new();

    #[cfg(feature = "ethereum")]
    chains.push("ethereum");

    #[cfg(feature = "binance")]
    chains.push("binance");

    #[cfg(feature = "okex")]
    chains.push("okex");

    chains
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    const RPC: &str = "https://rpc.example.com";
    const CONTRACT: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_chain_type_ids_round_trip() {
        for chain in [ChainType::Ethereum, ChainType::BinanceSmartChain, ChainType::Okex] {
            assert_eq!(ChainType::try_from(chain.id()).unwrap(), chain);
        }
    }

    #[test]
    fn test_new_client_for_every_supported_constant() {
        for chain_type in [TYPE_ETH, TYPE_BSC, TYPE_OKEX] {
            let client = new_client(chain_type, RPC).unwrap();
            assert_eq!(client.account(), "");
        }
    }

    #[test]
    fn test_new_client_unknown_constant() {
        let err = new_client(99, RPC).err().unwrap();
        assert_eq!(err, Erc20Error::NotSupportedChainType(99));
        assert_eq!(err.code(), ErrorCode::NotSupportedChainType);
    }

    #[test]
    fn test_new_client_invalid_rpc_url() {
        let err = new_client(TYPE_ETH, "not a url").err().unwrap();
        assert_eq!(err.code(), ErrorCode::InvalidProviderUrl);
    }

    #[test]
    fn test_client_usable_through_trait_object() {
        let mut client = new_client(TYPE_BSC, RPC).unwrap();
        client.set_contract_address(CONTRACT);
        client.set_account("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        assert_eq!(client.account(), "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");

        let tx = client
            .approve("0xdAC17F958D2ee523a2206206994597C13D831ec7", U256::from(100u64))
            .unwrap();
        assert!(tx.input.input.is_some());
    }

    #[test]
    fn test_enabled_chains_under_default_features() {
        let chains = enabled_chains();
        assert!(chains.contains(&"ethereum"));
        assert!(chains.contains(&"binance"));
        assert!(chains.contains(&"okex"));
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_usdc_symbol_through_factory() {
        let mut client = new_client(TYPE_ETH, "https://eth.llamarpc.com").unwrap();
        client.set_contract_address(CONTRACT);
        let symbol = client.symbol().await.expect("Failed to get symbol");
        assert_eq!(symbol, "USDC");
    }
}
