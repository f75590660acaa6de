//! # ERC20 SDK Binance Smart Chain Client
//!
//! BSC is EVM compatible, so this crate is a thin adapter around
//! [`EthereumClient`](erc20sdk_ethereum::EthereumClient): same request
//! shapes, BSC chain id, endpoint supplied by the caller. Delegation is
//! explicit rather than a type alias so the BSC surface can diverge later
//! without breaking callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
pub use client::{BinanceClient, BSC_MAINNET, BSC_TESTNET};
