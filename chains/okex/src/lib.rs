//! # ERC20 SDK OKX Chain Client
//!
//! OKX Chain (OKTC) is EVM compatible, so this crate is a thin adapter
//! around [`EthereumClient`](erc20sdk_ethereum::EthereumClient): same
//! request shapes, OKTC chain id, endpoint supplied by the caller.
//! Delegation is explicit rather than a type alias so the OKX surface can
//! diverge later without breaking callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
pub use client::{OkexClient, OKX_MAINNET, OKX_TESTNET};
