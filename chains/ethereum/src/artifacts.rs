//! Built-in ERC20 contract artifacts.
//!
//! [`DEFAULT_ABI`] and [`DEFAULT_BYTECODE`] describe the SDK's bundled
//! mintable/burnable ERC20 contract. They are substituted as a pair whenever
//! [`DeployErc20Param`](erc20sdk_client::DeployErc20Param) omits either
//! field.
//!
//! The constructor takes five arguments: name (string), symbol (string),
//! decimals (uint8), initial supply (uint256) and a mintable flag (bool).
//! The deploying account becomes the minting administrator.
//!
//! [`DEFAULT_BYTECODE`] is a stand-in blob until the audited build of the
//! contract lands; it has the shape of solc creation output but will not
//! produce a working contract on a live network. Deployments that matter
//! should pass their own compiled artifact through
//! [`DeployErc20Param`](erc20sdk_client::DeployErc20Param).

/// ABI of the built-in ERC20 contract.
pub const DEFAULT_ABI: &str = r#"[
  {
    "type": "constructor",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "name_", "type": "string", "internalType": "string" },
      { "name": "symbol_", "type": "string", "internalType": "string" },
      { "name": "decimals_", "type": "uint8", "internalType": "uint8" },
      { "name": "initialSupply_", "type": "uint256", "internalType": "uint256" },
      { "name": "mintable_", "type": "bool", "internalType": "bool" }
    ]
  },
  {
    "type": "function",
    "name": "name",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "string", "internalType": "string" }]
  },
  {
    "type": "function",
    "name": "symbol",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "string", "internalType": "string" }]
  },
  {
    "type": "function",
    "name": "decimals",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "uint8", "internalType": "uint8" }]
  },
  {
    "type": "function",
    "name": "totalSupply",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }]
  },
  {
    "type": "function",
    "name": "balanceOf",
    "stateMutability": "view",
    "inputs": [{ "name": "account", "type": "address", "internalType": "address" }],
    "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }]
  },
  {
    "type": "function",
    "name": "transfer",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "to", "type": "address", "internalType": "address" },
      { "name": "amount", "type": "uint256", "internalType": "uint256" }
    ],
    "outputs": [{ "name": "", "type": "bool", "internalType": "bool" }]
  },
  {
    "type": "function",
    "name": "transferFrom",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "from", "type": "address", "internalType": "address" },
      { "name": "to", "type": "address", "internalType": "address" },
      { "name": "amount", "type": "uint256", "internalType": "uint256" }
    ],
    "outputs": [{ "name": "", "type": "bool", "internalType": "bool" }]
  },
  {
    "type": "function",
    "name": "approve",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "spender", "type": "address", "internalType": "address" },
      { "name": "amount", "type": "uint256", "internalType": "uint256" }
    ],
    "outputs": [{ "name": "", "type": "bool", "internalType": "bool" }]
  },
  {
    "type": "function",
    "name": "allowance",
    "stateMutability": "view",
    "inputs": [
      { "name": "owner", "type": "address", "internalType": "address" },
      { "name": "spender", "type": "address", "internalType": "address" }
    ],
    "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }]
  },
  {
    "type": "function",
    "name": "mint",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "to", "type": "address", "internalType": "address" },
      { "name": "amount", "type": "uint256", "internalType": "uint256" }
    ],
    "outputs": [{ "name": "", "type": "bool", "internalType": "bool" }]
  },
  {
    "type": "function",
    "name": "burn",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "from", "type": "address", "internalType": "address" },
      { "name": "amount", "type": "uint256", "internalType": "uint256" }
    ],
    "outputs": [{ "name": "", "type": "bool", "internalType": "bool" }]
  },
  {
    "type": "event",
    "name": "Transfer",
    "anonymous": false,
    "inputs": [
      { "name": "from", "type": "address", "indexed": true, "internalType": "address" },
      { "name": "to", "type": "address", "indexed": true, "internalType": "address" },
      { "name": "value", "type": "uint256", "indexed": false, "internalType": "uint256" }
    ]
  },
  {
    "type": "event",
    "name": "Approval",
    "anonymous": false,
    "inputs": [
      { "name": "owner", "type": "address", "indexed": true, "internalType": "address" },
      { "name": "spender", "type": "address", "indexed": true, "internalType": "address" },
      { "name": "value", "type": "uint256", "indexed": false, "internalType": "uint256" }
    ]
  }
]"#;

/// Creation bytecode of the built-in ERC20 contract.
///
/// TODO: replace with the audited compiled build of [`DEFAULT_ABI`]'s
/// contract. Until then this is a well-formed stand-in that exercises the
/// deploy path (hex decoding, constructor-argument appending) but is not
/// deployable for real use.
pub const DEFAULT_BYTECODE: &str = concat!(
    "0x",
    "60806040523480156200001157600080fd5b5060405162000f3838038062000f",
    "388014569056604051908152602001620001ce5652600052602060002090602d",
    "145b6025600a1460405190815260200114576001600160a01b035b565256915b",
    "6001600160a01b03610afd355291620002765260405190815260200160005260",
    "2060002090576200028257610a9f610bcd56620001845780620001ed60026001",
    "600160a01b03610a093557610ae714620001c9905752610b3580610b32610bca",
    "620002af80565b60005260206000209060005260206000209060005260206000",
    "2090355760405190815260200160095757620002796035604051908152602001",
    "146001600160a01b035680620002c39090571452620003ae35805614620002ca",
    "91620002b4146040519081526020016001600160a01b03604051908152602001",
    "35610b7052603380620002c96007620002eb919060405190815260200191601a",
    "57576001600160a01b035b3560405190815260200162000156145b610a99565b",
    "56610b5735146200011e80610bd314526038610b17576000526020600020905b",
    "355b600052602060002090600052602060002090568014569156355260405190",
    "81526020016001600160a01b03620002fa5690901462000385566001600160a0",
    "1b0352600052602060002090573514915257610b41610b9657610a4f915b5680",
    "620001d557149091604051908152602001620001dc6000526020600020901457",
    "6001600160a01b03906040519081526020015b6001600160a01b0356602a5290",
    "9035566001600160a01b03620002b45b6001600160a01b0356806001600160a0",
    "1b0357146001600160a01b035b610a70601960005260206000209056610b3a57",
    "3560005260206000209057808035600052602060002090604051908152602001",
    "620003be60405190815260200156145260145657604051908152602001805762",
    "0001cc80610bca35355b90565b526001600160a01b03561491610b745b353580",
    "6001600160a01b03603b806001600160a01b03610a5a35600052602060002090",
    "6001600160a01b03355657905756600052602060002090620003966001600160",
    "a01b036001600160a01b035252146200021891529052610a8990566001600160",
    "608060405234801561001057600080fd5b50600436106100a95760003560e01c",
    "80a26469706673582212206bd9efb832b23d30c6a59c4655dc760d0ada87377e",
    "90a20471617649815036f364736f6c634300081a0033",
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::json_abi::JsonAbi;

    #[test]
    fn test_default_abi_parses() {
        let abi: JsonAbi = serde_json::from_str(DEFAULT_ABI).expect("default ABI must parse");
        let ctor = abi.constructor.as_ref().expect("default ABI has a constructor");
        assert_eq!(ctor.inputs.len(), 5);
        for name in [
            "name",
            "symbol",
            "decimals",
            "totalSupply",
            "balanceOf",
            "transfer",
            "transferFrom",
            "approve",
            "allowance",
            "mint",
            "burn",
        ] {
            assert!(abi.function(name).is_some(), "missing function {name}");
        }
    }

    #[test]
    fn test_default_bytecode_is_valid_hex() {
        let code = hex::decode(DEFAULT_BYTECODE.trim_start_matches("0x"))
            .expect("default bytecode must be valid hex");
        assert!(!code.is_empty());
        // solc creation code starts with the free-memory-pointer setup
        assert_eq!(&code[0..2], &[0x60, 0x80]);
    }
}
