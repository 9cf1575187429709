use std::fmt::{Display, Formatter};

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};

use crate::selector::keccak256;

pub const MINTER_ROLE: &str = "MINTER_ROLE";
pub const DEFAULT_ADMIN_ROLE: &str = "DEFAULT_ADMIN_ROLE";

/// 32 byte access control role identifier.
#[cw_serde]
pub struct Role(pub HexBinary);

impl Role {
    pub fn from_name(name: &str) -> Self {
        Role(HexBinary::from(keccak256(name.as_bytes()).to_vec()))
    }

    pub fn minter() -> Self {
        Role::from_name(MINTER_ROLE)
    }

    /// All zeroes, and the admin of every role unless configured otherwise.
    pub fn default_admin() -> Self {
        Role(HexBinary::from(vec![0u8; 32]))
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.0.to_hex())
    }
}

#[cw_serde]
pub struct CubeTokenInstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[cw_serde]
pub enum CubeTokenExecuteMsg {
    Mint {
        recipient: Addr,
        amount: Uint128,
    },
    Burn {
        amount: Uint128,
    },
    Transfer {
        recipient: Addr,
        amount: Uint128,
    },
    Approve {
        spender: Addr,
        amount: Uint128,
    },
    TransferFrom {
        owner: Addr,
        recipient: Addr,
        amount: Uint128,
    },
    GrantRole {
        role: Role,
        account: Addr,
    },
    RevokeRole {
        role: Role,
        account: Addr,
    },
    RenounceRole {
        role: Role,
        account: Addr,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum CubeTokenQueryMsg {
    #[returns(TokenInfo)]
    TokenInfo {},
    #[returns(Uint128)]
    TotalSupply {},
    #[returns(Uint128)]
    BalanceOf { address: Addr },
    #[returns(Uint128)]
    Allowance { owner: Addr, spender: Addr },
    #[returns(Role)]
    MinterRole {},
    #[returns(Role)]
    DefaultAdminRole {},
    #[returns(bool)]
    HasRole { role: Role, account: Addr },
    #[returns(Role)]
    GetRoleAdmin { role: Role },
}

#[cw_serde]
pub struct CubeTokenMigrateMsg {}
