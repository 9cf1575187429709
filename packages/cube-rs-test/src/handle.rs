use cosmwasm_std::{Addr, StdResult, Uint128};
use cube_rs::token::{CubeTokenExecuteMsg, CubeTokenQueryMsg, Role, TokenInfo};
use cw_multi_test::error::AnyResult;

use crate::{harness::CubeTestApp, receipt::TxReceipt};

/// A deployed CubeToken contract. Every call names the harness it runs on
/// and, for transactions, the sending account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeTokenHandle {
    pub contract_addr: Addr,
}

impl CubeTokenHandle {
    // Transactions

    pub fn mint(
        &self,
        harness: &mut CubeTestApp,
        from: &Addr,
        recipient: &Addr,
        amount: impl Into<Uint128>,
    ) -> AnyResult<TxReceipt> {
        harness.submit(
            from,
            &self.contract_addr,
            &CubeTokenExecuteMsg::Mint {
                recipient: recipient.clone(),
                amount: amount.into(),
            },
        )
    }

    pub fn burn(
        &self,
        harness: &mut CubeTestApp,
        from: &Addr,
        amount: impl Into<Uint128>,
    ) -> AnyResult<TxReceipt> {
        harness.submit(
            from,
            &self.contract_addr,
            &CubeTokenExecuteMsg::Burn {
                amount: amount.into(),
            },
        )
    }

    pub fn transfer(
        &self,
        harness: &mut CubeTestApp,
        from: &Addr,
        recipient: &Addr,
        amount: impl Into<Uint128>,
    ) -> AnyResult<TxReceipt> {
        harness.submit(
            from,
            &self.contract_addr,
            &CubeTokenExecuteMsg::Transfer {
                recipient: recipient.clone(),
                amount: amount.into(),
            },
        )
    }

    pub fn grant_role(
        &self,
        harness: &mut CubeTestApp,
        from: &Addr,
        role: &Role,
        account: &Addr,
    ) -> AnyResult<TxReceipt> {
        harness.submit(
            from,
            &self.contract_addr,
            &CubeTokenExecuteMsg::GrantRole {
                role: role.clone(),
                account: account.clone(),
            },
        )
    }

    pub fn revoke_role(
        &self,
        harness: &mut CubeTestApp,
        from: &Addr,
        role: &Role,
        account: &Addr,
    ) -> AnyResult<TxReceipt> {
        harness.submit(
            from,
            &self.contract_addr,
            &CubeTokenExecuteMsg::RevokeRole {
                role: role.clone(),
                account: account.clone(),
            },
        )
    }

    pub fn renounce_role(
        &self,
        harness: &mut CubeTestApp,
        from: &Addr,
        role: &Role,
    ) -> AnyResult<TxReceipt> {
        harness.submit(
            from,
            &self.contract_addr,
            &CubeTokenExecuteMsg::RenounceRole {
                role: role.clone(),
                account: from.clone(),
            },
        )
    }

    // Queries

    pub fn total_supply(&self, harness: &CubeTestApp) -> StdResult<Uint128> {
        harness
            .app
            .wrap()
            .query_wasm_smart(&self.contract_addr, &CubeTokenQueryMsg::TotalSupply {})
    }

    pub fn balance_of(&self, harness: &CubeTestApp, address: &Addr) -> StdResult<Uint128> {
        harness.app.wrap().query_wasm_smart(
            &self.contract_addr,
            &CubeTokenQueryMsg::BalanceOf {
                address: address.clone(),
            },
        )
    }

    pub fn minter_role(&self, harness: &CubeTestApp) -> StdResult<Role> {
        harness
            .app
            .wrap()
            .query_wasm_smart(&self.contract_addr, &CubeTokenQueryMsg::MinterRole {})
    }

    pub fn default_admin_role(&self, harness: &CubeTestApp) -> StdResult<Role> {
        harness
            .app
            .wrap()
            .query_wasm_smart(&self.contract_addr, &CubeTokenQueryMsg::DefaultAdminRole {})
    }

    pub fn has_role(&self, harness: &CubeTestApp, role: &Role, account: &Addr) -> StdResult<bool> {
        harness.app.wrap().query_wasm_smart(
            &self.contract_addr,
            &CubeTokenQueryMsg::HasRole {
                role: role.clone(),
                account: account.clone(),
            },
        )
    }

    pub fn token_info(&self, harness: &CubeTestApp) -> StdResult<TokenInfo> {
        harness
            .app
            .wrap()
            .query_wasm_smart(&self.contract_addr, &CubeTokenQueryMsg::TokenInfo {})
    }
}
