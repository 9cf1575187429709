use cosmwasm_std::{Addr, Empty, StdResult, Storage, Uint128};
use cube_rs::token::{Role, TokenInfo};
use cw_storage_plus::{Item, Map};

use cube_rs::core::ContractError;

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

const ROLE_MEMBERS: Map<(&[u8], &Addr), Empty> = Map::new("role_members");
const ROLE_ADMINS: Map<&[u8], Role> = Map::new("role_admins");

pub fn has_role(store: &dyn Storage, role: &Role, account: &Addr) -> bool {
    ROLE_MEMBERS.has(store, (role.as_slice(), account))
}

pub fn role_admin(store: &dyn Storage, role: &Role) -> StdResult<Role> {
    Ok(ROLE_ADMINS
        .may_load(store, role.as_slice())?
        .unwrap_or_else(Role::default_admin))
}

/// Returns false if the account already held the role.
pub fn add_role_member(store: &mut dyn Storage, role: &Role, account: &Addr) -> StdResult<bool> {
    if has_role(store, role, account) {
        return Ok(false);
    }
    ROLE_MEMBERS.save(store, (role.as_slice(), account), &Empty {})?;
    Ok(true)
}

/// Returns false if the account did not hold the role.
pub fn remove_role_member(store: &mut dyn Storage, role: &Role, account: &Addr) -> bool {
    if !has_role(store, role, account) {
        return false;
    }
    ROLE_MEMBERS.remove(store, (role.as_slice(), account));
    true
}

pub fn balance_of(store: &dyn Storage, address: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(store, address)?.unwrap_or_default())
}

pub fn allowance_of(store: &dyn Storage, owner: &Addr, spender: &Addr) -> StdResult<Uint128> {
    Ok(ALLOWANCES
        .may_load(store, (owner, spender))?
        .unwrap_or_default())
}

pub fn move_balance(
    store: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let from_balance = balance_of(store, from)?;

    if from_balance < amount {
        return Err(ContractError::InsufficientBalance {});
    }

    BALANCES.save(store, from, &(from_balance - amount))?;
    BALANCES.update(store, to, |balance| -> Result<_, ContractError> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    Ok(())
}
