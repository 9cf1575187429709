use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cube_rs::{
    core::{ContractError, ContractResult},
    events::DomainEvent,
    token::{
        CubeTokenExecuteMsg, CubeTokenInstantiateMsg, CubeTokenMigrateMsg, CubeTokenQueryMsg,
        Role, TokenInfo,
    },
};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use crate::state::{
    add_role_member, allowance_of, balance_of, has_role, move_balance, remove_role_member,
    role_admin, ALLOWANCES, BALANCES, TOKEN_INFO, TOTAL_SUPPLY,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: CubeTokenInstantiateMsg,
) -> ContractResult {
    nonpayable(&info).map_err(|e| ContractError::generic_err(e.to_string()))?;

    if msg.name.trim().is_empty() || msg.symbol.trim().is_empty() {
        return Err(ContractError::generic_err(
            "Token name and symbol must not be empty",
        ));
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
        },
    )?;

    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    add_role_member(deps.storage, &Role::default_admin(), &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_event(DomainEvent::RoleGranted {
            role: Role::default_admin(),
            account: info.sender.clone(),
            sender: info.sender,
        }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: CubeTokenMigrateMsg) -> ContractResult {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: CubeTokenExecuteMsg,
) -> ContractResult {
    let mut events: Vec<DomainEvent> = vec![];

    let action = match msg {
        CubeTokenExecuteMsg::Mint { recipient, amount } => {
            if !has_role(deps.storage, &Role::minter(), &info.sender) {
                return Err(ContractError::SenderIsNotTheMinter {});
            }

            if amount.is_zero() {
                return Err(ContractError::AmountMustBeMoreThanZero {});
            }

            let recipient = deps.api.addr_validate(recipient.as_str())?;

            BALANCES.update(deps.storage, &recipient, |balance| -> Result<_, ContractError> {
                Ok(balance.unwrap_or_default().checked_add(amount)?)
            })?;

            TOTAL_SUPPLY.update(deps.storage, |supply| -> Result<_, ContractError> {
                Ok(supply.checked_add(amount)?)
            })?;

            events.push(DomainEvent::Transfer {
                from: None,
                to: Some(recipient),
                amount,
            });

            "mint"
        }
        CubeTokenExecuteMsg::Burn { amount } => {
            if amount.is_zero() {
                return Err(ContractError::AmountMustBeMoreThanZero {});
            }

            let balance = balance_of(deps.storage, &info.sender)?;

            if balance < amount {
                return Err(ContractError::BurnAmountExceedsBalance {});
            }

            BALANCES.save(deps.storage, &info.sender, &(balance - amount))?;

            TOTAL_SUPPLY.update(deps.storage, |supply| -> Result<_, ContractError> {
                Ok(supply.checked_sub(amount)?)
            })?;

            events.push(DomainEvent::Transfer {
                from: Some(info.sender),
                to: None,
                amount,
            });

            "burn"
        }
        CubeTokenExecuteMsg::Transfer { recipient, amount } => {
            let recipient = deps.api.addr_validate(recipient.as_str())?;

            move_balance(deps.storage, &info.sender, &recipient, amount)?;

            events.push(DomainEvent::Transfer {
                from: Some(info.sender),
                to: Some(recipient),
                amount,
            });

            "transfer"
        }
        CubeTokenExecuteMsg::Approve { spender, amount } => {
            let spender = deps.api.addr_validate(spender.as_str())?;

            ALLOWANCES.save(deps.storage, (&info.sender, &spender), &amount)?;

            events.push(DomainEvent::Approval {
                owner: info.sender,
                spender,
                amount,
            });

            "approve"
        }
        CubeTokenExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => {
            let recipient = deps.api.addr_validate(recipient.as_str())?;
            let allowance = allowance_of(deps.storage, &owner, &info.sender)?;

            if allowance < amount {
                return Err(ContractError::InsufficientAllowance {});
            }

            ALLOWANCES.save(deps.storage, (&owner, &info.sender), &(allowance - amount))?;

            move_balance(deps.storage, &owner, &recipient, amount)?;

            events.push(DomainEvent::Transfer {
                from: Some(owner),
                to: Some(recipient),
                amount,
            });

            "transfer_from"
        }
        CubeTokenExecuteMsg::GrantRole { role, account } => {
            check_role_admin(deps.as_ref(), &role, &info)?;

            let account = deps.api.addr_validate(account.as_str())?;

            if add_role_member(deps.storage, &role, &account)? {
                events.push(DomainEvent::RoleGranted {
                    role,
                    account,
                    sender: info.sender,
                });
            }

            "grant_role"
        }
        CubeTokenExecuteMsg::RevokeRole { role, account } => {
            check_role_admin(deps.as_ref(), &role, &info)?;

            if remove_role_member(deps.storage, &role, &account) {
                events.push(DomainEvent::RoleRevoked {
                    role,
                    account,
                    sender: info.sender,
                });
            }

            "revoke_role"
        }
        CubeTokenExecuteMsg::RenounceRole { role, account } => {
            if account != info.sender {
                return Err(ContractError::CanOnlyRenounceRolesForSelf {});
            }

            if remove_role_member(deps.storage, &role, &account) {
                events.push(DomainEvent::RoleRevoked {
                    role,
                    account,
                    sender: info.sender,
                });
            }

            "renounce_role"
        }
    };

    Ok(Response::new()
        .add_attribute("action", action)
        .add_events(events))
}

fn check_role_admin(deps: Deps, role: &Role, info: &MessageInfo) -> Result<(), ContractError> {
    let admin = role_admin(deps.storage, role)?;

    if !has_role(deps.storage, &admin, &info.sender) {
        return Err(ContractError::MissingRole {
            account: info.sender.clone(),
            role: admin,
        });
    }

    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: CubeTokenQueryMsg) -> StdResult<Binary> {
    match msg {
        CubeTokenQueryMsg::TokenInfo {} => to_json_binary(&TOKEN_INFO.load(deps.storage)?),
        CubeTokenQueryMsg::TotalSupply {} => to_json_binary(&TOTAL_SUPPLY.load(deps.storage)?),
        CubeTokenQueryMsg::BalanceOf { address } => {
            to_json_binary(&balance_of(deps.storage, &address)?)
        }
        CubeTokenQueryMsg::Allowance { owner, spender } => {
            to_json_binary(&allowance_of(deps.storage, &owner, &spender)?)
        }
        CubeTokenQueryMsg::MinterRole {} => to_json_binary(&Role::minter()),
        CubeTokenQueryMsg::DefaultAdminRole {} => to_json_binary(&Role::default_admin()),
        CubeTokenQueryMsg::HasRole { role, account } => {
            to_json_binary(&has_role(deps.storage, &role, &account))
        }
        CubeTokenQueryMsg::GetRoleAdmin { role } => {
            to_json_binary(&role_admin(deps.storage, &role)?)
        }
    }
}

#[cfg(test)]
pub fn default_instantiate_msg() -> CubeTokenInstantiateMsg {
    CubeTokenInstantiateMsg {
        name: "Cube Token".to_string(),
        symbol: "CUBE".to_string(),
        decimals: 18,
    }
}



#[cfg(test)]
mod burn_tests {
    use super::*;
    use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env};
    use rstest::rstest;

    #[rstest]
    #[case(100, 40, Ok(60))]
    #[case(100, 100, Ok(0))]
    #[case(100, 101, Err(ContractError::BurnAmountExceedsBalance {}))]
    #[case(100, 0, Err(ContractError::AmountMustBeMoreThanZero {}))]
    fn burns_from_sender_balance(
        #[case] balance: u128,
        #[case] amount: u128,
        #[case] expected: Result<u128, ContractError>,
    ) {
        let mut deps = mock_dependencies();
        let holder = deps.api.addr_make("holder");

        BALANCES
            .save(deps.as_mut().storage, &holder, &Uint128::new(balance))
            .unwrap();
        TOTAL_SUPPLY
            .save(deps.as_mut().storage, &Uint128::new(balance))
            .unwrap();

        let result = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&holder, &[]),
            CubeTokenExecuteMsg::Burn {
                amount: Uint128::new(amount),
            },
        );

        match expected {
            Ok(remaining) => {
                result.unwrap();
                assert_eq!(
                    balance_of(deps.as_ref().storage, &holder).unwrap(),
                    Uint128::new(remaining)
                );
                assert_eq!(
                    TOTAL_SUPPLY.load(deps.as_ref().storage).unwrap(),
                    Uint128::new(remaining)
                );
            }
            Err(err) => assert_eq!(result.unwrap_err(), err),
        }
    }
}
