use cosmwasm_std::{Addr, OverflowError, Response, StdError};
use thiserror::Error;

use crate::{
    selector::{
        typed_error, AMOUNT_MUST_BE_MORE_THAN_ZERO, BURN_AMOUNT_EXCEEDS_BALANCE,
        SENDER_IS_NOT_THE_MINTER,
    },
    token::Role,
};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{}", typed_error(SENDER_IS_NOT_THE_MINTER))]
    SenderIsNotTheMinter {},

    #[error("{}", typed_error(AMOUNT_MUST_BE_MORE_THAN_ZERO))]
    AmountMustBeMoreThanZero {},

    #[error("{}", typed_error(BURN_AMOUNT_EXCEEDS_BALANCE))]
    BurnAmountExceedsBalance {},

    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { account: Addr, role: Role },

    #[error("AccessControl: can only renounce roles for self")]
    CanOnlyRenounceRolesForSelf {},

    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance {},

    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance {},

    #[error("Unauthorized")]
    Unauthorized {},
}

impl ContractError {
    pub fn generic_err(msg: impl Into<String>) -> Self {
        ContractError::Std(StdError::generic_err(msg.into()))
    }
}

pub type ContractResult = Result<Response, ContractError>;
