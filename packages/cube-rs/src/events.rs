use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint128};

use crate::token::Role;

#[cw_serde]
pub enum DomainEvent {
    /// `from` is empty for mints, `to` is empty for burns.
    Transfer {
        from: Option<Addr>,
        to: Option<Addr>,
        amount: Uint128,
    },
    Approval {
        owner: Addr,
        spender: Addr,
        amount: Uint128,
    },
    RoleGranted {
        role: Role,
        account: Addr,
        sender: Addr,
    },
    RoleRevoked {
        role: Role,
        account: Addr,
        sender: Addr,
    },
}

impl From<DomainEvent> for Event {
    fn from(event: DomainEvent) -> Self {
        match event {
            DomainEvent::Transfer { from, to, amount } => Event::new("transfer")
                .add_attribute("from", from.map(|a| a.to_string()).unwrap_or_default())
                .add_attribute("to", to.map(|a| a.to_string()).unwrap_or_default())
                .add_attribute("amount", amount.to_string()),
            DomainEvent::Approval {
                owner,
                spender,
                amount,
            } => Event::new("approval")
                .add_attribute("owner", owner.as_str())
                .add_attribute("spender", spender.as_str())
                .add_attribute("amount", amount.to_string()),
            DomainEvent::RoleGranted {
                role,
                account,
                sender,
            } => Event::new("role_granted")
                .add_attribute("role", role.to_string())
                .add_attribute("account", account.as_str())
                .add_attribute("sender", sender.as_str()),
            DomainEvent::RoleRevoked {
                role,
                account,
                sender,
            } => Event::new("role_revoked")
                .add_attribute("role", role.to_string())
                .add_attribute("account", account.as_str())
                .add_attribute("sender", sender.as_str()),
        }
    }
}
