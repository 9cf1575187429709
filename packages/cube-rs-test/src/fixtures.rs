use cosmwasm_std::Uint128;
use rstest::fixture;

/// One whole token at 18 decimals.
#[fixture]
pub fn amount_to_stake() -> Uint128 {
    Uint128::new(1_000_000_000_000_000_000)
}
