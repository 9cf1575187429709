use cosmwasm_std::Uint128;
use cube_rs::{
    selector::{typed_error, SENDER_IS_NOT_THE_MINTER},
    token::Role,
};
use cube_rs_test::{
    fixtures::amount_to_stake, harness::CubeTestApp, network::Network, receipt::assert_reverts,
};
use rstest::rstest;

#[test]
fn cannot_mint_if_non_owner() {
    // Arrange
    let mut harness = CubeTestApp::setup();
    if harness.skip_unless_local() {
        return;
    }
    let non_owner = harness.get_account(Some(1)).unwrap();
    let cube_token = harness.deploy_cube_token().unwrap();

    // Act / Assert
    let expected_revert_string = typed_error(SENDER_IS_NOT_THE_MINTER);
    assert_reverts(
        cube_token.mint(&mut harness, &non_owner, &non_owner, 1u128),
        &expected_revert_string,
    );
}

#[rstest]
fn can_mint_if_owner(amount_to_stake: Uint128) {
    // Arrange
    let mut harness = CubeTestApp::setup();
    if harness.skip_unless_local() {
        return;
    }
    let account = harness.get_account(None).unwrap();
    let cube_token = harness.deploy_cube_token().unwrap();

    // Transfer the role to owner
    let minter_role = cube_token.minter_role(&harness).unwrap();
    let grant_tx = cube_token
        .grant_role(&mut harness, &account, &minter_role, &account)
        .unwrap();
    grant_tx.wait(&mut harness, 1);

    // Act
    let mint_tx = cube_token
        .mint(&mut harness, &account, &account, amount_to_stake)
        .unwrap();
    mint_tx.wait(&mut harness, 1);

    // Assert
    assert_eq!(cube_token.total_supply(&harness).unwrap(), amount_to_stake);
}

#[test]
fn local_only_checks_are_skipped_on_live_networks() {
    let harness = CubeTestApp::with_network(Network::new("mainnet"));

    assert!(harness.skip_unless_local());
}

#[rstest]
fn revoked_minter_cannot_mint(amount_to_stake: Uint128) {
    let mut harness = CubeTestApp::with_network(Network::default());
    let owner = harness.get_account(None).unwrap();
    let minter = harness.get_account(Some(2)).unwrap();
    let cube_token = harness.deploy_cube_token().unwrap();

    cube_token
        .grant_role(&mut harness, &owner, &Role::minter(), &minter)
        .unwrap()
        .wait(&mut harness, 1);

    cube_token
        .mint(&mut harness, &minter, &minter, amount_to_stake)
        .unwrap();

    cube_token
        .revoke_role(&mut harness, &owner, &Role::minter(), &minter)
        .unwrap()
        .wait(&mut harness, 1);

    assert!(!cube_token
        .has_role(&harness, &Role::minter(), &minter)
        .unwrap());
    assert_reverts(
        cube_token.mint(&mut harness, &minter, &minter, amount_to_stake),
        &typed_error(SENDER_IS_NOT_THE_MINTER),
    );
    assert_eq!(cube_token.total_supply(&harness).unwrap(), amount_to_stake);
    assert_eq!(
        cube_token.balance_of(&harness, &minter).unwrap(),
        amount_to_stake
    );
}

#[test]
fn non_admin_cannot_grant_minter_role() {
    let mut harness = CubeTestApp::with_network(Network::default());
    let non_owner = harness.get_account(Some(1)).unwrap();
    let cube_token = harness.deploy_cube_token().unwrap();

    assert_reverts(
        cube_token.grant_role(&mut harness, &non_owner, &Role::minter(), &non_owner),
        &format!(
            "AccessControl: account {non_owner} is missing role {}",
            Role::default_admin()
        ),
    );
}

#[test]
fn renouncing_admin_role_locks_role_management() {
    let mut harness = CubeTestApp::with_network(Network::default());
    let owner = harness.get_account(None).unwrap();
    let cube_token = harness.deploy_cube_token().unwrap();
    let admin_role = cube_token.default_admin_role(&harness).unwrap();

    cube_token
        .renounce_role(&mut harness, &owner, &admin_role)
        .unwrap();

    assert!(cube_token
        .grant_role(&mut harness, &owner, &Role::minter(), &owner)
        .is_err());
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(12)]
fn waiting_produces_requested_confirmations(#[case] confirmations: u64) {
    let mut harness = CubeTestApp::with_network(Network::default());
    let owner = harness.get_account(None).unwrap();
    let cube_token = harness.deploy_cube_token().unwrap();

    let start = harness.block_height();

    let receipt = cube_token
        .grant_role(&mut harness, &owner, &Role::minter(), &owner)
        .unwrap();

    assert_eq!(receipt.confirmations(&harness), 1);
    assert!(receipt.has_event("role_granted"));
    assert_eq!(receipt.wait(&mut harness, confirmations), confirmations);
    assert_eq!(harness.block_height(), start + confirmations - 1);
}

#[rstest]
fn minted_tokens_can_be_transferred_and_burned(amount_to_stake: Uint128) {
    let mut harness = CubeTestApp::with_network(Network::default());
    let owner = harness.get_account(None).unwrap();
    let holder = harness.get_account(Some(3)).unwrap();
    let cube_token = harness.deploy_cube_token().unwrap();

    cube_token
        .grant_role(&mut harness, &owner, &Role::minter(), &owner)
        .unwrap();
    cube_token
        .mint(&mut harness, &owner, &owner, amount_to_stake)
        .unwrap();

    let quarter = amount_to_stake.multiply_ratio(1u128, 4u128);

    let receipt = cube_token
        .transfer(&mut harness, &owner, &holder, quarter)
        .unwrap();
    assert!(receipt.has_event("transfer"));

    cube_token.burn(&mut harness, &holder, quarter).unwrap();

    assert_eq!(
        cube_token.balance_of(&harness, &owner).unwrap(),
        amount_to_stake - quarter
    );
    assert_eq!(
        cube_token.balance_of(&harness, &holder).unwrap(),
        Uint128::zero()
    );
    assert_eq!(
        cube_token.total_supply(&harness).unwrap(),
        amount_to_stake - quarter
    );
    assert_reverts(
        cube_token.burn(&mut harness, &holder, 1u128),
        "typed error: 0xc0285821",
    );
}

#[test]
fn deploys_with_token_metadata() {
    let mut harness = CubeTestApp::with_network(Network::default());
    let cube_token = harness.cube_token().unwrap();
    let info = cube_token.token_info(&harness).unwrap();

    assert_eq!(info.symbol, "CUBE");
    assert_eq!(info.decimals, 18);
    assert_eq!(cube_token.total_supply(&harness).unwrap(), Uint128::zero());
}
