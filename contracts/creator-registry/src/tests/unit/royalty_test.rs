use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::test_utils::get_logs;

#[test]
fn default_policy_applies_without_override() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();

    let info = contract.royalty_info(id, U128(1_000_000)).unwrap();
    assert_eq!(info.recipient, deployer());
    assert_eq!(info.amount, U128(50_000), "5% of 1,000,000");
}

#[test]
fn owed_amount_floors_fractional_remainders() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();

    // 999 * 500 / 10_000 = 49.95, truncated to 49.
    let info = contract.royalty_info(id, U128(999)).unwrap();
    assert_eq!(info.amount, U128(49));
}

#[test]
fn zero_bps_owes_nothing() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();
    contract.set_token_royalty(id, beneficiary(), 0).unwrap();

    let info = contract.royalty_info(id, U128(1_000_000)).unwrap();
    assert_eq!(info.recipient, beneficiary());
    assert_eq!(info.amount, U128(0));
}

#[test]
fn full_bps_owes_the_whole_sale_amount() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();
    contract
        .set_token_royalty(id, beneficiary(), 10_000)
        .unwrap();

    let info = contract.royalty_info(id, U128(1_000_000)).unwrap();
    assert_eq!(info.amount, U128(1_000_000));
}

#[test]
fn owed_amount_does_not_overflow_on_large_sales() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();

    // 500 bps is exactly 1/20.
    let info = contract.royalty_info(id, U128(u128::MAX)).unwrap();
    assert_eq!(info.amount, U128(u128::MAX / 20));

    contract
        .set_token_royalty(id, beneficiary(), 10_000)
        .unwrap();
    let info = contract.royalty_info(id, U128(u128::MAX)).unwrap();
    assert_eq!(info.amount, U128(u128::MAX));
}

#[test]
fn override_replaces_the_default() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();

    contract
        .set_token_royalty(id, beneficiary(), 1_000)
        .unwrap();

    let info = contract.royalty_info(id, U128(1_000_000)).unwrap();
    assert_eq!(info.recipient, beneficiary());
    assert_eq!(info.amount, U128(100_000), "10% of 1,000,000");
}

#[test]
fn later_override_replaces_the_prior_one() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();

    contract
        .set_token_royalty(id, beneficiary(), 1_000)
        .unwrap();
    contract.set_token_royalty(id, collector(), 250).unwrap();

    let info = contract.royalty_info(id, U128(1_000_000)).unwrap();
    assert_eq!(info.recipient, collector());
    assert_eq!(info.amount, U128(25_000));
}

#[test]
fn override_on_one_token_leaves_others_on_the_default() {
    let mut contract = new_registry();
    let first = contract.mint("ipfs://a".to_string()).unwrap();
    let second = contract.mint("ipfs://b".to_string()).unwrap();

    contract
        .set_token_royalty(first, beneficiary(), 1_000)
        .unwrap();

    let info = contract.royalty_info(second, U128(1_000_000)).unwrap();
    assert_eq!(info.recipient, deployer());
    assert_eq!(info.amount, U128(50_000));
}

#[test]
fn excessive_bps_is_rejected_and_prior_override_kept() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();
    contract
        .set_token_royalty(id, beneficiary(), 1_000)
        .unwrap();

    let err = contract
        .set_token_royalty(id, beneficiary(), 10_001)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidRoyalty {
            basis_points: 10_001
        }
    );

    let info = contract.royalty_info(id, U128(1_000_000)).unwrap();
    assert_eq!(info.recipient, beneficiary());
    assert_eq!(info.amount, U128(100_000), "prior override unchanged");
}

#[test]
fn set_token_royalty_requires_the_token_owner() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();

    set_caller(collector());
    let err = contract
        .set_token_royalty(id, collector(), 1_000)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::AccessDenied {
            account_id: collector()
        }
    );

    // Resolution still uses the default policy.
    let info = contract.royalty_info(id, U128(1_000_000)).unwrap();
    assert_eq!(info.recipient, deployer());
    assert_eq!(info.amount, U128(50_000));
}

#[test]
fn missing_token_is_not_found_before_authorization() {
    let mut contract = new_registry();

    // Unauthorized caller on a nonexistent id still sees NotFound.
    set_caller(collector());
    let err = contract.set_token_royalty(7, collector(), 500).unwrap_err();
    assert_eq!(err, RegistryError::NotFound { token_id: 7 });
}

#[test]
fn royalty_info_missing_token_is_not_found() {
    let contract = new_registry();
    let err = contract.royalty_info(3, U128(1_000)).unwrap_err();
    assert_eq!(err, RegistryError::NotFound { token_id: 3 });
}

#[test]
fn set_token_royalty_emits_royalty_set_event() {
    let mut contract = new_registry();
    let id = contract.mint("ipfs://a".to_string()).unwrap();

    set_caller(deployer());
    contract
        .set_token_royalty(id, beneficiary(), 1_000)
        .unwrap();

    let events: Vec<String> = get_logs()
        .into_iter()
        .filter(|l| l.starts_with("EVENT_JSON:"))
        .collect();
    assert_eq!(events.len(), 1);
    assert!(events[0].contains("charlie"), "recipient is in the payload");
    assert!(events[0].contains("1000"));
}
