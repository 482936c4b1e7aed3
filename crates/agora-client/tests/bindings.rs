//! Binding construction behavior

use agora_client::{ClientConfig, DeploymentTarget, ServiceAddress, ServiceBindings};
use agora_core::effects::SessionIdentity;
use agora_core::identifiers::Principal;

fn full_config() -> ClientConfig {
    ClientConfig::for_target(DeploymentTarget::Local)
        .with_profile(ServiceAddress::parse("profile-svc").unwrap())
        .with_ledger(ServiceAddress::parse("ledger-svc").unwrap())
        .with_staking(ServiceAddress::parse("staking-svc").unwrap())
        .with_nft(ServiceAddress::parse("nft-svc").unwrap())
}

fn identity() -> SessionIdentity {
    SessionIdentity::new(
        Principal::from_text("alice-principal").unwrap(),
        "delegation-token",
    )
}

#[test]
fn rebuilding_with_same_identity_yields_same_addresses() {
    let config = full_config();
    let identity = identity();

    let first = ServiceBindings::build(&config, Some(&identity), 1);
    let second = ServiceBindings::build(&config, Some(&identity), 1);

    assert_eq!(
        first.profile().unwrap().address(),
        second.profile().unwrap().address()
    );
    assert_eq!(
        first.ledger().unwrap().address(),
        second.ledger().unwrap().address()
    );
    assert_eq!(
        first.staking().unwrap().address(),
        second.staking().unwrap().address()
    );
    assert_eq!(
        first.nft().unwrap().address(),
        second.nft().unwrap().address()
    );
}

#[test]
fn missing_address_yields_unavailable_binding_only() {
    let mut config = full_config();
    config.staking = None;

    let bindings = ServiceBindings::build(&config, Some(&identity()), 1);

    assert!(!bindings.all_available());
    assert!(bindings.staking().is_err());
    // The other three are unaffected.
    assert!(bindings.profile().is_ok());
    assert!(bindings.ledger().is_ok());
    assert!(bindings.nft().is_ok());
}

#[test]
fn anonymous_bindings_construct() {
    let bindings = ServiceBindings::build(&full_config(), None, 0);
    assert!(bindings.all_available());
    assert_eq!(bindings.identity_epoch(), 0);
}

#[test]
fn unavailable_error_names_the_service() {
    let config = ClientConfig::for_target(DeploymentTarget::Local);
    let bindings = ServiceBindings::build(&config, None, 0);
    let error = bindings.profile().unwrap_err();
    assert!(error.to_string().contains("profile"));
}
