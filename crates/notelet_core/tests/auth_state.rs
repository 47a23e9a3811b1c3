use notelet_core::{AuthState, AuthUser, StateRegistry, UserId};
use std::cell::RefCell;
use std::rc::Rc;

fn alice() -> AuthUser {
    AuthUser {
        uid: UserId::new("uid-alice"),
        display_name: Some("Alice".to_string()),
        email: Some("alice@example.com".to_string()),
    }
}

#[test]
fn registry_auth_starts_signed_out() {
    let registry = StateRegistry::new();

    assert_eq!(registry.auth().get(), &AuthState::signed_out());
}

#[test]
fn sign_in_is_visible_to_a_fresh_subscriber() {
    let mut registry = StateRegistry::new();
    registry.auth_mut().set(AuthState::signed_in(alice()));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    registry
        .auth_mut()
        .subscribe(move |state: &AuthState| sink.borrow_mut().push(state.clone()));

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(
        seen.borrow()[0].user_id().map(UserId::as_str),
        Some("uid-alice")
    );
}

#[test]
fn sign_out_replaces_state_wholesale() {
    let mut registry = StateRegistry::new();
    registry.auth_mut().set(AuthState::signed_in(alice()));

    registry.auth_mut().set(AuthState::signed_out());

    assert!(!registry.auth().get().is_authenticated());
    assert_eq!(registry.auth().get().user, None);
}

#[test]
fn auth_state_serializes_with_provider_wire_fields() {
    let signed_out = serde_json::to_value(AuthState::signed_out()).unwrap();
    assert_eq!(signed_out, serde_json::json!({ "user": null }));

    let signed_in = serde_json::to_value(AuthState::signed_in(alice())).unwrap();
    assert_eq!(signed_in["user"]["uid"], "uid-alice");
    assert_eq!(signed_in["user"]["displayName"], "Alice");
    assert_eq!(signed_in["user"]["email"], "alice@example.com");

    let decoded: AuthState = serde_json::from_value(signed_in).unwrap();
    assert_eq!(decoded, AuthState::signed_in(alice()));
}
