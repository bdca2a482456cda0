//! Property-based tests for the permission gate.

use proptest::prelude::*;

use crate::permission::gate::check;
use crate::permission::types::{Action, Role};

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Admin),
        Just(Role::Secretary),
        Just(Role::Kades),
        Just(Role::Other),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    proptest::sample::select(Action::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The gate is pure: `check` agrees with `allows` for every pair.
    #[test]
    fn prop_check_agrees_with_allows(role in arb_role(), action in arb_action()) {
        prop_assert_eq!(check(role, action).is_ok(), role.allows(action));
    }

    /// Everything a kades may do, a secretary may do; everything anyone
    /// may do, an admin may do.
    #[test]
    fn prop_privilege_ordering(role in arb_role(), action in arb_action()) {
        if role.allows(action) {
            prop_assert!(Role::Admin.allows(action));
        }
        if Role::Kades.allows(action) {
            prop_assert!(Role::Secretary.allows(action));
        }
    }

    /// An arbitrary claim string never yields more privilege than the
    /// known roles grant.
    #[test]
    fn prop_arbitrary_claims_never_escalate(claim in "[a-z]{0,12}", action in arb_action()) {
        let role = Role::from_claim(Some(claim.as_str()));
        if role == Role::Other {
            prop_assert_eq!(role.allows(action), Role::Other.allows(action));
        }
    }
}
