//! Property-based tests for unification and substitution using proptest.

use proptest::prelude::*;

use super::{substitute, unify, unify_args, Substitution};
use crate::ast::Term;

/// Small symbol pool so that generated terms collide often.
fn arb_term() -> BoxedStrategy<Term> {
    prop_oneof![
        (0..3u8).prop_map(|i| Term::var(format!("x{i}"))),
        (0..3u8).prop_map(|i| Term::constant(format!("c{i}"))),
    ]
    .boxed()
}

fn arb_ground_term() -> BoxedStrategy<Term> {
    (0..3u8).prop_map(|i| Term::constant(format!("c{i}"))).boxed()
}

fn arb_args(len: usize) -> impl Strategy<Value = Vec<Term>> {
    proptest::collection::vec(arb_term(), len)
}

fn arb_arg_pair() -> impl Strategy<Value = (Vec<Term>, Vec<Term>)> {
    (0..5usize).prop_flat_map(|n| (arb_args(n), arb_args(n)))
}

fn resolve_all(args: &[Term], subs: &Substitution) -> Vec<Term> {
    args.iter().map(|a| subs.resolve(a)).collect()
}

// =========================================================================
// Unification properties
// =========================================================================

proptest! {
    /// Symmetry: unify(x, y) succeeds iff unify(y, x) does, and both
    /// unifiers make the two terms equal.
    #[test]
    fn unification_symmetry(x in arb_term(), y in arb_term()) {
        let empty = Substitution::new();
        let xy = unify(&x, &y, &empty);
        let yx = unify(&y, &x, &empty);
        prop_assert_eq!(xy.is_some(), yx.is_some());
        for s in xy.iter().chain(yx.iter()) {
            prop_assert_eq!(substitute(&x, s), substitute(&y, s));
        }
    }

    /// Soundness: a unifier makes both sides identical.
    #[test]
    fn unification_soundness(x in arb_term(), y in arb_term()) {
        if let Some(s) = unify(&x, &y, &Substitution::new()) {
            prop_assert_eq!(substitute(&x, &s), substitute(&y, &s));
        }
    }

    /// Argument lists: success is order independent and the unifier,
    /// followed through its chains, equalizes every position.
    #[test]
    fn argument_unification_soundness((xs, ys) in arb_arg_pair()) {
        let empty = Substitution::new();
        let fwd = unify_args(&xs, &ys, &empty);
        let bwd = unify_args(&ys, &xs, &empty);
        prop_assert_eq!(fwd.is_some(), bwd.is_some(), "unification should be symmetric");
        if let Some(s) = fwd {
            prop_assert_eq!(resolve_all(&xs, &s), resolve_all(&ys, &s));
        }
    }

    /// Identity: equal ground terms unify without new bindings.
    #[test]
    fn ground_identity(t in arb_ground_term()) {
        let s = unify(&t, &t, &Substitution::new());
        prop_assert_eq!(s, Some(Substitution::new()));
    }

    /// Unifying never drops or rewrites an existing binding.
    #[test]
    fn unification_extends_input((xs, ys) in arb_arg_pair(), seed in arb_ground_term()) {
        let base = Substitution::new().extend("x0", seed.clone());
        if let Some(s) = unify_args(&xs, &ys, &base) {
            prop_assert_eq!(s.get("x0"), Some(&seed));
        }
        prop_assert_eq!(base.len(), 1);
    }
}

// =========================================================================
// Substitution properties
// =========================================================================

proptest! {
    /// Empty substitution is identity
    #[test]
    fn substitution_identity(t in arb_term()) {
        prop_assert_eq!(substitute(&t, &Substitution::new()), t);
    }

    /// Constants pass through any substitution untouched.
    #[test]
    fn constants_are_fixed(t in arb_ground_term(), v in arb_term()) {
        let s = Substitution::new().extend("x1", v);
        prop_assert_eq!(substitute(&t, &s), t.clone());
        prop_assert_eq!(s.resolve(&t), t);
    }
}
