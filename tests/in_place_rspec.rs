//! Behaviour tests for in-place operators using rust-rspec.
//!
//! These tests verify that in-place operators mutate the receiver, hand it
//! back for chaining, and leave it untouched when they fail.

use srcvec::{VecError, Vector3};

#[derive(Clone, Debug, Default)]
struct Env {
    vector: Vector3,
}

/// Runs a behavioural test over a chain of in-place operations.
#[test]
fn in_place_chain() {
    rspec::run(&rspec::given(
        "a vector of ones",
        Env::default(),
        |ctx| {
            ctx.before_each(|env| {
                env.vector = Vector3::splat(1.0);
            });

            ctx.when("another vector of ones is added in place", |ctx| {
                ctx.before_each(|env| {
                    let returned = env
                        .vector
                        .iadd(Vector3::splat(1.0))
                        .expect("addition succeeds");
                    assert_eq!(*returned, Vector3::splat(2.0));
                });

                ctx.then("the receiver holds the sum", |env| {
                    assert_eq!(env.vector, Vector3::splat(2.0));
                });
            });

            ctx.when("operations are chained", |ctx| {
                ctx.before_each(|env| {
                    env.vector
                        .imul(4)
                        .and_then(|v| v.isub([1.0, 2.0, 3.0]))
                        .and_then(|v| v.ifloordiv(2))
                        .expect("chain succeeds");
                });

                ctx.then("each step applied to the same vector", |env| {
                    assert_eq!(env.vector, Vector3::new(1.0, 1.0, 0.0));
                });
            });

            ctx.when("a modulo by zero is attempted", |ctx| {
                ctx.then("the error is reported and the receiver is unchanged", |env| {
                    let mut vector = env.vector;
                    let err = vector.imod(0).expect_err("zero modulus");
                    assert!(matches!(err, VecError::DivisionByZero { .. }));
                    assert_eq!(vector, Vector3::splat(1.0));
                });
            });
        },
    ));
}
