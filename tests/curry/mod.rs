use outcome_rail::curry::{apply_next, curry2, curry3, curry4, uncurry2};
use outcome_rail::Outcome;

fn combine(user_id: i32, id: i32) -> i32 {
    user_id + id
}

#[test]
fn curry2_applies_one_argument_at_a_time() {
    let chain = curry2(combine);
    let partial = chain(40);
    assert_eq!(partial(2), 42);
}

#[test]
fn curry3_and_curry4_cover_the_documented_arity_family() {
    let sum3 = curry3(|a: i32, b: i32, c: i32| a + b + c);
    assert_eq!(sum3(1)(2)(3), 6);

    let sum4 = curry4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
    assert_eq!(sum4(1)(2)(3)(4), 10);
}

#[test]
fn apply_next_names_single_argument_application() {
    let chain = curry3(|a: i32, b: i32, c: i32| a * b * c);
    let chain = apply_next(chain, 2);
    let chain = apply_next(chain, 3);
    assert_eq!(apply_next(chain, 4), 24);
}

#[test]
fn uncurry2_restores_the_binary_call_shape() {
    let add = uncurry2(curry2(combine));
    assert_eq!(add(40, 2), 42);
}

#[test]
fn curried_chains_capture_owned_state() {
    let prefix = String::from("user");
    let label = curry2(move |sep: &str, id: i32| format!("{prefix}{sep}{id}"));
    assert_eq!(label("-")(7), "user-7");
}

#[test]
fn partially_applied_chain_is_a_valid_intermediate_outcome() {
    let partial = Outcome::<&str, _>::pure(curry2(combine)).apply(Outcome::success(40));

    // One argument still pending: the success branch holds a function.
    assert!(partial.is_success());
    let finished = partial.apply(Outcome::success(2));
    assert_eq!(finished.into_value(), Some(42));
}

#[test]
fn partially_applied_chain_still_accumulates_later_failures() {
    let partial = Outcome::<&str, _>::pure(curry3(|a: i32, b: i32, c: i32| a + b + c))
        .apply(Outcome::failure("no a"));
    assert!(partial.is_failure());

    let finished = partial
        .apply(Outcome::success(2))
        .apply(Outcome::failure("no c"));
    assert_eq!(
        finished.into_errors().unwrap().into_vec(),
        vec!["no a", "no c"],
    );
}
