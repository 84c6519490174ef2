use outcome_rail::convert::{
    collect_failures, option_to_outcome, outcome_to_result, result_to_outcome, split_outcome,
};
use outcome_rail::traits::{OptionOutcomeExt, ResultOutcomeExt};
use outcome_rail::Outcome;

#[test]
fn outcome_to_result_keeps_the_first_blocking_message() {
    let failed = Outcome::<&str, i32>::failure_many(["first", "second"]);
    assert_eq!(outcome_to_result(failed), Err("first"));

    let success = Outcome::<&str, i32>::success(42);
    assert_eq!(outcome_to_result(success), Ok(42));
}

#[test]
fn result_to_outcome_wraps_the_error_in_a_singleton_list() {
    let outcome = result_to_outcome(Err::<i32, &str>("boom"));
    assert_eq!(outcome.into_errors().unwrap().len(), 1);
}

#[test]
fn option_to_outcome_uses_the_supplied_absence_message() {
    assert_eq!(option_to_outcome(Some(1), "missing"), Outcome::success(1));
    assert_eq!(
        option_to_outcome(None::<i32>, "missing"),
        Outcome::failure("missing"),
    );
}

#[test]
fn collect_failures_is_success_only_when_empty() {
    assert!(collect_failures(Vec::<&str>::new()).is_success());

    let outcome = collect_failures(vec!["error1", "error2"]);
    assert_eq!(outcome.into_errors().unwrap().len(), 2);
}

#[test]
fn split_outcome_yields_one_result_per_message() {
    let success = Outcome::<&str, i32>::success(42);
    let results: Vec<_> = split_outcome(success).collect();
    assert_eq!(results, vec![Ok(42)]);

    let failed = Outcome::<&str, i32>::failure_many(["err1", "err2"]);
    let iter = split_outcome(failed);
    assert_eq!(iter.len(), 2);
    let results: Vec<_> = iter.collect();
    assert_eq!(results, vec![Err("err1"), Err("err2")]);
}

#[test]
fn option_extension_converts_at_the_boundary() {
    let outcome = Some(5).into_outcome("missing");
    assert_eq!(outcome, Outcome::success(5));

    let outcome = None::<i32>.into_outcome("missing");
    assert_eq!(outcome, Outcome::failure("missing"));
}

#[test]
fn result_extension_accumulates_independent_pairs() {
    let joined = Err::<i32, &str>("Invalid User ID").accumulate_with(Err::<i32, &str>("Invalid ID"));
    assert_eq!(
        joined.into_errors().unwrap().into_vec(),
        vec!["Invalid User ID", "Invalid ID"],
    );

    let joined = Ok::<_, &str>(40).accumulate_with(Ok::<_, &str>(2));
    assert_eq!(joined.into_value(), Some((40, 2)));
}
