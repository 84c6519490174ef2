use outcome_rail::Outcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[test]
fn success_and_failure_helpers_behave_as_expected() {
    let success = Outcome::<&str, i32>::success(5);
    assert!(success.is_success());
    assert_eq!(success.into_value(), Some(5));

    let failure = Outcome::<&str, i32>::failure("missing");
    assert!(failure.is_failure());
    let messages = failure.into_errors().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], "missing");
}

#[test]
#[should_panic(expected = "at least one message")]
fn failure_with_no_messages_is_rejected() {
    let _ = Outcome::<&str, i32>::failure_many([]);
}

#[test]
fn map_identity_preserves_the_outcome() {
    let success = Outcome::<&str, i32>::success(42);
    assert_eq!(success.clone().map(|x| x), success);

    let failure = Outcome::<&str, i32>::failure("nope");
    assert_eq!(failure.clone().map(|x| x), failure);
}

#[test]
fn map_composes() {
    let double = |x: i32| x * 2;
    let inc = |x: i32| x + 1;

    let split = Outcome::<&str, i32>::success(10).map(double).map(inc);
    let fused = Outcome::<&str, i32>::success(10).map(|x| inc(double(x)));
    assert_eq!(split, fused);
}

#[test]
fn map_never_runs_on_failure() {
    let failure = Outcome::<&str, i32>::failure("nope");
    let mapped: Outcome<&str, i32> = failure.map(|_| panic!("map must not run on a failure"));
    assert!(mapped.is_failure());
}

#[test]
fn and_then_short_circuits_without_invoking_the_continuation() {
    let mut invoked = false;
    let failure = Outcome::<&str, i32>::failure_many(["first", "second"]);
    let chained = failure.and_then(|x| {
        invoked = true;
        Outcome::success(x * 2)
    });

    assert!(!invoked);
    assert_eq!(
        chained.into_errors().unwrap().into_vec(),
        vec!["first", "second"],
    );
}

#[test]
fn and_then_chains_dependent_successes() {
    let result = Outcome::<&str, i32>::success(4)
        .map(|x| x * 2)
        .and_then(|x| {
            if x == 8 {
                Outcome::success(x + 1)
            } else {
                Outcome::failure("unexpected")
            }
        });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn apply_merges_failures_left_operand_first() {
    let f = Outcome::<&str, fn(i32) -> i32>::failure("left");
    let a = Outcome::<&str, i32>::failure("right");

    let merged = f.apply(a);
    assert_eq!(merged.into_errors().unwrap().into_vec(), vec!["left", "right"]);
}

#[test]
fn apply_keeps_the_only_failing_side() {
    let ok_fn = Outcome::<&str, fn(i32) -> i32>::success(|x| x + 1);
    let bad_arg = Outcome::<&str, i32>::failure("bad arg");
    assert_eq!(ok_fn.apply(bad_arg), Outcome::failure("bad arg"));

    let bad_fn = Outcome::<&str, fn(i32) -> i32>::failure("bad fn");
    let ok_arg = Outcome::<&str, i32>::success(1);
    assert_eq!(bad_fn.apply(ok_arg), Outcome::failure("bad fn"));
}

#[test]
fn accumulation_is_not_short_circuiting() {
    use outcome_rail::curry::curry3;

    fn sum(a: i32, b: i32, c: i32) -> i32 {
        a + b + c
    }

    let result = Outcome::<&str, _>::pure(curry3(sum))
        .apply(Outcome::failure("first bad"))
        .apply(Outcome::success(2))
        .apply(Outcome::failure("third bad"));

    assert_eq!(
        result.into_errors().unwrap().into_vec(),
        vec!["first bad", "third bad"],
    );
}

#[test]
fn zip_accumulates_both_sides() {
    let a = Outcome::<&str, i32>::failure("error1");
    let b = Outcome::<&str, i32>::failure("error2");
    assert_eq!(
        a.zip(b).into_errors().unwrap().into_vec(),
        vec!["error1", "error2"],
    );

    let a = Outcome::<&str, i32>::success(1);
    let b = Outcome::<&str, &str>::success("two");
    assert_eq!(a.zip(b).into_value(), Some((1, "two")));
}

#[test]
fn zip_with_combines_successes() {
    let a = Outcome::<&str, i32>::success(40);
    let b = Outcome::<&str, i32>::success(2);
    assert_eq!(a.zip_with(b, |x, y| x + y).into_value(), Some(42));
}

#[test]
fn map3_accumulates_in_argument_order() {
    let merged = Outcome::<&str, i32>::failure("a").map3(
        Outcome::failure("b"),
        Outcome::failure("c"),
        |a, b: i32, c: i32| a + b + c,
    );
    assert_eq!(merged.into_errors().unwrap().into_vec(), vec!["a", "b", "c"]);
}

#[test]
fn fold_runs_exactly_one_branch() {
    let success = Outcome::<&str, i32>::success(42);
    let rendered = success.fold(|v| format!("ok: {v}"), |_| unreachable!());
    assert_eq!(rendered, "ok: 42");

    let failure = Outcome::<&str, i32>::failure_many(["first", "second"]);
    let rendered = failure.fold(|_| unreachable!(), |messages| messages.join(", "));
    assert_eq!(rendered, "first, second");
}

#[test]
fn or_else_recovers_only_failures() {
    let success = Outcome::<&str, i32>::success(42);
    assert_eq!(success.or_else(|_| Outcome::success(0)).into_value(), Some(42));

    let failure = Outcome::<&str, i32>::failure("nope");
    assert_eq!(failure.or_else(|_| Outcome::success(0)).into_value(), Some(0));
}

#[test]
fn map_err_transforms_all_messages() {
    let failure: Outcome<&str, i32> = Outcome::failure_many(["a", "b"]);
    let mapped = failure.map_err(|m| format!("ERR:{m}"));

    let messages: Vec<_> = mapped.into_errors().unwrap().into_iter().collect();
    assert_eq!(messages, vec!["ERR:a".to_string(), "ERR:b".to_string()]);
}

#[test]
fn from_option_supplies_the_boundary_message() {
    assert_eq!(Outcome::from_option(Some(7), "absent"), Outcome::success(7));
    assert_eq!(
        Outcome::from_option(None::<i32>, "absent"),
        Outcome::failure("absent"),
    );
}

#[test]
fn from_result_wraps_a_single_error() {
    assert!(Outcome::from_result(Ok::<_, &str>(42)).is_success());

    let failure = Outcome::from_result(Err::<i32, &str>("boom"));
    assert_eq!(failure.into_errors().unwrap()[0], "boom");
}

#[test]
fn to_result_preserves_all_messages() {
    let failure: Outcome<&str, i32> = Outcome::failure_many(["first", "second"]);
    assert_eq!(failure.to_result().unwrap_err().len(), 2);
}

#[test]
fn iterators_cover_value_and_messages() {
    let success = Outcome::<&str, i32>::success(3);
    assert_eq!(success.iter().count(), 1);
    assert_eq!(success.iter_errors().count(), 0);

    let failure: Outcome<&str, i32> = Outcome::failure_many(["x", "y"]);
    assert_eq!(failure.iter().count(), 0);
    let collected: Vec<_> = failure.iter_errors().copied().collect();
    assert_eq!(collected, vec!["x", "y"]);

    let values: Vec<i32> = Outcome::<&str, i32>::success(5).into_iter().collect();
    assert_eq!(values, vec![5]);
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestData {
    id: i32,
}

#[test]
#[cfg(feature = "serde")]
fn outcome_round_trips_through_serde() {
    let success = Outcome::<String, TestData>::success(TestData { id: 1 });
    let serialized = serde_json::to_string(&success).unwrap();
    let deserialized: Outcome<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(success, deserialized);

    let failure = Outcome::<String, TestData>::failure("error".to_string());
    let serialized = serde_json::to_string(&failure).unwrap();
    let deserialized: Outcome<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(failure, deserialized);
}
