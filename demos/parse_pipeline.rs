//! Parses two request fields and combines them, first with fail-fast
//! sequencing and then with accumulating application, printing what each
//! strategy reports for the same unparseable input.

use outcome_rail::curry::curry2;
use outcome_rail::parse::try_parse_i32;
use outcome_rail::traits::OptionOutcomeExt;
use outcome_rail::Outcome;

const REQ_USER_ID: &str = "a123";
const REQ_OTHER_ID: &str = "b999";

fn do_something(user_id: i32, id: i32) -> i32 {
    user_id + id
}

fn report(label: &str, outcome: Outcome<&str, i32>) {
    println!("{label}:");
    outcome.fold(
        |value| println!("  {value}"),
        |messages| {
            for message in messages {
                println!("  Error: {message}");
            }
        },
    );
}

fn main() {
    // Dependent reading: stop at the first field that fails to parse.
    let fail_fast = try_parse_i32(REQ_USER_ID)
        .into_outcome("Invalid User ID")
        .and_then(|user_id| {
            try_parse_i32(REQ_OTHER_ID)
                .into_outcome("Invalid ID")
                .map(|id| do_something(user_id, id))
        });
    report("fail-fast", fail_fast);

    // Independent reading: parse both fields, report every failure.
    let user_id = try_parse_i32(REQ_USER_ID).into_outcome("Invalid User ID");
    let id = try_parse_i32(REQ_OTHER_ID).into_outcome("Invalid ID");
    let accumulated = Outcome::pure(curry2(do_something)).apply(user_id).apply(id);
    report("accumulating", accumulated);
}
