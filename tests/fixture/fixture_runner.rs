#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::fixture_loader::{
    FixtureFailure, FixtureResult, LocationCase, ParserKind, TestCase, load_fixtures,
};
/// Fixture runner
///
/// Runs every fixture case against the parser it names and collects all
/// mismatching fields before failing.
use meet_uri::{ParsedUri, parse_location_uri, parse_standard_uri};

fn parse(case: &LocationCase) -> Option<ParsedUri> {
    match case.parser {
        ParserKind::Location => parse_location_uri(case.input.as_deref()),
        ParserKind::Standard => case.input.as_deref().map(parse_standard_uri),
    }
}

fn check(
    failures: &mut Vec<FixtureFailure>,
    test_num: usize,
    case: &LocationCase,
    field: &'static str,
    expected: Option<&str>,
    actual: Option<&str>,
) {
    if expected != actual {
        failures.push(FixtureFailure {
            test_num,
            input: case.input.clone(),
            field,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        });
    }
}

pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::new();
    let mut test_num = 0;

    for test in tests {
        let TestCase::Location(case) = test else {
            continue;
        };
        test_num += 1;

        let mut failures = Vec::new();

        match (parse(&case), case.absent) {
            (None, true) => {}
            (Some(uri), true) => failures.push(FixtureFailure {
                test_num,
                input: case.input.clone(),
                field: "parsing",
                expected: "no location".to_string(),
                actual: format!("{uri:?}"),
            }),
            (None, false) => failures.push(FixtureFailure {
                test_num,
                input: case.input.clone(),
                field: "parsing",
                expected: "a location".to_string(),
                actual: "no location".to_string(),
            }),
            (Some(uri), false) => {
                let fields: [(&'static str, Option<&str>, Option<&str>); 9] = [
                    ("protocol", case.protocol.as_deref(), uri.protocol()),
                    ("host", case.host.as_deref(), uri.host()),
                    ("hostname", case.hostname.as_deref(), uri.hostname()),
                    ("port", case.port.as_deref(), uri.port()),
                    ("pathname", Some(case.pathname.as_str()), Some(uri.pathname())),
                    ("search", Some(case.search.as_str()), Some(uri.search())),
                    ("hash", Some(case.hash.as_str()), Some(uri.hash())),
                    (
                        "contextRoot",
                        Some(case.context_root.as_str()),
                        Some(uri.context_root()),
                    ),
                    ("room", case.room.as_deref(), uri.room()),
                ];
                for (field, expected, actual) in fields {
                    check(&mut failures, test_num, &case, field, expected, actual);
                }
            }
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[test]
fn test_location_fixtures() {
    let tests = load_fixtures();
    assert!(tests.len() > 20, "fixture file looks truncated");

    let result = run_fixtures(tests);

    for failure in &result.failures {
        eprintln!(
            "#{} {:?}: {} expected {} got {}",
            failure.test_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
}

#[test]
fn test_fixture_result_summary() {
    let mut result = FixtureResult::new();
    result.passed = 3;
    result.failed = 1;
    assert_eq!(result.summary(), "Passed: 3, Failed: 1");
}
