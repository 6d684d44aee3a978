use std::{cell::RefCell, rc::Rc, str::from_utf8};

use cash_register::{bin_utils::Service, processor::CommandProcessError};

const TEST_FILE: &str = include_str!("session.txt");

fn run_session(input: &str) -> (Vec<String>, Vec<String>) {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let reported = Rc::clone(&errors);
    let mut output = Vec::new();
    let service = Service {
        input: input.as_bytes(),
        output: &mut output,
        error_printer: Box::new(move |_line, err: CommandProcessError| {
            reported.borrow_mut().push(err.to_string())
        }),
    };
    service.run().unwrap();

    let lines = from_utf8(&output)
        .unwrap()
        .lines()
        .map(ToOwned::to_owned)
        .collect();
    let errors = errors.borrow().clone();
    (lines, errors)
}

#[test]
fn process_session() {
    let (lines, errors) = run_session(TEST_FILE);
    assert_eq!(
        lines,
        vec![
            "ready",
            "$0 0 0 0 0 0",
            "$68 1 2 3 4 5",
            "$128 2 4 6 4 10",
            "$43 1 0 3 4 0",
            "$29 1 0 1 2 0",
            "$29 1 0 1 2 0",
        ]
    );
    assert_eq!(
        errors,
        vec![
            "Sorry - Insufficient Funds",
            "Sorry - Insufficient Funds",
            "Sorry - Invalid Amount",
            "Sorry - Invalid Amount",
            "Sorry - Invalid Command",
            "Sorry - Invalid Amount",
        ]
    );
}

#[test]
fn empty_session() {
    let (lines, errors) = run_session("");
    assert_eq!(lines, vec!["ready"]);
    assert!(errors.is_empty());
}

#[test]
fn change_is_withdrawn() {
    let (lines, errors) = run_session("put 2 2 2 2 2\nchange 59\nchange 0\n");
    assert_eq!(
        lines,
        vec!["ready", "$76 2 2 2 2 2", "$17 0 1 1 0 2", "$17 0 1 1 0 2"]
    );
    assert!(errors.is_empty());
}

#[test]
fn huge_counts_are_rejected_not_fatal() {
    let (lines, errors) = run_session(
        "put 9223372036854775807 0 0 0 0\nput 1 0 0 0 0\nshow\nchange 9223372036854775807\n",
    );
    assert_eq!(
        lines,
        vec![
            "ready",
            "$184467440737095516140 9223372036854775807 0 0 0 0",
            "$184467440737095516140 9223372036854775807 0 0 0 0",
        ]
    );
    assert_eq!(
        errors,
        vec!["Sorry - Invalid Amount", "Sorry - Insufficient Funds"]
    );
}
