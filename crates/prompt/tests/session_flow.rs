//! End-to-end prompt sessions over in-memory input.

use std::io::{BufRead, Cursor};

use lineprompt_core::AppError;
use lineprompt_prompt::{validators, FormattingPolicy, InputOptions, Prompt, SelectOptions};

#[test]
fn test_one_line_per_call() {
    let input = "Ada\nyes\n2\nleftover\n";
    let mut prompt = Prompt::new(Cursor::new(input), Vec::new(), FormattingPolicy::standard());

    let name = prompt.ask("Name", None).unwrap();
    let agreed = prompt.confirm("Agree", None).unwrap();
    let mode = prompt
        .select("Mode", &["fast", "slow"], Some(&SelectOptions::new().with_default(1)))
        .unwrap();

    assert_eq!(name, "Ada");
    assert!(agreed);
    assert_eq!(mode.text, "slow");
    assert_eq!(mode.index, 1);

    let (mut reader, written) = prompt.into_parts();
    let mut rest = String::new();
    reader.read_line(&mut rest).unwrap();
    assert_eq!(rest, "leftover\n");

    assert_eq!(
        String::from_utf8(written).unwrap(),
        "Name? Agree?   1 - fast\n  2 - slow\nMode? [1] "
    );
}

#[test]
fn test_failed_call_still_consumes_its_line() {
    let input = "this is wrong\nno\n";
    let mut prompt = Prompt::new(Cursor::new(input), Vec::new(), FormattingPolicy::default());

    let opts = InputOptions::new().with_validator(validators::exact("42", "the answer must be 42"));
    match prompt.ask("what is the meaning of life", Some(&opts)) {
        Err(AppError::ValidationFailed(msg)) => assert_eq!(msg, "the answer must be 42"),
        other => panic!("expected ValidationFailed, got {:?}", other),
    }

    assert!(!prompt.confirm("Sure", None).unwrap());
}

#[test]
fn test_remove_database_confirmation() {
    let mut prompt = Prompt::new(Cursor::new("\n"), Vec::new(), FormattingPolicy::standard());
    let opts = InputOptions::new().with_default("no").with_question_mark();

    let remove = prompt
        .confirm(
            &format!(
                "Are you sure you want to permanently remove the database {:?}",
                "somedatabase"
            ),
            Some(&opts),
        )
        .unwrap();

    assert!(!remove);
    let (_, written) = prompt.into_parts();
    assert_eq!(
        String::from_utf8(written).unwrap(),
        "Are you sure you want to permanently remove the database \"somedatabase\"? [no] "
    );
}

#[test]
fn test_retry_loop_owned_by_caller() {
    let input = "3\nabc\n1\n";
    let mut prompt = Prompt::new(Cursor::new(input), Vec::new(), FormattingPolicy::default());
    let choices = ["one", "two"];

    let mut errors = Vec::new();
    let selection = loop {
        match prompt.select("pick", &choices, None) {
            Ok(selection) => break selection,
            Err(err) if err.is_retryable() => errors.push(err.to_string()),
            Err(err) => panic!("unexpected error: {}", err),
        }
    };

    assert_eq!(selection.index, 0);
    assert_eq!(
        errors,
        vec![
            "invalid selection: 3 is not between 1 and 2".to_string(),
            "invalid selection: \"abc\" is not a number".to_string(),
        ]
    );
}
