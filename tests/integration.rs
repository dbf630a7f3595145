//! Integration tests for the calculator session.

use reactive_sum::{
    run_session, CommandInterpreter, EndReason, IoWrapper, ScriptedConsole, SessionConfig,
    Slot, SubscriptionFilter, SumEvent,
};
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

fn feed(interpreter: &mut CommandInterpreter, lines: &[&str]) -> (ScriptedConsole, Vec<bool>) {
    let mut console = ScriptedConsole::new(lines.iter().copied());
    let mut results = Vec::new();
    for _ in lines {
        results.push(interpreter.parse_input(&mut console).unwrap());
    }
    (console, results)
}

// --- End-to-End Scenarios ---

#[test]
fn test_assign_both_then_quit() {
    let mut interpreter = CommandInterpreter::new();

    let (console, results) = feed(&mut interpreter, &["a: 5", "b: 3", "quit"]);

    assert_eq!(results, [true, true, false]);
    assert_eq!(console.messages().last().map(String::as_str), Some("Sum: 8"));
    assert_eq!(interpreter.model().a(), 5);
    assert_eq!(interpreter.model().b(), 3);
    assert_eq!(interpreter.model().sum(), 8);
}

#[test]
fn test_repeated_value_suppresses_sum() {
    let mut interpreter = CommandInterpreter::new();

    let (console, _) = feed(&mut interpreter, &["a: 33", "b: 1", "a: 33"]);

    let sums: Vec<_> = console
        .messages()
        .iter()
        .filter(|m| m.starts_with("Sum: "))
        .collect();
    assert_eq!(sums.len(), 2);
}

#[test]
fn test_third_unchanged_write_is_silent() {
    let mut interpreter = CommandInterpreter::new();

    let (console, _) = feed(&mut interpreter, &["a: 7"]);
    assert_eq!(console.messages(), ["Sum: 7"]);

    // a unchanged, then b changes: a's flag is still clear
    let (console, _) = feed(&mut interpreter, &["a: 7", "b: 1"]);
    assert!(console.messages().is_empty());

    let (console, _) = feed(&mut interpreter, &["a: 7"]);
    assert!(console.messages().is_empty());
}

#[test]
fn test_both_slots_must_change_again() {
    let mut interpreter = CommandInterpreter::new();

    let (console, _) = feed(
        &mut interpreter,
        &["a: 1", "b: 2", "b: 2", "a: 10", "b: 20", "a: 11"],
    );

    // b: 2 repeated clears b's flag; a: 10 alone cannot report.
    assert_eq!(console.messages(), ["Sum: 1", "Sum: 3", "Sum: 30", "Sum: 31"]);
}

#[test]
fn test_invalid_input_does_not_touch_model() {
    let mut interpreter = CommandInterpreter::new();

    let (console, results) = feed(&mut interpreter, &["a: 4", "junkkkk", "b: 4"]);

    assert_eq!(results, [true, true, true]);
    assert_eq!(
        console.messages(),
        ["Sum: 4", "Error: Invalid input", "Sum: 8"]
    );
}

// --- Console Session ---

#[test]
fn test_stdio_style_session() {
    let input = Cursor::new("a: 2\r\nb: 40\nwhat\nQuit\nb: 1\n");
    let mut io = IoWrapper::new(input, Vec::new());
    let mut interpreter = CommandInterpreter::new();

    let summary =
        run_session(&mut interpreter, &mut io, &SessionConfig::default()).unwrap();

    let (_, out) = io.into_parts();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Imperative Sum\n\
         Type 'a: <number>' and 'b: <number>' to try it\n\
         Sum: 2\n\
         Sum: 42\n\
         Error: Invalid input\n"
    );
    assert_eq!(summary.ended_by, EndReason::Quit);
    assert_eq!(summary.cycles, 4);
    assert_eq!(summary.invalid_inputs, 1);
    assert_eq!(interpreter.model().b(), 40);
}

#[test]
fn test_session_ends_on_eof() {
    let mut io = IoWrapper::new(Cursor::new("a: 1\n"), Vec::new());
    let mut interpreter = CommandInterpreter::new();

    let summary =
        run_session(&mut interpreter, &mut io, &SessionConfig::quiet()).unwrap();

    assert_eq!(summary.ended_by, EndReason::InputExhausted);
    assert_eq!(summary.cycles, 1);
    assert_eq!(summary.sums_reported, 1);
}

// --- Subscriptions ---

fn record(
    interpreter: &mut CommandInterpreter,
    filter: SubscriptionFilter,
) -> Rc<RefCell<Vec<SumEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    interpreter.subscribe(filter, move |event| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn test_event_stream_for_session() {
    let mut interpreter = CommandInterpreter::new();
    let events = record(&mut interpreter, SubscriptionFilter::all());

    let mut console = ScriptedConsole::new(["a: 1", "x", "quit"]);
    run_session(&mut interpreter, &mut console, &SessionConfig::quiet()).unwrap();

    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|e| match e {
            SumEvent::SlotWritten { .. } => "write",
            SumEvent::SumUpdated { .. } => "sum",
            SumEvent::InvalidInput { .. } => "invalid",
            SumEvent::SessionEnded { .. } => "end",
        })
        .collect();
    assert_eq!(kinds, ["write", "sum", "invalid", "end"]);
}

#[test]
fn test_subscriber_only_sees_later_events() {
    let mut interpreter = CommandInterpreter::new();
    feed(&mut interpreter, &["a: 3", "b: 4"]);

    let early = record(&mut interpreter, SubscriptionFilter::writes());
    feed(&mut interpreter, &["a: 5"]);
    let late = record(&mut interpreter, SubscriptionFilter::writes());
    feed(&mut interpreter, &["b: 6"]);

    let early = early.borrow();
    assert_eq!(early.len(), 2);
    assert!(matches!(
        early[0],
        SumEvent::SlotWritten { slot: Slot::A, value: 5, .. }
    ));

    let late = late.borrow();
    assert_eq!(late.len(), 1);
    assert!(matches!(
        late[0],
        SumEvent::SlotWritten { slot: Slot::B, value: 6, changed: true, .. }
    ));
}

#[test]
fn test_events_serialize_as_tagged_json() {
    let mut interpreter = CommandInterpreter::new();
    let events = record(&mut interpreter, SubscriptionFilter::sums());

    feed(&mut interpreter, &["b: 12"]);

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    let json = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(json["type"], "sum_updated");
    assert_eq!(json["snapshot"]["sum"], 12);
    assert_eq!(json["snapshot"]["updated"], true);

    let back: SumEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, events[0]);
}
