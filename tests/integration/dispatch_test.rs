//! End-to-end dispatch loop tests.

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use treeshell::terminal::{OutputLine, ScriptedTerminal};
use treeshell::{Application, CommandResult, LoopControl};

fn run(app: &Application, lines: &[&str]) -> ScriptedTerminal {
    let mut term = ScriptedTerminal::new(lines.iter().copied());
    app.run_with(&mut term);
    term
}

fn greeter() -> Application {
    let mut app = Application::new("neo");
    app.register_command("greet", "", "say hello", |ctx| {
        ctx.info("hello");
        CommandResult::Done
    })
    .unwrap();
    app
}

#[test]
fn test_padded_input_reaches_handler() {
    let term = run(&greeter(), &["  greet  "]);
    assert_eq!(term.output(), &[OutputLine::Plain("hello".to_string())]);
}

#[test]
fn test_exit_stops_loop() {
    let app = Application::new("neo");
    let term = run(&app, &["exit", "help"]);
    assert!(term.output().is_empty());
    assert_eq!(term.remaining(), 1);
}

#[test]
fn test_blank_lines_are_silent() {
    let term = run(&greeter(), &["", "   ", "\t", "greet"]);
    assert_eq!(term.output_text(), vec!["hello"]);
}

#[test]
fn test_unknown_input_prints_not_found() {
    let term = run(&greeter(), &["greet me", "nope", "help me"]);
    assert_eq!(
        term.output(),
        &[
            OutputLine::Plain("command not found".to_string()),
            OutputLine::Plain("command not found".to_string()),
            OutputLine::Plain("command not found".to_string()),
        ]
    );
}

#[test]
fn test_failure_is_reported_and_loop_continues() {
    let mut app = greeter();
    app.register_command("fail", "", "always fails", |_| {
        CommandResult::failure("boom")
    })
    .unwrap();

    let term = run(&app, &["fail", "greet"]);
    assert_eq!(
        term.output(),
        &[
            OutputLine::Error("Err: boom".to_string()),
            OutputLine::Plain("hello".to_string()),
        ]
    );
}

#[test]
fn test_help_lists_every_command() {
    let mut app = Application::new("neo");
    app.register_command("config set", "<key> <value>", "set a value", |_| {
        CommandResult::Done
    })
    .unwrap();
    app.register_command("print", "[msg]", "show error message", |_| {
        CommandResult::Done
    })
    .unwrap();

    let term = run(&app, &["help"]);
    assert_eq!(
        term.output_text(),
        vec![
            "config:\n set <key> <value> set a value\nexit  quit application\nhelp  list all commands\nprint [msg] show error message"
        ]
    );

    let listing = term.output_text()[0];
    for (path, def) in app.registry().commands() {
        let line = listing
            .lines()
            .find(|l| l.trim_start().starts_with(&def.name))
            .unwrap_or_else(|| panic!("missing {path}"));
        assert!(line.contains(&def.usage));
        assert!(line.contains(&def.description));
    }
}

#[test]
fn test_handlers_keep_state_through_closures() {
    let counter = Rc::new(Cell::new(0));
    let mut app = Application::new("neo");

    let seen = Rc::clone(&counter);
    app.register_command("count", "", "count invocations", move |ctx| {
        seen.set(seen.get() + 1);
        ctx.info(&seen.get().to_string());
        CommandResult::Done
    })
    .unwrap();

    let term = run(&app, &["count", "count", "count"]);
    assert_eq!(term.output_text(), vec!["1", "2", "3"]);
    assert_eq!(counter.get(), 3);
}

#[test]
fn test_handler_can_request_exit() {
    let mut app = greeter();
    app.register_command("quit now", "", "", |ctx| {
        ctx.info("bye");
        CommandResult::Exit
    })
    .unwrap();

    let term = run(&app, &["quit   now", "greet"]);
    assert_eq!(term.output_text(), vec!["bye"]);
}

#[test]
fn test_read_error_ends_loop_quietly() {
    let app = greeter();
    let mut term = ScriptedTerminal::failing_after(["greet"]);
    app.run_with(&mut term);
    assert_eq!(term.output_text(), vec!["hello"]);
}

#[test]
fn test_dispatch_without_terminal() {
    let app = greeter();
    let mut sink = ScriptedTerminal::default();
    assert_eq!(app.dispatch("greet", &mut sink), LoopControl::Continue);
    assert_eq!(app.dispatch("exit", &mut sink), LoopControl::Stop);
    assert_eq!(sink.output_text(), vec!["hello"]);
}

#[test]
fn test_fallible_handler_converts_errors() {
    let mut app = Application::new("neo");
    app.register_command("parse", "", "", |_| {
        "12x".parse::<u32>().map(|_| ()).into()
    })
    .unwrap();

    let term = run(&app, &["parse"]);
    assert_eq!(
        term.output(),
        &[OutputLine::Error(
            "Err: invalid digit found in string".to_string()
        )]
    );
}
