//! Registration tests through the public API.

use pretty_assertions::assert_eq;
use treeshell::commands::{CommandRegistry, Handler, Resolution};
use treeshell::terminal::ScriptedTerminal;
use treeshell::{Application, CommandContext, CommandResult, ShellError};

fn tagged(tag: &'static str) -> Handler {
    Box::new(move |ctx: &mut CommandContext<'_>| {
        ctx.info(tag);
        CommandResult::Done
    })
}

#[test]
fn test_every_registered_path_resolves_to_its_handler() {
    let paths = ["a", "b c", "b d e", "f g h i", "b d f"];
    let mut reg = CommandRegistry::new();
    for path in paths {
        reg.register(path, "", "", tagged(path)).unwrap();
    }

    let app = Application::new("test");
    for path in paths {
        let segments: Vec<&str> = path.split(' ').collect();
        let Resolution::Found(def) = reg.resolve(&segments) else {
            panic!("{path} did not resolve");
        };

        let mut term = ScriptedTerminal::default();
        def.run(&mut CommandContext::new(&app, &mut term));
        assert_eq!(term.output_text(), vec![path]);
    }
}

#[test]
fn test_duplicate_is_rejected_and_first_kept() {
    let mut app = Application::new("neo");
    app.register_command("greet", "", "first", |ctx| {
        ctx.info("first");
        CommandResult::Done
    })
    .unwrap();

    let err = app
        .register_command("  greet ", "", "second", |ctx| {
            ctx.info("second");
            CommandResult::Done
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "command has been registered: greet");

    let mut term = ScriptedTerminal::new(["greet"]);
    app.run_with(&mut term);
    assert_eq!(term.output_text(), vec!["first"]);
}

#[test]
fn test_leaf_and_group_conflicts_are_symmetric() {
    let mut reg = CommandRegistry::new();
    reg.register("a", "", "", tagged("a")).unwrap();
    assert!(matches!(
        reg.register("a b", "", "", tagged("a b")),
        Err(ShellError::DuplicateCommand { .. })
    ));

    let mut reg = CommandRegistry::new();
    reg.register("a b", "", "", tagged("a b")).unwrap();
    assert!(matches!(
        reg.register("a", "", "", tagged("a")),
        Err(ShellError::DuplicateCommand { .. })
    ));
}

#[test]
fn test_empty_registration_is_ignored() {
    let mut app = Application::new("neo");
    app.register_command("", "", "", |_| CommandResult::Done)
        .unwrap();
    assert_eq!(app.registry().len(), 2);
}

#[test]
fn test_render_is_deterministic() {
    let build = |order: &[&str]| {
        let mut reg = CommandRegistry::new();
        for path in order {
            reg.register(path, "u", "d", tagged("x")).unwrap();
        }
        reg.render()
    };

    let forward = build(&["x y", "a", "x b", "m"]);
    let backward = build(&["m", "x b", "a", "x y"]);
    assert_eq!(forward, backward);
    assert_eq!(forward, "a u d\nm u d\nx:\n b u d\n y u d\n");
}
