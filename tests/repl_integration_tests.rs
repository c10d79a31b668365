use abacus::core::config::ResolvedConfig;
use abacus::core::state::App;
use abacus::repl::run_session;

// ============================================================================
// Helper Functions
// ============================================================================

/// Runs a scripted session without the banner and returns (output, app).
fn run_script(script: &str) -> (String, App) {
    let config = ResolvedConfig {
        show_banner: false,
        ..ResolvedConfig::default()
    };
    let mut app = App::new(&config);
    let mut output = Vec::new();
    run_session(&mut app, script.as_bytes(), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), app)
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn test_expressions_update_session_calculator() {
    let (out, app) = run_script("2 + 3\n10 * 2\nexit\n");
    assert!(out.contains("→ 5.0"));
    assert!(out.contains("→ 20.0"));
    assert_eq!(app.calculator.history(), &[0.0, 5.0, 20.0]);
    assert!(app.should_quit);
}

#[test]
fn test_errors_are_reported_and_loop_continues() {
    let (out, app) = run_script("1/0\nfoo(1)\n2 +\n7\nexit\n");
    assert!(out.contains("✗ division error"));
    assert!(out.contains("✗ name error: unknown name 'foo'"));
    assert!(out.contains("✗ parse error"));
    assert!(out.contains("→ 7.0"));
    assert_eq!(app.calculator.history(), &[0.0, 7.0]);
}

#[test]
fn test_history_undo_reset_commands() {
    let (out, app) = run_script("4\n8\nhistory\nundo\nundo\nundo\nreset\nexit\n");
    assert!(out.contains("  ▶ [  2]  8.0"));
    assert!(out.contains("→ 4.0"));
    assert!(out.contains("✗ undo error: nothing to undo"));
    assert!(out.contains("→ Reset to 0.0"));
    assert_eq!(app.calculator.history(), &[0.0]);
}

#[test]
fn test_memory_commands() {
    let (out, app) = run_script("12\nms\nreset\nmr\nmem\nmc\nexit\n");
    assert!(out.contains("Memory ← 12.0"));
    assert!(out.contains("Memory: 12.0"));
    assert!(out.contains("Memory cleared."));
    assert_eq!(app.calculator.result(), 12.0);
    assert_eq!(app.calculator.memory(), 0.0);
}

#[test]
fn test_blank_lines_are_ignored() {
    let (_, app) = run_script("\n   \n3\nquit\n");
    assert_eq!(app.calculator.steps(), 1);
}

#[test]
fn test_end_of_input_quits_cleanly() {
    let (out, app) = run_script("1 + 1\n");
    assert!(out.trim_end().ends_with("Bye!"));
    assert!(app.should_quit);
    assert_eq!(app.calculator.result(), 2.0);
}

#[test]
fn test_lines_after_exit_are_not_read() {
    let (_, app) = run_script("exit\n5\n");
    assert_eq!(app.calculator.steps(), 0);
}

#[test]
fn test_banner_shown_when_enabled() {
    let mut app = App::new(&ResolvedConfig::default());
    let mut output = Vec::new();
    run_session(&mut app, "exit\n".as_bytes(), &mut output).unwrap();
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Commands"));
    assert!(out.contains("Starting value: 0.0"));
    assert!(out.contains("calc> "));
}
