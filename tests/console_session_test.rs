//! Tests for full console sessions over scripted input.

use keypad_games::{
    BufLineReader, Console, ConsoleError, Outcome, Player, RETRY_PROMPT, ScriptedReader, Settings,
    move_prompt, rules_banner, winner,
};

/// Runs a session over `lines`, returning the result, unread line count
/// and everything written.
fn run(
    lines: &[&str],
    settings: Settings,
) -> (Result<keypad_games::SessionSummary, ConsoleError>, usize, String) {
    let mut console = Console::new(ScriptedReader::new(lines.iter().copied()), Vec::new(), settings);
    let result = console.run_session();
    let (reader, out) = console.into_parts();
    (
        result,
        reader.remaining(),
        String::from_utf8(out).expect("Output is UTF-8"),
    )
}

fn quiet() -> Settings {
    Settings::default().without_rules()
}

#[test]
fn test_x_wins_on_fifth_move() {
    let (result, remaining, out) = run(&["5", "1", "6", "2", "4", "н"], quiet());
    let summary = result.expect("Session completes");
    assert_eq!(*summary.rounds(), 1);
    assert_eq!(*summary.x_wins(), 1);
    assert_eq!(remaining, 0);

    assert!(out.contains(&winner(Player::X)));
    assert!(out.contains("\n| | | |\n|X|X|X|\n|O|O| |\n\n"));
    // Prompts alternate X, O, X, O, X.
    assert_eq!(out.matches(&move_prompt(Player::X)).count(), 3);
    assert_eq!(out.matches(&move_prompt(Player::O)).count(), 2);
}

#[test]
fn test_draw_after_ninth_move() {
    let (result, _, out) = run(&["7", "8", "9", "5", "4", "6", "2", "1", "3"], quiet());
    let summary = result.expect("Session completes");
    assert_eq!(*summary.draws(), 1);
    assert_eq!(out.matches("Ничья!").count(), 1);
    assert!(!out.contains("выиграл"));
    assert!(out.contains("|X|O|X|\n|X|O|O|\n|O|X|X|\n"));
}

#[test]
fn test_occupied_cell_reprompts_next_player() {
    let (result, _, out) = run(&["5", "5", "1", "6", "2", "4"], quiet());
    assert!(result.is_ok());
    assert_eq!(out.matches(RETRY_PROMPT).count(), 1);
    // The retry belongs to O's turn, after O's prompt.
    let o_prompt = out.find(&move_prompt(Player::O)).unwrap();
    let retry = out.find(RETRY_PROMPT).unwrap();
    assert!(retry > o_prompt);
}

#[test]
fn test_invalid_tokens_each_reprompt() {
    let (result, _, out) = run(&["0", "10", "a", "5", "1", "6", "2", "4"], quiet());
    let summary = result.expect("Session completes");
    assert_eq!(*summary.x_wins(), 1);
    assert_eq!(out.matches(RETRY_PROMPT).count(), 3);
    assert_eq!(out.matches(&move_prompt(Player::X)).count(), 3);
}

#[test]
fn test_rematch_starts_fresh_round() {
    let lines = [
        "5", "1", "6", "2", "4", "д", // X wins
        "1", "7", "2", "8", "6", "9", "нет", // O wins
    ];
    let (result, remaining, out) = run(&lines, quiet());
    let summary = result.expect("Session completes");
    assert_eq!(*summary.rounds(), 2);
    assert_eq!(*summary.x_wins(), 1);
    assert_eq!(*summary.o_wins(), 1);
    assert_eq!(remaining, 0);
    // Cell 5 was X's in round one and is free again in round two.
    assert!(!out.contains(RETRY_PROMPT));
}

#[test]
fn test_banner_printed_once() {
    let (_, _, out) = run(&["5", "1", "6", "2", "4", "н"], Settings::default());
    assert!(out.starts_with(&rules_banner()));
    assert_eq!(out.matches("|7|8|9|").count(), 1);
}

#[test]
fn test_custom_rematch_token() {
    let settings = Settings::new("y".to_string(), false);
    let lines = ["5", "1", "6", "2", "4", "y", "5", "1", "6", "2", "4", "д"];
    let (result, _, _) = run(&lines, settings);
    assert_eq!(*result.expect("Session completes").rounds(), 2);
}

#[test]
fn test_input_closed_mid_round() {
    let (result, _, _) = run(&["5", "1"], quiet());
    assert!(matches!(result, Err(ConsoleError::InputClosed)));
}

#[test]
fn test_round_outcome_directly() {
    let mut console = Console::new(
        ScriptedReader::new(["1", "7", "2", "8", "6", "9"]),
        Vec::new(),
        quiet(),
    );
    assert_eq!(console.play_round().unwrap(), Outcome::Winner(Player::O));
}

#[test]
fn test_undecodable_line_is_reprompted() {
    let input: &[u8] = b"\xff\xfe\n5\n1\n6\n2\n4\n";
    let mut console = Console::new(BufLineReader::new(input), Vec::new(), quiet());
    let summary = console.run_session().expect("Session completes");
    assert_eq!(*summary.x_wins(), 1);
    let (_, out) = console.into_parts();
    let out = String::from_utf8(out).expect("Output is UTF-8");
    assert_eq!(out.matches(RETRY_PROMPT).count(), 1);
}
