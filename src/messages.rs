//! Text shown to the players.

use keypad_tictactoe::{Board, render, render_keypad};

/// Re-prompt after a rejected token.
pub const RETRY_PROMPT: &str = "Вы ввели что-то не то. \nВведите снова: ";

/// Announced when the ninth move completes no line.
pub const DRAW: &str = "Ничья!";

/// Question asked after every round.
pub const REMATCH_PROMPT: &str = "\nХотите попробовать еще? Да[д]\\Нет[что-угодно]: ";

/// Prompt for the mover's next cell.
pub fn move_prompt(mover: impl std::fmt::Display) -> String {
    format!("Пользователь {}, введите число ", mover)
}

/// Announcement for the winner of a round.
pub fn winner(mover: impl std::fmt::Display) -> String {
    format!("Пользователь {} выиграл!!!", mover)
}

/// Rules banner: an empty board beside the keypad keys that address it.
pub fn rules_banner() -> String {
    let mut banner = String::from(
        "Это игра \"Крестики-Нолики\"\n\
         Первыми ходят Х, вторыми О.\n\
         Для ввода используете цифры от 1-9 на боковой панели клавиатуры.\n",
    );
    let board = render(&Board::new());
    let keypad = render_keypad();
    for (i, (left, right)) in board.lines().zip(keypad.lines()).enumerate() {
        let arrow = if i == 1 { " <-> " } else { "     " };
        banner.push_str(left);
        banner.push_str(arrow);
        banner.push_str(right);
        banner.push('\n');
    }
    banner
}
