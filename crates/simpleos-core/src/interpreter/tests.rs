use chrono::Local;
use chrono::NaiveDateTime;
use chrono::TimeZone;

use super::*;

fn output_of(line: &str) -> Vec<String> {
    let output = interpret(line, Local::now());
    assert_eq!(output[0], format!(">>> {line}"));
    output[1..].to_vec()
}

#[test]
fn test_every_line_gets_a_framing_line() {
    for line in ["", "echo", "help", "date", "foobar", "  help  ", "ECHO hi", "日本語"] {
        let output = interpret(line, Local::now());
        assert!(!output.is_empty());
        assert_eq!(output[0], format!(">>> {line}"));
    }
}

#[test]
fn test_echo_strips_prefix_and_space() {
    assert_eq!(output_of("echo hello"), vec!["hello"]);
    assert_eq!(output_of("echo   padded"), vec!["  padded"]);
}

#[test]
fn test_echo_swallows_any_fifth_character() {
    assert_eq!(output_of("echoXhello"), vec!["hello"]);
    assert_eq!(Command::parse("echoes"), Command::Echo("s".to_string()));
}

#[test]
fn test_short_echo_lines_echo_nothing() {
    assert_eq!(Command::parse("echo"), Command::Echo(String::new()));
    assert_eq!(Command::parse("echo "), Command::Echo(String::new()));
    assert_eq!(output_of("echo"), vec![""]);
}

#[test]
fn test_echo_counts_characters_not_bytes() {
    assert_eq!(output_of("echoé日本"), vec!["日本"]);
}

#[test]
fn test_help_lists_commands_in_order() {
    assert_eq!(
        output_of("help"),
        vec![
            "Available commands:",
            "echo [text] - Repeats the text",
            "help - Show this help message",
            "date - Show current date and time",
        ]
    );
}

#[test]
fn test_help_and_date_are_exact_matches() {
    assert_eq!(
        Command::parse("help "),
        Command::Unknown("help ".to_string())
    );
    assert_eq!(Command::parse("Date"), Command::Unknown("Date".to_string()));
}

#[test]
fn test_date_parses_back_within_a_second() {
    let before = Local::now();
    let output = output_of("date");
    assert_eq!(output.len(), 1);

    let parsed = NaiveDateTime::parse_from_str(&output[0], "%Y-%m-%d %H:%M:%S%.f").unwrap();
    let parsed = Local.from_local_datetime(&parsed).earliest().unwrap();
    let skew = (parsed - before).num_milliseconds().abs();
    assert!(skew <= 1000, "skew was {skew}ms");
}

#[test]
fn test_date_renders_given_instant() {
    let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    assert_eq!(
        interpret("date", now),
        vec![">>> date", "2024-03-09 07:05:01.000000"]
    );
}

#[test]
fn test_unknown_command_is_reported() {
    assert_eq!(output_of("foobar"), vec!["Command not recognized: foobar"]);
    assert_eq!(output_of(""), vec!["Command not recognized: "]);
}

#[test]
fn test_interpret_is_repeatable() {
    let now = Local::now();
    for line in ["echo same", "help", "date", "nope"] {
        assert_eq!(interpret(line, now), interpret(line, now));
    }
}

#[test]
fn test_command_names() {
    assert_eq!(Command::parse("echo x").name(), Some("echo"));
    assert_eq!(Command::parse("help").name(), Some("help"));
    assert_eq!(Command::parse("date").name(), Some("date"));
    assert_eq!(Command::parse("ls").name(), None);
}
