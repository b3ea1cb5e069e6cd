//! Full conversations through the command loop over in-memory I/O.

mod fixtures;

use contact_assistant::session::run_session;
use fixtures::*;

async fn converse(script: &str) -> (String, contact_assistant::Assistant) {
    let mut assistant = assistant_on(date(31, 12, 2024));
    let mut output = Vec::new();
    run_session(&mut assistant, script.as_bytes(), &mut output)
        .await
        .unwrap();
    (String::from_utf8(output).unwrap(), assistant)
}

#[tokio::test]
async fn test_full_conversation() {
    let script = "\
hello
add Zoe 0501234567
add-birthday Zoe 02.01.1990
add Max 0671112233
add-birthday Max 10.01.1990
birthdays
phone Zoe
exit
";
    let (output, assistant) = converse(script).await;

    let replies: Vec<&str> = output
        .split("Enter a command: ")
        .map(str::trim_end)
        .collect();
    assert_eq!(
        replies,
        vec![
            "Welcome to the assistant bot!",
            "How can I help you?",
            "Contact added.",
            "Birthday added.",
            "Contact added.",
            "Birthday added.",
            "Zoe — 02.01.2025",
            "0501234567",
            "Good bye!",
        ]
    );
    assert_eq!(assistant.directory().len(), 2);
}

#[tokio::test]
async fn test_conversation_survives_errors() {
    let script = "\
add Ann
change Ann 1111111111 2222222222
add Ann 123
bogus command
all
close
";
    let (output, _) = converse(script).await;

    let replies: Vec<&str> = output
        .split("Enter a command: ")
        .map(str::trim_end)
        .collect();
    assert_eq!(
        replies,
        vec![
            "Welcome to the assistant bot!",
            "Not enough arguments.",
            "Contact not found.",
            "Phone number must contain exactly 10 digits",
            "",
            "Contact name: Ann, phones: , birthday: None",
            "Good bye!",
        ]
    );
}

#[tokio::test]
async fn test_directory_lives_only_for_the_session() {
    let (_, first) = converse("add Ann 1111111111\nexit\n").await;
    assert_eq!(first.directory().len(), 1);

    let (output, second) = converse("phone Ann\nexit\n").await;
    assert!(output.contains("Contact not found."));
    assert!(second.directory().is_empty());
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_end_the_session() {
    let mut assistant = assistant_on(date(31, 12, 2024));
    let script: &[u8] = b"add Ann 1111111111\nadd Caf\xe9 2222222222\nphone Ann\nexit\n";
    let mut output = Vec::new();
    run_session(&mut assistant, script, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    let replies: Vec<&str> = output
        .split("Enter a command: ")
        .map(str::trim_end)
        .collect();
    assert_eq!(
        replies,
        vec![
            "Welcome to the assistant bot!",
            "Contact added.",
            "Contact added.",
            "1111111111",
            "Good bye!",
        ]
    );
    assert!(assistant.directory().find("Caf\u{FFFD}").is_some());
}
