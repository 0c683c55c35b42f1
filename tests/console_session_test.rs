//! Tests for the interactive console session.

use band_of_the_hour::{Console, Roster, Seat, Session, Slot, StadiumLayout, Weight, play};
use std::io::Cursor;

fn transcript(input: &str) -> String {
    let console = Console::new(Cursor::new(input.to_string()), Vec::new());
    let output = play(console, None).expect("session should not fail");
    String::from_utf8(output).expect("output should be UTF-8")
}

fn session(rows: &[usize], input: &str) -> Session<Cursor<String>, Vec<u8>> {
    let console = Console::new(Cursor::new(input.to_string()), Vec::new());
    Session::new(console, Roster::new(rows).unwrap())
}

fn output_of(session: Session<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn test_full_transcript() {
    let output = transcript("1\n2\nA\nA\n1\n60\nP\nX\n");

    let expected = "\
Welcome to the Band of the Hour
--------------------------------
Please enter number of rows: Please enter number of positions in row A: 

(A)dd, (R)emove, (P)rint, e(X)it: Please enter row letter: \
Please enter position number (1 to 2): Please enter weight (45.0 to 200.0): \
****** Musician added.

(A)dd, (R)emove, (P)rint, e(X)it: A:  60.0   0.0  [  60.0,     30.0]

(A)dd, (R)emove, (P)rint, e(X)it: Exiting...
";
    assert_eq!(output, expected);
}

#[test]
fn test_setup_reprompts_until_in_range() {
    let output = transcript("0 11 -3 2 9 0 8 1 x\n");

    assert_eq!(output.matches("Please enter number of rows: ").count(), 4);
    assert_eq!(
        output
            .matches("Please enter number of positions in row A: ")
            .count(),
        3
    );
    assert_eq!(
        output
            .matches("Please enter number of positions in row B: ")
            .count(),
        1
    );
    assert_eq!(output.matches("ERROR: Out of range, try again").count(), 5);
    assert!(output.ends_with("Exiting...\n"));
}

#[test]
fn test_setup_rejects_malformed_number() {
    let output = transcript("two 1 1 X");
    assert!(output.contains("ERROR: Invalid number, try again"));
    assert_eq!(output.matches("Please enter number of rows: ").count(), 2);
}

#[test]
fn test_layout_skips_setup_questions() {
    let layout = StadiumLayout::new(vec![3, 1]);
    let console = Console::new(Cursor::new("p\nx\n".to_string()), Vec::new());
    let output = String::from_utf8(play(console, Some(&layout)).unwrap()).unwrap();

    assert!(output.starts_with("Welcome to the Band of the Hour\n"));
    assert!(!output.contains("Please enter number of rows"));
    assert!(output.contains("B:   0.0  [   0.0,      0.0]"));
}

#[test]
fn test_invalid_menu_option() {
    let mut session = session(&[2], "Q\nX\n");
    session.run().unwrap();
    let output = output_of(session);
    assert!(output.contains("ERROR: Invalid option, try again"));
    assert_eq!(output.matches("(A)dd, (R)emove, (P)rint, e(X)it: ").count(), 2);
}

#[test]
fn test_add_to_occupied_slot_skips_weight() {
    let mut session = session(&[2], "A A 1 80 A a 1 X");
    session.run().unwrap();

    assert_eq!(
        session.roster().slot(Seat::new(0, 1)),
        Some(Slot::Occupied(Weight::new(80.0).unwrap()))
    );
    let output = output_of(session);
    assert!(output.contains("ERROR: There is already a musician there."));
    assert_eq!(output.matches("Please enter weight").count(), 1);
}

#[test]
fn test_add_rejects_bad_row_position_and_weight() {
    let mut session = session(&[2], "A C A A 3 A A 1 20 A A 1 heavy X");
    session.run().unwrap();

    assert!(session.roster().rows().iter().flatten().all(Slot::is_vacant));
    let output = output_of(session);
    assert_eq!(output.matches("ERROR: Out of range, try again").count(), 3);
    assert_eq!(output.matches("ERROR: Invalid number, try again").count(), 1);
}

#[test]
fn test_add_rejects_average_limit() {
    let mut session = session(&[2], "A A 1 60 A A 2 200 X");
    session.run().unwrap();

    assert_eq!(session.roster().row_total(0), 60.0);
    let output = output_of(session);
    assert!(output.contains("ERROR: That would exceed the average weight limit."));
}

#[test]
fn test_remove_flow() {
    let mut session = session(&[3], "R A 2 A A 2 99.5 R a 2 X");
    session.run().unwrap();

    assert_eq!(session.roster().slot(Seat::new(0, 2)), Some(Slot::Vacant));
    let output = output_of(session);
    assert!(output.contains("ERROR: That position is vacant."));
    assert!(output.contains("****** Musician added."));
    assert!(output.contains("****** Musician removed."));
}

#[test]
fn test_closed_input_ends_session() {
    let mut session = session(&[2], "A A");
    session.run().unwrap();
    let output = output_of(session);
    assert!(!output.contains("Exiting..."));
    assert!(output.ends_with("Please enter position number (1 to 2): "));
}

#[test]
fn test_closed_input_during_setup() {
    let output = transcript("3\n");
    assert!(output.ends_with("Please enter number of positions in row A: "));
}
