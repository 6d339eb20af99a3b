//! Tests for assembling guesses.

use strictly_mastermind::{Color, GuessBuilder, GuessError, Settings};

fn builder() -> GuessBuilder {
    GuessBuilder::new(&Settings::default())
}

#[test]
fn test_new_builder_is_empty() {
    let builder = builder();
    assert_eq!(builder.code_length(), 4);
    assert!(builder.slots().iter().all(Option::is_none));
    assert!(!builder.is_complete());
}

#[test]
fn test_complete_only_when_every_slot_set() {
    let mut builder = builder();
    for position in 0..3 {
        builder
            .set_peg(position, Color::new(1))
            .expect("Valid peg");
        assert!(!builder.is_complete());
    }
    assert_eq!(builder.build(), Err(GuessError::Incomplete { position: 3 }));

    builder.set_peg(3, Color::new(5)).expect("Valid peg");
    assert!(builder.is_complete());
    let guess = builder.build().expect("Complete guess");
    assert_eq!(guess.len(), 4);
    assert_eq!(guess.to_board(builder.alphabet()).expect("Encodable"), "BBBF");
}

#[test]
fn test_set_peg_rejects_out_of_range() {
    let mut builder = builder();
    assert_eq!(
        builder.set_peg(4, Color::new(0)),
        Err(GuessError::PositionOutOfRange {
            position: 4,
            code_length: 4
        })
    );
    assert_eq!(
        builder.set_peg(0, Color::new(6)),
        Err(GuessError::ColorOutOfRange {
            color: 6,
            alphabet_size: 6
        })
    );
    assert!(builder.slots().iter().all(Option::is_none));
}

#[test]
fn test_duplicates_allowed_in_guess_even_when_secret_forbids_them() {
    let settings = Settings::new(6, 4, false).expect("Valid settings");
    let mut builder = GuessBuilder::new(&settings);
    builder.fill_from_board("AAAA").expect("Duplicates are fine in a guess");
    assert!(builder.is_complete());
}

#[test]
fn test_fill_from_board() {
    let mut builder = builder();
    builder.fill_from_board(" abcd ").expect("Lowercase accepted");
    assert_eq!(
        builder.slots(),
        &[
            Some(Color::new(0)),
            Some(Color::new(1)),
            Some(Color::new(2)),
            Some(Color::new(3))
        ]
    );

    assert_eq!(
        builder.fill_from_board("ABC"),
        Err(GuessError::WrongLength {
            expected: 4,
            actual: 3
        })
    );
    assert!(matches!(
        builder.fill_from_board("ABCZ"),
        Err(GuessError::Codec(_))
    ));
    // Failed fills leave the previous guess intact.
    assert_eq!(builder.slots()[3], Some(Color::new(3)));
}

#[test]
fn test_clear_and_reset() {
    let mut builder = builder();
    builder.fill_from_board("FEDC").expect("Valid board");
    builder.clear_peg(2).expect("Valid position");
    assert_eq!(builder.slots()[2], None);
    assert!(builder.clear_peg(9).is_err());

    builder.reset();
    assert!(builder.slots().iter().all(Option::is_none));
    assert_eq!(builder.code_length(), 4);
}
