//! Tests for the color/letter codec.

use strictly_mastermind::{Alphabet, CodecError, Color, Settings};

#[test]
fn test_encode_maps_zero_to_a_and_25_to_z() {
    let alphabet = Alphabet::new(26).expect("Valid alphabet");
    assert_eq!(alphabet.encode(Color::new(0)), Ok('A'));
    assert_eq!(alphabet.encode(Color::new(25)), Ok('Z'));
}

#[test]
fn test_round_trip_every_alphabet_size() {
    for size in 2..=26u8 {
        let alphabet = Alphabet::new(size).expect("Valid alphabet");
        for color in alphabet.colors() {
            let symbol = alphabet.encode(color).expect("Color in range");
            assert_eq!(alphabet.decode(symbol), Ok(color));
        }
        assert_eq!(alphabet.colors().count(), usize::from(size));
    }
}

#[test]
fn test_encode_rejects_color_outside_alphabet() {
    let alphabet = Alphabet::new(6).expect("Valid alphabet");
    assert_eq!(
        alphabet.encode(Color::new(6)),
        Err(CodecError::ColorOutOfRange {
            color: 6,
            alphabet_size: 6
        })
    );
}

#[test]
fn test_decode_rejects_letters_past_last_symbol() {
    let alphabet = Alphabet::new(6).expect("Valid alphabet");
    assert_eq!(alphabet.last_symbol(), 'F');
    assert!(matches!(
        alphabet.decode('G'),
        Err(CodecError::SymbolOutOfRange { symbol: 'G', last: 'F' })
    ));
}

#[test]
fn test_decode_rejects_lowercase_and_non_letters() {
    let alphabet = Alphabet::new(26).expect("Valid alphabet");
    assert!(alphabet.decode('a').is_err());
    assert!(alphabet.decode('1').is_err());
    assert!(alphabet.decode('Ä').is_err());
}

#[test]
fn test_alphabet_size_bounds() {
    assert_eq!(Alphabet::new(0), Err(CodecError::InvalidAlphabetSize(0)));
    assert_eq!(Alphabet::new(27), Err(CodecError::InvalidAlphabetSize(27)));
    assert!(Alphabet::new(1).is_ok());
}

#[test]
fn test_board_encoding() {
    let alphabet = Alphabet::from(&Settings::default());
    let colors = alphabet.decode_board("AABF").expect("Valid board");
    assert_eq!(
        colors,
        vec![Color::new(0), Color::new(0), Color::new(1), Color::new(5)]
    );
    assert_eq!(alphabet.encode_board(&colors).expect("Valid colors"), "AABF");
    assert!(alphabet.decode_board("AABG").is_err());
}
