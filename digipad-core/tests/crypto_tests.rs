#![allow(missing_docs)]
use digipad_core::{FormatError, Pad, PadConfig, PadError, PadFactory, PadLayout};

/// A pad with id `12345` followed by `key`.
fn pad_with_key(key: &[u8]) -> Pad {
    let mut digits = vec![1, 2, 3, 4, 5];
    digits.extend_from_slice(key);
    Pad::from_digits(digits, PadLayout::new(5, 15).unwrap()).unwrap()
}

fn generated_pad() -> Pad {
    let factory = PadFactory::new(PadConfig::default()).unwrap();
    factory.generate(1).unwrap().into_iter().next().unwrap()
}

#[test]
fn test_encode_known_digits() {
    let mut pad = pad_with_key(&[3, 7]);
    // H = 72 - 10 - 3, I = 73 - 10 - 7
    assert_eq!(pad.encode("HI").unwrap(), "123455956");
    assert!(pad.is_consumed());
}

#[test]
fn test_decode_known_digits() {
    let pad = pad_with_key(&[3, 7]);
    assert_eq!(pad.decode("123455956").unwrap(), "HI");
    assert!(!pad.is_consumed());
}

#[test]
fn test_encryption_decryption_roundtrip() {
    let mut pad = generated_pad();
    let message = "ATTACK AT DAWN";
    let ciphertext = pad.encode(message).unwrap();

    assert!(ciphertext.starts_with(pad.id()));
    assert_eq!(ciphertext.len(), pad.group_size() + 2 * message.len());
    assert_eq!(pad.decode(&ciphertext).unwrap(), message);
}

#[test]
fn test_roundtrip_at_full_capacity() {
    let mut pad = generated_pad();
    let message: String = (0..pad.capacity())
        .map(|i| char::from(b'A' + u8::try_from(i % 26).unwrap()))
        .collect();

    let ciphertext = pad.encode(&message).unwrap();
    assert_eq!(pad.decode(&ciphertext).unwrap(), message);
}

#[test]
fn test_message_is_uppercased() {
    let mut pad = generated_pad();
    let ciphertext = pad.encode("meet at 0900, pier 4!").unwrap();
    assert_eq!(pad.decode(&ciphertext).unwrap(), "MEET AT 0900, PIER 4!");
}

#[test]
fn test_empty_message_is_just_the_id() {
    let mut pad = generated_pad();
    let ciphertext = pad.encode("").unwrap();
    assert_eq!(ciphertext, pad.id());
    assert_eq!(pad.decode(&ciphertext).unwrap(), "");
    assert!(pad.is_consumed());
}

#[test]
fn test_pad_encrypts_only_once() {
    let mut pad = generated_pad();
    let first = pad.encode("HELLO").unwrap();

    let second = pad.encode("HELLO");
    assert_eq!(
        second,
        Err(PadError::AlreadyUsed {
            id: pad.id().to_string()
        })
    );
    assert!(pad.encode("X").is_err());

    // The first ciphertext still decodes.
    assert_eq!(pad.decode(&first).unwrap(), "HELLO");
}

#[test]
fn test_decode_is_repeatable() {
    let mut pad = generated_pad();
    let ciphertext = pad.encode("RENDEZVOUS").unwrap();
    let once = pad.decode(&ciphertext).unwrap();
    let twice = pad.decode(&ciphertext).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_message_longer_than_capacity() {
    let mut pad = pad_with_key(&[1, 2, 3]);
    assert_eq!(
        pad.encode("ABCD"),
        Err(PadError::Capacity {
            requested: 4,
            capacity: 3
        })
    );
    assert!(!pad.is_consumed());
}

#[test]
fn test_unsupported_character() {
    let mut pad = pad_with_key(&[3, 7, 1]);
    assert_eq!(
        pad.encode("HI\n"),
        Err(PadError::Format(FormatError::UnsupportedCharacter {
            ch: '\n',
            position: 2
        }))
    );
    assert!(!pad.is_consumed());
}

#[test]
fn test_decode_rejects_foreign_id() {
    let pad = pad_with_key(&[3, 7]);
    assert_eq!(
        pad.decode("543215956"),
        Err(PadError::Format(FormatError::IdMismatch {
            expected: "12345".to_string(),
            found: "54321".to_string()
        }))
    );
    assert_eq!(
        pad.decode("123"),
        Err(PadError::Format(FormatError::IdMismatch {
            expected: "12345".to_string(),
            found: "123".to_string()
        }))
    );
}

#[test]
fn test_decode_rejects_malformed_body() {
    let pad = pad_with_key(&[3, 7]);
    assert_eq!(
        pad.decode("12345595"),
        Err(PadError::Format(FormatError::OddCipherLength { len: 3 }))
    );
    assert_eq!(
        pad.decode("1234559-6"),
        Err(PadError::Format(FormatError::InvalidCipherChunk {
            chunk: "-6".to_string(),
            position: 7
        }))
    );
}

#[test]
fn test_decode_rejects_ciphertext_longer_than_pad() {
    let pad = pad_with_key(&[3, 7]);
    assert_eq!(
        pad.decode("12345595600"),
        Err(PadError::Capacity {
            requested: 3,
            capacity: 2
        })
    );
}
