use std::fmt::{self, Write};
use std::str::FromStr;

use sha1::{Digest, Sha1};
use thiserror::Error;

/// An error which can be returned when parsing an object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains an invalid digit.
    ///
    /// Among other causes, this variant will be constructed when parsing a string that
    /// contains an uppercase letter.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    /// ID string is longer than 40 hex digits.
    #[error("value is more than 40 digits long")]
    Overflow,

    /// ID string is shorter than 40 hex digits.
    #[error("value is less than 40 digits long")]
    Underflow,

    /// Value was zero.
    #[error("ID would be zero")]
    Zero,
}

/// An object ID identifies an object within a repository.
/// It is stored as a 20-byte SHA-1 digest, but can also be represented as 40 hex digits.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Id {
    id: Vec<u8>,
}

impl Id {
    /// Create a new ID from a 20-byte slice.
    ///
    /// It is an error if the slice contains anything other than 20 bytes.
    pub fn new(id: &[u8]) -> Result<Id, ParseIdError> {
        match id.len() {
            20 => Ok(Id { id: id.to_vec() }),
            0 => Err(ParseIdError::Empty),
            n if n < 20 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Compute the ID for the given stored form of an object.
    pub fn for_content(content: &[u8]) -> Id {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Id {
            id: hasher.finalize().to_vec(),
        }
    }

    /// Convert a 40-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 40 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(id: T) -> Result<Id, ParseIdError> {
        let hex = id.as_ref();

        match hex.len() {
            40 => {
                let id = hex
                    .chunks(2)
                    .map(|pair| -> Result<u8, ParseIdError> {
                        Ok(digit_value(pair[0])? << 4 | digit_value(pair[1])?)
                    })
                    .collect::<Result<Vec<u8>, ParseIdError>>()?;

                if id.iter().all(|x| *x == 0) {
                    Err(ParseIdError::Zero)
                } else {
                    Ok(Id { id })
                }
            }
            0 => Err(ParseIdError::Empty),
            n if n < 40 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Return the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.id
    }

    /// Split the hex form into the bucket name (first two digits)
    /// and the entry name (remaining 38 digits).
    pub fn bucket_and_entry(&self) -> (String, String) {
        let mut hex = self.to_string();
        let entry = hex.split_off(2);
        (hex, entry)
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}
