use {
    crate::common::debug_println,
    std::{
        io::{BufRead, ErrorKind},
        num::ParseIntError,
    },
};

/// An integer type that can be extracted from a numeric token.
pub trait StreamValue: Sized {
    fn from_numeric(number: &str) -> Result<Self, ParseIntError>;
}

macro_rules! signed_stream_value {
    ($($ty:ty),*) => {
        $(impl StreamValue for $ty {
            fn from_numeric(number: &str) -> Result<Self, ParseIntError> {
                number.parse()
            }
        })*
    };
}

// a leading minus negates the magnitude modulo 2^N, so "-5" reads as MAX - 4
macro_rules! unsigned_stream_value {
    ($($ty:ty),*) => {
        $(impl StreamValue for $ty {
            fn from_numeric(number: &str) -> Result<Self, ParseIntError> {
                match number.strip_prefix('-') {
                    Some(magnitude) => magnitude.parse::<$ty>().map(<$ty>::wrapping_neg),
                    None => number.parse(),
                }
            }
        })*
    };
}

signed_stream_value!(i32, i64);
unsigned_stream_value!(u32, u64);

fn is_stream_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0b'
}

/// Reads the next whitespace-delimited token, or `None` at end of input.
/// Vertical tab counts as whitespace.
///
/// Only the bytes of the first token are consumed; anything after the
/// delimiting whitespace stays in the reader.
pub fn next_token(reader: &mut impl BufRead) -> Option<String> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug_println!("error reading from stdin: {e}");
                break;
            }
        };
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if is_stream_space(byte) {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(&token).into_owned())
}

/// The leading `[+-]?[0-9]+` part of a token, if there is one.
pub fn numeric_prefix(token: &str) -> Option<&str> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    match digits {
        0 => None,
        _ => Some(&token[..sign_len + digits]),
    }
}

/// Extracts one value of type `T` the way a formatted stream read would.
///
/// Returns `None` for missing input, a token without a numeric prefix, or a
/// magnitude `T` cannot hold.
pub fn read_value<T: StreamValue>(reader: &mut impl BufRead) -> Option<T> {
    let Some(token) = next_token(reader) else {
        debug_println!("no input token");
        return None;
    };
    debug_println!("read token {token:?}");
    let Some(number) = numeric_prefix(&token) else {
        debug_println!("token {token:?} is not numeric");
        return None;
    };
    match T::from_numeric(number) {
        Ok(value) => Some(value),
        Err(_) => {
            debug_println!("{number:?} is out of range for {}", std::any::type_name::<T>());
            None
        }
    }
}
