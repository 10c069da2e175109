use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::value::FieldValue;

const MICROS_PER_SECOND: u64 = 1_000_000;
const NANOS_PER_MICRO: u32 = 1_000;

/// Parse an unsigned decimal, rejecting signs, whitespace and overflow.
fn parse_u64(buf: &[u8]) -> Result<u64, Error> {
    if buf.is_empty() {
        return Err(Error::InvalidTimestamp("empty value".to_string()));
    }

    let mut value = 0u64;
    for &ch in buf {
        if !ch.is_ascii_digit() {
            return Err(Error::InvalidTimestamp(format!(
                "unexpected character {:?} in {:?}",
                ch as char,
                String::from_utf8_lossy(buf)
            )));
        }

        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((ch - b'0') as u64))
            .ok_or_else(|| {
                Error::InvalidTimestamp(format!(
                    "{:?} overflows 64 bits",
                    String::from_utf8_lossy(buf)
                ))
            })?;
    }

    Ok(value)
}

/// Convert microseconds since the Unix epoch into a calendar time.
pub fn from_micros(micros: u64) -> Result<DateTime<Utc>, Error> {
    let secs = micros / MICROS_PER_SECOND;
    let nanos = (micros % MICROS_PER_SECOND) as u32 * NANOS_PER_MICRO;

    DateTime::from_timestamp(secs as i64, nanos)
        .ok_or_else(|| Error::InvalidTimestamp(format!("{micros}us is out of range")))
}

/// Decode a `__REALTIME_TIMESTAMP` value.
pub fn decode_realtime(raw: Option<&FieldValue>) -> Result<DateTime<Utc>, Error> {
    let text = match raw {
        Some(FieldValue::String(s)) => s,
        Some(other) => {
            return Err(Error::InvalidTimestamp(format!("{other} is not a string")));
        }
        None => return Err(Error::InvalidTimestamp("field is missing".to_string())),
    };

    from_micros(parse_u64(text.as_bytes())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use serde_json::json;

    #[test]
    fn split_micros() {
        let ts = from_micros(1_700_000_000_000_001).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
        assert_eq!(ts.nanosecond(), 1_000);

        let ts = from_micros(1_700_000_000_999_999).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
        assert_eq!(ts.timestamp_subsec_micros(), 999_999);
    }

    #[test]
    fn epoch() {
        assert_eq!(
            from_micros(0).unwrap(),
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn decode() {
        let ts = decode_realtime(Some(&"1700000000000001".into())).unwrap();
        assert_eq!(ts.timestamp_micros(), 1_700_000_000_000_001);
    }

    #[test]
    fn invalid() {
        for raw in [
            None,
            Some(FieldValue::Null),
            Some(json!(1700000000000000u64).into()),
            Some("".into()),
            Some("-1".into()),
            Some("+1".into()),
            Some(" 1".into()),
            Some("17e5".into()),
            Some("18446744073709551616".into()),
            Some("18446744073709551615".into()),
        ] {
            let got = decode_realtime(raw.as_ref());
            assert!(
                matches!(got, Err(Error::InvalidTimestamp(_))),
                "input: {raw:?}, got: {got:?}"
            );
        }
    }

    #[test]
    fn parse_digits() {
        for i in [0u64, 7, 10, 999_999, u64::MAX] {
            assert_eq!(parse_u64(i.to_string().as_bytes()).unwrap(), i);
        }
    }
}
