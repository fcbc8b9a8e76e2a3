//! Line codec for the clients file
//!
//! One record per line, five fields joined with the `#//#` delimiter:
//!
//! ```text
//! <account>#//#<pin>#//#<name>#//#<phone>#//#<balance>
//! ```
//!
//! Decoding is deliberately lenient: a line that does not yield exactly five
//! tokens, or whose balance field is not numeric, is treated as corrupt and
//! produces no record. Corrupt lines never abort a load; what happens to them
//! is chosen by [`CorruptLinePolicy`].

use crate::models::client::{ClientRecord, FIELD_DELIMITER};

/// What to do with a storage line that fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptLinePolicy {
    /// Drop the line silently (historical behavior)
    Skip,
    /// Drop the line and log a warning
    #[default]
    Warn,
}

impl CorruptLinePolicy {
    /// Parse a policy name from a CLI argument
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Some(Self::Skip),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Encode a record as one storage line. The delete marker is never encoded.
pub fn encode_record(client: &ClientRecord) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}{d}{:.6}",
        client.account_number,
        client.pin_code,
        client.name,
        client.phone,
        client.balance,
        d = FIELD_DELIMITER,
    )
}

/// Decode one storage line, returning `None` for corrupt lines.
///
/// Empty tokens produced by consecutive delimiters are discarded, so a line
/// with a missing field decodes to fewer than five tokens and is rejected
/// rather than shifting fields around.
pub fn decode_record(line: &str) -> Option<ClientRecord> {
    let tokens: Vec<&str> = line
        .split(FIELD_DELIMITER)
        .filter(|token| !token.is_empty())
        .collect();

    let [account_number, pin_code, name, phone, balance] = tokens.as_slice() else {
        return None;
    };

    let balance: f64 = balance.trim().parse().ok()?;

    Some(ClientRecord::new(
        *account_number,
        *pin_code,
        *name,
        *phone,
        balance,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> ClientRecord {
        ClientRecord::new("A101", "1111", "Alice Smith", "555-0001", 100.0)
    }

    #[test]
    fn test_encode() {
        let line = encode_record(&sample_client());
        assert_eq!(line, "A101#//#1111#//#Alice Smith#//#555-0001#//#100.000000");
    }

    #[test]
    fn test_decode() {
        let client =
            decode_record("A101#//#1111#//#Alice Smith#//#555-0001#//#100.000000").unwrap();
        assert_eq!(client, sample_client());
    }

    #[test]
    fn test_round_trip() {
        let client = ClientRecord::new("B202", "0000", "Bob Jones", "555-0202", 1234.5);
        assert_eq!(decode_record(&encode_record(&client)), Some(client));
    }

    #[test]
    fn test_decode_marker_never_round_trips() {
        let mut client = sample_client();
        client.pending_delete = true;

        let reloaded = decode_record(&encode_record(&client)).unwrap();
        assert!(!reloaded.pending_delete);
    }

    #[test]
    fn test_decode_wrong_token_count() {
        assert_eq!(decode_record("A101#//#1111#//#Alice"), None);
        assert_eq!(
            decode_record("A101#//#1111#//#Alice#//#555#//#1.0#//#extra"),
            None
        );
    }

    #[test]
    fn test_decode_consecutive_delimiters_drop_empty_tokens() {
        // A missing field collapses to four tokens, not an empty fifth one
        assert_eq!(decode_record("A101#//##//#Alice#//#555-0001#//#1.0"), None);
    }

    #[test]
    fn test_decode_malformed_balance() {
        assert_eq!(
            decode_record("A101#//#1111#//#Alice#//#555-0001#//#not-a-number"),
            None
        );
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(CorruptLinePolicy::parse("skip"), Some(CorruptLinePolicy::Skip));
        assert_eq!(CorruptLinePolicy::parse("WARN"), Some(CorruptLinePolicy::Warn));
        assert_eq!(CorruptLinePolicy::parse("panic"), None);
    }
}
