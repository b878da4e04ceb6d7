use thiserror::Error;

/// Failure to turn some input into a 48-bit MAC address.
///
/// Too long, bad characters and bad group counts all end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_shows_raw_input() {
        let err = MacError::InvalidMacAddress("xx:yy".to_string());
        assert_eq!(err.to_string(), "Invalid MAC address: xx:yy");
    }
}
