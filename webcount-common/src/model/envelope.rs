// JSON-shaped output wrappers. The spacing is part of the wire format that
// callers compare against, so these render by hand instead of through serde.
use std::fmt;

/// Renders as `{"data": <value>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataEnvelope<T>(pub T);

impl<T: fmt::Display> fmt::Display for DataEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"data\": {}}}", self.0)
    }
}

/// Renders as `{"data": <value>, "signals": {}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalEnvelope<T>(pub T);

impl<T: fmt::Display> fmt::Display for SignalEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"data\": {}, \"signals\": {{}}}}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FetchResult;

    #[test]
    fn data_envelope_wraps_counts_and_sentinel() {
        assert_eq!(DataEnvelope(FetchResult::Success(3)).to_string(), r#"{"data": 3}"#);
        assert_eq!(DataEnvelope(FetchResult::Failure).to_string(), r#"{"data": -1}"#);
    }

    #[test]
    fn signal_envelope_matches_template() {
        assert_eq!(
            SignalEnvelope(12).to_string(),
            r#"{"data": 12, "signals": {}}"#
        );
        assert_eq!(
            SignalEnvelope(-4).to_string(),
            r#"{"data": -4, "signals": {}}"#
        );
    }

    #[test]
    fn rendered_envelopes_are_valid_json() {
        let value: serde_json::Value =
            serde_json::from_str(&SignalEnvelope(7).to_string()).unwrap();
        assert_eq!(value["data"], 7);
        assert!(value["signals"].as_object().unwrap().is_empty());
    }
}
