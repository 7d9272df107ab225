//! The envelope shared by every lookup result.

use serde::{Serialize, Serializer};
use std::time::Duration;

/// Duration and error text attached to every lookup result.
///
/// `err` is empty on success. `duration` covers the whole call, success or
/// failure, and serializes as whole nanoseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommonFields {
    pub err: String,
    #[serde(serialize_with = "as_nanos")]
    pub duration: Duration,
}

impl CommonFields {
    pub fn is_ok(&self) -> bool {
        self.err.is_empty()
    }
}

/// Results that can carry a [`CommonFields`] envelope.
pub trait SetCommonFields {
    fn common_fields_mut(&mut self) -> &mut CommonFields;

    /// Records the elapsed time and, on failure, the error text.
    fn set_common_fields(&mut self, duration: Duration, err: Option<String>) {
        let common = self.common_fields_mut();
        common.duration = duration;
        if let Some(err) = err {
            common.err = err;
        }
    }
}

impl SetCommonFields for CommonFields {
    fn common_fields_mut(&mut self) -> &mut CommonFields {
        self
    }
}

fn as_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
    serializer.serialize_u64(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_common_fields_success() {
        let mut common = CommonFields::default();
        common.set_common_fields(Duration::from_millis(3), None);

        assert!(common.is_ok());
        assert_eq!(common.duration, Duration::from_millis(3));
    }

    #[test]
    fn test_set_common_fields_failure() {
        let mut common = CommonFields::default();
        common.set_common_fields(Duration::ZERO, Some("lookup x: no such host".into()));

        assert!(!common.is_ok());
        assert_eq!(common.err, "lookup x: no such host");
    }

    #[test]
    fn test_serializes_duration_as_nanos() {
        let common = CommonFields {
            err: String::new(),
            duration: Duration::from_micros(1500),
        };
        let value = serde_json::to_value(&common).unwrap();
        assert_eq!(value, serde_json::json!({"err": "", "duration": 1_500_000}));
    }
}
