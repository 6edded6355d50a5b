use serde::{Deserialize, Serialize};
use std::fmt::Display;
use time::{Duration, OffsetDateTime};

//--------------------------------------------------------------------------------------------------
// Unix Timestamp handling
//--------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct UnixTimestamp(OffsetDateTime);

impl Serialize for UnixTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.unix_timestamp().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UnixTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let timestamp = i64::deserialize(deserializer)?;
        let datetime =
            OffsetDateTime::from_unix_timestamp(timestamp).map_err(serde::de::Error::custom)?;
        Ok(UnixTimestamp(datetime))
    }
}

impl From<UnixTimestamp> for OffsetDateTime {
    fn from(ts: UnixTimestamp) -> Self {
        ts.0
    }
}

impl UnixTimestamp {
    pub fn now() -> Self {
        UnixTimestamp(OffsetDateTime::now_utc())
    }

    pub fn plus_seconds(self, seconds: i64) -> Self {
        UnixTimestamp(self.0 + Duration::seconds(seconds))
    }

    // A session is only valid strictly before its expiry instant
    pub fn is_past(self) -> bool {
        self.0 <= OffsetDateTime::now_utc()
    }

    pub fn unix_seconds(self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl Display for UnixTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_and_future() {
        assert!(UnixTimestamp::now().plus_seconds(-1).is_past());
        assert!(!UnixTimestamp::now().plus_seconds(3600).is_past());
    }

    #[test]
    fn serde_round_trips_unix_seconds() {
        let ts: UnixTimestamp = serde_json::from_str("1700000000").unwrap();
        assert_eq!(ts.unix_seconds(), 1_700_000_000);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1700000000");
    }
}

//--------------------------------------------------------------------------------------------------
