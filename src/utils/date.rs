pub mod serializer {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(&str_time).map_err(D::Error::custom)?;
        Ok(time.naive_utc())
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        DateTime::<Utc>::from_naive_utc_and_offset(t, Utc).to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[test]
    fn test_should_serialize_as_rfc3339() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(10, 30, 0)).expect("valid date");
        let json = serde_json::to_string(&Stamp { at }).expect("should serialize");
        assert_eq!("{\"at\":\"2024-05-01T10:30:00+00:00\"}", json.as_str());
        let parsed: Stamp = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(at, parsed.at);
    }
}
