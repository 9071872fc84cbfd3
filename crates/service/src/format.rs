//! Wire formats for API models.

/// `created` / `lastUpdated` as `yyyy-MM-dd HH:mm:ss` rendered in UTC+08:00.
pub mod display_time {
    use chrono::{FixedOffset, NaiveDateTime, TimeZone};
    use models::record::Timestamp;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    const OFFSET_SECS: i32 = 8 * 3600;

    fn zone() -> Option<FixedOffset> {
        FixedOffset::east_opt(OFFSET_SECS)
    }

    pub fn serialize<S: Serializer>(value: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => {
                let zone = zone().ok_or_else(|| <S::Error as ser::Error>::custom("invalid display offset"))?;
                s.serialize_some(&t.with_timezone(&zone).format(FORMAT).to_string())
            }
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Timestamp>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };
        let zone = zone().ok_or_else(|| <D::Error as de::Error>::custom("invalid display offset"))?;
        let naive = NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(<D::Error as de::Error>::custom)?;
        zone.from_local_datetime(&naive)
            .single()
            .map(Some)
            .ok_or_else(|| <D::Error as de::Error>::custom(format!("ambiguous local time {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use models::record::Timestamp;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Stamped {
        #[serde(default, with = "super::display_time")]
        at: Option<Timestamp>,
    }

    #[test]
    fn renders_in_plus_eight() {
        let at: Timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 5).unwrap().into();
        let json = serde_json::to_string(&Stamped { at: Some(at) }).unwrap();
        assert_eq!(json, r#"{"at":"2024-03-02 04:30:05"}"#);
    }

    #[test]
    fn parses_back_to_same_instant() {
        let s: Stamped = serde_json::from_str(r#"{"at":"2024-03-02 04:30:05"}"#).unwrap();
        let expected: Timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 5).unwrap().into();
        assert_eq!(s.at, Some(expected));
    }

    #[test]
    fn null_and_missing_are_none() {
        let s: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(s.at, None);
        let s: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(s.at, None);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"at":null}"#);
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"2024/03/02"}"#).is_err());
    }
}
