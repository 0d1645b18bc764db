use serde::{Deserialize, Deserializer};

use kernel::prelude::entity::CalendarDate;

/// Some endpoints wrap their payload as `{ "data": ... }`, others do not.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(in crate::backend) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

/// Form screens post numbers as strings, so either form is accepted.
pub(in crate::backend) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Numeric::deserialize(deserializer)? {
        Numeric::Number(value) => Ok(value),
        Numeric::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("`{text}` is not a number"))),
    }
}

/// Stored dates are trusted loosely: anything unreadable becomes `None`.
pub(in crate::backend) fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CalendarDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match CalendarDate::parse(&raw) {
        Ok(day) => Some(day),
        Err(report) => {
            tracing::warn!("unreadable stored date `{raw}`: {report:?}");
            None
        }
    }))
}

pub(in crate::backend) fn whole(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::{lenient_date, number, Envelope};
    use kernel::prelude::entity::CalendarDate;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "number")]
        amount: f64,
        #[serde(default, deserialize_with = "lenient_date")]
        day: Option<CalendarDate>,
    }

    #[test]
    fn numbers_may_be_strings() {
        let sample: Sample = serde_json::from_str(r#"{"amount":"4500"}"#).unwrap();
        assert_eq!(sample.amount, 4500.0);
        let sample: Sample = serde_json::from_str(r#"{"amount":12.5}"#).unwrap();
        assert_eq!(sample.amount, 12.5);
        assert!(serde_json::from_str::<Sample>(r#"{"amount":"lots"}"#).is_err());
    }

    #[test]
    fn bad_dates_become_none() {
        let sample: Sample =
            serde_json::from_str(r#"{"amount":1,"day":"2024-06-10T00:00:00.000Z"}"#).unwrap();
        assert_eq!(sample.day, Some(CalendarDate::parse("2024-06-10").unwrap()));
        let sample: Sample = serde_json::from_str(r#"{"amount":1,"day":"soon"}"#).unwrap();
        assert_eq!(sample.day, None);
        let sample: Sample = serde_json::from_str(r#"{"amount":1,"day":null}"#).unwrap();
        assert_eq!(sample.day, None);
    }

    #[test]
    fn envelope_accepts_both_shapes() {
        let wrapped: Envelope<Vec<u8>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2]);
        let bare: Envelope<Vec<u8>> = serde_json::from_str("[3]").unwrap();
        assert_eq!(bare.into_inner(), vec![3]);
    }
}
