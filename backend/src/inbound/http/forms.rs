//! Form payloads accepted by the feeding record handlers.

use chrono::NaiveTime;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Error, FeedingRecordDraft, RequiredField};

/// URL-encoded body submitted by the record form.
///
/// Every field is optional; absent and blank values reach the domain as
/// `None` so validation can report them together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedingRecordForm {
    #[serde(rename = "nombreGatito")]
    pub cat_name: Option<String>,
    #[serde(rename = "horaComida")]
    pub feeding_time: Option<String>,
    #[serde(rename = "tipoComida")]
    pub food_type: Option<String>,
    #[serde(rename = "responsable")]
    pub caretaker: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Parse `HH:MM` (what `<input type="time">` submits) or `HH:MM:SS`.
fn parse_feeding_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .ok()
}

/// Percent-decoding replaces invalid UTF-8 with U+FFFD; such submissions
/// are rejected rather than stored with the replacement character.
fn reject_undecodable(field: &str, value: Option<&String>) -> Result<(), Error> {
    match value {
        Some(raw) if raw.contains(char::REPLACEMENT_CHARACTER) => Err(Error::invalid_request(
            format!("{field} is not valid UTF-8"),
        )
        .with_details(json!({
            "field": field,
            "code": "invalid_encoding",
        }))),
        _ => Ok(()),
    }
}

impl FeedingRecordForm {
    fn check_encoding(&self) -> Result<(), Error> {
        reject_undecodable(RequiredField::CatName.form_name(), self.cat_name.as_ref())?;
        reject_undecodable(RequiredField::FeedingTime.form_name(), self.feeding_time.as_ref())?;
        reject_undecodable("tipoComida", self.food_type.as_ref())?;
        reject_undecodable("responsable", self.caretaker.as_ref())
    }

    /// Convert the submission into a domain draft.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error naming `horaComida` when the feeding
    /// time is present but not a valid time of day, or naming any field whose
    /// bytes were not valid UTF-8.
    pub fn into_draft(self) -> Result<FeedingRecordDraft, Error> {
        self.check_encoding()?;
        let feeding_time = match non_blank(self.feeding_time) {
            None => None,
            Some(raw) => Some(parse_feeding_time(&raw).ok_or_else(|| {
                Error::invalid_request(format!("invalid feeding time: {raw}")).with_details(
                    json!({
                        "field": RequiredField::FeedingTime.form_name(),
                        "code": "invalid_time",
                    }),
                )
            })?),
        };

        Ok(FeedingRecordDraft {
            cat_name: non_blank(self.cat_name),
            feeding_time,
            food_type: non_blank(self.food_type),
            caretaker: non_blank(self.caretaker),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn form(feeding_time: Option<&str>) -> FeedingRecordForm {
        FeedingRecordForm {
            cat_name: Some("Whiskers".to_owned()),
            feeding_time: feeding_time.map(str::to_owned),
            food_type: Some(String::new()),
            caretaker: Some("Ana".to_owned()),
        }
    }

    #[rstest]
    #[case("08:00", NaiveTime::from_hms_opt(8, 0, 0))]
    #[case("20:15:30", NaiveTime::from_hms_opt(20, 15, 30))]
    #[case(" 07:05 ", NaiveTime::from_hms_opt(7, 5, 0))]
    fn accepts_minute_and_second_precision(#[case] raw: &str, #[case] expected: Option<NaiveTime>) {
        let draft = form(Some(raw)).into_draft().expect("valid form");
        assert_eq!(draft.feeding_time, expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn blank_time_becomes_absent(#[case] raw: Option<&str>) {
        let draft = form(raw).into_draft().expect("valid form");
        assert!(draft.feeding_time.is_none());
    }

    #[rstest]
    #[case("25:00")]
    #[case("8 o'clock")]
    fn invalid_time_names_the_field(#[case] raw: &str) {
        let error = form(Some(raw)).into_draft().expect_err("invalid time");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({"field": "horaComida", "code": "invalid_time"}))
        );
    }

    #[rstest]
    fn blank_text_fields_become_absent() {
        let draft = form(Some("08:00")).into_draft().expect("valid form");

        assert!(draft.food_type.is_none());
        assert_eq!(draft.caretaker.as_deref(), Some("Ana"));
    }

    #[rstest]
    fn deserialises_spanish_field_names() {
        let parsed: FeedingRecordForm = serde_json::from_value(json!({
            "nombreGatito": "Misu",
            "horaComida": "09:30",
        }))
        .expect("form parses");

        assert_eq!(parsed.cat_name.as_deref(), Some("Misu"));
        assert_eq!(parsed.feeding_time.as_deref(), Some("09:30"));
        assert!(parsed.caretaker.is_none());
    }

    #[rstest]
    fn replacement_characters_are_rejected() {
        let submitted = FeedingRecordForm {
            caretaker: Some("An\u{FFFD}".to_owned()),
            ..form(Some("08:00"))
        };

        let error = submitted.into_draft().expect_err("encoding rejected");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({"field": "responsable", "code": "invalid_encoding"}))
        );
    }

    #[rstest]
    fn multibyte_names_are_kept() {
        let submitted = FeedingRecordForm {
            cat_name: Some("Michí".to_owned()),
            ..form(Some("08:00"))
        };

        let draft = submitted.into_draft().expect("valid form");

        assert_eq!(draft.cat_name.as_deref(), Some("Michí"));
    }
}
