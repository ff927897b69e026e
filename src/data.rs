use egui::Vec2;

use crate::star::{StarAge, StarId};

/// One entry of the startup star list.
///
/// The bundled list is JSON of the form `[{"id": "a", "age": 42}]`; `age` may also be a string
/// and an optional `offset` (`{"x": .., "y": ..}`) places the star away from the center.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StarRecord {
    pub id: StarId,
    pub age: StarAge,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub offset: Option<Vec2>,
}

impl StarRecord {
    pub fn new(id: impl Into<StarId>, age: impl Into<StarAge>) -> Self {
        Self {
            id: id.into(),
            age: age.into(),
            offset: None,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[cfg(feature = "serde")]
#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
}

#[cfg(feature = "serde")]
impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid star list: {err}"),
        }
    }
}

#[cfg(feature = "serde")]
impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Parse the startup star list.
///
/// # Errors
///
/// Returns [`DataError::Json`] if `json` is not an array of `{ id, age, offset? }` objects.
#[cfg(feature = "serde")]
pub fn parse_records(json: &str) -> Result<Vec<StarRecord>, DataError> {
    let records: Vec<StarRecord> = serde_json::from_str(json)?;
    log::debug!("parsed {} star records", records.len());
    Ok(records)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_text_ages() {
        let records = parse_records(
            r#"[
                {"id": "sun", "age": 4600},
                {"id": "vega", "age": "455"},
                {"id": "rigel", "age": 8, "offset": {"x": -40.0, "y": 25.0}}
            ]"#,
        )
        .expect("valid list");

        assert_eq!(
            records,
            vec![
                StarRecord::new("sun", 4600),
                StarRecord::new("vega", "455"),
                StarRecord::new("rigel", 8).with_offset(Vec2::new(-40.0, 25.0)),
            ]
        );
    }

    #[test]
    fn rejects_malformed_lists() {
        let err = parse_records(r#"[{"age": 3}]"#).expect_err("missing id");
        assert!(matches!(err, DataError::Json(_)));
        assert!(err.to_string().starts_with("invalid star list"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn centered_records_serialize_without_offset() {
        let centered = ron::to_string(&StarRecord::new("a", 3)).expect("ron");
        assert!(!centered.contains("offset"), "{centered}");

        let placed = ron::to_string(&StarRecord::new("a", 3).with_offset(Vec2::new(1.0, 2.0)))
            .expect("ron");
        assert!(placed.contains("offset"), "{placed}");
    }
}
