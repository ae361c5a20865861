use serde::{Deserialize, Deserializer, Serialize};

/// Request for POST /generate_story/
///
/// Fields are kept loosely typed so out-of-range values reach validation
/// instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRequest {
    #[serde(deserialize_with = "saturating_age")]
    pub age: i64,
    pub reading_level: String,
    pub theme: String,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Accept any JSON integer, clamping values outside i64 to its bounds
fn saturating_age<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;

    if let Some(age) = number.as_i64() {
        return Ok(age);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }

    // Integers beyond u64 arrive as floats; `as` saturates
    match number.as_f64() {
        Some(age) if age.is_finite() && age.fract() == 0.0 => Ok(age as i64),
        _ => Err(serde::de::Error::custom(format!(
            "invalid age {}, expected an integer",
            number
        ))),
    }
}

/// Response for POST /generate_story/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryResponse {
    pub markdown_story: String,
}
