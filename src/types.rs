use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// Color grammar, compiled once per process and shared by every request.
lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
    static ref RGB_COLOR: Regex = Regex::new(
        r"^rgb\(\s*(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])\s*,\s*){2}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])\s*\)$"
    )
    .unwrap();
    static ref RGBA_COLOR: Regex = Regex::new(
        r"^rgba\(\s*(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])\s*,\s*){3}(?:0|1|0?\.[0-9]+)\s*\)$"
    )
    .unwrap();
    static ref HSL_COLOR: Regex = Regex::new(
        r"^hsl\(\s*(?:360|3[0-5][0-9]|[12]?[0-9]?[0-9])\s*,\s*(?:100|[0-9]{1,2})%\s*,\s*(?:100|[0-9]{1,2})%\s*\)$"
    )
    .unwrap();
    static ref HSLA_COLOR: Regex = Regex::new(
        r"^hsla\(\s*(?:360|3[0-5][0-9]|[12]?[0-9]?[0-9])\s*,\s*(?:100|[0-9]{1,2})%\s*,\s*(?:100|[0-9]{1,2})%\s*,\s*(?:0|1|0?\.[0-9]+)\s*\)$"
    )
    .unwrap();
}

const NAMED_COLORS: &[&str] = &[
    "aqua", "beige", "black", "blue", "brown", "cyan", "fuchsia", "gold", "gray", "green", "grey",
    "indigo", "ivory", "lime", "magenta", "maroon", "navy", "olive", "orange", "pink", "purple",
    "red", "silver", "teal", "violet", "white", "yellow",
];

/// Accepts hex codes (`#rgb`, `#rrggbb`), `rgb()`/`rgba()`/`hsl()`/`hsla()`
/// functional forms and a set of well-known color names.
fn validate_color(value: &str) -> Result<(), ValidationError> {
    if HEX_COLOR.is_match(value)
        || RGB_COLOR.is_match(value)
        || RGBA_COLOR.is_match(value)
        || HSL_COLOR.is_match(value)
        || HSLA_COLOR.is_match(value)
        || NAMED_COLORS.contains(&value.to_ascii_lowercase().as_str())
    {
        Ok(())
    } else {
        Err(ValidationError::new("iscolor"))
    }
}

/// Payload accepted by the create and update operations.
///
/// Fields are `Option`-typed so that an absent field binds as `None` and
/// surfaces as a `required` rule violation instead of a deserialization
/// error. Validation must pass before the payload reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CarCreateRequest {
    #[validate(required, length(min = 1, max = 255), custom(function = validate_color))]
    #[schema(example = "#ffb7d5")]
    pub color: Option<String>,
    #[validate(required, range(min = 0))]
    #[schema(example = 1000000)]
    pub price_in_cents: Option<i64>,
    /// The only optional numeric field; stored as 0 when absent.
    #[validate(range(min = 0))]
    #[schema(example = 140)]
    pub max_speed_mph: Option<i64>,
    #[validate(required, range(min = 0))]
    #[schema(example = 224)]
    pub max_speed_kmp: Option<i64>,
    #[validate(required, length(min = 2, max = 255))]
    #[schema(example = "Mazda")]
    pub vendor_name: Option<String>,
    #[validate(required, length(min = 2, max = 255))]
    #[schema(example = "Mx-5")]
    pub model_name: Option<String>,
}

/// A stored car as returned by the read operations. `id` and
/// `date_created_at` are server-assigned and immutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarResponse {
    pub id: String,
    pub date_created_at: DateTime<Utc>,
    pub color: String,
    pub price_in_cents: i64,
    pub max_speed_mph: i64,
    pub max_speed_kmp: i64,
    pub vendor_name: String,
    pub model_name: String,
}
