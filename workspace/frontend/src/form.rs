//! Prediction form input handling.

use ecowatt_common::PredictionRequest;
use thiserror::Error;

/// Location choices offered by the form, as `(value, label)`.
pub const LOCATIONS: [(&str, &str); 5] = [
    ("california", "California, USA"),
    ("texas", "Texas, USA"),
    ("punjab", "Punjab, India"),
    ("delhi", "Delhi, India"),
    ("default", "Other"),
];

/// Appliance checkboxes offered by the form, as `(value, label)`.
pub const APPLIANCES: [(&str, &str); 6] = [
    ("ac", "Air Conditioner"),
    ("heater", "Heater"),
    ("dishwasher", "Dishwasher"),
    ("refrigerator", "Refrigerator"),
    ("washing_machine", "Washing Machine"),
    ("television", "Television"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please choose a location.")]
    MissingLocation,
    #[error("Please enter a valid household size.")]
    InvalidHouseholdSize(String),
}

/// Raw field values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionFormData {
    pub location: String,
    pub household_size: String,
    pub current_usage: String,
    /// Values of the checked `appliances` checkboxes, in DOM order.
    pub appliances: Vec<String>,
}

impl PredictionFormData {
    pub fn into_request(self) -> Result<PredictionRequest, FormError> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(FormError::MissingLocation);
        }

        let household_size = match parse_leading_int(&self.household_size) {
            Some(size) if size > 0 => size,
            _ => return Err(FormError::InvalidHouseholdSize(self.household_size)),
        };

        let current_usage = parse_leading_int(&self.current_usage).unwrap_or(0);

        Ok(PredictionRequest::new(
            location,
            household_size,
            current_usage,
            self.appliances,
        ))
    }
}

/// Parses the leading integer of `input`: optional whitespace, optional sign, then
/// digits. Trailing text is ignored, so `"3 people"` is 3 and `"12.9"` is 12.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(appliances: &[&str]) -> PredictionFormData {
        PredictionFormData {
            location: "punjab".to_string(),
            household_size: "3".to_string(),
            current_usage: "".to_string(),
            appliances: appliances.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 people"), Some(7));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_checked_appliances_become_a_set() {
        let forward = form(&["ac", "heater"]).into_request().unwrap();
        let reversed = form(&["heater", "ac"]).into_request().unwrap();

        assert_eq!(forward.appliances, reversed.appliances);
        assert_eq!(
            forward.appliances.iter().map(String::as_str).collect::<Vec<_>>(),
            ["ac", "heater"]
        );
    }

    #[test]
    fn test_current_usage_defaults_to_zero() {
        let request = form(&[]).into_request().unwrap();
        assert_eq!(request.current_usage, 0);

        let mut data = form(&[]);
        data.current_usage = "not a number".to_string();
        assert_eq!(data.into_request().unwrap().current_usage, 0);

        let mut data = form(&[]);
        data.current_usage = "450".to_string();
        assert_eq!(data.into_request().unwrap().current_usage, 450);
    }

    #[test]
    fn test_household_size_must_be_positive() {
        let mut data = form(&[]);
        data.household_size = "0".to_string();
        assert_eq!(
            data.into_request(),
            Err(FormError::InvalidHouseholdSize("0".to_string()))
        );

        let mut data = form(&[]);
        data.household_size = "many".to_string();
        assert!(matches!(data.into_request(), Err(FormError::InvalidHouseholdSize(_))));
    }

    #[test]
    fn test_location_is_required() {
        let mut data = form(&["ac"]);
        data.location = "  ".to_string();
        assert_eq!(data.into_request(), Err(FormError::MissingLocation));
    }
}
