use chrono::Local;

use super::error::TripError;

/// A single trip planning request, immutable once constructed.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    /// Resolved travel date, always `YYYY-MM-DD` when the user typed
    /// "soon" or left the field empty.
    pub travel_date: String,
    pub preferences: String,
}

impl TripRequest {
    /// Validate required fields and resolve the travel date.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        travel_date: impl Into<String>,
        preferences: impl Into<String>,
    ) -> Result<Self, TripError> {
        let origin = origin.into();
        let destination = destination.into();

        if origin.trim().is_empty() {
            return Err(TripError::MissingInput("origin"));
        }
        if destination.trim().is_empty() {
            return Err(TripError::MissingInput("destination"));
        }

        Ok(Self {
            origin,
            destination,
            travel_date: resolve_travel_date(&travel_date.into()),
            preferences: preferences.into(),
        })
    }
}

/// An empty date or the literal "soon" (any casing) means today.
fn resolve_travel_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("soon") {
        Local::now().format("%Y-%m-%d").to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn explicit_date_is_kept_verbatim() {
        let request = TripRequest::new("Paris", "Rome", "2025-06-01", "budget").unwrap();
        assert_eq!(request.travel_date, "2025-06-01");
        assert_eq!(request.origin, "Paris");
        assert_eq!(request.destination, "Rome");
        assert_eq!(request.preferences, "budget");
    }

    #[test]
    fn soon_resolves_to_today() {
        let request = TripRequest::new("Paris", "Rome", "soon", "").unwrap();
        assert_eq!(request.travel_date, today());

        let request = TripRequest::new("Paris", "Rome", "SOON", "").unwrap();
        assert_eq!(request.travel_date, today());
    }

    #[test]
    fn empty_date_resolves_to_today() {
        let request = TripRequest::new("Paris", "Rome", "", "").unwrap();
        assert_eq!(request.travel_date, today());
    }

    #[test]
    fn missing_origin_or_destination_is_rejected() {
        let err = TripRequest::new("", "Rome", "soon", "").unwrap_err();
        assert!(matches!(err, TripError::MissingInput("origin")));

        let err = TripRequest::new("Paris", "  ", "soon", "").unwrap_err();
        assert!(matches!(err, TripError::MissingInput("destination")));
    }
}
