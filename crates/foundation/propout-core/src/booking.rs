use serde::{Deserialize, Serialize};

/// Payload for `POST /bookings`.
///
/// Built from form state at submission time, sent once and discarded on
/// success. Field names follow the backend contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_apartment: Option<String>,
    pub check_in_date: String,
    pub check_out_date: String,
    pub number_of_guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_message: Option<String>,
}

/// Raw response body of `POST /bookings`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            full_name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "+234 907 474 3062".to_string(),
            preferred_apartment: Some("65fa12".to_string()),
            check_in_date: "2026-02-14".to_string(),
            check_out_date: "2026-02-16".to_string(),
            number_of_guests: 3,
            additional_message: None,
        }
    }

    #[test]
    fn test_serializes_backend_field_names() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(value["fullName"], "Ada Obi");
        assert_eq!(value["phoneNumber"], "+234 907 474 3062");
        assert_eq!(value["preferredApartment"], "65fa12");
        assert_eq!(value["checkInDate"], "2026-02-14");
        assert_eq!(value["checkOutDate"], "2026-02-16");
    }

    #[test]
    fn test_guest_count_is_numeric_on_the_wire() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(value["numberOfGuests"], serde_json::json!(3));
        assert!(value["numberOfGuests"].is_u64());
    }

    #[test]
    fn test_unset_optionals_are_omitted() {
        let mut req = request();
        req.preferred_apartment = None;
        req.additional_message = None;
        let value = serde_json::to_value(req).unwrap();
        assert!(value.get("preferredApartment").is_none());
        assert!(value.get("additionalMessage").is_none());
    }

    #[test]
    fn test_receipt_tolerates_sparse_bodies() {
        let receipt: BookingReceipt = serde_json::from_str("{\"success\": true}").unwrap();
        assert!(receipt.success);
        assert!(receipt.message.is_none());

        let receipt: BookingReceipt =
            serde_json::from_str("{\"success\": true, \"message\": \"Booking created\"}").unwrap();
        assert_eq!(receipt.message.as_deref(), Some("Booking created"));
    }
}
