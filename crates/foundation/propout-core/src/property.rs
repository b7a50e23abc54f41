use serde::{Deserialize, Serialize};

/// Availability of a property as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Booked,
    Maintenance,
}

impl PropertyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Maintenance => "maintenance",
        }
    }

    /// Only available properties can be booked.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::Available)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Image => "IMG",
            Self::Video => "VID",
        }
    }
}

/// One gallery entry. `public_id` is the backend's storage identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    #[serde(rename = "publicId")]
    pub public_id: String,
    #[serde(rename = "resourceType")]
    pub kind: MediaKind,
}

/// A listed apartment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub price_per_night: i64,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub max_guests: u32,
    pub status: PropertyStatus,
}

impl Property {
    /// First media item, used as the card cover. Callers fall back to a
    /// placeholder when a property has no media at all.
    pub fn cover(&self) -> Option<&MediaItem> {
        self.media.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_property_json() -> serde_json::Value {
        serde_json::json!({
            "_id": "65fa12",
            "title": "Executive 2-Bedroom",
            "description": "Master suite, dining area and balcony.",
            "address": "Wuse II, Abuja",
            "pricePerNight": 55000,
            "media": [
                {"url": "https://cdn.example/a.jpg", "publicId": "props/a", "resourceType": "image"},
                {"url": "https://cdn.example/a.mp4", "publicId": "props/a-tour", "resourceType": "video"}
            ],
            "amenities": ["Master Suite", "Balcony"],
            "maxGuests": 4,
            "status": "available"
        })
    }

    #[test]
    fn test_deserialize_backend_record() {
        let property: Property = serde_json::from_value(backend_property_json()).unwrap();
        assert_eq!(property.id, "65fa12");
        assert_eq!(property.price_per_night, 55000);
        assert_eq!(property.max_guests, 4);
        assert_eq!(property.status, PropertyStatus::Available);
        assert_eq!(property.media.len(), 2);
        assert_eq!(property.media[1].kind, MediaKind::Video);
        assert_eq!(property.media[0].public_id, "props/a");
    }

    #[test]
    fn test_missing_media_and_amenities_default_empty() {
        let mut value = backend_property_json();
        value.as_object_mut().unwrap().remove("media");
        value.as_object_mut().unwrap().remove("amenities");
        let property: Property = serde_json::from_value(value).unwrap();
        assert!(property.media.is_empty());
        assert!(property.cover().is_none());
        assert!(property.amenities.is_empty());
    }

    #[test]
    fn test_status_gates_booking() {
        assert!(PropertyStatus::Available.is_bookable());
        assert!(!PropertyStatus::Booked.is_bookable());
        assert!(!PropertyStatus::Maintenance.is_bookable());
    }

    #[test]
    fn test_status_wire_values() {
        let status: PropertyStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(status, PropertyStatus::Maintenance);
        assert_eq!(serde_json::to_string(&PropertyStatus::Booked).unwrap(), "\"booked\"");
    }
}
