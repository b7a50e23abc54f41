use serde::{Deserialize, Serialize};

/// Catalog filters, forwarded verbatim to `GET /properties`.
///
/// Unset fields are omitted from the query string entirely; the backend
/// applies no constraint for an absent parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilters {
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub guests: Option<u32>,
}

impl PropertyFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Query pairs in the parameter names the backend expects.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("maxPrice", max_price.to_string()));
        }
        if let Some(guests) = self.guests {
            pairs.push(("guests", guests.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_query() {
        assert!(PropertyFilters::default().is_empty());
        assert!(PropertyFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_query_uses_backend_parameter_names() {
        let filters = PropertyFilters {
            search: Some("wuse".to_string()),
            min_price: Some(10_000),
            max_price: Some(90_000),
            guests: Some(2),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("search", "wuse".to_string()),
                ("minPrice", "10000".to_string()),
                ("maxPrice", "90000".to_string()),
                ("guests", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_partial_filters_skip_unset_fields() {
        let filters = PropertyFilters {
            guests: Some(4),
            ..Default::default()
        };
        assert_eq!(filters.to_query(), vec![("guests", "4".to_string())]);
        assert!(!filters.is_empty());
    }
}
