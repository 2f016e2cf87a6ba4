use crate::types::dto::{Item, PathItem, PathQueryItem, PricedItem};

/// `Some` only for a present, non-zero amount
///
/// A tax of exactly `0` is treated the same as no tax at all.
pub fn truthy_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|amount| *amount != 0.0)
}

/// `Some` only for a present, non-empty string
pub fn truthy_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Builds the responses of the item endpoints from validated input
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemService;

impl ItemService {
    pub fn new() -> Self {
        Self
    }

    /// Echo the item unchanged
    pub fn echo(&self, item: Item) -> Item {
        item
    }

    /// Add `price_with_tax` when the item carries a non-zero tax
    pub fn with_tax(&self, item: Item) -> PricedItem {
        let price_with_tax = truthy_amount(item.tax).map(|tax| item.price + tax);

        PricedItem {
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
            price_with_tax,
        }
    }

    /// Merge the path parameter with every item field
    pub fn merge_path(&self, request_and_path_parameter: i64, item: Item) -> PathItem {
        PathItem {
            request_and_path_parameter,
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
        }
    }

    /// Merge path parameter and item, adding `query` only when it is non-empty
    pub fn merge_path_and_query(
        &self,
        request_and_path_and_query_parameter: i64,
        item: Item,
        query: Option<String>,
    ) -> PathQueryItem {
        PathQueryItem {
            request_and_path_and_query_parameter,
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
            query: truthy_text(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tax: Option<f64>) -> Item {
        Item {
            name: "Foo".to_string(),
            description: Some("A foo".to_string()),
            price: 10.5,
            tax,
        }
    }

    #[test]
    fn test_truthy_amount() {
        assert_eq!(truthy_amount(None), None);
        assert_eq!(truthy_amount(Some(0.0)), None);
        assert_eq!(truthy_amount(Some(-0.0)), None);
        assert_eq!(truthy_amount(Some(1.5)), Some(1.5));
        assert_eq!(truthy_amount(Some(-2.0)), Some(-2.0));
    }

    #[test]
    fn test_truthy_text() {
        assert_eq!(truthy_text(None), None);
        assert_eq!(truthy_text(Some(String::new())), None);
        assert_eq!(truthy_text(Some("q".to_string())), Some("q".to_string()));
    }

    #[test]
    fn test_echo_is_identity() {
        assert_eq!(ItemService::new().echo(item(Some(1.0))), item(Some(1.0)));
    }

    #[test]
    fn test_with_tax_adds_total() {
        let priced = ItemService::new().with_tax(item(Some(2.0)));

        assert_eq!(priced.price_with_tax, Some(12.5));
        assert_eq!(priced.tax, Some(2.0));
    }

    #[test]
    fn test_with_zero_tax_has_no_total() {
        let priced = ItemService::new().with_tax(item(Some(0.0)));

        assert_eq!(priced.price_with_tax, None);
        assert_eq!(priced.tax, Some(0.0));
    }

    #[test]
    fn test_with_absent_tax_has_no_total() {
        assert_eq!(ItemService::new().with_tax(item(None)).price_with_tax, None);
    }

    #[test]
    fn test_merge_path() {
        let merged = ItemService::new().merge_path(678, item(None));

        assert_eq!(merged.request_and_path_parameter, 678);
        assert_eq!(merged.name, "Foo");
        assert_eq!(merged.description.as_deref(), Some("A foo"));
    }

    #[test]
    fn test_merge_path_and_query() {
        let service = ItemService::new();

        let with_query = service.merge_path_and_query(123, item(None), Some("justinTime".to_string()));
        assert_eq!(with_query.request_and_path_and_query_parameter, 123);
        assert_eq!(with_query.query.as_deref(), Some("justinTime"));

        let empty_query = service.merge_path_and_query(123, item(None), Some(String::new()));
        assert_eq!(empty_query.query, None);
    }
}
