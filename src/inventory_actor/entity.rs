use crate::actor_framework::Entity;
use crate::domain::Product;

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &String { &self.id }

    /// Accumulates the incoming quantity into this record.
    ///
    /// Name, price and kind of the stored record win; everything else the
    /// incoming record carries is discarded. Saturates at `u32::MAX`.
    fn merge(&mut self, incoming: Product) {
        self.quantity = self.quantity.saturating_add(incoming.quantity);
    }

    fn value(&self) -> f64 {
        Product::value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductKind;

    #[test]
    fn test_merge_keeps_first_record_fields() {
        let mut stored = Product::electronics("E1", "Phone", 300.0, 1, 2, "Acme");
        stored.merge(Product::electronics("E1", "Tablet", 500.0, 4, 5, "Other"));

        assert_eq!(stored.quantity, 5);
        assert_eq!(stored.name, "Phone");
        assert_eq!(stored.price, 300.0);
        assert_eq!(
            stored.kind,
            ProductKind::Electronics { warranty_years: 2, brand: "Acme".to_string() }
        );
    }

    #[test]
    fn test_merge_saturates() {
        let mut stored = Product::new("A1", "Widget", 1.0, u32::MAX - 1);
        stored.merge(Product::new("A1", "Widget", 1.0, 10));
        assert_eq!(stored.quantity, u32::MAX);
    }
}
