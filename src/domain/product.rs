use std::fmt;

/// What sort of product a record describes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    General,
    Electronics {
        warranty_years: u32,
        brand: String,
    },
}

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub kind: ProductKind,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            kind: ProductKind::General,
        }
    }

    /// Creates an electronics product carrying a warranty period and brand.
    pub fn electronics(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            kind: ProductKind::Electronics {
                warranty_years,
                brand: brand.into(),
            },
            ..Self::new(id, name, price, quantity)
        }
    }

    /// Stock value of this record: unit price times quantity.
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn brand(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Electronics { brand, .. } => Some(brand),
            ProductKind::General => None,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (${}) x {}", self.id, self.name, render_price(self.price), self.quantity)?;
        if let ProductKind::Electronics { warranty_years, brand } = &self.kind {
            write!(f, " | Brand: {}, Warranty: {} years", brand, warranty_years)?;
        }
        Ok(())
    }
}

/// Shortest round-trip form of `price`, always with a fractional part and,
/// when exponential, a signed exponent of at least two digits (`1e+16`, `1e-05`).
fn render_price(price: f64) -> String {
    let text = format!("{:?}", price);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}
