use serde::Deserialize;

/// Raw fields of the entry form, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub customer_name: String,
    /// Selected book label, empty when nothing is selected.
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub price: String,
}

impl EntryForm {
    /// The submitted book label, `None` for the "none selected" option.
    pub fn selected_book(&self) -> Option<&str> {
        Some(self.book.as_str()).filter(|label| !label.is_empty())
    }

    /// Price as entered. Blank input means the default of 0.
    pub fn price_value(&self) -> Option<i64> {
        let price = self.price.trim();
        if price.is_empty() {
            return Some(0);
        }
        price.parse().ok()
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRequest {
    pub customer_name: String,
    pub book_label: String,
    pub price: i64,
}

/// What a successful save wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleReceipt {
    pub orderid: i64,
    pub custid: i64,
    pub bookid: i64,
    pub customer_name: String,
    pub saleprice: i64,
    pub orderdate: String,
    /// Whether the save created the customer row.
    pub new_customer: bool,
}
