use chrono::Local;

use crate::{
    db::{BookstoreStore, bookstore_store},
    error::{AppError, Result},
    models::{
        book::parse_book_label,
        customer::Customer,
        order::Order,
        sale::{EntryForm, SaleReceipt, SaleRequest},
    },
};

pub const REJECTION_MESSAGE: &str = "Customer name, book, and price are all required.";

/// Where a submission of the entry form ended up.
#[derive(Debug)]
pub enum EntryOutcome {
    /// Nothing submitted yet.
    Idle,
    /// Validation failed. The form is handed back for correction.
    Rejected { form: EntryForm, message: String },
    Saved { receipt: SaleReceipt },
    /// The save was rolled back.
    Failed { form: EntryForm, message: String },
}

/// Address and phone stored for customers created by a sale.
#[derive(Debug, Clone)]
pub struct CustomerDefaults {
    pub address: String,
    pub phone: String,
}

pub struct EntryService {
    store: BookstoreStore,
    defaults: CustomerDefaults,
}

impl EntryService {
    pub fn new(store: BookstoreStore, defaults: CustomerDefaults) -> Self {
        Self { store, defaults }
    }

    /// Validate and, if complete, save one submission of the entry form.
    pub async fn submit(&self, form: EntryForm) -> EntryOutcome {
        let request = match validate(&form) {
            Some(request) => request,
            None => {
                tracing::warn!(?form, "Rejected incomplete sale");
                return EntryOutcome::Rejected {
                    form,
                    message: REJECTION_MESSAGE.to_string(),
                };
            }
        };

        match self.save(&request).await {
            Ok(receipt) => EntryOutcome::Saved { receipt },
            Err(e) => {
                tracing::error!(customer = %request.customer_name, error = %e, "Saving sale failed");
                EntryOutcome::Failed {
                    form,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Record a validated sale, creating the customer if the name is new.
    ///
    /// All steps share one transaction; an error drops it uncommitted.
    pub async fn save(&self, request: &SaleRequest) -> Result<SaleReceipt> {
        let mut tx = self.store.database().begin().await?;

        let candidate_id = bookstore_store::next_customer_id(&mut tx).await?;
        let (custid, new_customer) =
            match bookstore_store::find_customer_id(&mut tx, &request.customer_name).await? {
                Some(existing) => (existing, false),
                None => {
                    let customer = Customer {
                        custid: candidate_id,
                        name: request.customer_name.clone(),
                        address: Some(self.defaults.address.clone()),
                        phone: Some(self.defaults.phone.clone()),
                    };
                    bookstore_store::insert_customer(&mut tx, &customer).await?;
                    (candidate_id, true)
                }
            };

        let bookid = parse_book_label(&request.book_label).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid book selection: {}", request.book_label))
        })?;

        let order = Order {
            orderid: bookstore_store::next_order_id(&mut tx).await?,
            custid,
            bookid,
            saleprice: request.price,
            orderdate: today(),
        };
        bookstore_store::insert_order(&mut tx, &order).await?;

        tx.commit().await?;

        tracing::info!(
            orderid = order.orderid,
            custid,
            bookid,
            new_customer,
            "Sale saved"
        );

        Ok(SaleReceipt {
            orderid: order.orderid,
            custid,
            bookid,
            customer_name: request.customer_name.clone(),
            saleprice: order.saleprice,
            orderdate: order.orderdate,
            new_customer,
        })
    }
}

/// `None` unless the name is present, a book is selected and the price is
/// strictly positive.
pub fn validate(form: &EntryForm) -> Option<SaleRequest> {
    let book_label = form.selected_book()?;
    let price = form.price_value().filter(|price| *price > 0)?;
    if form.customer_name.is_empty() {
        return None;
    }

    Some(SaleRequest {
        customer_name: form.customer_name.clone(),
        book_label: book_label.to_string(),
        price,
    })
}

/// Current local calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
