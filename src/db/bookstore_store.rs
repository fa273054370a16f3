use sqlx::SqliteConnection;

use crate::{
    db::{self, Database, SqlValue, Table},
    error::{AppError, Result},
    models::{book::Book, customer::Customer, order::Order},
};

const PURCHASE_HISTORY_SQL: &str = r#"
    SELECT c.custid,
           c.name,
           b.bookname,
           strftime('%Y-%m-%d', o.orderdate) AS orderdate,
           o.saleprice
    FROM Customer c
    JOIN Orders o ON c.custid = o.custid
    JOIN Book b ON o.bookid = b.bookid
    WHERE c.name = ?
    ORDER BY o.orderdate
"#;

/// Store for the Book, Customer and Orders tables
#[derive(Clone)]
pub struct BookstoreStore {
    database: Database,
}

impl BookstoreStore {
    /// Create a new BookstoreStore on the shared database handle
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get every book, ordered by id
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>("SELECT bookid, bookname FROM Book ORDER BY bookid")
                .fetch_all(self.database.pool())
                .await
                .map_err(AppError::Database)?;

        Ok(books)
    }

    /// Get the purchase history of the customer named exactly `name`
    pub async fn purchase_history(&self, name: &str) -> Result<Table> {
        self.database
            .query(PURCHASE_HISTORY_SQL, &[SqlValue::from(name)])
            .await
    }
}

/// Next free customer id, 1 for an empty table
pub async fn next_customer_id(conn: &mut SqliteConnection) -> Result<i64> {
    let (max_id,): (i64,) = sqlx::query_as("SELECT COALESCE(MAX(custid), 0) FROM Customer")
        .fetch_one(&mut *conn)
        .await
        .map_err(AppError::Database)?;

    Ok(max_id + 1)
}

/// Next free order id, 1 for an empty table
pub async fn next_order_id(conn: &mut SqliteConnection) -> Result<i64> {
    let (max_id,): (i64,) = sqlx::query_as("SELECT COALESCE(MAX(orderid), 0) FROM Orders")
        .fetch_one(&mut *conn)
        .await
        .map_err(AppError::Database)?;

    Ok(max_id + 1)
}

/// Id of the first customer with exactly this name
pub async fn find_customer_id(conn: &mut SqliteConnection, name: &str) -> Result<Option<i64>> {
    let table = db::query(
        conn,
        "SELECT custid FROM Customer WHERE name = ? ORDER BY custid LIMIT 1",
        &[SqlValue::from(name)],
    )
    .await?;

    Ok(table.get(0, "custid").and_then(|cell| cell.as_i64()))
}

pub async fn insert_customer(conn: &mut SqliteConnection, customer: &Customer) -> Result<()> {
    db::execute(
        conn,
        r#"
        INSERT INTO Customer (custid, name, address, phone)
        VALUES (?, ?, ?, ?)
        "#,
        &[
            SqlValue::Integer(customer.custid),
            SqlValue::from(customer.name.as_str()),
            customer.address.clone().map_or(SqlValue::Null, SqlValue::from),
            customer.phone.clone().map_or(SqlValue::Null, SqlValue::from),
        ],
    )
    .await?;

    Ok(())
}

pub async fn insert_order(conn: &mut SqliteConnection, order: &Order) -> Result<()> {
    db::execute(
        conn,
        r#"
        INSERT INTO Orders (orderid, custid, bookid, saleprice, orderdate)
        VALUES (?, ?, ?, ?, ?)
        "#,
        &[
            SqlValue::Integer(order.orderid),
            SqlValue::Integer(order.custid),
            SqlValue::Integer(order.bookid),
            SqlValue::Integer(order.saleprice),
            SqlValue::from(order.orderdate.as_str()),
        ],
    )
    .await?;

    Ok(())
}
