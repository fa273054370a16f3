use sqlx::FromRow;

/// Orders row. `orderdate` is kept in its `YYYY-MM-DD` text form.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Order {
    pub orderid: i64,
    pub custid: i64,
    pub bookid: i64,
    pub saleprice: i64,
    pub orderdate: String,
}
