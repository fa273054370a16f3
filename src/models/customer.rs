use sqlx::FromRow;

/// Customer row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Customer {
    pub custid: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}
