use sqlx::FromRow;

/// Book row. Never written by this application.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Book {
    pub bookid: i64,
    pub bookname: String,
}

impl Book {
    /// Label shown in the entry form's book selector, `"{bookid}. {bookname}"`.
    pub fn label(&self) -> String {
        format!("{}. {}", self.bookid, self.bookname)
    }
}

/// Extract the book id from a selector label: the numeric prefix up to the
/// first period.
pub fn parse_book_label(label: &str) -> Option<i64> {
    let (prefix, _) = label.split_once('.').unwrap_or((label, ""));
    prefix.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips_through_parser() {
        let book = Book {
            bookid: 7,
            bookname: "Olympic Champions".to_string(),
        };
        assert_eq!(book.label(), "7. Olympic Champions");
        assert_eq!(parse_book_label(&book.label()), Some(7));
    }

    #[test]
    fn parser_stops_at_first_period() {
        assert_eq!(parse_book_label("10. Golf Bible vol. 2"), Some(10));
    }

    #[test]
    fn parser_rejects_non_numeric_prefix() {
        assert_eq!(parse_book_label("Soccer. History"), None);
        assert_eq!(parse_book_label(""), None);
    }
}
