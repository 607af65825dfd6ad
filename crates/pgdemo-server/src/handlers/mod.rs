//! HTTP route handlers.

pub mod data;

pub const WELCOME: &str = "Welcome to the Flask App with PostgreSQL!";

/// GET / - Static welcome text.
pub async fn index() -> &'static str {
    WELCOME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_text() {
        assert_eq!(index().await, "Welcome to the Flask App with PostgreSQL!");
    }
}
