#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Exact, case-sensitive match on every supplied name. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
