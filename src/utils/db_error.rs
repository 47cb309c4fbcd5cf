/// True when `e` is the unique violation raised by the `links` primary key,
/// i.e. an insert that lost the race for a code.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation() && db.constraint() == Some("links_pkey"))
}
