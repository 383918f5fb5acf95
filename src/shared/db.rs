use sea_orm::DbErr;

/// Postgres unique violation (SQLSTATE 23505), matched on the driver text.
pub fn is_unique_violation(e: &DbErr) -> bool {
    let message = e.to_string().to_lowercase();
    message.contains("23505") || message.contains("duplicate") || message.contains("unique")
}
