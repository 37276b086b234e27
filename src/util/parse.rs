use sea_orm::DbErr;

/// Parses a Discord snowflake stored as a string column.
///
/// Discord ids are persisted as strings, so every conversion from an entity model back
/// into a domain model goes through this function.
///
/// # Arguments
/// - `column` - Name of the column being parsed, used in the error message
/// - `value` - The stored string value
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed id
/// - `Err(DbErr::Custom)` - The stored value is not a valid u64
pub fn parse_snowflake(column: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {} '{}': {}", column, value, e)))
}

/// Parses an optional Discord snowflake column.
pub fn parse_optional_snowflake(column: &str, value: Option<&str>) -> Result<Option<u64>, DbErr> {
    value.map(|v| parse_snowflake(column, v)).transpose()
}
