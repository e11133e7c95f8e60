/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Commit dates are calendar dates (PostgreSQL `DATE`), no time component.
pub type CommitDate = chrono::NaiveDate;
