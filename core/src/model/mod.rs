pub mod daily_record;
pub mod share;
pub mod summary;
