mod logs;
mod parse_datetime;
mod validation;

pub use self::logs::init_logger;
pub use self::parse_datetime::{parse_date, parse_month};
pub use self::validation::format_validation_errors;
