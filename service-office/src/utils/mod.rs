pub mod currency;
pub mod table;

pub use currency::format_currency;
pub use table::Table;
