mod exercise;
pub use exercise::*;

mod new;
pub use new::*;

mod date;
pub use date::*;

mod date_filter;
pub use date_filter::*;
