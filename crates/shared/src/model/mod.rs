mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

#[cfg(all(test, feature = "backend"))]
pub(crate) mod test_db;
