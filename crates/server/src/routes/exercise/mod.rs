mod index;
pub use index::*;

mod new_user;
pub use new_user::*;

mod users;
pub use users::*;

mod add;
pub use add::*;

mod log;
pub use log::*;
