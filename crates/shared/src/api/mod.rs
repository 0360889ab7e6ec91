use const_format::concatcp;
pub mod error;
pub mod payloads;

pub const API_BASE_PATH: &str = "/api/";
pub const EXERCISE_BASE_PATH: &str = concatcp!(API_BASE_PATH, "exercise");

/// Text returned by the landing route
pub const INDEX_GREETING: &str = "This is the default index of Exercise Tracker Api Project.";

/// Plain text answer when registering a username that already exists
pub const USERNAME_TAKEN: &str = "This user is already taken";

/// Plain text answer when adding an exercise for a user id that is not stored
pub const USER_DOES_NOT_EXIST: &str = "This user does not exist";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Index,
    NewUser,
    Users,
    Add,
    Log,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            Index => EXERCISE_BASE_PATH,
            NewUser => concatcp!(EXERCISE_BASE_PATH, "/new-user"),
            Users => concatcp!(EXERCISE_BASE_PATH, "/users"),
            Add => concatcp!(EXERCISE_BASE_PATH, "/add"),
            Log => concatcp!(EXERCISE_BASE_PATH, "/log"),
        }
    }
}
