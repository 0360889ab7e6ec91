use rusqlite::Connection;

const USER_UP: &str = include_str!("../../../server/migrations/001-user/up.sql");
const EXERCISE_UP: &str = include_str!("../../../server/migrations/002-exercise/up.sql");

/// In memory database with the server's schema applied
pub fn connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    conn.execute_batch(USER_UP).unwrap();
    conn.execute_batch(EXERCISE_UP).unwrap();
    conn
}
