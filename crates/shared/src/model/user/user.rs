use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[cfg(feature = "backend")]
use {
    crate::model::NewUser,
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Alias, Expr, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

#[cfg(feature = "backend")]
impl User {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .to_owned()
    }

    /// All users in the order they registered
    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            // Ids are random so creation order comes from the implicit rowid
            .order_by(Alias::new("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn fetch_by_username<T: AsRef<str>>(
        conn: &Connection,
        username: T,
    ) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Username).eq(username.as_ref()))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, rusqlite::Error> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &new_user.id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(user)
    }
}

#[cfg(all(test, feature = "backend"))]
mod test {
    use rusqlite::ErrorCode;

    use crate::{
        model::{test_db, NewUser, User},
        types::Uuid,
    };

    #[test]
    fn test_fetch_all_empty() {
        let conn = test_db::connection();
        assert!(User::fetch_all(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_all_in_creation_order() {
        let mut conn = test_db::connection();
        let names = ["zed", "amy", "mo"];
        for name in names {
            User::create(&mut conn, NewUser::new(name)).unwrap();
        }

        let users = User::fetch_all(&conn).unwrap();
        let fetched: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(fetched, names);
    }

    #[test]
    fn test_create_then_fetch() {
        let mut conn = test_db::connection();
        let new_user = NewUser::new("manuelar");
        let id = new_user.id;

        let user = User::create(&mut conn, new_user).unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "manuelar");

        assert_eq!(User::fetch_by_id(&conn, &id).unwrap(), Some(user.clone()));
        assert_eq!(User::fetch_by_username(&conn, "manuelar").unwrap(), Some(user));
    }

    #[test]
    fn test_fetch_missing() {
        let conn = test_db::connection();
        assert_eq!(User::fetch_by_id(&conn, &Uuid::new_v4()).unwrap(), None);
        assert_eq!(User::fetch_by_username(&conn, "nobody").unwrap(), None);
    }

    #[test]
    fn test_duplicate_username_is_a_constraint_violation() {
        let mut conn = test_db::connection();
        User::create(&mut conn, NewUser::new("twice")).unwrap();

        let err = User::create(&mut conn, NewUser::new("twice")).unwrap_err();
        assert_eq!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation));
        assert_eq!(User::fetch_all(&conn).unwrap().len(), 1);
    }
}
