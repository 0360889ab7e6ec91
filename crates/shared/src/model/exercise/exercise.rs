use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[cfg(feature = "backend")]
use {
    crate::model::{DateFilter, NewExercise},
    exemplar::Model,
    rusqlite::Connection,
    sea_query::{
        enum_def, Cond, Expr, Func, Order, Query, SelectStatement, SimpleExpr, SqliteQueryBuilder,
    },
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: i64,
    pub description: String,
    pub duration: String,
    pub exercise_date: DateTime<Utc>,
    pub user_uuid: Uuid,
}

#[cfg(feature = "backend")]
impl Exercise {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::ExerciseDate,
                ExerciseIden::UserUuid,
            ])
            .from(ExerciseIden::Table)
            .to_owned()
    }

    /// Number of exercises across every user
    pub fn count(conn: &Connection) -> Result<i64, rusqlite::Error> {
        let (sql, values) = Query::select()
            .expr(Func::count(Expr::col(ExerciseIden::Id)))
            .from(ExerciseIden::Table)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let count = stmt.query_row(&*values.as_params(), |row| row.get(0))?;
        Ok(count)
    }

    pub fn fetch_by_id(conn: &Connection, id: i64) -> Result<Exercise, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row)?;
        Ok(res)
    }

    pub fn fetch_for_user(conn: &Connection, user_id: &Uuid) -> Result<Vec<Exercise>, rusqlite::Error> {
        Self::fetch_for_user_where(conn, user_id, None)
    }

    pub fn fetch_for_user_from(
        conn: &Connection,
        user_id: &Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let date = Expr::col(ExerciseIden::ExerciseDate).gte(from);
        Self::fetch_for_user_where(conn, user_id, Some(date))
    }

    pub fn fetch_for_user_to(
        conn: &Connection,
        user_id: &Uuid,
        to: DateTime<Utc>,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let date = Expr::col(ExerciseIden::ExerciseDate).lte(to);
        Self::fetch_for_user_where(conn, user_id, Some(date))
    }

    pub fn fetch_for_user_between(
        conn: &Connection,
        user_id: &Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let date = Expr::col(ExerciseIden::ExerciseDate).between(from, to);
        Self::fetch_for_user_where(conn, user_id, Some(date))
    }

    /// Dispatches to the fetch matching the filter
    pub fn fetch_filtered(
        conn: &Connection,
        user_id: &Uuid,
        filter: DateFilter,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        match filter {
            DateFilter::All => Self::fetch_for_user(conn, user_id),
            DateFilter::From(from) => Self::fetch_for_user_from(conn, user_id, from),
            DateFilter::To(to) => Self::fetch_for_user_to(conn, user_id, to),
            DateFilter::Between(from, to) => Self::fetch_for_user_between(conn, user_id, from, to),
        }
    }

    fn fetch_for_user_where(
        conn: &Connection,
        user_id: &Uuid,
        date: Option<SimpleExpr>,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .cond_where(
                Cond::all()
                    .add(Expr::col(ExerciseIden::UserUuid).eq(user_id))
                    .add_option(date),
            )
            .order_by(ExerciseIden::Id, Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(conn: &mut Connection, new_exercise: NewExercise) -> Result<Exercise, rusqlite::Error> {
        let tx = conn.transaction()?;
        let exercise = {
            new_exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, tx.last_insert_rowid())?
        };
        tx.commit()?;

        Ok(exercise)
    }
}
