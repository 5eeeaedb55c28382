use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl};

use hb_model::activity::{Activity, ActivityFields};
use hb_persistence::executor::{do_with_transaction, readonly_transaction, AsDao, PoolType};

use crate::dao::student::{append_reference, student_exists};
use crate::dao::DbResult;
use crate::db::models::{generate_id, ActivityRow};
use crate::db::schema::{activity, student_activity};

pub struct ActivityDao<'c> {
    pool: &'c PoolType,
}

impl<'c> AsDao<'c> for ActivityDao<'c> {
    fn as_dao(pool: &'c PoolType) -> Self {
        Self { pool }
    }
}

impl<'c> ActivityDao<'c> {
    pub async fn get(&self, activity_id: String) -> DbResult<Option<Activity>> {
        readonly_transaction(self.pool, "activity_dao_get", move |conn| {
            let row: Option<ActivityRow> = activity::table
                .find(&activity_id)
                .first(conn)
                .optional()?;
            Ok(row.map(Into::into))
        })
        .await
    }

    /// Inserts the activity and appends it to the student's reference list
    /// in one transaction. Returns `None` when the student does not exist.
    pub async fn create_for_student(
        &self,
        student_id: String,
        fields: ActivityFields,
    ) -> DbResult<Option<Activity>> {
        do_with_transaction(self.pool, "activity_dao_create_for_student", move |conn| {
            if !student_exists(&student_id, conn)? {
                return Ok(None);
            }

            let row = ActivityRow::new(generate_id(), fields);
            diesel::insert_into(activity::table)
                .values(&row)
                .execute(conn)?;
            append_reference(&student_id, &row.id, conn)?;

            log::debug!("Activity {} created for student {}", row.id, student_id);
            Ok(Some(row.into()))
        })
        .await
    }

    /// Overwrites all fields. Returns `false` when no activity has this id.
    pub async fn update(&self, activity_id: String, fields: ActivityFields) -> DbResult<bool> {
        do_with_transaction(self.pool, "activity_dao_update", move |conn| {
            let row = ActivityRow::new(activity_id, fields);
            let num_updated = diesel::update(activity::table.find(&row.id))
                .set(&row)
                .execute(conn)?;
            Ok(num_updated > 0)
        })
        .await
    }

    /// Deletes the activity together with every reference to it. Returns
    /// `false` when no activity has this id.
    pub async fn delete(&self, activity_id: String) -> DbResult<bool> {
        do_with_transaction(self.pool, "activity_dao_delete", move |conn| {
            let num_scrubbed = diesel::delete(
                student_activity::table.filter(student_activity::activity_id.eq(&activity_id)),
            )
            .execute(conn)?;
            let num_deleted = diesel::delete(activity::table.find(&activity_id)).execute(conn)?;

            log::debug!(
                "Activity {}: deleted {} record(s), scrubbed {} reference(s)",
                activity_id,
                num_deleted,
                num_scrubbed
            );
            Ok(num_deleted > 0)
        })
        .await
    }
}
