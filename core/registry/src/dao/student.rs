use diesel::dsl::exists;
use diesel::{ExpressionMethods, JoinOnDsl, OptionalExtension, QueryDsl, RunQueryDsl};

use hb_model::activity::{Activity, ActivityBrief};
use hb_model::student::{StudentActivities, StudentSummary};
use hb_persistence::executor::{readonly_transaction, AsDao, ConnType, PoolType};

use crate::dao::{natural_order, DbResult};
use crate::db::models::{ActivityRow, CompanyRow, NewReference, StudentRow, TeacherRow};
use crate::db::schema::{activity, company, student, student_activity, teacher};

/// Student with everything its detail view needs. Company and teacher are
/// `None` when the stored reference does not resolve.
#[derive(Debug)]
pub struct StudentRecord {
    pub student: StudentRow,
    pub company: Option<CompanyRow>,
    pub teacher: Option<TeacherRow>,
    pub activities: Vec<Activity>,
}

/// Activities referenced by the student, in reference order. References to
/// activities that no longer exist are skipped.
pub(crate) fn resolve_activities(student_id: &str, conn: &ConnType) -> DbResult<Vec<Activity>> {
    let rows: Vec<ActivityRow> = student_activity::table
        .inner_join(activity::table.on(activity::id.eq(student_activity::activity_id)))
        .filter(student_activity::student_id.eq(student_id))
        .order(student_activity::seq.asc())
        .select(activity::all_columns)
        .load(conn)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub(crate) fn student_exists(student_id: &str, conn: &ConnType) -> DbResult<bool> {
    Ok(diesel::select(exists(student::table.find(student_id))).get_result(conn)?)
}

pub(crate) fn append_reference(student_id: &str, activity_id: &str, conn: &ConnType) -> DbResult<()> {
    diesel::insert_into(student_activity::table)
        .values(NewReference {
            student_id,
            activity_id,
        })
        .execute(conn)?;
    Ok(())
}

pub struct StudentDao<'c> {
    pool: &'c PoolType,
}

impl<'c> AsDao<'c> for StudentDao<'c> {
    fn as_dao(pool: &'c PoolType) -> Self {
        Self { pool }
    }
}

impl<'c> StudentDao<'c> {
    pub async fn list(&self) -> DbResult<Vec<StudentSummary>> {
        readonly_transaction(self.pool, "student_dao_list", |conn| {
            let students: Vec<StudentRow> = student::table.order(natural_order()).load(conn)?;
            Ok(students.into_iter().map(Into::into).collect())
        })
        .await
    }

    pub async fn exists(&self, student_id: String) -> DbResult<bool> {
        readonly_transaction(self.pool, "student_dao_exists", move |conn| {
            student_exists(&student_id, conn)
        })
        .await
    }

    pub async fn get(&self, student_id: String) -> DbResult<Option<StudentRecord>> {
        readonly_transaction(self.pool, "student_dao_get", move |conn| {
            let student: StudentRow = match student::table
                .find(&student_id)
                .first(conn)
                .optional()?
            {
                Some(student) => student,
                None => return Ok(None),
            };
            let company: Option<CompanyRow> = company::table
                .find(&student.company_id)
                .first(conn)
                .optional()?;
            let teacher: Option<TeacherRow> = teacher::table
                .find(&student.teacher_id)
                .first(conn)
                .optional()?;
            let activities = resolve_activities(&student.id, conn)?;

            Ok(Some(StudentRecord {
                student,
                company,
                teacher,
                activities,
            }))
        })
        .await
    }

    pub async fn activities(&self, student_id: String) -> DbResult<Option<StudentActivities>> {
        readonly_transaction(self.pool, "student_dao_activities", move |conn| {
            let student: Option<StudentRow> = student::table
                .find(&student_id)
                .first(conn)
                .optional()?;

            match student {
                Some(student) => {
                    let activities = resolve_activities(&student.id, conn)?
                        .into_iter()
                        .map(ActivityBrief::from)
                        .collect();
                    Ok(Some(StudentActivities {
                        student: student.into(),
                        activities,
                    }))
                }
                None => Ok(None),
            }
        })
        .await
    }
}
