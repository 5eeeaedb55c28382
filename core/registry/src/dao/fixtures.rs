use diesel::RunQueryDsl;

use hb_persistence::executor::{do_with_transaction, AsDao, PoolType};

use crate::dao::DbResult;
use crate::db::models::{CompanyRow, StudentRow, TeacherRow};
use crate::db::schema::{company, student, teacher};

/// Rows ready to be inserted, with every id and reference already resolved.
#[derive(Debug, Default)]
pub struct FixtureRows {
    pub companies: Vec<CompanyRow>,
    pub teachers: Vec<TeacherRow>,
    pub students: Vec<StudentRow>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub companies: usize,
    pub teachers: usize,
    pub students: usize,
}

pub struct FixtureDao<'c> {
    pool: &'c PoolType,
}

impl<'c> AsDao<'c> for FixtureDao<'c> {
    fn as_dao(pool: &'c PoolType) -> Self {
        Self { pool }
    }
}

impl<'c> FixtureDao<'c> {
    /// Inserts all rows in one transaction. Nothing is stored if any insert fails.
    /// Batch inserts on SQLite need the bare connection, not the pooled one.
    pub async fn import(&self, rows: FixtureRows) -> DbResult<ImportSummary> {
        do_with_transaction(self.pool, "fixture_dao_import", move |conn| {
            let companies = diesel::insert_into(company::table)
                .values(&rows.companies)
                .execute(&**conn)?;
            let teachers = diesel::insert_into(teacher::table)
                .values(&rows.teachers)
                .execute(&**conn)?;
            let students = diesel::insert_into(student::table)
                .values(&rows.students)
                .execute(&**conn)?;

            Ok(ImportSummary {
                companies,
                teachers,
                students,
            })
        })
        .await
    }
}
