use diesel::{QueryDsl, RunQueryDsl};

use hb_model::catalog::{Company, Teacher};
use hb_persistence::executor::{readonly_transaction, AsDao, PoolType};

use crate::dao::{natural_order, DbResult};
use crate::db::models::{CompanyRow, TeacherRow};
use crate::db::schema::{company, teacher};

pub struct CompanyDao<'c> {
    pool: &'c PoolType,
}

impl<'c> AsDao<'c> for CompanyDao<'c> {
    fn as_dao(pool: &'c PoolType) -> Self {
        Self { pool }
    }
}

impl<'c> CompanyDao<'c> {
    pub async fn list(&self) -> DbResult<Vec<Company>> {
        readonly_transaction(self.pool, "company_dao_list", |conn| {
            let companies: Vec<CompanyRow> = company::table.order(natural_order()).load(conn)?;
            Ok(companies.into_iter().map(Into::into).collect())
        })
        .await
    }
}

pub struct TeacherDao<'c> {
    pool: &'c PoolType,
}

impl<'c> AsDao<'c> for TeacherDao<'c> {
    fn as_dao(pool: &'c PoolType) -> Self {
        Self { pool }
    }
}

impl<'c> TeacherDao<'c> {
    pub async fn list(&self) -> DbResult<Vec<Teacher>> {
        readonly_transaction(self.pool, "teacher_dao_list", |conn| {
            let teachers: Vec<TeacherRow> = teacher::table.order(natural_order()).load(conn)?;
            Ok(teachers.into_iter().map(Into::into).collect())
        })
        .await
    }
}
