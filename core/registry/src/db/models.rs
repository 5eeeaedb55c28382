use uuid::Uuid;

use hb_model::activity::{Activity, ActivityFields, ActivityKind, ActivityTime};
use hb_model::catalog::{Company, Teacher};
use hb_model::student::StudentSummary;

use crate::db::schema::{activity, company, student, student_activity, teacher};

pub fn generate_id() -> String {
    Uuid::new_v4().to_simple().to_string()
}

#[derive(Queryable, Insertable, Identifiable, AsChangeset, Debug, Clone)]
#[table_name = "activity"]
pub struct ActivityRow {
    pub id: String,
    pub activity_type: String,
    pub date: String,
    pub time: String,
    pub description: String,
}

impl ActivityRow {
    pub fn new(id: String, fields: ActivityFields) -> Self {
        ActivityRow {
            id,
            activity_type: fields.kind.into(),
            date: fields.date,
            time: fields.time.to_string(),
            description: fields.description,
        }
    }
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            id: row.id,
            kind: ActivityKind::from(row.activity_type),
            date: row.date,
            time: ActivityTime::new(row.time),
            description: row.description,
        }
    }
}

#[derive(Queryable, Insertable, Identifiable, Debug, Clone)]
#[table_name = "student"]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub company_id: String,
    pub teacher_id: String,
    pub total_hours_to_do: f64,
}

impl From<StudentRow> for StudentSummary {
    fn from(row: StudentRow) -> Self {
        StudentSummary {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Queryable, Insertable, Identifiable, Debug, Clone)]
#[table_name = "company"]
pub struct CompanyRow {
    pub id: String,
    pub name: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Queryable, Insertable, Identifiable, Debug, Clone)]
#[table_name = "teacher"]
pub struct TeacherRow {
    pub id: String,
    pub name: String,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Teacher {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Insertable, Debug)]
#[table_name = "student_activity"]
pub struct NewReference<'a> {
    pub student_id: &'a str,
    pub activity_id: &'a str,
}
