//! Loading of companies, teachers and students from a JSON fixture file.
//!
//! ```json
//! {
//!   "companies": [{"id": "c1", "name": "Acme"}],
//!   "teachers": [{"name": "Ada"}],
//!   "students": [{"name": "Bob", "company": "c1", "teacher": "Ada", "total_hours_to_do": 120}]
//! }
//! ```
//!
//! A student refers to its company and teacher by the id declared in the
//! fixture, or by name when the entry has no declared id. Anything else is
//! stored as given, as the id of a record that already exists.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::dao::FixtureRows;
use crate::db::models::{generate_id, CompanyRow, StudentRow, TeacherRow};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub companies: Vec<NamedFixture>,
    #[serde(default)]
    pub teachers: Vec<NamedFixture>,
    #[serde(default)]
    pub students: Vec<StudentFixture>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamedFixture {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StudentFixture {
    pub id: Option<String>,
    pub name: String,
    pub company: String,
    pub teacher: String,
    #[serde(default)]
    pub total_hours_to_do: f64,
}

impl Fixtures {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Reading fixtures {} failed: {}", path.display(), e))?;
        Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Parsing fixtures {} failed: {}", path.display(), e))
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Assigns missing ids and resolves student references.
    pub fn into_rows(self) -> FixtureRows {
        let (companies, company_ids) = assign_ids(self.companies);
        let (teachers, teacher_ids) = assign_ids(self.teachers);

        let students = self
            .students
            .into_iter()
            .map(|student| StudentRow {
                id: student.id.unwrap_or_else(generate_id),
                name: student.name,
                company_id: resolve(&company_ids, student.company),
                teacher_id: resolve(&teacher_ids, student.teacher),
                total_hours_to_do: student.total_hours_to_do,
            })
            .collect();

        FixtureRows {
            companies: companies
                .into_iter()
                .map(|(id, name)| CompanyRow { id, name })
                .collect(),
            teachers: teachers
                .into_iter()
                .map(|(id, name)| TeacherRow { id, name })
                .collect(),
            students,
        }
    }
}

type IdLookup = HashMap<String, String>;

fn assign_ids(entries: Vec<NamedFixture>) -> (Vec<(String, String)>, IdLookup) {
    let mut lookup = IdLookup::new();
    let rows = entries
        .into_iter()
        .map(|entry| {
            let id = match entry.id {
                Some(id) => {
                    lookup.insert(id.clone(), id.clone());
                    id
                }
                None => {
                    let id = generate_id();
                    lookup
                        .entry(entry.name.clone())
                        .or_insert_with(|| id.clone());
                    id
                }
            };
            (id, entry.name)
        })
        .collect();
    (rows, lookup)
}

fn resolve(lookup: &IdLookup, reference: String) -> String {
    match lookup.get(&reference) {
        Some(id) => id.clone(),
        None => reference,
    }
}
