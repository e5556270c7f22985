//! Engineering (rekayasa) projects.

use serde::{Deserialize, Serialize};

use crate::error::{require, require_date, ValidationError};
use crate::list::{contains_ci, HasId, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Perancangan,
    Pengembangan,
    Pengujian,
    Selesai,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Perancangan => "Perancangan",
            ProjectStatus::Pengembangan => "Pengembangan",
            ProjectStatus::Pengujian => "Pengujian",
            ProjectStatus::Selesai => "Selesai",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.label() == s)
    }

    pub fn all() -> [ProjectStatus; 4] {
        [
            ProjectStatus::Perancangan,
            ProjectStatus::Pengembangan,
            ProjectStatus::Pengujian,
            ProjectStatus::Selesai,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineeringProject {
    pub id: i64,
    pub name: String,
    pub status: ProjectStatus,
    pub deadline: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub team: Vec<String>,
}

impl HasId for EngineeringProject {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for EngineeringProject {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(self.status.label(), filter)
            || self.team.iter().any(|member| contains_ci(member, filter))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub status: String,
    pub deadline: String,
    pub progress: String,
    pub team: Vec<String>,
}

impl ProjectDraft {
    pub fn from_project(project: &EngineeringProject) -> Self {
        Self {
            name: project.name.clone(),
            status: project.status.label().to_string(),
            deadline: project.deadline.clone(),
            progress: project.progress.to_string(),
            team: project.team.clone(),
        }
    }

    pub fn validate(&self, id: i64) -> Result<EngineeringProject, ValidationError> {
        let name = require("name", &self.name)?;
        let status = ProjectStatus::parse(self.status.trim())
            .ok_or(ValidationError::MissingField("status"))?;
        let deadline = require_date("deadline", &self.deadline)?;
        let progress: u8 = self
            .progress
            .trim()
            .parse()
            .ok()
            .filter(|p| *p <= 100)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "progress",
                message: "harus 0-100".to_string(),
            })?;
        Ok(EngineeringProject {
            id,
            name,
            status,
            deadline: deadline.format("%Y-%m-%d").to_string(),
            progress,
            team: self.team.clone(),
        })
    }
}

pub fn seed() -> Vec<EngineeringProject> {
    fn project(
        id: i64,
        name: &str,
        status: ProjectStatus,
        deadline: &str,
        progress: u8,
        team: &[&str],
    ) -> EngineeringProject {
        EngineeringProject {
            id,
            name: name.to_string(),
            status,
            deadline: deadline.to_string(),
            progress,
            team: team.iter().map(|member| member.to_string()).collect(),
        }
    }

    vec![
        project(1, "Sistem Monitoring Wesel", ProjectStatus::Pengembangan, "2024-03-15", 60, &["Tim Elektronika", "Tim Software"]),
        project(2, "Upgrade Panel Persinyalan", ProjectStatus::Pengujian, "2024-01-31", 85, &["Tim Elektronika"]),
        project(3, "Prototipe Axle Counter", ProjectStatus::Perancangan, "2024-06-30", 20, &["Tim Riset"]),
        project(4, "Konversi Radio Analog", ProjectStatus::Selesai, "2023-10-01", 100, &["Tim Telekomunikasi"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{filter_list, next_numeric_id};

    #[test]
    fn search_matches_team_members() {
        let hits = filter_list(&seed(), "elektronika");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn next_id_after_seed() {
        assert_eq!(next_numeric_id(&seed()), 5);
    }

    #[test]
    fn draft_round_trip() {
        let project = seed().remove(1);
        let rebuilt = ProjectDraft::from_project(&project)
            .validate(project.id)
            .unwrap();
        assert_eq!(rebuilt, project);
    }
}
