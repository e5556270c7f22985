//! Personnel records for the maintenance organization.

use serde::{Deserialize, Serialize};

use crate::error::{require, require_date, ValidationError};
use crate::list::{contains_ci, HasId, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Aktif,
    Cuti,
    #[serde(rename = "Non Aktif")]
    NonAktif,
}

impl EmployeeStatus {
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Aktif => "Aktif",
            EmployeeStatus::Cuti => "Cuti",
            EmployeeStatus::NonAktif => "Non Aktif",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.label() == s)
    }

    pub fn all() -> [EmployeeStatus; 3] {
        [EmployeeStatus::Aktif, EmployeeStatus::Cuti, EmployeeStatus::NonAktif]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub nip: String,
    pub jabatan: String,
    pub divisi: String,
    pub lokasi: String,
    pub status: EmployeeStatus,
    #[serde(rename = "joinDate")]
    pub join_date: String,
    #[serde(rename = "urgentNumber")]
    pub urgent_number: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

impl HasId for Employee {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Employee {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.nip, filter)
            || contains_ci(&self.jabatan, filter)
            || contains_ci(&self.divisi, filter)
            || contains_ci(&self.lokasi, filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub nip: String,
    pub jabatan: String,
    pub divisi: String,
    pub lokasi: String,
    pub status: String,
    pub join_date: String,
    pub urgent_number: String,
    pub phone_number: String,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            nip: employee.nip.clone(),
            jabatan: employee.jabatan.clone(),
            divisi: employee.divisi.clone(),
            lokasi: employee.lokasi.clone(),
            status: employee.status.label().to_string(),
            join_date: employee.join_date.clone(),
            urgent_number: employee.urgent_number.clone(),
            phone_number: employee.phone_number.clone(),
        }
    }

    pub fn validate(&self, id: i64) -> Result<Employee, ValidationError> {
        let nip = require("nip", &self.nip)?;
        if !nip.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::OutOfRange {
                field: "nip",
                message: "hanya boleh berisi angka".to_string(),
            });
        }
        let jabatan = require("jabatan", &self.jabatan)?;
        let divisi = require("divisi", &self.divisi)?;
        let lokasi = require("lokasi", &self.lokasi)?;
        let status = EmployeeStatus::parse(self.status.trim())
            .ok_or(ValidationError::MissingField("status"))?;
        let join = require_date("joinDate", &self.join_date)?;
        Ok(Employee {
            id,
            nip,
            jabatan,
            divisi,
            lokasi,
            status,
            join_date: join.format("%Y-%m-%d").to_string(),
            urgent_number: self.urgent_number.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
        })
    }
}

pub fn seed() -> Vec<Employee> {
    fn employee(
        id: i64,
        nip: &str,
        jabatan: &str,
        divisi: &str,
        lokasi: &str,
        status: EmployeeStatus,
        join_date: &str,
        urgent_number: &str,
        phone_number: &str,
    ) -> Employee {
        Employee {
            id,
            nip: nip.to_string(),
            jabatan: jabatan.to_string(),
            divisi: divisi.to_string(),
            lokasi: lokasi.to_string(),
            status,
            join_date: join_date.to_string(),
            urgent_number: urgent_number.to_string(),
            phone_number: phone_number.to_string(),
        }
    }

    vec![
        employee(1, "198003012005011001", "Manager", "Manajemen", "Balai Yasa", EmployeeStatus::Aktif, "2005-01-10", "081234567890", "087711223344"),
        employee(2, "198104022006022002", "Asisten Manager", "Pelayanan", "Balai Yasa", EmployeeStatus::Aktif, "2006-02-20", "081345678901", "087722334455"),
        employee(3, "198205033007033003", "Staff Produksi", "Operasional", "Balai Yasa", EmployeeStatus::Aktif, "2007-03-30", "081456789012", "087733445566"),
        employee(4, "198306044008044004", "IT", "Telekomunikasi", "Balai Yasa", EmployeeStatus::Aktif, "2008-04-15", "081567890123", "087744556677"),
        employee(5, "198407055009055005", "Ticketing Officer", "Pelayanan", "Balai Yasa", EmployeeStatus::Cuti, "2009-05-25", "081678901234", "087755667788"),
        employee(6, "198508066010066006", "Teknisi", "Pemeliharaan", "Balai Yasa", EmployeeStatus::Aktif, "2010-06-05", "081789012345", "087766778899"),
        employee(7, "198609077011077007", "HRD Staff", "SDM", "Kantor Pusat Jakarta", EmployeeStatus::Aktif, "2011-07-12", "081890123456", "087777889900"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::filter_list;

    #[test]
    fn nip_must_be_numeric() {
        let mut draft = EmployeeDraft::from_employee(&seed()[0]);
        draft.nip = "19800301X".into();
        assert!(matches!(
            draft.validate(1),
            Err(ValidationError::OutOfRange { field: "nip", .. })
        ));
    }

    #[test]
    fn search_matches_division_case_insensitively() {
        let hits = filter_list(&seed(), "pelayanan");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.divisi == "Pelayanan"));
    }

    #[test]
    fn edit_round_trip_is_lossless() {
        let employee = seed().remove(3);
        let rebuilt = EmployeeDraft::from_employee(&employee)
            .validate(employee.id)
            .unwrap();
        assert_eq!(rebuilt, employee);
    }
}
