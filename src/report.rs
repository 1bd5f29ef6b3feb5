// src/report.rs
//! Grouping and rendering of batch lookup results

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::Write;

use crate::lookup::CompanyResult;
use crate::types::PersonRecord;
use crate::utils::company_display_name;

const REGION_NAMES: [(&str, &str); 10] = [
    ("us", "United States"),
    ("gb", "United Kingdom"),
    ("ca", "Canada"),
    ("au", "Australia"),
    ("fr", "France"),
    ("de", "Germany"),
    ("es", "Spain"),
    ("in", "India"),
    ("jp", "Japan"),
    ("br", "Brazil"),
];

/// Display name for a region code; unknown codes are shown as-is
pub fn region_display_name(code: &str) -> &str {
    REGION_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[derive(Debug, Clone)]
pub struct CompanySection {
    pub company_url: String,
    pub display_name: String,
    pub results: Vec<CompanyResult>,
    /// Region code and the index in `results` of the first result covering it
    pub regions: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeReport {
    pub sections: Vec<CompanySection>,
    pub unique_regions: Vec<String>,
    pub total_employees: usize,
}

impl EmployeeReport {
    /// Group by company URL, then region; first result seen for a pair wins
    pub fn from_results(results: &[CompanyResult]) -> Self {
        let mut report = Self {
            total_employees: results.iter().map(|r| r.employees.len()).sum(),
            ..Self::default()
        };

        for result in results {
            let index = match report
                .sections
                .iter()
                .position(|section| section.company_url == result.company_url)
            {
                Some(index) => index,
                None => {
                    report.sections.push(CompanySection {
                        company_url: result.company_url.clone(),
                        display_name: company_display_name(&result.company_url),
                        results: Vec::new(),
                        regions: Vec::new(),
                    });
                    report.sections.len() - 1
                }
            };

            let section = &mut report.sections[index];
            let new_regions: Vec<&String> = result
                .regions
                .iter()
                .filter(|region| !section.regions.iter().any(|(seen, _)| seen == *region))
                .collect();
            if !new_regions.is_empty() {
                section.results.push(result.clone());
                let result_index = section.results.len() - 1;
                for region in new_regions {
                    section.regions.push((region.clone(), result_index));
                }
            }

            for region in &result.regions {
                if !report.unique_regions.contains(region) {
                    report.unique_regions.push(region.clone());
                }
            }
        }

        report
    }

    pub fn has_employees(&self) -> bool {
        self.total_employees > 0
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if !self.has_employees() {
            out.push_str("No employee data available.\n");
        }

        let regions = self
            .unique_regions
            .iter()
            .map(|code| format!("{} ({})", region_display_name(code), code))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Total: {} employees", self.total_employees);
        let _ = writeln!(out, "Selected regions: {}", regions);

        for section in &self.sections {
            let _ = writeln!(out, "\n== {} ({})", section.display_name, section.company_url);
            for (region, result_index) in &section.regions {
                let result = &section.results[*result_index];
                let _ = writeln!(
                    out,
                    "-- {} ({}): {} employees",
                    region_display_name(region),
                    region,
                    result.employees.len()
                );
                if let Some(error) = &result.error {
                    let _ = writeln!(out, "   error: {}", error);
                    continue;
                }
                for person in &result.employees {
                    let _ = writeln!(out, "   {}", format_person_line(person));
                }
            }
        }

        out
    }

    /// One row per employee, tagged with company and the regions searched
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record([
                "company_url",
                "regions",
                "first_name",
                "last_name",
                "title",
                "company",
                "profile_url",
            ])
            .context("Failed to write CSV header")?;

        for section in &self.sections {
            for result in &section.results {
                let regions = result.regions.join(";");
                for person in &result.employees {
                    csv_writer
                        .write_record([
                            section.company_url.as_str(),
                            regions.as_str(),
                            person.first_name.as_str(),
                            person.last_name.as_str(),
                            person.title.as_str(),
                            person.company.as_str(),
                            person.profile_url.as_str(),
                        ])
                        .context("Failed to write CSV row")?;
                }
            }
        }

        csv_writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}

fn format_person_line(person: &PersonRecord) -> String {
    let mut line = person.full_name();
    if !person.title.is_empty() {
        let _ = write!(line, " - {}", person.title);
    }
    let _ = write!(line, " @ {}", person.company);
    if !person.profile_url.is_empty() {
        let _ = write!(line, " <{}>", person.profile_url);
    }
    line
}
