use crate::domain::models::{AgeMap, JsonReport};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Html,
    Excel,
}

const EXCEL_SHEET_NAME: &str = "Dependency Age Summary";

#[derive(thiserror::Error, Debug)]
#[error("unknown report type: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "html" => Ok(ReportFormat::Html),
            "excel" | "xlsx" => Ok(ReportFormat::Excel),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl ReportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Json => "dependency-age-report.json",
            ReportFormat::Html => "dependency-age-report.html",
            ReportFormat::Excel => "dependency-age-report.xlsx",
        }
    }

    pub fn render(&self, project: &str, ages: &AgeMap) -> anyhow::Result<Vec<u8>> {
        match self {
            ReportFormat::Json => Ok(render_json(ages)?.into_bytes()),
            ReportFormat::Html => Ok(render_html(project, ages).into_bytes()),
            ReportFormat::Excel => render_excel(project, ages),
        }
    }
}

fn render_json(ages: &AgeMap) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport {
        dependencies: ages.entries(),
    })?)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_html(project: &str, ages: &AgeMap) -> String {
    let mut rows = String::new();
    for e in ages.entries() {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&e.name),
            escape_html(&e.age)
        ));
    }
    format!(
        "<html><body><table><tr><th colspan=\"2\">{}</th></tr>{}</table></body></html>",
        escape_html(project),
        rows
    )
}

/// One sheet: the project name merged across A1:B1, a Name/Age header row,
/// then one row per age-map entry.
fn render_excel(project: &str, ages: &AgeMap) -> anyhow::Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let title = Format::new().set_bold().set_align(FormatAlign::Center);

    let sheet = workbook.add_worksheet();
    sheet.set_name(EXCEL_SHEET_NAME)?;
    sheet.merge_range(0, 0, 0, 1, project, &title)?;
    sheet.write_string_with_format(1, 0, "Name", &bold)?;
    sheet.write_string_with_format(1, 1, "Age", &bold)?;
    for (row, entry) in (2u32..).zip(ages.entries()) {
        sheet.write_string(row, 0, &entry.name)?;
        sheet.write_string(row, 1, &entry.age)?;
    }
    sheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

pub fn write_report(
    format: ReportFormat,
    dir: &Path,
    project: &str,
    ages: &AgeMap,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format.file_name());
    std::fs::write(&path, format.render(project, ages)?)?;
    Ok(path)
}
