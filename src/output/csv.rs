//! CSV export of a selected record set. An empty selection still emits the
//! header row; that is the success shape for a no-match export, not an error.

use anyhow::Result;

use crate::normalize::NormalizedVulnerability;
use crate::report::nvd_link;

pub const EXPORT_HEADER: [&str; 7] = [
    "CVE ID",
    "Title",
    "Description",
    "Remediation",
    "CVSS Score",
    "Vector",
    "NVD Link",
];

pub fn write_records<W: std::io::Write>(records: &[NormalizedVulnerability], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_HEADER)?;
    for record in records {
        let score = record.score.to_string();
        let link = nvd_link(&record.id);
        writer.write_record([
            record.id.as_str(),
            record.title.as_str(),
            record.description.as_str(),
            record.remediation_url.as_str(),
            score.as_str(),
            record.vector.as_str(),
            link.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn format_records(records: &[NormalizedVulnerability]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
