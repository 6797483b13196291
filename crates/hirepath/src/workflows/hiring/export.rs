use std::io::Write;

use super::application::Application;
use super::domain::Resolution;

/// Export failure, wrapping the underlying CSV/IO error.
#[derive(Debug, thiserror::Error)]
#[error("unable to export roster: {0}")]
pub struct ExportError(#[from] csv::Error);

/// Write the roster as a CSV table in ascending id order, the tabular view
/// of a roster for spreadsheets and reports.
pub fn write_roster_csv<'a, W: Write>(
    writer: W,
    applications: impl IntoIterator<Item = &'a Application>,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "id",
        "phase",
        "classification",
        "summary",
        "reviewer",
        "paperwork_processed",
        "resolution",
    ])?;

    let mut ordered: Vec<&Application> = applications.into_iter().collect();
    ordered.sort_by_key(|application| application.id());

    for application in ordered {
        csv_writer.write_record([
            application.id().to_string(),
            application.phase().label().to_owned(),
            application.classification().label().to_owned(),
            application.summary().to_owned(),
            application.reviewer().unwrap_or("").to_owned(),
            application.paperwork_processed().to_string(),
            application
                .resolution()
                .map(Resolution::label)
                .unwrap_or("")
                .to_owned(),
        ])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
