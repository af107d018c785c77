#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 9] = [
    "type",
    "session",
    "flow",
    "id",
    "bank_name",
    "last4",
    "eligible",
    "microdeposits",
    "text",
];

/// Writes a full payment flow for every session: start, processing, link
/// and a late mandate update.
pub fn generate_events_csv(path: &Path, sessions: u32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for session in 1..=sessions {
        let session = session.to_string();
        let id = format!("fcsess_{session}");
        let session = session.as_str();
        wtr.write_record([
            "start", session, "payment", "", "", "", "", "", "10 OFF",
        ])?;
        wtr.write_record(["processing", session, "", "", "", "", "", "", ""])?;
        wtr.write_record([
            "link_session",
            session,
            "",
            id.as_str(),
            "Test Bank",
            "6789",
            "true",
            "false",
            "Mandate",
        ])?;
        wtr.write_record(["mandate", session, "", "", "", "", "", "", "Final mandate"])?;
    }

    wtr.flush()?;
    Ok(())
}
