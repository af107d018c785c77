use crate::application::view::BankFormView;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 10] = [
    "session",
    "phase",
    "processing",
    "bank_name",
    "last4",
    "promo",
    "promo_eligible",
    "disclaimer",
    "mandate",
    "error",
];

/// Writes rendered session views as CSV.
///
/// The header is always written, even when there are no sessions.
pub struct ViewWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ViewWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_views(&mut self, views: impl IntoIterator<Item = BankFormView>) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for view in views {
            self.writer.serialize(view)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
