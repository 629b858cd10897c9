use crate::application::session::SessionRecord;
use crate::error::{ComandaError, Result};
use std::io::Read;

/// Reads scripted session actions from a CSV source.
///
/// Streams `Result<SessionRecord>` lazily so a long session never has to be
/// held in memory at once.
pub struct SessionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SessionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn records(self) -> impl Iterator<Item = Result<SessionRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ComandaError::from))
    }
}
