use std::{fs::File, io::Write, path::Path};

use repforge_domain::{Set, SetSink, SinkError};

/// Writes prescribed sets as (intensity, weight, reps, load) CSV rows.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Result<Self, SinkError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer
            .write_record(["intensity", "weight", "reps", "load"])
            .map_err(into_sink_error)?;
        Ok(Self { writer })
    }

    pub fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(SinkError::Io)
    }
}

impl<W: Write> SetSink for CsvSink<W> {
    fn write(&mut self, set: &Set) -> Result<(), SinkError> {
        self.writer
            .write_record([
                set.intensity().to_string(),
                set.weight().to_string(),
                set.reps().to_string(),
                set.load().to_string(),
            ])
            .map_err(into_sink_error)
    }
}

fn into_sink_error(error: csv::Error) -> SinkError {
    SinkError::Other(Box::new(error))
}
