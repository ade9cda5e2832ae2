use crate::app::models::{ListError, RuntimeConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Sends each rendered line to the output file and/or the console.
///
/// The file is created (truncating any previous list) when the sink is opened and
/// closed when the sink is dropped, on every exit path.
pub struct OutputSink<W: Write> {
    file: Option<(PathBuf, BufWriter<File>)>,
    console: Option<W>,
}

impl<W: Write> OutputSink<W> {
    pub fn open(config: &RuntimeConfig, console: W) -> Result<Self, ListError> {
        let file = if config.write {
            let path = config.output_path();
            let handle = File::create(&path).map_err(|source| ListError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            log::info!("Writing list to {:?}", path);
            Some((path, BufWriter::new(handle)))
        } else {
            None
        };

        Ok(Self {
            file,
            console: config.print.then_some(console),
        })
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), ListError> {
        if let Some((_, writer)) = self.file.as_mut() {
            writeln!(writer, "{}", line)?;
        }
        if let Some(console) = self.console.as_mut() {
            writeln!(console, "{}", line)?;
        }
        Ok(())
    }

    /// Flushes both sinks and returns the console writer, if any.
    pub fn finish(mut self) -> Result<Option<W>, ListError> {
        if let Some((path, mut writer)) = self.file.take() {
            writer.flush()?;
            log::debug!("Closed {:?}", path);
        }
        if let Some(console) = self.console.as_mut() {
            console.flush()?;
        }
        Ok(self.console.take())
    }
}
