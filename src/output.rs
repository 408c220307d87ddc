use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{args::ExportMethodType, flow_counts::FlowCounts};
use log::debug;

pub struct ReportWriter {
    writer: BufWriter<Box<dyn Write + Send>>,
}

impl ReportWriter {
    /// Opens the report target. For `File` the parent directory is created
    /// if it does not exist yet.
    pub fn new(export_type: ExportMethodType, file_path: &str) -> io::Result<Self> {
        let writer: Box<dyn Write + Send> = match export_type {
            ExportMethodType::File => {
                if let Some(parent) = Path::new(file_path).parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                debug!("Writing report to {:?}", file_path);
                Box::new(File::create(file_path)?)
            }
            ExportMethodType::Print => Box::new(io::stdout()),
        };

        Ok(Self::from_writer(writer))
    }

    pub fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        ReportWriter {
            writer: BufWriter::new(writer),
        }
    }

    pub fn write_report(&mut self, counts: &FlowCounts) -> io::Result<()> {
        render_report(counts, &mut self.writer)
    }

    /// Flushes the writer; called once the report is complete.
    pub fn flush_and_close(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Writes the two report sections: tag counts, then port/protocol counts.
pub fn render_report<W: Write>(counts: &FlowCounts, out: &mut W) -> io::Result<()> {
    writeln!(out, "Tag Counts:")?;
    writeln!(out, "Tag,Count")?;
    for (tag, count) in counts.tag_counts() {
        writeln!(out, "{},{}", tag, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Port/Protocol Combination Counts:")?;
    writeln!(out, "Port,Protocol,Count")?;
    for (key, count) in counts.port_protocol_counts() {
        writeln!(out, "{},{},{}", key.dstport, key.protocol, count)?;
    }

    Ok(())
}
