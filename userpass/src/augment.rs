use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use rand::Rng;
use tracing::{debug, info};

use crate::error::Error;
use crate::password::PasswordGenerator;

/// Header label of the appended column
pub const PASSWORD_COLUMN: &str = "password";

/// One CSV record: an ordered list of text fields
pub type Row = StringRecord;

/// A header row followed by zero or more data rows.
///
/// Rows are not required to match the header width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl Table {
    /// Appends `label` to the header and a fresh password to every data row.
    ///
    /// Returns the number of data rows augmented.
    pub fn augment<R: Rng>(
        &mut self,
        generator: &mut PasswordGenerator<R>,
        label: &str,
    ) -> usize {
        self.header.push_field(label);
        for row in &mut self.rows {
            row.push_field(&generator.generate());
        }
        self.rows.len()
    }
}

/// Outcome of a completed [`augment_file`] run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AugmentSummary {
    /// Data rows written, excluding the header
    pub rows: usize,
    /// Width of the augmented header
    pub columns: usize,
}

/// Read a whole comma-delimited table into memory.
///
/// The first row is the header. Ragged rows are kept as-is, and every blank
/// line becomes a row with zero fields. Input that contains only line breaks
/// therefore yields a zero-field header.
pub fn read_table<R: Read>(mut reader: R) -> Result<Table, Error> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut rows = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());
    for result in rdr.records() {
        let record = result?;
        let offset = record.position().map_or(0, |pos| pos.byte() as usize);
        let skipped = data[offset..]
            .iter()
            .take_while(|b| is_line_break(**b))
            .count();
        let start = offset + skipped;
        rows.extend((0..blank_lines_before(&data, start)).map(|_| Row::new()));
        rows.push(record);
    }
    rows.extend((0..blank_lines_before(&data, data.len())).map(|_| Row::new()));

    let mut rows = rows.into_iter();
    let header = rows.next().ok_or(Error::EmptyInput)?;

    Ok(Table {
        header,
        rows: rows.collect(),
    })
}

#[inline]
fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Count blank lines in the run of line breaks that ends at `end`.
///
/// A record never ends in a bare line break, so when the run follows a
/// record its first break is that record's terminator.
fn blank_lines_before(data: &[u8], end: usize) -> usize {
    match data[..end].iter().rposition(|b| !is_line_break(*b)) {
        Some(last) => line_breaks(&data[last + 1..end]).saturating_sub(1),
        None => line_breaks(&data[..end]),
    }
}

/// `\r\n`, a lone `\r` and a lone `\n` each end one line
fn line_breaks(run: &[u8]) -> usize {
    run.iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && run.get(i + 1) != Some(&b'\n')))
        .count()
}

/// Write header then rows with `\n` line endings and minimal quoting
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<(), Error> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Read `input`, append a password column, and write the result to `output`.
///
/// The input is read in full before `output` is created, so a missing or
/// empty input leaves `output` untouched. An existing `output` is truncated.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn augment_file<R: Rng>(
    input: &Path,
    output: &Path,
    generator: &mut PasswordGenerator<R>,
) -> Result<AugmentSummary, Error> {
    let file = File::open(input).map_err(|source| Error::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let mut table = read_table(BufReader::new(file))?;
    debug!(header = table.header.len(), rows = table.rows.len(), "read input table");

    let rows = table.augment(generator, PASSWORD_COLUMN);

    let file = File::create(output).map_err(|source| Error::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    write_table(&table, BufWriter::new(file))?;

    let summary = AugmentSummary {
        rows,
        columns: table.header.len(),
    };
    info!(rows = summary.rows, columns = summary.columns, "wrote augmented table");

    Ok(summary)
}
