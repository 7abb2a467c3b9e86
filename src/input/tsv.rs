use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::{InputError, ProportionTable};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parses a tab-delimited table with a header row and a row-name column.
///
/// The header may either omit the row-name column (one field fewer than the
/// data rows) or label it in its first field.
pub fn parse_table<R: BufRead>(mut reader: R) -> Result<ProportionTable, InputError> {
    let mut buf = String::new();

    let mut header: Option<Vec<String>> = None;
    while header.is_none() {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(InputError::Parse("table is empty".to_string()));
        }
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        header = Some(line.split('\t').map(|s| s.trim().to_string()).collect());
    }
    let header = header.unwrap_or_default();

    let mut samples = Vec::new();
    let mut values = Vec::new();
    let mut categories: Option<Vec<String>> = None;
    let mut line_no = 1usize;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();

        if categories.is_none() {
            categories = Some(resolve_categories(&header, fields.len(), line_no)?);
        }
        let Some(cats) = categories.as_ref() else {
            continue;
        };
        if fields.len() != cats.len() + 1 {
            return Err(InputError::Parse(format!(
                "line {} has {} fields, expected {}",
                line_no,
                fields.len(),
                cats.len() + 1
            )));
        }

        let sample = fields[0].trim();
        if sample.is_empty() {
            return Err(InputError::Parse(format!("line {line_no} has an empty row name")));
        }

        let mut row = Vec::with_capacity(cats.len());
        for (field, category) in fields[1..].iter().zip(cats.iter()) {
            let raw = field.trim();
            let value = raw.parse::<f64>().map_err(|_| {
                InputError::Parse(format!(
                    "line {}, column {}: not a number: {:?}",
                    line_no, category, raw
                ))
            })?;
            row.push(value);
        }
        samples.push(sample.to_string());
        values.push(row);
    }

    let categories = match categories {
        Some(c) => c,
        // Header only: assume it labels the row-name column when it can.
        None if header.len() > 1 => header[1..].to_vec(),
        None => header,
    };

    ProportionTable::new(samples, categories, values)
}

fn resolve_categories(
    header: &[String],
    n_fields: usize,
    line_no: usize,
) -> Result<Vec<String>, InputError> {
    if n_fields == header.len() + 1 {
        Ok(header.to_vec())
    } else if n_fields == header.len() && !header.is_empty() {
        Ok(header[1..].to_vec())
    } else {
        Err(InputError::Parse(format!(
            "line {} has {} fields but header has {}",
            line_no,
            n_fields,
            header.len()
        )))
    }
}

/// Writes `table` with a labelled row-name column.
pub fn write_table(
    table: &ProportionTable,
    row_label: &str,
    path: &Path,
) -> Result<(), InputError> {
    let mut w = BufWriter::new(File::create(path)?);
    write!(w, "{row_label}")?;
    for category in table.categories() {
        write!(w, "\t{category}")?;
    }
    writeln!(w)?;
    for (sample, row) in table.samples().iter().zip(table.rows()) {
        write!(w, "{sample}")?;
        for v in row {
            write!(w, "\t{v}")?;
        }
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}
