//! Parser for GeoNames-style place tables.
//!
//! The source format is tab-separated with at least seven columns per row;
//! the place name sits in column 1 and the coordinate in columns 4 and 5
//! (zero-based). Remaining columns are carried by the GeoNames export but
//! not used here.

use std::io::{BufRead, BufReader, Read};

use super::Place;

/// Error type for place table parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid place row at line {line}: {message}")]
    InvalidRow { line: usize, message: String },
}

/// Parser for GeoNames-style tab-separated place tables.
pub struct GeoNamesParser;

impl GeoNamesParser {
    /// Parse places from a reader.
    ///
    /// This is a streaming parser that yields places row by row. Blank
    /// lines are skipped.
    pub fn parse<R: Read>(reader: R) -> impl Iterator<Item = Result<Place, ParseError>> {
        GeoNamesIterator::new(BufReader::new(reader))
    }

    /// Parse all places into a vector, in file order.
    ///
    /// Rows that fail to parse are skipped with a warning; an IO failure
    /// aborts the whole parse.
    pub fn parse_all<R: Read>(reader: R) -> Result<Vec<Place>, ParseError> {
        let mut places = Vec::new();
        for result in Self::parse(reader) {
            match result {
                Ok(place) => places.push(place),
                Err(e @ ParseError::Io(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!("Skipping place row: {}", e);
                }
            }
        }
        Ok(places)
    }
}

/// Iterator that yields places from a tab-separated table.
struct GeoNamesIterator<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> GeoNamesIterator<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::new(),
            line_number: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for GeoNamesIterator<R> {
    type Item = Result<Place, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    // Strip the line ending only; leading tabs are column
                    // delimiters and must stay put.
                    let line = self
                        .line_buffer
                        .trim_end_matches(|c| c == '\r' || c == '\n');
                    if line.is_empty() {
                        continue;
                    }
                    return Some(parse_row(line, self.line_number));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ParseError::Io(e)));
                }
            }
        }
    }
}

/// Parse one tab-separated place row.
fn parse_row(line: &str, line_number: usize) -> Result<Place, ParseError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < 7 {
        return Err(ParseError::InvalidRow {
            line: line_number,
            message: format!("expected at least 7 columns, found {}", columns.len()),
        });
    }

    let name = columns[1];
    if name.is_empty() {
        return Err(ParseError::InvalidRow {
            line: line_number,
            message: "empty place name".to_string(),
        });
    }

    let latitude: f64 = columns[4].parse().map_err(|_| ParseError::InvalidRow {
        line: line_number,
        message: format!("bad latitude '{}'", columns[4]),
    })?;
    let longitude: f64 = columns[5].parse().map_err(|_| ParseError::InvalidRow {
        line: line_number,
        message: format!("bad longitude '{}'", columns[5]),
    })?;

    if !crate::coord::is_valid_latitude(latitude) {
        return Err(ParseError::InvalidRow {
            line: line_number,
            message: format!("latitude {} out of range", latitude),
        });
    }
    if !crate::coord::is_valid_longitude(longitude) {
        return Err(ParseError::InvalidRow {
            line: line_number,
            message: format!("longitude {} out of range", longitude),
        });
    }

    Ok(Place {
        name: name.to_string(),
        latitude,
        longitude,
    })
}
