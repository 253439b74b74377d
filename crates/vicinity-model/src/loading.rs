// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Road loader for the city neighborhood problem.
//!
//! This module turns a whitespace-delimited text stream into a validated
//! `Road`. The format is tiny but strict:
//!
//! ```raw
//! T N            // road length, number of cities
//! x_1 name_1     // position, then the rest of the line is the name
//! ...
//! x_N name_N
//! ```
//!
//! `T` and `N` may be spread over any ASCII whitespace, including newlines.
//! Each record's position is the next token; its name is whatever follows on
//! the same line, without leading blanks and without the line terminator
//! (`\n` or `\r\n`). Internal and trailing spaces belong to the name.
//!
//! The input is read as bytes. Names that are not valid UTF-8 (a Latin-1
//! file, say) are still accepted, with each invalid sequence replaced by
//! `U+FFFD`.
//!
//! Validation runs in reading order and stops at the first problem: header
//! tokens, header ranges, then per record the position token, the name, the
//! position range, and finally distinctness against every earlier record.
//! The loaded `Road` is only constructed once all of that passed; a failure
//! never leaves a partial road behind.

use crate::{
    index::CityIndex,
    limits::RoadLimits,
    model::{Road, RoadBuilder, RoadError},
    name::{CityName, CityNameError},
};
use num_traits::ToPrimitive;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// The two numbers that open every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// The road length `T`.
    Length,
    /// The number of city records `N`.
    CityCount,
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length => f.write_str("road length"),
            Self::CityCount => f.write_str("city count"),
        }
    }
}

/// Details about a rejected header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The input ended before the field was read.
    #[error("missing {0}")]
    Missing(HeaderField),
    /// The token for the field is not an integer.
    #[error("{field} token {token:?} is not an integer")]
    NotInteger { field: HeaderField, token: String },
    /// The road length is outside the configured range.
    #[error("road length {length} is outside the accepted range {min}..={max}")]
    LengthOutOfRange { length: i64, min: u32, max: u32 },
    /// The city count is outside the configured range.
    #[error("city count {count} is outside the accepted range {min}..={max}")]
    CityCountOutOfRange { count: i64, min: usize, max: usize },
}

/// Details about a record whose tokens could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The input ended before the record's position.
    #[error("missing position")]
    MissingPosition,
    /// The position token is not an integer.
    #[error("position token {token:?} is not an integer")]
    InvalidPosition { token: String },
    /// Nothing follows the position on its line.
    #[error("missing name")]
    MissingName,
    /// The name breaks the `CityName` rules.
    #[error("invalid name: {0}")]
    InvalidName(#[from] CityNameError),
}

/// The error type for the road loading process.
#[derive(Debug, Error)]
pub enum RoadLoaderError {
    /// The source could not be opened or read.
    #[error("source is unreadable: {0}")]
    SourceUnreadable(#[from] std::io::Error),
    /// `T` or `N` is missing, not an integer, or out of range.
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] HeaderError),
    /// A record's position or name could not be read.
    #[error("malformed record {record}: {reason}")]
    MalformedRecord {
        record: CityIndex,
        #[source]
        reason: RecordError,
    },
    /// A record's position is not strictly between `0` and `T`.
    #[error("record {record} has position {position}, outside (0, {length})")]
    PositionOutOfRange {
        record: CityIndex,
        position: i64,
        length: u32,
    },
    /// A record reuses the position of an earlier one.
    #[error("record {record} repeats position {position} of record {first}")]
    DuplicatePosition {
        record: CityIndex,
        first: CityIndex,
        position: u32,
    },
}

/// The five ways a load can fail, without their details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    SourceUnreadable,
    MalformedHeader,
    MalformedRecord,
    PositionOutOfRange,
    DuplicatePosition,
}

impl RoadLoaderError {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::SourceUnreadable(_) => LoadErrorKind::SourceUnreadable,
            Self::MalformedHeader(_) => LoadErrorKind::MalformedHeader,
            Self::MalformedRecord { .. } => LoadErrorKind::MalformedRecord,
            Self::PositionOutOfRange { .. } => LoadErrorKind::PositionOutOfRange,
            Self::DuplicatePosition { .. } => LoadErrorKind::DuplicatePosition,
        }
    }
}

impl From<RoadError> for RoadLoaderError {
    fn from(e: RoadError) -> Self {
        match e {
            RoadError::LengthOutOfRange { length, min, max } => {
                Self::MalformedHeader(HeaderError::LengthOutOfRange {
                    length: i64::from(length),
                    min,
                    max,
                })
            }
            RoadError::CityCountOutOfRange { count, min, max } => {
                Self::MalformedHeader(HeaderError::CityCountOutOfRange {
                    count: count as i64,
                    min,
                    max,
                })
            }
            RoadError::PositionOutOfRange {
                city,
                position,
                length,
            } => Self::PositionOutOfRange {
                record: city,
                position,
                length,
            },
            RoadError::DuplicatePosition {
                city,
                first,
                position,
            } => Self::DuplicatePosition {
                record: city,
                first,
                position,
            },
        }
    }
}

/// A configurable loader for road descriptions.
///
/// # Configuration
/// * `limits`: The accepted ranges for `T` and `N`. Defaults to `RoadLimits::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadLoader {
    limits: RoadLimits,
}

impl RoadLoader {
    /// Creates a new `RoadLoader` with the default limits.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `RoadLoader` that validates against `limits`.
    #[inline]
    pub fn with_limits(limits: RoadLimits) -> Self {
        Self { limits }
    }

    /// Returns the limits this loader validates against.
    #[inline]
    pub fn limits(&self) -> &RoadLimits {
        &self.limits
    }

    /// Loads a road from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Road, RoadLoaderError> {
        let result = self.read_road(Scanner::new(rdr));
        if let Err(e) = &result {
            log::debug!("failed to load road: {e}");
        }
        result
    }

    fn read_road<R: BufRead>(&self, mut sc: Scanner<R>) -> Result<Road, RoadLoaderError> {
        let length_val: i64 = sc.next().map_err(|e| header_error(e, HeaderField::Length))?;
        let count_val: i64 = sc
            .next()
            .map_err(|e| header_error(e, HeaderField::CityCount))?;

        let length = length_val
            .to_u32()
            .filter(|l| self.limits.accepts_length(*l))
            .ok_or_else(|| {
                let range = self.limits.length_range();
                HeaderError::LengthOutOfRange {
                    length: length_val,
                    min: *range.start(),
                    max: *range.end(),
                }
            })?;
        let count = count_val
            .to_usize()
            .filter(|n| self.limits.accepts_city_count(*n))
            .ok_or_else(|| {
                let range = self.limits.city_range();
                HeaderError::CityCountOutOfRange {
                    count: count_val,
                    min: *range.start(),
                    max: *range.end(),
                }
            })?;

        log::trace!("road header: length {length}, {count} cities");

        let mut builder = RoadBuilder::preallocated(length, self.limits.clone(), count);

        for i in 0..count {
            let record = CityIndex::new(i);
            let malformed = |reason: RecordError| RoadLoaderError::MalformedRecord { record, reason };

            let position: i64 = sc.next().map_err(|e| match e {
                ScanError::Io(io) => RoadLoaderError::SourceUnreadable(io),
                ScanError::Eof => malformed(RecordError::MissingPosition),
                ScanError::Parse(token) => malformed(RecordError::InvalidPosition { token }),
            })?;

            let rest = sc.rest_of_line();
            if rest.is_empty() {
                return Err(malformed(RecordError::MissingName));
            }
            let name = CityName::from_utf8_lossy(rest)
                .map_err(|e| malformed(RecordError::InvalidName(e)))?;

            builder.check_position(record, position)?;
            // `check_position` guarantees 0 < position < length.
            let position = position as u32;
            builder.add_city(position, name)?;

            log::trace!("accepted {record} at position {position}");
        }

        let road = builder.build()?;
        log::debug!(
            "loaded road of length {} with {} cities",
            road.length(),
            road.num_cities()
        );
        Ok(road)
    }

    /// Loads a road from a file path.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Road, RoadLoaderError> {
        let path = path.as_ref();
        let result = File::open(path)
            .map_err(RoadLoaderError::from)
            .and_then(|file| self.from_bufread(BufReader::new(file)));

        if let Err(e) = &result {
            log::debug!("failed to load road from {}: {e}", path.display());
        }
        result
    }

    /// Loads a road from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Road, RoadLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a road from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Road, RoadLoaderError> {
        self.from_bufread(s.as_bytes())
    }
}

fn header_error(e: ScanError, field: HeaderField) -> RoadLoaderError {
    match e {
        ScanError::Io(io) => RoadLoaderError::SourceUnreadable(io),
        ScanError::Eof => HeaderError::Missing(field).into(),
        ScanError::Parse(token) => HeaderError::NotInteger { field, token }.into(),
    }
}

/// Failure modes of the scanner, before they are given a meaning by the loader.
#[derive(Debug)]
enum ScanError {
    Io(std::io::Error),
    Eof,
    Parse(String),
}

/// Reads whitespace-delimited tokens, and line remainders, from a generic reader.
///
/// Works on raw bytes: only ASCII whitespace separates tokens, and no
/// encoding is assumed until a name is decoded.
struct Scanner<R> {
    rdr: R,
    buf: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: Vec::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data read, `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, ScanError> {
        self.buf.clear();
        self.pos = 0;
        let n = self
            .rdr
            .read_until(b'\n', &mut self.buf)
            .map_err(ScanError::Io)?;
        Ok(n > 0)
    }

    /// Reads the next token, crossing line boundaries as needed, and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, ScanError>
    where
        T: FromStr,
    {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Err(ScanError::Eof);
            }

            self.pos += self.buf[self.pos..]
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();

            if self.pos >= self.buf.len() {
                continue;
            }

            let remainder = &self.buf[self.pos..];
            let end = remainder
                .iter()
                .position(u8::is_ascii_whitespace)
                .unwrap_or(remainder.len());
            let token = &remainder[..end];
            self.pos += end;

            return std::str::from_utf8(token)
                .ok()
                .and_then(|t| t.parse::<T>().ok())
                .ok_or_else(|| ScanError::Parse(String::from_utf8_lossy(token).into_owned()));
        }
    }

    /// Consumes and returns the rest of the current line, without leading
    /// blanks and without its terminator. Never reads a new line.
    fn rest_of_line(&mut self) -> &[u8] {
        let start = self.pos.min(self.buf.len());
        self.pos = self.buf.len();

        let mut rest = &self.buf[start..];
        while let [b, tail @ ..] = rest {
            if !b.is_ascii_whitespace() || *b == b'\n' || *b == b'\r' {
                break;
            }
            rest = tail;
        }
        let rest = rest.strip_suffix(b"\n").unwrap_or(rest);
        rest.strip_suffix(b"\r").unwrap_or(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::City;
    use std::io::Write;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn load(s: &str) -> Result<Road, RoadLoaderError> {
        init_logger();
        RoadLoader::new().from_str(s)
    }

    fn names(road: &Road) -> Vec<&str> {
        road.cities().iter().map(|c| c.name().as_str()).collect()
    }

    fn positions(road: &Road) -> Vec<u32> {
        road.cities().iter().map(City::position).collect()
    }

    #[test]
    fn test_loads_and_preserves_file_order() {
        let road = load("100 3\n90 Z\n10 X\n50 Y\n").expect("Failed to load");
        assert_eq!(road.length(), 100);
        assert_eq!(positions(&road), vec![90, 10, 50]);
        assert_eq!(names(&road), vec!["Z", "X", "Y"]);
    }

    #[test]
    fn test_names_keep_internal_spaces() {
        let road = load("50 2\n10 Rio de Janeiro\n20   Belo Horizonte  \n").unwrap();
        assert_eq!(names(&road), vec!["Rio de Janeiro", "Belo Horizonte  "]);
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let road = load("10 2\r\n2 A\r\n8 B\r\n").unwrap();
        assert_eq!(names(&road), vec!["A", "B"]);
    }

    #[test]
    fn test_last_line_without_terminator() {
        let road = load("10 2\n2 A\n8 B").unwrap();
        assert_eq!(names(&road), vec!["A", "B"]);
    }

    #[test]
    fn test_header_may_span_lines_and_blank_lines_are_skipped() {
        let road = load("  10\n\n 2\n\n2 A\n\n\t8 B\n").unwrap();
        assert_eq!(positions(&road), vec![2, 8]);
    }

    #[test]
    fn test_trailing_input_is_ignored() {
        let road = load("10 2\n2 A\n8 B\n9 C\ngarbage").unwrap();
        assert_eq!(road.num_cities(), 2);
    }

    #[test]
    fn test_missing_city_count() {
        let err = load("10").unwrap_err();
        assert!(matches!(
            err,
            RoadLoaderError::MalformedHeader(HeaderError::Missing(HeaderField::CityCount))
        ));
        assert_eq!(err.kind(), LoadErrorKind::MalformedHeader);
    }

    #[test]
    fn test_empty_input() {
        let err = load("").unwrap_err();
        assert!(matches!(
            err,
            RoadLoaderError::MalformedHeader(HeaderError::Missing(HeaderField::Length))
        ));
    }

    #[test]
    fn test_non_integer_header() {
        match load("ten 2\n2 A\n8 B\n") {
            Err(RoadLoaderError::MalformedHeader(HeaderError::NotInteger { field, token })) => {
                assert_eq!(field, HeaderField::Length);
                assert_eq!(token, "ten");
            }
            other => panic!("Expected NotInteger header error, got {:?}", other),
        }

        assert!(matches!(
            load("10 2.5\n2 A\n8 B\n"),
            Err(RoadLoaderError::MalformedHeader(HeaderError::NotInteger {
                field: HeaderField::CityCount,
                ..
            }))
        ));
    }

    #[test]
    fn test_header_ranges() {
        assert!(matches!(
            load("2 2\n1 A\n1 B\n"),
            Err(RoadLoaderError::MalformedHeader(HeaderError::LengthOutOfRange { length: 2, .. }))
        ));
        assert!(matches!(
            load("1000001 2\n2 A\n8 B\n"),
            Err(RoadLoaderError::MalformedHeader(HeaderError::LengthOutOfRange { .. }))
        ));
        assert!(matches!(
            load("-5 2\n2 A\n8 B\n"),
            Err(RoadLoaderError::MalformedHeader(HeaderError::LengthOutOfRange { length: -5, .. }))
        ));
        assert!(matches!(
            load("10 10001\n"),
            Err(RoadLoaderError::MalformedHeader(HeaderError::CityCountOutOfRange { count: 10001, .. }))
        ));
        assert!(matches!(
            load("10 -1\n"),
            Err(RoadLoaderError::MalformedHeader(HeaderError::CityCountOutOfRange { count: -1, .. }))
        ));
    }

    #[test]
    fn test_boundary_header_values_accepted() {
        assert!(load("3 2\n1 A\n2 B\n").is_ok());
        assert!(load("1000000 2\n1 A\n999999 B\n").is_ok());
    }

    #[test]
    fn test_single_city_is_rejected() {
        let err = load("10 1\n5 Only\n").unwrap_err();
        assert!(matches!(
            err,
            RoadLoaderError::MalformedHeader(HeaderError::CityCountOutOfRange { count: 1, .. })
        ));
    }

    #[test]
    fn test_missing_record() {
        match load("10 3\n2 A\n8 B\n") {
            Err(RoadLoaderError::MalformedRecord { record, reason }) => {
                assert_eq!(record.get(), 2);
                assert_eq!(reason, RecordError::MissingPosition);
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_position() {
        match load("10 2\n2 A\nB 8\n") {
            Err(RoadLoaderError::MalformedRecord { record, reason }) => {
                assert_eq!(record.get(), 1);
                assert_eq!(
                    reason,
                    RecordError::InvalidPosition {
                        token: "B".to_string()
                    }
                );
            }
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
        // A token must be an integer in full.
        assert!(matches!(
            load("10 2\n2A x\n8 B\n"),
            Err(RoadLoaderError::MalformedRecord {
                reason: RecordError::InvalidPosition { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_missing_name() {
        for input in ["10 2\n2 A\n8\n", "10 2\n2 A\n8   \n", "10 2\n2 A\n8 \r\n", "10 2\n2 A\n8"] {
            match load(input) {
                Err(RoadLoaderError::MalformedRecord { record, reason }) => {
                    assert_eq!(record.get(), 1, "input {:?}", input);
                    assert_eq!(reason, RecordError::MissingName, "input {:?}", input);
                }
                other => panic!("Expected MissingName for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_name_on_next_line_is_missing() {
        assert!(matches!(
            load("10 2\n2\nA\n8 B\n"),
            Err(RoadLoaderError::MalformedRecord {
                reason: RecordError::MissingName,
                ..
            })
        ));
    }

    #[test]
    fn test_name_too_long() {
        let long = "n".repeat(256);
        let input = format!("10 2\n2 {long}\n8 B\n");
        assert!(matches!(
            load(&input),
            Err(RoadLoaderError::MalformedRecord {
                reason: RecordError::InvalidName(CityNameError::TooLong { len: 256 }),
                ..
            })
        ));

        let ok = format!("10 2\n2 {}\n8 B\n", "n".repeat(255));
        assert!(load(&ok).is_ok());
    }

    #[test]
    fn test_position_on_either_end_is_rejected() {
        let err = load("10 2\n0 A\n8 B\n").unwrap_err();
        assert!(matches!(
            err,
            RoadLoaderError::PositionOutOfRange {
                position: 0,
                length: 10,
                ..
            }
        ));
        assert_eq!(err.kind(), LoadErrorKind::PositionOutOfRange);

        assert!(matches!(
            load("10 2\n2 A\n10 B\n"),
            Err(RoadLoaderError::PositionOutOfRange { position: 10, .. })
        ));
        assert!(matches!(
            load("10 2\n-4 A\n8 B\n"),
            Err(RoadLoaderError::PositionOutOfRange { position: -4, .. })
        ));
    }

    #[test]
    fn test_duplicate_position_anywhere() {
        let inputs = [
            "20 4\n5 A\n5 B\n7 C\n9 D\n",
            "20 4\n5 A\n7 B\n9 C\n5 D\n",
            "20 4\n7 A\n5 B\n9 C\n5 D\n",
        ];
        for input in inputs {
            let err = load(input).unwrap_err();
            assert_eq!(err.kind(), LoadErrorKind::DuplicatePosition, "input {:?}", input);
        }

        match load("20 4\n5 A\n7 B\n9 C\n5 D\n") {
            Err(RoadLoaderError::DuplicatePosition {
                record,
                first,
                position,
            }) => {
                assert_eq!(record.get(), 3);
                assert_eq!(first.get(), 0);
                assert_eq!(position, 5);
            }
            other => panic!("Expected DuplicatePosition, got {:?}", other),
        }
    }

    #[test]
    fn test_first_violation_wins() {
        // Record 1 is a duplicate, record 2 is out of range: the duplicate is reported.
        assert_eq!(
            load("10 3\n5 A\n5 B\n12 C\n").unwrap_err().kind(),
            LoadErrorKind::DuplicatePosition
        );
        // Missing name is checked before the position range.
        assert!(matches!(
            load("10 2\n2 A\n0\n"),
            Err(RoadLoaderError::MalformedRecord {
                reason: RecordError::MissingName,
                ..
            })
        ));
    }

    #[test]
    fn test_custom_limits() {
        let loader = RoadLoader::with_limits(RoadLimits::new().with_city_range(1..=1));
        let road = loader.from_str("10 1\n5 Only\n").unwrap();
        assert_eq!(road.num_cities(), 1);
        assert_eq!(loader.limits().city_range(), 1..=1);
    }

    #[test]
    fn test_latin1_names_are_decoded_lossily() {
        init_logger();
        let bytes: &[u8] = b"10 2\n2 S\xe3o Paulo\n8 Bel\xe9m\n";
        let road = RoadLoader::new().from_reader(bytes).unwrap();
        assert_eq!(names(&road), vec!["S\u{FFFD}o Paulo", "Bel\u{FFFD}m"]);
        assert_eq!(positions(&road), vec![2, 8]);
    }

    #[test]
    fn test_utf8_names_are_kept() {
        let road = load("10 2\n2 São Paulo\n8 Belém\n").unwrap();
        assert_eq!(names(&road), vec!["São Paulo", "Belém"]);
    }

    #[test]
    fn test_name_limit_counts_source_bytes() {
        init_logger();
        let mut input = b"10 2\n2 ".to_vec();
        input.extend_from_slice(&[0xE9; 255]);
        input.extend_from_slice(b"\n8 B\n");
        let road = RoadLoader::new().from_reader(input.as_slice()).unwrap();
        assert_eq!(road.cities()[0].name().as_str().chars().count(), 255);

        let mut input = b"10 2\n2 ".to_vec();
        input.extend_from_slice(&[0xE9; 256]);
        input.extend_from_slice(b"\n8 B\n");
        assert!(matches!(
            RoadLoader::new().from_reader(input.as_slice()),
            Err(RoadLoaderError::MalformedRecord {
                reason: RecordError::InvalidName(CityNameError::TooLong { len: 256 }),
                ..
            })
        ));
    }

    #[test]
    fn test_non_utf8_position_is_malformed() {
        init_logger();
        let bytes: &[u8] = b"10 2\n2 A\n\xff8 B\n";
        match RoadLoader::new().from_reader(bytes) {
            Err(RoadLoaderError::MalformedRecord { record, reason }) => {
                assert_eq!(record.get(), 1);
                assert_eq!(
                    reason,
                    RecordError::InvalidPosition {
                        token: "\u{FFFD}8".to_string()
                    }
                );
            }
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        // U+00A0 (no-break space) belongs to the token or name it touches.
        let road = load("10 2\n2 \u{00A0}Vila\n8 B\n").unwrap();
        assert_eq!(names(&road), vec!["\u{00A0}Vila", "B"]);

        assert!(matches!(
            load("10 2\n2\u{00A0}A\n8 B\n"),
            Err(RoadLoaderError::MalformedRecord {
                reason: RecordError::InvalidPosition { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_from_path() {
        init_logger();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "100 3\n10 X\n50 Y\n90 Z\n").unwrap();

        let road = RoadLoader::new().from_path(file.path()).unwrap();
        assert_eq!(names(&road), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        init_logger();
        let dir = tempfile::tempdir().unwrap();
        let err = RoadLoader::new()
            .from_path(dir.path().join("does-not-exist.txt"))
            .unwrap_err();
        assert!(matches!(err, RoadLoaderError::SourceUnreadable(_)));
    }

    #[test]
    fn test_error_display() {
        let err = load("10 2\n2 A\nB 8\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed record CityIndex(1): position token \"B\" is not an integer"
        );
    }

    #[test]
    fn test_road_error_conversion() {
        let err: RoadLoaderError = RoadError::CityCountOutOfRange {
            count: 1,
            min: 2,
            max: 10,
        }
        .into();
        assert_eq!(err.kind(), LoadErrorKind::MalformedHeader);
    }
}
