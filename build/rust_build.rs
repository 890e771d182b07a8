/**
 * Compiles resources/territories.txt into a static numbering-plan table.
 *
 * Line format (empty field means "absent"):
 * ID;calling code;main for code;national prefix;prefix in national format;max length;leading digits;national number start
 */

use std::{
    env,
    fmt::Write as _,
    fs::{self, File},
    io::{BufRead, BufReader},
    num::ParseIntError,
    path::Path,
};

use thiserror::Error;

const TERRITORIES_PATH: &str = "resources/territories.txt";
const FIELDS_PER_LINE: usize = 8;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num} has {found} fields, expected {expected}")]
    FieldCount {
        line_num: usize,
        found: usize,
        expected: usize,
    },

    #[error("Line {line_num}: invalid region id '{id}'")]
    InvalidRegionId { line_num: usize, id: String },

    #[error("Line {line_num}: invalid calling code '{code}'")]
    InvalidCallingCode { line_num: usize, code: String },

    #[error("Line {line_num}: invalid flag '{flag}', expected 0 or 1")]
    InvalidFlag { line_num: usize, flag: String },

    #[error("Line {line_num}: failed to parse max length '{value}': {source}")]
    MaxLengthParseError {
        line_num: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to render generated code: {0}")]
    Render(#[from] std::fmt::Error),
}

struct Territory {
    id: String,
    calling_code: String,
    main_country_for_code: bool,
    national_prefix: Option<String>,
    national_prefix_in_national_format: bool,
    max_national_number_length: usize,
    leading_digits: Option<String>,
    national_number_start: Option<String>,
}

fn parse_flag(value: &str, line_num: usize) -> Result<bool, BuildError> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(BuildError::InvalidFlag {
            line_num,
            flag: value.to_string(),
        }),
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_line(line: &str, line_num: usize) -> Result<Territory, BuildError> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(BuildError::FieldCount {
            line_num,
            found: fields.len(),
            expected: FIELDS_PER_LINE,
        });
    }

    let id = fields[0];
    if id.len() != 2 || !id.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(BuildError::InvalidRegionId {
            line_num,
            id: id.to_string(),
        });
    }

    let calling_code = fields[1];
    if calling_code.is_empty()
        || calling_code.len() > 3
        || !calling_code.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(BuildError::InvalidCallingCode {
            line_num,
            code: calling_code.to_string(),
        });
    }

    let max_national_number_length =
        fields[5]
            .parse()
            .map_err(|e| BuildError::MaxLengthParseError {
                line_num,
                value: fields[5].to_string(),
                source: e,
            })?;

    Ok(Territory {
        id: id.to_string(),
        calling_code: calling_code.to_string(),
        main_country_for_code: parse_flag(fields[2], line_num)?,
        national_prefix: optional(fields[3]),
        national_prefix_in_national_format: parse_flag(fields[4], line_num)?,
        max_national_number_length,
        leading_digits: optional(fields[6]),
        national_number_start: optional(fields[7]),
    })
}

fn parse_territories(path: &str) -> Result<Vec<Territory>, BuildError> {
    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;
    let mut territories = Vec::new();

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if line_buffer.len() > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        territories.push(parse_line(line, line_number)?);
    }

    Ok(territories)
}

fn render_option(value: &Option<String>) -> String {
    match value {
        Some(s) => format!("Some({:?})", s),
        None => "None".to_string(),
    }
}

fn render(territories: &[Territory]) -> Result<String, BuildError> {
    let mut out = String::with_capacity(territories.len() * 256);
    writeln!(out, "// Generated by build/rust_build.rs from {}.", TERRITORIES_PATH)?;
    writeln!(out, "pub(crate) static TERRITORIES: &[TerritoryRecord] = &[")?;
    for t in territories {
        writeln!(
            out,
            "    TerritoryRecord {{ id: {:?}, calling_code: {:?}, main_country_for_code: {}, \
             national_prefix: {}, national_prefix_in_national_format: {}, \
             max_national_number_length: {}, leading_digits: {}, national_number_start: {} }},",
            t.id,
            t.calling_code,
            t.main_country_for_code,
            render_option(&t.national_prefix),
            t.national_prefix_in_national_format,
            t.max_national_number_length,
            render_option(&t.leading_digits),
            render_option(&t.national_number_start),
        )?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", TERRITORIES_PATH);
    println!("cargo:rerun-if-changed=build/rust_build.rs");

    let territories = parse_territories(TERRITORIES_PATH)?;
    let generated = render(&territories)?;

    let out_dir = env::var_os("OUT_DIR").map(std::path::PathBuf::from).ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?;
    fs::write(Path::new(&out_dir).join("territories.rs"), generated)?;
    Ok(())
}
