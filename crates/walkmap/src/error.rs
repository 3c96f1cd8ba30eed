use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("could not parse time {value:?}: {source}")]
    Time {
        value: String,
        #[source]
        source: jiff::Error,
    },
    #[error("could not parse latitude {value:?}: {source}")]
    Latitude {
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("could not parse longitude {value:?}: {source}")]
    Longitude {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record must have at least 3 fields, found {0}")]
    TooFewFields(usize),
    #[error("{}", join_field_errors(.0))]
    InvalidFields(Vec<FieldError>),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Malformed input: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid record on line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: RecordError,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum AssembleError {
    #[error("segment must have at least {required} points, found {found}")]
    TooFewPoints { required: usize, found: usize },
}
