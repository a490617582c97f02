// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set; add it to the environment or a .env file")]
    MissingCredential(&'static str),
    #[error("could not read config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// The uploaded sheet lacks one or more required columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("file must contain columns: Category, Amount (missing: {})", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error("amounts are too large to total and forecast")]
    TotalOutOfRange,
    #[error("workbook has no worksheets")]
    EmptyWorkbook,
    #[error("unreadable workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("unreadable CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported file type '{0}' (use xlsx, xls, ods or csv)")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    pub fn schema(&self) -> Option<&SchemaError> {
        match self {
            LedgerError::Schema(e) => Some(e),
            _ => None,
        }
    }
}

/// Failure talking to the chat-completion service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to completion service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("completion service returned a malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,
    #[error(transparent)]
    Service(#[from] ServiceError),
}
