// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::completion::{DEFAULT_MODEL, SUPPORTED_MODELS};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let data = SUPPORTED_MODELS
        .iter()
        .map(|m| {
            let default = if *m == DEFAULT_MODEL { "yes" } else { "" };
            vec![m.to_string(), default.to_string()]
        })
        .collect();
    println!("{}", pretty_table(&["Model", "Default"], data));
    Ok(())
}
