// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod insight;
pub mod ledger;
pub mod models;
pub mod session;
pub mod utils;
