// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod history;
pub mod models;
pub mod session;
pub mod store;
pub mod utils;
