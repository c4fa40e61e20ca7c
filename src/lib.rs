// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod filter;
pub mod finance;
pub mod mock;
pub mod models;
pub mod settings;
pub mod store;
pub mod utils;
