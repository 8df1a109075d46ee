// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and algorithms for finding
//! free keybindings, including:
//! - Type definitions for modifiers and bindings
//! - The static catalog of candidate keysyms
//! - Keycode table parsing
//! - Configuration parsing
//! - Availability lookup using HashMap-based indexing
//!
//! Apart from `BindingParser::parse_file`, nothing here touches the file
//! system or spawns processes, so all of it is unit tested in isolation.

pub mod availability;
pub mod catalog;
pub mod combination;
pub mod keycodes;
pub mod parser;
pub mod types;

pub use availability::{available, AvailabilityIndex};
pub use combination::{Combination, CombinationError, Preset};
pub use keycodes::KeycodeTable;
pub use parser::BindingParser;
pub use types::*;

#[cfg(test)]
mod tests;
