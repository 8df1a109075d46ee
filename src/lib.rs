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

//! i3 Available Keybindings
//!
//! Lists the keysyms in an i3 configuration that are still free for a given
//! modifier combination, so picking a key for a new binding doesn't mean
//! grepping the config by hand.
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, key catalog, parser, availability)
//! - **`config`:** Locating the i3 configuration file
//! - **`keysource`:** Keycode tables from `xmodmap` for `bindcode` lines
//!
//! # Examples
//!
//! ## Finding free `$mod` keys
//!
//! ```no_run
//! use i3av::core::{catalog, parser::parse_config_file, AvailabilityIndex, Preset};
//! use i3av::keysource::{load_or_empty, XmodmapSource};
//! use std::path::Path;
//!
//! let keycodes = load_or_empty(&XmodmapSource::new());
//! let bindings = parse_config_file(Path::new("/home/user/.config/i3/config"), &keycodes)?;
//!
//! let index = AvailabilityIndex::from_bindings(&bindings);
//! let free = index.available(&catalog::resolve(&["a-z"]), Preset::Mod.modifiers());
//! println!("Available $mod: {}", free.join(", "));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod keysource;

// Re-export commonly used types for convenience
pub use core::{BindKind, Binding, Modifier, ModifierSet};
