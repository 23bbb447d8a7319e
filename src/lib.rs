// Copyright 2025 The Drasi Authors.
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

//! Read-only HTTP API over the composition of the executive cabinet.
//!
//! Each administration version is a snapshot of who held each ministry and
//! sub-secretariat. The data lives in six tables (`versiones`,
//! `ministerios`, `subsecretarias`, `cargos`, `personas`,
//! `partidos_politicos`) served either by a PostgREST endpoint or by a
//! local snapshot file.

pub mod api;
pub mod builder;
pub mod cabinet;
pub mod config;
pub mod factories;
pub mod server;
pub mod store;

// Main exports for library users
pub use builder::CabinetServerBuilder;
pub use server::CabinetServer;

pub use cabinet::{CabinetError, CabinetService, MinisterioResponse, SubsecretariaResponse, Titular};
pub use config::{
    default_config, load_config_file, CabinetServerConfig, ConfigError, DataStoreConfig,
    MinisterioOrdering, ServerSettings,
};
pub use store::{CabinetStore, PostgrestStore, SnapshotStore, SnapshotTables, StoreError};
