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

//! Cabinet composition per administration version.
//!
//! A request flows through three steps:
//!
//! 1. [`resolve_version`] turns the URL token into a `versiones` id.
//! 2. [`resolve_titular`] finds, per organisational unit, the assignment
//!    for that version and merges it with the person's profile.
//! 3. [`assemble_ministerio`] nests sub-secretariats and holders into the
//!    response shape.
//!
//! [`CabinetService`] ties the steps together for the HTTP handlers.

pub mod assembler;
pub mod error;
pub mod service;
pub mod titular;
pub mod version;

pub use assembler::{assemble_ministerio, MinisterioResponse, SubsecretariaResponse};
pub use error::{CabinetError, INTERNAL_ERROR_MESSAGE, VERSION_NOT_FOUND};
pub use service::CabinetService;
pub use titular::{resolve_titular, Titular};
pub use version::{normalize_version_token, resolve_version};
