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

//! Typed row projections returned by [`CabinetStore`](super::CabinetStore).
//!
//! Each struct mirrors exactly the columns one query selects; nested
//! structs correspond to embedded relationships.

use serde::{Deserialize, Serialize};

/// Row of `versiones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRow {
    pub id: i64,
    pub numero_version: String,
}

/// Row of `ministerios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinisterioRow {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub sitio_web: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub orden: Option<i64>,
}

/// Row of `subsecretarias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsecretariaRow {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub sitio_web: Option<String>,
    #[serde(default)]
    pub ministerio_id: Option<i64>,
}

/// Row of `partidos_politicos`, as embedded under a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartidoRow {
    pub nombre: String,
}

/// Row of `personas`, as embedded under an office assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRow {
    #[serde(default)]
    pub nombres: Option<String>,
    #[serde(default)]
    pub apellidos: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub profesion: Option<String>,
    #[serde(default)]
    pub universidad: Option<String>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub partido: Option<PartidoRow>,
}

/// Row of `cargos` with its person expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoRow {
    pub nombre_cargo: String,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub persona: Option<PersonaRow>,
}

/// Organisational unit an office assignment belongs to.
///
/// An assignment references exactly one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitRef {
    Ministerio(i64),
    Subsecretaria(i64),
}

impl UnitRef {
    pub fn id(&self) -> i64 {
        match self {
            UnitRef::Ministerio(id) | UnitRef::Subsecretaria(id) => *id,
        }
    }
}

impl std::fmt::Display for UnitRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitRef::Ministerio(id) => write!(f, "ministerio {id}"),
            UnitRef::Subsecretaria(id) => write!(f, "subsecretaria {id}"),
        }
    }
}
