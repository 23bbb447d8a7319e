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

//! [`CabinetStore`] over tables loaded from a YAML or JSON file.
//!
//! Rows are stored flat, with foreign keys, exactly as exported from the
//! database. Lookups perform the same filters and joins as the PostgREST
//! backend so both answer identically for the same data.

use async_trait::async_trait;
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::models::{
    CargoRow, MinisterioRow, PartidoRow, PersonaRow, SubsecretariaRow, UnitRef, VersionRow,
};
use super::{CabinetStore, StoreError};
use crate::config::{parse_yaml_or_json, MinisterioOrdering};

/// Flat row of `cargos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoRecord {
    pub id: i64,
    pub version_id: i64,
    #[serde(default)]
    pub ministerio_id: Option<i64>,
    #[serde(default)]
    pub subsecretaria_id: Option<i64>,
    #[serde(default)]
    pub persona_id: Option<i64>,
    pub nombre_cargo: String,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
}

/// Flat row of `personas`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRecord {
    pub id: i64,
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
    pub partido_politico_id: Option<i64>,
}

/// Flat row of `partidos_politicos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartidoRecord {
    pub id: i64,
    pub nombre: String,
}

/// The six cabinet tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotTables {
    #[serde(default)]
    pub versiones: Vec<VersionRow>,
    #[serde(default)]
    pub ministerios: Vec<MinisterioRow>,
    #[serde(default)]
    pub subsecretarias: Vec<SubsecretariaRow>,
    #[serde(default)]
    pub cargos: Vec<CargoRecord>,
    #[serde(default)]
    pub personas: Vec<PersonaRecord>,
    #[serde(default)]
    pub partidos_politicos: Vec<PartidoRecord>,
}

pub struct SnapshotStore {
    tables: SnapshotTables,
    personas: IndexMap<i64, usize>,
    partidos: IndexMap<i64, usize>,
}

impl SnapshotStore {
    pub fn new(tables: SnapshotTables) -> Self {
        let personas = tables
            .personas
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id, idx))
            .collect();
        let partidos = tables
            .partidos_politicos
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id, idx))
            .collect();

        Self {
            tables,
            personas,
            partidos,
        }
    }

    /// Read tables from `path`, trying YAML and then JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::Snapshot(format!("Failed to read '{}': {e}", path.display()))
        })?;
        let tables: SnapshotTables = parse_yaml_or_json(&content, &path.display().to_string())
            .map_err(|e| StoreError::Snapshot(e.to_string()))?;

        info!(
            "Loaded snapshot '{}': {} version(s), {} ministerio(s), {} cargo(s)",
            path.display(),
            tables.versiones.len(),
            tables.ministerios.len(),
            tables.cargos.len()
        );

        Ok(Self::new(tables))
    }

    pub fn tables(&self) -> &SnapshotTables {
        &self.tables
    }

    fn persona(&self, id: i64) -> Option<PersonaRow> {
        let record = &self.tables.personas[*self.personas.get(&id)?];
        let partido = record
            .partido_politico_id
            .and_then(|pid| self.partidos.get(&pid))
            .map(|idx| PartidoRow {
                nombre: self.tables.partidos_politicos[*idx].nombre.clone(),
            });

        Some(PersonaRow {
            nombres: record.nombres.clone(),
            apellidos: record.apellidos.clone(),
            fecha_nacimiento: record.fecha_nacimiento.clone(),
            profesion: record.profesion.clone(),
            universidad: record.universidad.clone(),
            genero: record.genero.clone(),
            partido,
        })
    }
}

fn at_most_one<T: Clone>(table: &str, matches: Vec<&T>) -> Result<Option<T>, StoreError> {
    match matches.as_slice() {
        [] => Ok(None),
        [row] => Ok(Some((*row).clone())),
        rows => Err(StoreError::Cardinality {
            table: table.to_string(),
            rows: rows.len(),
        }),
    }
}

#[async_trait]
impl CabinetStore for SnapshotStore {
    fn name(&self) -> &str {
        "snapshot"
    }

    async fn find_version(&self, numero: &str) -> Result<Option<VersionRow>, StoreError> {
        let matches: Vec<&VersionRow> = self
            .tables
            .versiones
            .iter()
            .filter(|v| v.numero_version == numero)
            .collect();
        at_most_one("versiones", matches)
    }

    async fn list_ministerios(
        &self,
        ordering: MinisterioOrdering,
    ) -> Result<Vec<MinisterioRow>, StoreError> {
        let mut rows = self.tables.ministerios.clone();
        match ordering {
            MinisterioOrdering::Orden => {
                rows.sort_by_key(|m| (m.orden.is_none(), m.orden, m.id));
            }
            MinisterioOrdering::Id => rows.sort_by_key(|m| m.id),
        }
        Ok(rows)
    }

    async fn find_ministerio_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<MinisterioRow>, StoreError> {
        let matches: Vec<&MinisterioRow> = self
            .tables
            .ministerios
            .iter()
            .filter(|m| m.slug.as_deref() == Some(slug))
            .collect();
        at_most_one("ministerios", matches)
    }

    async fn list_subsecretarias(
        &self,
        ministerio_id: i64,
    ) -> Result<Vec<SubsecretariaRow>, StoreError> {
        let mut rows: Vec<SubsecretariaRow> = self
            .tables
            .subsecretarias
            .iter()
            .filter(|s| s.ministerio_id == Some(ministerio_id))
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.id);
        Ok(rows)
    }

    async fn find_cargo(
        &self,
        version_id: i64,
        unit: UnitRef,
    ) -> Result<Option<CargoRow>, StoreError> {
        let cargo = self
            .tables
            .cargos
            .iter()
            .filter(|c| c.version_id == version_id)
            .filter(|c| match unit {
                UnitRef::Ministerio(id) => {
                    c.ministerio_id == Some(id) && c.subsecretaria_id.is_none()
                }
                UnitRef::Subsecretaria(id) => c.subsecretaria_id == Some(id),
            })
            .min_by_key(|c| c.id);

        Ok(cargo.map(|c| CargoRow {
            nombre_cargo: c.nombre_cargo.clone(),
            fecha_inicio: c.fecha_inicio.clone(),
            fecha_fin: c.fecha_fin.clone(),
            persona: c.persona_id.and_then(|pid| self.persona(pid)),
        }))
    }
}
