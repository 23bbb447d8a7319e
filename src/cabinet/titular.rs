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

//! Office-holder ("titular") of an organisational unit in a version.

use log::warn;
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::{CabinetStore, CargoRow, UnitRef};

/// Person holding a unit's office, merged with the assignment's role and tenure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Titular {
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    /// Role title of the assignment.
    pub cargo: String,
    /// Birth date.
    pub nacimiento: Option<String>,
    pub profesion: Option<String>,
    pub universidad: Option<String>,
    /// Party name, `""` when the person has none.
    pub partido: String,
    pub genero: Option<String>,
    /// Start of tenure.
    pub asume: Option<String>,
    /// End of tenure, `null` while in office.
    pub finaliza: Option<String>,
}

impl From<CargoRow> for Titular {
    fn from(cargo: CargoRow) -> Self {
        let persona = cargo.persona.unwrap_or_default();
        Self {
            nombres: persona.nombres,
            apellidos: persona.apellidos,
            cargo: cargo.nombre_cargo,
            nacimiento: persona.fecha_nacimiento,
            profesion: persona.profesion,
            universidad: persona.universidad,
            partido: persona.partido.map(|p| p.nombre).unwrap_or_default(),
            genero: persona.genero,
            asume: cargo.fecha_inicio,
            finaliza: cargo.fecha_fin,
        }
    }
}

/// Office-holder of `unit` in `version_id`, if anyone holds it.
///
/// A store failure here affects a single field of the response, so it is
/// logged and reported as no holder.
pub async fn resolve_titular(
    store: &dyn CabinetStore,
    version_id: i64,
    unit: UnitRef,
) -> Option<Titular> {
    match store.find_cargo(version_id, unit).await {
        Ok(cargo) => cargo.map(Titular::from),
        Err(e) => {
            warn!("Failed to resolve titular for {unit} in version {version_id}: {e}");
            None
        }
    }
}
