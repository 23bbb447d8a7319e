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

//! [`CabinetStore`] backed by a hosted database's PostgREST endpoint.
//!
//! Every lookup is a single `GET {url}/rest/v1/{table}` whose query string
//! carries the column projection (including embedded relationships), the
//! filters, the ordering and an optional row limit.

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt::Display;
use std::time::Duration;

use super::models::{CargoRow, MinisterioRow, SubsecretariaRow, UnitRef, VersionRow};
use super::{CabinetStore, StoreError};
use crate::config::MinisterioOrdering;

const REST_PATH: &str = "/rest/v1";

const VERSION_SELECT: &str = "id,numero_version";
const MINISTERIO_SELECT: &str = "id,nombre,sitio_web,slug,orden";
const SUBSECRETARIA_SELECT: &str = "id,nombre,sitio_web,ministerio_id";
const CARGO_SELECT: &str = "nombre_cargo,fecha_inicio,fecha_fin,\
persona:persona_id(nombres,apellidos,fecha_nacimiento,profesion,universidad,genero,\
partido:partido_politico_id(nombre))";

/// Error payload returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Client for the PostgREST API of a hosted database.
///
/// Built once at startup; the inner `reqwest::Client` pools connections
/// across requests.
#[derive(Clone)]
pub struct PostgrestStore {
    http: Client,
    base_url: String,
    api_key: String,
    schema: Option<String>,
}

impl PostgrestStore {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        schema: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Transport(format!("Failed to create HTTP client: {e}")))?;

        let url = url.into();
        Ok(Self {
            http,
            base_url: format!("{}{REST_PATH}", url.trim_end_matches('/')),
            api_key: api_key.into(),
            schema,
        })
    }

    /// Start a query against `table`.
    pub fn from_table(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            store: self,
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/{table}", self.base_url);
        debug!("PostgREST GET {table} {params:?}");

        let mut request = self
            .http
            .get(&url)
            .query(params)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json");
        if let Some(schema) = &self.schema {
            request = request.header("Accept-Profile", schema);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(|e| StoreError::Decode {
            table: table.to_string(),
            reason: e.to_string(),
        })
    }
}

fn upstream_error(status: u16, body: &[u8]) -> StoreError {
    let message = match serde_json::from_slice::<PostgrestErrorBody>(body) {
        Ok(err) => {
            if let Some(code) = &err.code {
                debug!(
                    "PostgREST error {code}: {} ({})",
                    err.message,
                    err.details.as_deref().unwrap_or_default()
                );
            }
            err.message
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            format!(
                "Data store returned HTTP {status}: {}",
                text.chars().take(200).collect::<String>()
            )
        }
    };
    StoreError::Upstream { status, message }
}

/// A single-table read with filters, ordering and a fetch mode.
pub struct TableQuery<'a> {
    store: &'a PostgrestStore,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> TableQuery<'a> {
    /// Columns to return; nested `alias:fk(...)` entries expand relationships.
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn is_null(mut self, column: &str) -> Self {
        self.params.push((column.to_string(), "is.null".to_string()));
        self
    }

    /// Order by a comma-separated PostgREST ordering, e.g. `orden.asc.nullslast,id.asc`.
    pub fn order(mut self, ordering: &str) -> Self {
        self.params.push(("order".to_string(), ordering.to_string()));
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.params.push(("limit".to_string(), rows.to_string()));
        self
    }

    /// Query-string pairs in the order they were added.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Every matching row.
    pub async fn fetch_all<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        self.store.get_rows(&self.table, &self.params).await
    }

    /// Exactly one row, or an error.
    pub async fn fetch_single<T: DeserializeOwned>(self) -> Result<T, StoreError> {
        let table = self.table.clone();
        match self.fetch_maybe_single().await? {
            Some(row) => Ok(row),
            None => Err(StoreError::Missing { table }),
        }
    }

    /// At most one row; more than one is an error.
    pub async fn fetch_maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, StoreError> {
        let table = self.table.clone();
        let mut rows: Vec<T> = self.fetch_all().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(StoreError::Cardinality {
                table,
                rows: n,
            }),
        }
    }
}

fn ministerio_order(ordering: MinisterioOrdering) -> &'static str {
    match ordering {
        MinisterioOrdering::Orden => "orden.asc.nullslast,id.asc",
        MinisterioOrdering::Id => "id.asc",
    }
}

#[async_trait]
impl CabinetStore for PostgrestStore {
    fn name(&self) -> &str {
        "postgrest"
    }

    async fn find_version(&self, numero: &str) -> Result<Option<VersionRow>, StoreError> {
        self.from_table("versiones")
            .select(VERSION_SELECT)
            .eq("numero_version", numero)
            .fetch_maybe_single()
            .await
    }

    async fn list_ministerios(
        &self,
        ordering: MinisterioOrdering,
    ) -> Result<Vec<MinisterioRow>, StoreError> {
        self.from_table("ministerios")
            .select(MINISTERIO_SELECT)
            .order(ministerio_order(ordering))
            .fetch_all()
            .await
    }

    async fn find_ministerio_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<MinisterioRow>, StoreError> {
        self.from_table("ministerios")
            .select(MINISTERIO_SELECT)
            .eq("slug", slug)
            .fetch_maybe_single()
            .await
    }

    async fn list_subsecretarias(
        &self,
        ministerio_id: i64,
    ) -> Result<Vec<SubsecretariaRow>, StoreError> {
        self.from_table("subsecretarias")
            .select(SUBSECRETARIA_SELECT)
            .eq("ministerio_id", ministerio_id)
            .order("id.asc")
            .fetch_all()
            .await
    }

    async fn find_cargo(
        &self,
        version_id: i64,
        unit: UnitRef,
    ) -> Result<Option<CargoRow>, StoreError> {
        let query = self
            .from_table("cargos")
            .select(CARGO_SELECT)
            .eq("version_id", version_id);

        let query = match unit {
            UnitRef::Ministerio(id) => query.eq("ministerio_id", id).is_null("subsecretaria_id"),
            UnitRef::Subsecretaria(id) => query.eq("subsecretaria_id", id),
        };

        query
            .order("id.asc")
            .limit(1)
            .fetch_maybe_single()
            .await
    }
}
