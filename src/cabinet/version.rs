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

//! Mapping of URL version tokens (`v0`, `v1`, `v1.0`) to `versiones` rows.

use log::debug;

use super::error::{CabinetError, VERSION_NOT_FOUND};
use crate::store::CabinetStore;

/// Short tokens that name a stored version under a different number.
const VERSION_ALIASES: &[(&str, &str)] = &[("1", "1.0")];

/// Strip a leading `v` and apply historical aliases.
///
/// `v0` becomes `0`, `v1.0` stays `1.0`, and the bare `v1` maps to `1.0`.
pub fn normalize_version_token(token: &str) -> String {
    let number = token.strip_prefix('v').unwrap_or(token);
    VERSION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == number)
        .map(|(_, target)| (*target).to_string())
        .unwrap_or_else(|| number.to_string())
}

/// Internal id of the version named by `token`.
pub async fn resolve_version(store: &dyn CabinetStore, token: &str) -> Result<i64, CabinetError> {
    let numero = normalize_version_token(token);
    match store.find_version(&numero).await? {
        Some(row) => {
            debug!("Version token '{token}' resolved to id {}", row.id);
            Ok(row.id)
        }
        None => Err(CabinetError::NotFound(VERSION_NOT_FOUND.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SnapshotStore, SnapshotTables, VersionRow};
    use test_case::test_case;

    #[test_case("v0", "0" ; "integer")]
    #[test_case("v1.0", "1.0" ; "decimal")]
    #[test_case("v1", "1.0" ; "short alias")]
    #[test_case("v2", "2" ; "no alias for two")]
    #[test_case("v2.5", "2.5" ; "other decimal")]
    #[test_case("v10", "10" ; "alias is exact match only")]
    #[test_case("1.0", "1.0" ; "without prefix")]
    #[test_case("vv1", "v1" ; "only one prefix stripped")]
    fn test_normalize_version_token(token: &str, expected: &str) {
        assert_eq!(normalize_version_token(token), expected);
    }

    fn store() -> SnapshotStore {
        SnapshotStore::new(SnapshotTables {
            versiones: vec![
                VersionRow {
                    id: 3,
                    numero_version: "0".to_string(),
                },
                VersionRow {
                    id: 7,
                    numero_version: "1.0".to_string(),
                },
            ],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_resolve_alias_and_exact() {
        let store = store();
        assert_eq!(resolve_version(&store, "v1").await, Ok(7));
        assert_eq!(resolve_version(&store, "v1.0").await, Ok(7));
        assert_eq!(resolve_version(&store, "v0").await, Ok(3));
    }

    #[tokio::test]
    async fn test_unknown_version_is_not_found() {
        let store = store();
        assert_eq!(
            resolve_version(&store, "v99").await,
            Err(CabinetError::NotFound("Versión no encontrada".to_string()))
        );
    }
}
