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

use anyhow::Result;
use axum::Router;
use log::info;
use std::sync::Arc;

use crate::api;
use crate::cabinet::CabinetService;
use crate::config::{CabinetServerConfig, MinisterioOrdering};
use crate::factories::create_store;
use crate::store::CabinetStore;

pub struct CabinetServer {
    service: CabinetService,
    host: String,
    port: u16,
    enable_cors: bool,
}

impl CabinetServer {
    /// Create a new CabinetServer from a validated configuration
    pub fn new(config: &CabinetServerConfig) -> Result<Self> {
        let store = create_store(&config.data_store)?;
        Ok(Self::from_store(
            store,
            config.ordering,
            config.server.host.clone(),
            config.server.port,
            config.server.cors,
        ))
    }

    /// Create a CabinetServer around an existing store
    pub fn from_store(
        store: Arc<dyn CabinetStore>,
        ordering: MinisterioOrdering,
        host: String,
        port: u16,
        enable_cors: bool,
    ) -> Self {
        Self {
            service: CabinetService::new(store, ordering),
            host,
            port,
            enable_cors,
        }
    }

    pub fn service(&self) -> &CabinetService {
        &self.service
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The application router, without binding a listener.
    pub fn router(&self) -> Router {
        api::build_app_router(self.service.clone(), self.enable_cors)
    }

    /// Serve until Ctrl+C.
    #[allow(clippy::print_stdout)]
    pub async fn run(self) -> Result<()> {
        println!("Starting Gabinete API");
        println!("  Data store: {}", self.service.store().name());
        println!("  API Port: {}", self.port);
        println!(
            "  Log level: {}",
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
        );

        let app = self.router();
        let addr = format!("{}:{}", self.host, self.port);
        info!("Starting web API on {addr}");
        info!("API available at http://{addr}/api/");
        info!("Swagger UI available at http://{addr}/docs/");

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Shutting down Gabinete API");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
    }
}
