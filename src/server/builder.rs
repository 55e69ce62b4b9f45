//! ServerBuilder for fluent API to build HTTP servers

use super::host::ServerHost;
use super::router::build_router;
use crate::config::AppConfig;
use crate::core::EntityStore;
use crate::entities::account::{Account, AccountRole, AccountStore};
use crate::entities::event::Event;
use crate::storage::{InMemoryAccountStore, InMemoryEntityStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the application server
///
/// Stores default to the in-memory implementations.
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("config.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    event_store: Option<Arc<dyn EntityStore<Event>>>,
    account_store: Option<Arc<dyn AccountStore>>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            event_store: None,
            account_store: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom event store
    pub fn with_event_store(mut self, store: impl EntityStore<Event> + 'static) -> Self {
        self.event_store = Some(Arc::new(store));
        self
    }

    /// Use a custom account store
    pub fn with_account_store(mut self, store: impl AccountStore + 'static) -> Self {
        self.account_store = Some(Arc::new(store));
        self
    }

    /// Build the host and seed the configured administrator account
    pub async fn build_host(self) -> Result<ServerHost> {
        let event_store: Arc<dyn EntityStore<Event>> = match self.event_store {
            Some(store) => store,
            None => Arc::new(InMemoryEntityStore::<Event>::new()),
        };
        let account_store: Arc<dyn AccountStore> = match self.account_store {
            Some(store) => store,
            None => Arc::new(InMemoryAccountStore::new()),
        };

        let admin = self.config.accounts.default_admin.clone();
        let host = ServerHost::new(self.config, event_store, account_store);

        if let Some(admin) = admin {
            host.account_service
                .save_account(Account::new(
                    admin.email,
                    admin.password,
                    [AccountRole::Admin, AccountRole::User],
                ))
                .await?;
        }

        Ok(host)
    }

    /// Build the final router
    pub async fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host().await?);
        Ok(build_router(host))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured `server` address and stops on SIGTERM or
    /// Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.address();
        let app = self.build().await?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultAdmin;

    #[tokio::test]
    async fn test_build_host_with_defaults() {
        let host = ServerBuilder::new().build_host().await.unwrap();
        assert_eq!(host.event_store.count().await.unwrap(), 0);
        assert_eq!(host.routes.index(), "/api");
    }

    #[tokio::test]
    async fn test_default_admin_is_seeded() {
        let mut config = AppConfig::default();
        config.accounts.default_admin = Some(DefaultAdmin {
            email: "admin@email.com".to_string(),
            password: "admin".to_string(),
        });

        let host = ServerBuilder::new()
            .with_config(config)
            .build_host()
            .await
            .unwrap();

        let details = host
            .account_service
            .load_user_by_username("admin@email.com")
            .await
            .unwrap();
        assert!(details.authorities.contains("ROLE_ADMIN"));
        assert!(details.authorities.contains("ROLE_USER"));
        assert!(
            host.account_service
                .password_matches("admin", &details.password_hash)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_custom_event_store_is_used() {
        let store = InMemoryEntityStore::<Event>::new();
        store
            .save(crate::entities::event::model::tests::event(0, 0, None))
            .await
            .unwrap();

        let host = ServerBuilder::new()
            .with_event_store(store)
            .build_host()
            .await
            .unwrap();
        assert_eq!(host.event_store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_build_router() {
        assert!(ServerBuilder::new().build().await.is_ok());
    }
}
