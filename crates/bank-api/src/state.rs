use std::sync::Arc;

use bank_core::ports::ExternalRightsPort;
use bank_core::repositories::{ClientRepository, TransactionRepository};
use bank_core::services::{ClientService, RightsService, TransactionService};
use bank_shared::ClientMetrics;

use crate::graphql::{build_schema, BankSchema};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<ClientService>,
    pub rights_service: Arc<RightsService>,
    pub transaction_service: Arc<TransactionService>,
    pub metrics: ClientMetrics,
    pub schema: BankSchema,
}

impl AppState {
    /// Wire services over the chosen adapters
    pub fn new(
        client_repo: Arc<dyn ClientRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        external_rights: Arc<dyn ExternalRightsPort>,
        metrics: ClientMetrics,
    ) -> Self {
        let rights_service = Arc::new(RightsService::new(external_rights));
        let client_service = Arc::new(ClientService::new(
            client_repo,
            Arc::clone(&rights_service),
            metrics.clone(),
        ));
        let transaction_service = Arc::new(TransactionService::new(transaction_repo));
        let schema = build_schema(Arc::clone(&rights_service));

        Self {
            client_service,
            rights_service,
            transaction_service,
            metrics,
            schema,
        }
    }
}
