use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    geofence::value_objects::GeofenceCheck,
    identity::value_objects::Identity,
    inspection::value_objects::{
        BulkSubmissionInput, BulkSubmissionReport, NewTransaction, VerifyLocationInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait TransactionRepository: Send + Sync {
    /// Persists the whole batch inside one storage transaction: either every
    /// row appears or none does.
    fn create_batch(
        &self,
        rows: Vec<NewTransaction>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait InspectionService: Send + Sync {
    fn verify_location(
        &self,
        input: VerifyLocationInput,
    ) -> impl Future<Output = Result<GeofenceCheck, CoreError>> + Send;

    fn submit_bulk(
        &self,
        identity: Identity,
        input: BulkSubmissionInput,
    ) -> impl Future<Output = Result<BulkSubmissionReport, CoreError>> + Send;
}
