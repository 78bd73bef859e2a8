use tracing::debug;

use crate::domain::{
    catalog::ports::{AreaRepository, ItemRepository, LocationRepository},
    common::{
        entities::app_errors::{CoreError, Resource},
        now_ts_utc,
        services::Service,
    },
    geofence::{services::check_within_geofence, value_objects::GeofenceCheck},
    health::ports::HealthCheckRepository,
    identity::{
        ports::MasterUserRepository, services::resolve_submitting_identity,
        value_objects::Identity,
    },
    inspection::{
        ports::{InspectionService, TransactionRepository},
        value_objects::{
            BulkSubmissionInput, BulkSubmissionReport, EMPTY_NOTE, NewTransaction,
            VerifyLocationInput, is_damaged_status, normalize_status,
        },
    },
    legacy::ports::LegacyInspectionRepository,
    stats::ports::StatsRepository,
    terminal::ports::TerminalRepository,
};

/// Validates a bulk submission and fans it out into one transaction row per
/// item, all sharing a single generated timestamp.
///
/// A damaged item without a note fails the whole batch before anything is
/// written; a submission is one logical event and must not half-commit. By
/// contrast an unknown item id, or one belonging to a different area, only
/// drops that row.
pub async fn process_bulk_submission<L, A, I, M, TX>(
    location_repository: &L,
    area_repository: &A,
    item_repository: &I,
    master_user_repository: &M,
    transaction_repository: &TX,
    identity: &Identity,
    input: BulkSubmissionInput,
) -> Result<BulkSubmissionReport, CoreError>
where
    L: LocationRepository,
    A: AreaRepository,
    I: ItemRepository,
    M: MasterUserRepository,
    TX: TransactionRepository,
{
    let location = location_repository
        .get_by_id(input.location_id)
        .await?
        .ok_or(CoreError::NotFound(Resource::Location))?;

    let check = check_within_geofence(&location, input.point)?;
    if !check.valid {
        return Err(CoreError::OutOfRange {
            distance_m: check.distance_m,
            radius_m: check.radius_m,
        });
    }

    let area = area_repository
        .get_by_id(input.area_id)
        .await?
        .ok_or(CoreError::NotFound(Resource::Area))?;
    if area.location_id != location.id {
        return Err(CoreError::InvalidArea);
    }

    // Normalize once and run the note guard over the whole batch before any
    // lookup or write happens.
    let mut pending = Vec::with_capacity(input.items.len());
    for row in &input.items {
        let status = normalize_status(&row.status);
        let note = row.catatan.as_deref().map(str::trim).unwrap_or("");
        if is_damaged_status(&status) && note.is_empty() {
            return Err(CoreError::NoteRequired);
        }
        pending.push((row.item_id, status, note.to_string()));
    }

    let master_user = resolve_submitting_identity(master_user_repository, &identity.subject).await?;

    let ts_utc = now_ts_utc();
    let mut rows = Vec::with_capacity(pending.len());
    for (item_id, status, note) in pending {
        let item = match item_repository.get_by_id(item_id).await? {
            Some(item) if item.area_id == area.id => item,
            _ => {
                debug!(item_id, area_id = area.id, "skipping item outside submitted area");
                continue;
            }
        };

        rows.push(NewTransaction {
            ts_utc: ts_utc.clone(),
            user_id: master_user.id,
            item_id: item.id,
            status,
            catatan: if note.is_empty() {
                EMPTY_NOTE.to_string()
            } else {
                note
            },
            latitude: Some(input.point.latitude),
            longitude: Some(input.point.longitude),
            shift: input.shift.clone(),
        });
    }

    let created = if rows.is_empty() {
        0
    } else {
        transaction_repository.create_batch(rows).await?
    };

    Ok(BulkSubmissionReport { created })
}

impl<L, A, I, M, TE, TX, LE, ST, H> InspectionService for Service<L, A, I, M, TE, TX, LE, ST, H>
where
    L: LocationRepository,
    A: AreaRepository,
    I: ItemRepository,
    M: MasterUserRepository,
    TE: TerminalRepository,
    TX: TransactionRepository,
    LE: LegacyInspectionRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn verify_location(&self, input: VerifyLocationInput) -> Result<GeofenceCheck, CoreError> {
        let location = match (input.location_id, input.location_name) {
            (Some(id), _) => self.location_repository.get_by_id(id).await?,
            (None, Some(name)) => {
                self.location_repository
                    .get_by_name(name.trim().to_string())
                    .await?
            }
            (None, None) => None,
        }
        .ok_or(CoreError::NotFound(Resource::Location))?;

        check_within_geofence(&location, input.point)
    }

    async fn submit_bulk(
        &self,
        identity: Identity,
        input: BulkSubmissionInput,
    ) -> Result<BulkSubmissionReport, CoreError> {
        process_bulk_submission(
            &self.location_repository,
            &self.area_repository,
            &self.item_repository,
            &self.master_user_repository,
            &self.transaction_repository,
            &identity,
            input,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::{
            entities::{Area, Item, Location},
            ports::{MockAreaRepository, MockItemRepository, MockLocationRepository},
        },
        geofence::value_objects::GeoPoint,
        identity::{entities::MasterUser, ports::MockMasterUserRepository},
        inspection::{ports::MockTransactionRepository, value_objects::BulkItemInput},
    };

    fn fenced_location() -> Location {
        Location {
            id: 1,
            name: "Terminal Ferry".to_string(),
            latitude: Some(1.0),
            longitude: Some(104.0),
            radius_m: Some(200),
        }
    }

    fn area_of(location_id: i32, id: i32) -> Area {
        Area {
            id,
            location_id,
            name: "Ruang Tunggu".to_string(),
        }
    }

    fn officer_identity() -> Identity {
        Identity {
            subject: "rdef707@gmail.com".to_string(),
            role: None,
        }
    }

    fn inside_point() -> GeoPoint {
        GeoPoint {
            latitude: 1.0,
            longitude: 104.0,
        }
    }

    fn location_repo_with(location: Location) -> MockLocationRepository {
        let mut repo = MockLocationRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| {
                let location = location.clone();
                Box::pin(async move { Ok(Some(location)) })
            });
        repo
    }

    fn area_repo_with(area: Area) -> MockAreaRepository {
        let mut repo = MockAreaRepository::new();
        repo.expect_get_by_id().returning(move |_| {
            let area = area.clone();
            Box::pin(async move { Ok(Some(area)) })
        });
        repo
    }

    fn master_repo_with_officer() -> MockMasterUserRepository {
        let mut repo = MockMasterUserRepository::new();
        repo.expect_get_by_email().returning(|email| {
            Box::pin(async move {
                Ok(Some(MasterUser {
                    id: 7,
                    email,
                    full_name: "Defrianto".to_string(),
                    department: "Umum".to_string(),
                    role: "officer".to_string(),
                }))
            })
        });
        repo
    }

    fn input_with(items: Vec<BulkItemInput>) -> BulkSubmissionInput {
        BulkSubmissionInput {
            location_id: 1,
            area_id: 10,
            point: inside_point(),
            shift: Some("Pagi".to_string()),
            items,
        }
    }

    #[tokio::test]
    async fn damaged_item_without_note_aborts_whole_batch() {
        let locations = location_repo_with(fenced_location());
        let areas = area_repo_with(area_of(1, 10));
        // Neither items nor transactions may be touched when the guard fires.
        let items = MockItemRepository::new();
        let master_users = MockMasterUserRepository::new();
        let transactions = MockTransactionRepository::new();

        let result = process_bulk_submission(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &officer_identity(),
            input_with(vec![
                BulkItemInput {
                    item_id: 100,
                    status: "Bagus".to_string(),
                    catatan: None,
                },
                BulkItemInput {
                    item_id: 101,
                    status: "Rusak".to_string(),
                    catatan: Some("   ".to_string()),
                },
            ]),
        )
        .await;

        assert_eq!(result, Err(CoreError::NoteRequired));
    }

    #[tokio::test]
    async fn foreign_items_are_skipped_silently() {
        let locations = location_repo_with(fenced_location());
        let areas = area_repo_with(area_of(1, 10));
        let master_users = master_repo_with_officer();

        let mut items = MockItemRepository::new();
        items.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                Ok(match id {
                    100 | 101 => Some(Item {
                        id,
                        area_id: 10,
                        name: format!("Item {id}"),
                    }),
                    // Item 999 exists but belongs to another area.
                    999 => Some(Item {
                        id,
                        area_id: 42,
                        name: "Foreign".to_string(),
                    }),
                    _ => None,
                })
            })
        });

        let mut transactions = MockTransactionRepository::new();
        transactions
            .expect_create_batch()
            .withf(|rows| {
                rows.len() == 2
                    && rows.iter().all(|r| r.ts_utc == rows[0].ts_utc)
                    && rows.iter().all(|r| r.user_id == 7)
            })
            .returning(|rows| Box::pin(async move { Ok(rows.len() as u64) }));

        let report = process_bulk_submission(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &officer_identity(),
            input_with(vec![
                BulkItemInput {
                    item_id: 100,
                    status: String::new(),
                    catatan: None,
                },
                BulkItemInput {
                    item_id: 999,
                    status: "Bagus".to_string(),
                    catatan: None,
                },
                BulkItemInput {
                    item_id: 101,
                    status: "Rusak".to_string(),
                    catatan: Some("kaca pecah".to_string()),
                },
            ]),
        )
        .await
        .unwrap();

        assert_eq!(report.created, 2);
    }

    #[tokio::test]
    async fn out_of_range_point_is_rejected_with_distance() {
        let locations = location_repo_with(fenced_location());
        let areas = MockAreaRepository::new();
        let items = MockItemRepository::new();
        let master_users = MockMasterUserRepository::new();
        let transactions = MockTransactionRepository::new();

        let mut input = input_with(vec![]);
        input.point = GeoPoint {
            latitude: 1.05,
            longitude: 104.0,
        };

        let result = process_bulk_submission(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &officer_identity(),
            input,
        )
        .await;

        match result {
            Err(CoreError::OutOfRange { distance_m, radius_m }) => {
                assert_eq!(radius_m, 200);
                assert!(distance_m > 5_000.0);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unfenced_location_is_rejected() {
        let mut unfenced = fenced_location();
        unfenced.radius_m = None;
        let locations = location_repo_with(unfenced);
        let areas = MockAreaRepository::new();
        let items = MockItemRepository::new();
        let master_users = MockMasterUserRepository::new();
        let transactions = MockTransactionRepository::new();

        let result = process_bulk_submission(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &officer_identity(),
            input_with(vec![]),
        )
        .await;

        assert_eq!(result, Err(CoreError::GeofenceNotConfigured));
    }

    #[tokio::test]
    async fn cross_location_area_is_rejected() {
        let locations = location_repo_with(fenced_location());
        let areas = area_repo_with(area_of(99, 10));
        let items = MockItemRepository::new();
        let master_users = MockMasterUserRepository::new();
        let transactions = MockTransactionRepository::new();

        let result = process_bulk_submission(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &officer_identity(),
            input_with(vec![]),
        )
        .await;

        assert_eq!(result, Err(CoreError::InvalidArea));
    }

    #[tokio::test]
    async fn empty_surviving_batch_creates_nothing() {
        let locations = location_repo_with(fenced_location());
        let areas = area_repo_with(area_of(1, 10));
        let master_users = master_repo_with_officer();

        let mut items = MockItemRepository::new();
        items
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        // create_batch must not be called at all.
        let transactions = MockTransactionRepository::new();

        let report = process_bulk_submission(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &officer_identity(),
            input_with(vec![BulkItemInput {
                item_id: 12345,
                status: "Bagus".to_string(),
                catatan: None,
            }]),
        )
        .await
        .unwrap();

        assert_eq!(report.created, 0);
    }
}
