use serde_json::Value;
use tracing::debug;

use crate::domain::{
    catalog::{
        entities::{Area, Item, Location},
        ports::{AreaRepository, ItemRepository, LocationRepository},
        services::clean_name,
        value_objects::{CreateAreaInput, CreateItemInput, CreateLocationInput},
    },
    common::{
        entities::app_errors::CoreError,
        now_ts_utc,
        services::Service,
    },
    health::ports::HealthCheckRepository,
    identity::{ports::MasterUserRepository, services::get_or_create_inspector},
    inspection::{
        ports::TransactionRepository,
        value_objects::{EMPTY_NOTE, NewTransaction, normalize_status},
    },
    legacy::{
        ports::{LegacyInspectionRepository, LegacyService},
        value_objects::{
            CommitImportInput, CommitImportReport, CreatedCounts, ImportMode, KEY_AREA, KEY_ITEM,
            KEY_LOCATION, NormalizeInput, NormalizeReport,
        },
    },
    stats::ports::StatsRepository,
    terminal::{
        ports::TerminalRepository,
        value_objects::{CreateTerminalInput, UpdateTerminalInput},
    },
};

/// Upper bound on rows taken from a single committed import.
const MAX_IMPORT_ROWS: usize = 1000;

/// Picks the flat key-value row out of a legacy payload. Historical writers
/// nested it under either `row` or `fields`.
fn extract_row(data: &Value) -> Option<&serde_json::Map<String, Value>> {
    let payload = data.as_object()?;
    payload
        .get("row")
        .and_then(Value::as_object)
        .or_else(|| payload.get("fields").and_then(Value::as_object))
}

/// Stringifies a row value the way the legacy payloads were written: strings
/// are trimmed, bare numbers kept, everything else treated as absent.
fn field_string(row: &serde_json::Map<String, Value>, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

async fn upsert_location<L>(
    location_repository: &L,
    name: &str,
) -> Result<(Location, bool), CoreError>
where
    L: LocationRepository,
{
    if let Some(location) = location_repository.get_by_name(name.to_string()).await? {
        return Ok((location, false));
    }
    match location_repository
        .create(CreateLocationInput {
            name: name.to_string(),
        })
        .await
    {
        Ok(location) => Ok((location, true)),
        // Lost a create race; the row exists now.
        Err(CoreError::DuplicateEntry) => location_repository
            .get_by_name(name.to_string())
            .await?
            .map(|location| (location, false))
            .ok_or(CoreError::InternalServerError),
        Err(e) => Err(e),
    }
}

async fn upsert_area<A>(
    area_repository: &A,
    location_id: i32,
    name: &str,
) -> Result<(Area, bool), CoreError>
where
    A: AreaRepository,
{
    if let Some(area) = area_repository
        .get_by_name(location_id, name.to_string())
        .await?
    {
        return Ok((area, false));
    }
    match area_repository
        .create(CreateAreaInput {
            location_id,
            name: name.to_string(),
        })
        .await
    {
        Ok(area) => Ok((area, true)),
        Err(CoreError::DuplicateEntry) => area_repository
            .get_by_name(location_id, name.to_string())
            .await?
            .map(|area| (area, false))
            .ok_or(CoreError::InternalServerError),
        Err(e) => Err(e),
    }
}

async fn upsert_item<I>(item_repository: &I, area_id: i32, name: &str) -> Result<(Item, bool), CoreError>
where
    I: ItemRepository,
{
    if let Some(item) = item_repository.get_by_name(area_id, name.to_string()).await? {
        return Ok((item, false));
    }
    match item_repository
        .create(CreateItemInput {
            area_id,
            name: name.to_string(),
        })
        .await
    {
        Ok(item) => Ok((item, true)),
        Err(CoreError::DuplicateEntry) => item_repository
            .get_by_name(area_id, name.to_string())
            .await?
            .map(|item| (item, false))
            .ok_or(CoreError::InternalServerError),
        Err(e) => Err(e),
    }
}

/// Replays the legacy records of one terminal into the master catalog,
/// deduplicating as it goes, and optionally emits one transaction per record.
///
/// A malformed record only skips itself; the run never aborts. Creation is
/// idempotent through the storage uniqueness constraints, so the whole run is
/// safely re-runnable.
pub async fn normalize_legacy_records<L, A, I, M, TX, LE>(
    location_repository: &L,
    area_repository: &A,
    item_repository: &I,
    master_user_repository: &M,
    transaction_repository: &TX,
    legacy_repository: &LE,
    input: NormalizeInput,
) -> Result<NormalizeReport, CoreError>
where
    L: LocationRepository,
    A: AreaRepository,
    I: ItemRepository,
    M: MasterUserRepository,
    TX: TransactionRepository,
    LE: LegacyInspectionRepository,
{
    let records = legacy_repository.fetch_by_terminal(input.terminal_id).await?;

    let inspector = if input.create_transactions {
        Some(get_or_create_inspector(master_user_repository, input.inspector_email.as_deref()).await?)
    } else {
        None
    };

    let default_status = normalize_status(&input.default_status);
    let mut created = CreatedCounts::default();
    let mut processed = 0u64;
    let mut transactions = Vec::new();

    for record in &records {
        let Some(row) = extract_row(&record.data) else {
            debug!(record_id = record.id, "legacy record has no row payload, skipping");
            continue;
        };

        let location_name = field_string(row, KEY_LOCATION);
        let area_name = field_string(row, KEY_AREA);
        let item_token = field_string(row, KEY_ITEM);
        if location_name.is_empty() || area_name.is_empty() || item_token.is_empty() {
            debug!(record_id = record.id, "legacy record misses catalog keys, skipping");
            continue;
        }

        let (location, location_created) = upsert_location(location_repository, &location_name).await?;
        if location_created {
            created.lokasi += 1;
        }

        let (area, area_created) = upsert_area(area_repository, location.id, &area_name).await?;
        if area_created {
            created.area += 1;
        }

        // A numeric token is trusted as a genuine catalog id, wherever the
        // item lives; otherwise it is a name scoped to the resolved area.
        let mut item = None;
        if let Ok(item_id) = item_token.parse::<i32>() {
            item = item_repository.get_by_id(item_id).await?;
        }
        let item = match item {
            Some(item) => item,
            None => {
                let (item, item_created) = upsert_item(item_repository, area.id, &item_token).await?;
                if item_created {
                    created.item += 1;
                }
                item
            }
        };

        if let Some(inspector) = &inspector {
            transactions.push(NewTransaction {
                ts_utc: now_ts_utc(),
                user_id: inspector.id,
                item_id: item.id,
                status: default_status.clone(),
                catatan: EMPTY_NOTE.to_string(),
                latitude: None,
                longitude: None,
                shift: input.default_shift.clone(),
            });
        }

        processed += 1;
    }

    if !transactions.is_empty() {
        created.transactions = transaction_repository.create_batch(transactions).await?;
    }

    Ok(NormalizeReport {
        terminal_id: input.terminal_id,
        created,
        processed,
    })
}

impl<L, A, I, M, TE, TX, LE, ST, H> LegacyService for Service<L, A, I, M, TE, TX, LE, ST, H>
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
    async fn normalize_legacy(&self, input: NormalizeInput) -> Result<NormalizeReport, CoreError> {
        normalize_legacy_records(
            &self.location_repository,
            &self.area_repository,
            &self.item_repository,
            &self.master_user_repository,
            &self.transaction_repository,
            &self.legacy_repository,
            input,
        )
        .await
    }

    async fn commit_import(&self, input: CommitImportInput) -> Result<CommitImportReport, CoreError> {
        let name = clean_name(&input.terminal_name)?;

        let terminal = match self.terminal_repository.get_by_name(name.clone()).await? {
            Some(terminal) => {
                self.terminal_repository
                    .update(
                        terminal.id,
                        UpdateTerminalInput {
                            name: None,
                            form_schema: Some(input.pending.schema.clone()),
                        },
                    )
                    .await?
            }
            None => {
                if input.mode != ImportMode::CreateOrUpdate {
                    return Err(CoreError::Invalid(
                        "terminal does not exist and mode is not create_or_update".to_string(),
                    ));
                }
                self.terminal_repository
                    .create(CreateTerminalInput {
                        name,
                        form_schema: Some(input.pending.schema.clone()),
                    })
                    .await?
            }
        };

        let inserted_rows = if input.insert_rows && !input.pending.rows.is_empty() {
            let rows: Vec<_> = input.pending.rows.into_iter().take(MAX_IMPORT_ROWS).collect();
            self.legacy_repository.insert_rows(terminal.id, rows).await?
        } else {
            0
        };

        Ok(CommitImportReport {
            terminal_id: terminal.id,
            inserted_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::domain::{
        catalog::ports::{MockAreaRepository, MockItemRepository, MockLocationRepository},
        identity::{entities::MasterUser, ports::MockMasterUserRepository},
        inspection::ports::MockTransactionRepository,
        legacy::{entities::LegacyInspectionRecord, ports::MockLegacyInspectionRepository},
    };

    fn record(id: i32, data: Value) -> LegacyInspectionRecord {
        LegacyInspectionRecord {
            id,
            terminal_id: 1,
            data,
        }
    }

    fn normalize_input(create_transactions: bool) -> NormalizeInput {
        NormalizeInput {
            terminal_id: 1,
            create_transactions,
            inspector_email: None,
            default_status: "Bagus".to_string(),
            default_shift: None,
        }
    }

    fn legacy_repo_with(records: Vec<LegacyInspectionRecord>) -> MockLegacyInspectionRepository {
        let mut repo = MockLegacyInspectionRepository::new();
        repo.expect_fetch_by_terminal().returning(move |_| {
            let records = records.clone();
            Box::pin(async move { Ok(records) })
        });
        repo
    }

    /// In-memory location repo: creates land in a shared map so later lookups
    /// in the same run can see them.
    fn stateful_location_repo(
        existing: &[(&str, i32)],
    ) -> (MockLocationRepository, Arc<Mutex<HashMap<String, i32>>>) {
        let state: Arc<Mutex<HashMap<String, i32>>> = Arc::new(Mutex::new(
            existing
                .iter()
                .map(|(name, id)| (name.to_string(), *id))
                .collect(),
        ));

        let mut repo = MockLocationRepository::new();
        let lookup = state.clone();
        repo.expect_get_by_name().returning(move |name| {
            let found = lookup.lock().unwrap().get(&name).copied();
            Box::pin(async move {
                Ok(found.map(|id| Location {
                    id,
                    name,
                    latitude: None,
                    longitude: None,
                    radius_m: None,
                }))
            })
        });
        let insert = state.clone();
        repo.expect_create().returning(move |input| {
            let mut map = insert.lock().unwrap();
            let id = 100 + map.len() as i32;
            map.insert(input.name.clone(), id);
            Box::pin(async move {
                Ok(Location {
                    id,
                    name: input.name,
                    latitude: None,
                    longitude: None,
                    radius_m: None,
                })
            })
        });

        (repo, state)
    }

    fn stateful_area_repo(
        existing: &[(i32, &str, i32)],
    ) -> (MockAreaRepository, Arc<Mutex<HashMap<(i32, String), i32>>>) {
        let state: Arc<Mutex<HashMap<(i32, String), i32>>> = Arc::new(Mutex::new(
            existing
                .iter()
                .map(|(loc, name, id)| ((*loc, name.to_string()), *id))
                .collect(),
        ));

        let mut repo = MockAreaRepository::new();
        let lookup = state.clone();
        repo.expect_get_by_name().returning(move |location_id, name| {
            let found = lookup.lock().unwrap().get(&(location_id, name.clone())).copied();
            Box::pin(async move {
                Ok(found.map(|id| Area {
                    id,
                    location_id,
                    name,
                }))
            })
        });
        let insert = state.clone();
        repo.expect_create().returning(move |input| {
            let mut map = insert.lock().unwrap();
            let id = 200 + map.len() as i32;
            map.insert((input.location_id, input.name.clone()), id);
            Box::pin(async move {
                Ok(Area {
                    id,
                    location_id: input.location_id,
                    name: input.name,
                })
            })
        });

        (repo, state)
    }

    fn stateful_item_repo(
        existing: &[(i32, &str, i32)],
    ) -> (MockItemRepository, Arc<Mutex<HashMap<(i32, String), i32>>>) {
        let state: Arc<Mutex<HashMap<(i32, String), i32>>> = Arc::new(Mutex::new(
            existing
                .iter()
                .map(|(area, name, id)| ((*area, name.to_string()), *id))
                .collect(),
        ));

        let mut repo = MockItemRepository::new();
        let by_id = state.clone();
        repo.expect_get_by_id().returning(move |item_id| {
            let found = by_id
                .lock()
                .unwrap()
                .iter()
                .find(|(_, id)| **id == item_id)
                .map(|((area_id, name), id)| (*area_id, name.clone(), *id));
            Box::pin(async move {
                Ok(found.map(|(area_id, name, id)| Item { id, area_id, name }))
            })
        });
        let lookup = state.clone();
        repo.expect_get_by_name().returning(move |area_id, name| {
            let found = lookup.lock().unwrap().get(&(area_id, name.clone())).copied();
            Box::pin(async move { Ok(found.map(|id| Item { id, area_id, name })) })
        });
        let insert = state.clone();
        repo.expect_create().returning(move |input| {
            let mut map = insert.lock().unwrap();
            let id = 300 + map.len() as i32;
            map.insert((input.area_id, input.name.clone()), id);
            Box::pin(async move {
                Ok(Item {
                    id,
                    area_id: input.area_id,
                    name: input.name,
                })
            })
        });

        (repo, state)
    }

    #[tokio::test]
    async fn first_run_creates_catalog_rows_and_second_run_is_idempotent() {
        let records = vec![
            record(1, json!({"row": {"Lokasi": "Terminal Ferry", "Area": "Ruang Tunggu", "Item_Cek_ID": "Kursi"}})),
            record(2, json!({"row": {"Lokasi": "Terminal Ferry", "Area": "Ruang Tunggu", "Item_Cek_ID": "AC"}})),
            record(3, json!({"fields": {"Lokasi": "Terminal Ferry", "Area": "Toilet", "Item_Cek_ID": "Wastafel"}})),
        ];

        let (locations, _) = stateful_location_repo(&[]);
        let (areas, _) = stateful_area_repo(&[]);
        let (items, _) = stateful_item_repo(&[]);
        let master_users = MockMasterUserRepository::new();
        let transactions = MockTransactionRepository::new();
        let legacy = legacy_repo_with(records.clone());

        let first = normalize_legacy_records(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &legacy,
            normalize_input(false),
        )
        .await
        .unwrap();

        assert_eq!(first.created.lokasi, 1);
        assert_eq!(first.created.area, 2);
        assert_eq!(first.created.item, 3);
        assert_eq!(first.created.transactions, 0);
        assert_eq!(first.processed, 3);

        // Second pass over the same records sees everything in place.
        let second = normalize_legacy_records(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &legacy,
            normalize_input(false),
        )
        .await
        .unwrap();

        assert_eq!(second.created, CreatedCounts::default());
        assert_eq!(second.processed, 3);
    }

    #[tokio::test]
    async fn malformed_records_are_skipped_not_fatal() {
        let records = vec![
            record(1, json!({"row": {"Lokasi": "Terminal Ferry", "Item_Cek_ID": "Kursi"}})),
            record(2, json!({"note": "no row or fields"})),
            record(3, json!("not even an object")),
            record(4, json!({"row": {"Lokasi": "", "Area": "Toilet", "Item_Cek_ID": "Wastafel"}})),
        ];

        let (locations, _) = stateful_location_repo(&[]);
        let (areas, _) = stateful_area_repo(&[]);
        let (items, _) = stateful_item_repo(&[]);
        let master_users = MockMasterUserRepository::new();
        let transactions = MockTransactionRepository::new();
        let legacy = legacy_repo_with(records);

        let report = normalize_legacy_records(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &legacy,
            normalize_input(false),
        )
        .await
        .unwrap();

        assert_eq!(report.created, CreatedCounts::default());
        assert_eq!(report.processed, 0);
    }

    #[tokio::test]
    async fn numeric_item_token_resolves_by_id_across_areas() {
        // Item 314 exists under a different area; the numeric token is trusted.
        let records = vec![record(
            1,
            json!({"row": {"Lokasi": "Terminal Ferry", "Area": "Ruang Tunggu", "Item_Cek_ID": 314}}),
        )];

        let (locations, _) = stateful_location_repo(&[("Terminal Ferry", 1)]);
        let (areas, _) = stateful_area_repo(&[(1, "Ruang Tunggu", 10)]);
        let (items, _) = stateful_item_repo(&[(99, "Eskalator", 314)]);
        let master_users = MockMasterUserRepository::new();
        let transactions = MockTransactionRepository::new();
        let legacy = legacy_repo_with(records);

        let report = normalize_legacy_records(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &legacy,
            normalize_input(false),
        )
        .await
        .unwrap();

        assert_eq!(report.created.item, 0);
        assert_eq!(report.processed, 1);
    }

    #[tokio::test]
    async fn transactions_are_emitted_with_resolved_inspector() {
        let records = vec![
            record(1, json!({"row": {"Lokasi": "Terminal Ferry", "Area": "Ruang Tunggu", "Item_Cek_ID": "Kursi"}})),
            record(2, json!({"row": {"Lokasi": "Terminal Ferry", "Area": "Ruang Tunggu", "Item_Cek_ID": "AC"}})),
        ];

        let (locations, _) = stateful_location_repo(&[]);
        let (areas, _) = stateful_area_repo(&[]);
        let (items, _) = stateful_item_repo(&[]);
        let legacy = legacy_repo_with(records);

        let mut master_users = MockMasterUserRepository::new();
        master_users.expect_get_by_email().returning(|email| {
            Box::pin(async move {
                Ok(Some(MasterUser {
                    id: 5,
                    email,
                    full_name: "Administrator".to_string(),
                    department: "Umum".to_string(),
                    role: "administrator".to_string(),
                }))
            })
        });

        let mut transactions = MockTransactionRepository::new();
        transactions
            .expect_create_batch()
            .withf(|rows| {
                rows.len() == 2
                    && rows.iter().all(|r| {
                        r.user_id == 5
                            && r.status == "Bagus"
                            && r.catatan == EMPTY_NOTE
                            && r.latitude.is_none()
                            && r.longitude.is_none()
                            && r.shift.as_deref() == Some("Pagi")
                    })
            })
            .returning(|rows| Box::pin(async move { Ok(rows.len() as u64) }));

        let mut input = normalize_input(true);
        input.inspector_email = Some("ops@bandara.id".to_string());
        input.default_shift = Some("Pagi".to_string());

        let report = normalize_legacy_records(
            &locations,
            &areas,
            &items,
            &master_users,
            &transactions,
            &legacy,
            input,
        )
        .await
        .unwrap();

        assert_eq!(report.created.transactions, 2);
        assert_eq!(report.processed, 2);
    }
}
