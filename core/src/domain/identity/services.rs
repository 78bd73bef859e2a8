use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::domain::{
    catalog::services::clean_name,
    common::{
        entities::app_errors::{CoreError, Resource},
        services::Service,
    },
    health::ports::HealthCheckRepository,
    identity::{
        entities::{JwtClaims, MasterUser},
        ports::{MasterUserRepository, MasterUserService},
        value_objects::{
            CanonicalRole, CreateMasterUserInput, SearchMasterUsersFilter, UpdateMasterUserInput,
        },
    },
    inspection::ports::TransactionRepository,
    legacy::ports::LegacyInspectionRepository,
    stats::ports::StatsRepository,
    terminal::ports::TerminalRepository,
};

use crate::domain::catalog::ports::{AreaRepository, ItemRepository, LocationRepository};

/// Synthesized catalog identity used when a submission cannot be matched to a
/// master user. Created lazily on first use.
pub const FALLBACK_ADMIN_EMAIL: &str = "admin@local";
const FALLBACK_ADMIN_NAME: &str = "Administrator";
const FALLBACK_DEPARTMENT: &str = "Umum";

/// Verifies a bearer token and returns its claims.
pub fn decode_bearer_claims(secret: &str, token: &str) -> Result<JwtClaims, CoreError> {
    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| CoreError::Unauthorized)?;

    Ok(data.claims)
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Looks up a master user by email, creating an administrator-role record on
/// miss. A unique-constraint race on the create is resolved by re-fetching.
pub async fn get_or_create_inspector<M>(
    master_user_repository: &M,
    email: Option<&str>,
) -> Result<MasterUser, CoreError>
where
    M: MasterUserRepository,
{
    let email = match email.map(normalize_email) {
        Some(e) if !e.is_empty() => e,
        _ => FALLBACK_ADMIN_EMAIL.to_string(),
    };

    if let Some(user) = master_user_repository.get_by_email(email.clone()).await? {
        return Ok(user);
    }

    match master_user_repository
        .create(CreateMasterUserInput {
            email: email.clone(),
            full_name: FALLBACK_ADMIN_NAME.to_string(),
            department: FALLBACK_DEPARTMENT.to_string(),
            role: CanonicalRole::Administrator.as_str().to_string(),
        })
        .await
    {
        Ok(user) => Ok(user),
        Err(CoreError::DuplicateEntry) => master_user_repository
            .get_by_email(email)
            .await?
            .ok_or(CoreError::InternalServerError),
        Err(e) => Err(e),
    }
}

/// Resolves the submitting login principal to a catalog master user. The two
/// identity spaces are decoupled; unmatched subjects fall back to the
/// synthesized administrator so submissions are never dropped on the floor.
pub async fn resolve_submitting_identity<M>(
    master_user_repository: &M,
    subject: &str,
) -> Result<MasterUser, CoreError>
where
    M: MasterUserRepository,
{
    let email = normalize_email(subject);
    if !email.is_empty()
        && let Some(user) = master_user_repository.get_by_email(email).await?
    {
        return Ok(user);
    }

    get_or_create_inspector(master_user_repository, None).await
}

fn validate_role(raw: &str) -> Result<String, CoreError> {
    CanonicalRole::parse(raw)
        .map(|role| role.as_str().to_string())
        .ok_or_else(|| CoreError::Invalid(format!("unknown role: {raw}")))
}

impl<L, A, I, M, TE, TX, LE, ST, H> MasterUserService for Service<L, A, I, M, TE, TX, LE, ST, H>
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
    async fn get_master_users(
        &self,
        filter: SearchMasterUsersFilter,
    ) -> Result<Vec<MasterUser>, CoreError> {
        self.master_user_repository.fetch_master_users(filter).await
    }

    async fn create_master_user(
        &self,
        input: CreateMasterUserInput,
    ) -> Result<MasterUser, CoreError> {
        let email = normalize_email(&input.email);
        if email.is_empty() {
            return Err(CoreError::Invalid("email must not be empty".to_string()));
        }
        let role = validate_role(&input.role)?;

        if self
            .master_user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateEntry);
        }

        self.master_user_repository
            .create(CreateMasterUserInput {
                email,
                full_name: clean_name(&input.full_name)?,
                department: input.department,
                role,
            })
            .await
    }

    async fn update_master_user(
        &self,
        id: i32,
        input: UpdateMasterUserInput,
    ) -> Result<MasterUser, CoreError> {
        let existing = self
            .master_user_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::MasterUser))?;

        let email = match input.email {
            Some(raw) => {
                let email = normalize_email(&raw);
                if email.is_empty() {
                    return Err(CoreError::Invalid("email must not be empty".to_string()));
                }
                if let Some(other) = self
                    .master_user_repository
                    .get_by_email(email.clone())
                    .await?
                    && other.id != existing.id
                {
                    return Err(CoreError::DuplicateEntry);
                }
                Some(email)
            }
            None => None,
        };

        let role = input.role.as_deref().map(validate_role).transpose()?;

        self.master_user_repository
            .update(
                id,
                UpdateMasterUserInput {
                    email,
                    full_name: input.full_name,
                    department: input.department,
                    role,
                },
            )
            .await
    }

    async fn delete_master_user(&self, id: i32) -> Result<(), CoreError> {
        self.master_user_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::MasterUser))?;

        self.master_user_repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::ports::MockMasterUserRepository;

    fn master_user(id: i32, email: &str, role: &str) -> MasterUser {
        MasterUser {
            id,
            email: email.to_string(),
            full_name: "Administrator".to_string(),
            department: "Umum".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn matched_subject_resolves_to_master_user() {
        let mut repo = MockMasterUserRepository::new();
        repo.expect_get_by_email()
            .withf(|email| email == "rdef707@gmail.com")
            .returning(|_| Box::pin(async { Ok(Some(master_user(7, "rdef707@gmail.com", "officer"))) }));

        let user = resolve_submitting_identity(&repo, "RDEF707@gmail.com ")
            .await
            .unwrap();
        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn unmatched_subject_falls_back_to_administrator() {
        let mut repo = MockMasterUserRepository::new();
        repo.expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        repo.expect_create()
            .withf(|input| input.email == FALLBACK_ADMIN_EMAIL && input.role == "administrator")
            .returning(|input| {
                Box::pin(async move { Ok(master_user(1, &input.email, &input.role)) })
            });

        let user = resolve_submitting_identity(&repo, "stranger@example.com")
            .await
            .unwrap();
        assert_eq!(user.email, FALLBACK_ADMIN_EMAIL);
        assert_eq!(user.role, "administrator");
    }

    #[tokio::test]
    async fn create_race_refetches_existing_row() {
        let mut repo = MockMasterUserRepository::new();
        let mut first = true;
        repo.expect_get_by_email().returning(move |email| {
            let hit = !first;
            first = false;
            Box::pin(async move {
                if hit {
                    Ok(Some(master_user(3, &email, "administrator")))
                } else {
                    Ok(None)
                }
            })
        });
        repo.expect_create()
            .returning(|_| Box::pin(async { Err(CoreError::DuplicateEntry) }));

        let user = get_or_create_inspector(&repo, Some("ops@example.com"))
            .await
            .unwrap();
        assert_eq!(user.id, 3);
    }
}
