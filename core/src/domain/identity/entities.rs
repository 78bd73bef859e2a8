use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog-level person referenced by inspection transactions. Deliberately
/// distinct from the login principal: tokens are issued by an external
/// authority, master users belong to this system's reporting data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MasterUser {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub department: String,
    pub role: String,
}

/// Claims carried by the bearer token of the external session authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}
