use crate::domain::identity::entities::JwtClaims;

/// Canonical role labels. Every entry point goes through
/// [`CanonicalRole::parse`] so the many spellings found in historical data
/// ("grup head", "team_leader", "superadmin", ...) resolve consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalRole {
    Officer,
    SquadLeader,
    TeamLeader,
    Manager,
    GroupHead,
    Administrator,
}

impl CanonicalRole {
    pub fn parse(raw: &str) -> Option<CanonicalRole> {
        let normalized = raw.trim().to_lowercase().replace('_', " ");
        match normalized.as_str() {
            "officer" => Some(CanonicalRole::Officer),
            "squad leader" | "squadleader" => Some(CanonicalRole::SquadLeader),
            "team leader" | "teamleader" => Some(CanonicalRole::TeamLeader),
            "manager" => Some(CanonicalRole::Manager),
            "group head" | "grup head" | "grouphead" | "gruphead" => Some(CanonicalRole::GroupHead),
            "administrator" | "admin" | "superadmin" | "super admin" => {
                Some(CanonicalRole::Administrator)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalRole::Officer => "officer",
            CanonicalRole::SquadLeader => "squad leader",
            CanonicalRole::TeamLeader => "team leader",
            CanonicalRole::Manager => "manager",
            CanonicalRole::GroupHead => "group head",
            CanonicalRole::Administrator => "administrator",
        }
    }

    /// Dashboard rollups are restricted to supervisory roles.
    pub fn can_view_dashboard(&self) -> bool {
        matches!(
            self,
            CanonicalRole::TeamLeader
                | CanonicalRole::Manager
                | CanonicalRole::GroupHead
                | CanonicalRole::Administrator
        )
    }

    pub fn is_administrator(&self) -> bool {
        matches!(self, CanonicalRole::Administrator)
    }
}

/// The authenticated caller, as established by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub role: Option<CanonicalRole>,
}

impl Identity {
    pub fn from_claims(claims: &JwtClaims) -> Self {
        Self {
            subject: claims.sub.clone(),
            role: CanonicalRole::parse(&claims.role),
        }
    }

    pub fn can_view_dashboard(&self) -> bool {
        self.role.is_some_and(|r| r.can_view_dashboard())
    }

    pub fn is_administrator(&self) -> bool {
        self.role.is_some_and(|r| r.is_administrator())
    }
}

#[derive(Debug, Clone)]
pub struct CreateMasterUserInput {
    pub email: String,
    pub full_name: String,
    pub department: String,
    pub role: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMasterUserInput {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}

/// Free-text search over email/name/department plus role filter, with
/// limit/offset paging for the read-only dashboard listing.
#[derive(Debug, Clone, Default)]
pub struct SearchMasterUsersFilter {
    pub query: Option<String>,
    pub role: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_map_to_canonical_roles() {
        let cases = [
            ("superadmin", CanonicalRole::Administrator),
            ("Super Admin", CanonicalRole::Administrator),
            ("admin", CanonicalRole::Administrator),
            ("Administrator", CanonicalRole::Administrator),
            ("team_leader", CanonicalRole::TeamLeader),
            ("teamleader", CanonicalRole::TeamLeader),
            ("grup head", CanonicalRole::GroupHead),
            ("GroupHead", CanonicalRole::GroupHead),
            ("squad_leader", CanonicalRole::SquadLeader),
            (" manager ", CanonicalRole::Manager),
            ("officer", CanonicalRole::Officer),
        ];

        for (raw, expected) in cases {
            assert_eq!(CanonicalRole::parse(raw), Some(expected), "{raw:?}");
        }
    }

    #[test]
    fn unknown_roles_do_not_canonicalize() {
        assert_eq!(CanonicalRole::parse("janitor"), None);
        assert_eq!(CanonicalRole::parse(""), None);
    }

    #[test]
    fn dashboard_access_is_limited_to_supervisory_roles() {
        assert!(!CanonicalRole::Officer.can_view_dashboard());
        assert!(!CanonicalRole::SquadLeader.can_view_dashboard());
        assert!(CanonicalRole::TeamLeader.can_view_dashboard());
        assert!(CanonicalRole::Manager.can_view_dashboard());
        assert!(CanonicalRole::GroupHead.can_view_dashboard());
        assert!(CanonicalRole::Administrator.can_view_dashboard());
    }
}
