use thiserror::Error;

/// Entity kinds referenced by [`CoreError::NotFound`], so callers can tell
/// which lookup failed without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Location,
    Area,
    Item,
    MasterUser,
    Terminal,
    ImportPreview,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Location => "location",
            Resource::Area => "area",
            Resource::Item => "item",
            Resource::MasterUser => "master user",
            Resource::Terminal => "terminal",
            Resource::ImportPreview => "import preview",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("{} not found", .0.as_str())]
    NotFound(Resource),

    #[error("location has no geofence configured")]
    GeofenceNotConfigured,

    #[error("submission point is {distance_m:.0}m away, allowed radius {radius_m}m")]
    OutOfRange { distance_m: f64, radius_m: i32 },

    #[error("area does not belong to the given location")]
    InvalidArea,

    #[error("damaged items require a non-empty note")]
    NoteRequired,

    #[error("entry already exists")]
    DuplicateEntry,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("internal server error")]
    InternalServerError,
}
