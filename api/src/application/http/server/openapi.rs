use utoipa::OpenApi;

use crate::application::http::{
    area::router::AreaApiDoc, dashboard::router::DashboardApiDoc, health::router::HealthApiDoc,
    inspection::router::InspectionApiDoc, item::router::ItemApiDoc, legacy::router::LegacyApiDoc,
    lokasi::router::LokasiApiDoc, master_user::router::MasterUserApiDoc,
    terminal::router::TerminalApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inspeksi API"
    ),
    nest(
        (path = "", api = LokasiApiDoc),
        (path = "", api = AreaApiDoc),
        (path = "", api = ItemApiDoc),
        (path = "", api = InspectionApiDoc),
        (path = "", api = LegacyApiDoc),
        (path = "", api = MasterUserApiDoc),
        (path = "", api = DashboardApiDoc),
        (path = "", api = TerminalApiDoc),
        (path = "", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
