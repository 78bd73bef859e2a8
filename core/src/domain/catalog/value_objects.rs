#[derive(Debug, Clone)]
pub struct CreateLocationInput {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLocationInput {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_m: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateAreaInput {
    pub location_id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateItemInput {
    pub area_id: i32,
    pub name: String,
}
