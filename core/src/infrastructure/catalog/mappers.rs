use crate::domain::catalog::entities::{Area, Item, Location};
use crate::entity::{area::Model as AreaModel, item::Model as ItemModel, lokasi::Model as LokasiModel};

impl From<LokasiModel> for Location {
    fn from(model: LokasiModel) -> Self {
        Location {
            id: model.id_lokasi,
            name: model.nama_lokasi,
            latitude: model.latitude,
            longitude: model.longitude,
            radius_m: model.radius_m,
        }
    }
}

impl From<AreaModel> for Area {
    fn from(model: AreaModel) -> Self {
        Area {
            id: model.id_area,
            location_id: model.id_lokasi,
            name: model.nama_area,
        }
    }
}

impl From<ItemModel> for Item {
    fn from(model: ItemModel) -> Self {
        Item {
            id: model.id_item,
            area_id: model.id_area,
            name: model.nama_item,
        }
    }
}
