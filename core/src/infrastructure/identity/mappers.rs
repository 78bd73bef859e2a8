use crate::domain::identity::entities::MasterUser;
use crate::entity::master_users::Model as MasterUserModel;

impl From<MasterUserModel> for MasterUser {
    fn from(model: MasterUserModel) -> Self {
        MasterUser {
            id: model.id_user,
            email: model.email,
            full_name: model.nama_lengkap,
            department: model.departemen,
            role: model.role,
        }
    }
}
