use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::domain::{
    common::entities::app_errors::{CoreError, Resource},
    identity::{
        entities::MasterUser,
        ports::MasterUserRepository,
        value_objects::{CreateMasterUserInput, SearchMasterUsersFilter, UpdateMasterUserInput},
    },
};
use crate::entity::master_users;
use crate::infrastructure::db::{map_read_err, map_write_err};

#[derive(Debug, Clone)]
pub struct PostgresMasterUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresMasterUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MasterUserRepository for PostgresMasterUserRepository {
    async fn fetch_master_users(
        &self,
        filter: SearchMasterUsersFilter,
    ) -> Result<Vec<MasterUser>, CoreError> {
        let mut query = master_users::Entity::find();

        if let Some(role) = filter.role {
            query = query.filter(master_users::Column::Role.eq(role));
        }

        if let Some(q) = filter.query {
            let needle = q.trim().to_string();
            query = query.filter(
                Condition::any()
                    .add(master_users::Column::Email.contains(&needle))
                    .add(master_users::Column::NamaLengkap.contains(&needle))
                    .add(master_users::Column::Departemen.contains(&needle)),
            );
        }

        query = query.order_by_asc(master_users::Column::IdUser);

        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let users = query
            .all(&self.db)
            .await
            .map_err(|e| map_read_err("failed to fetch master users", e))?
            .into_iter()
            .map(MasterUser::from)
            .collect();

        Ok(users)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<MasterUser>, CoreError> {
        let user = master_users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get master user by id", e))?
            .map(MasterUser::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<MasterUser>, CoreError> {
        let user = master_users::Entity::find()
            .filter(master_users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get master user by email", e))?
            .map(MasterUser::from);

        Ok(user)
    }

    async fn create(&self, input: CreateMasterUserInput) -> Result<MasterUser, CoreError> {
        let created = master_users::Entity::insert(master_users::ActiveModel {
            email: Set(input.email),
            nama_lengkap: Set(input.full_name),
            departemen: Set(input.department),
            role: Set(input.role),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(MasterUser::from)
        .map_err(|e| map_write_err("failed to create master user", e))?;

        Ok(created)
    }

    async fn update(&self, id: i32, input: UpdateMasterUserInput) -> Result<MasterUser, CoreError> {
        let model = master_users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to load master user for update", e))?
            .ok_or(CoreError::NotFound(Resource::MasterUser))?;

        let mut active: master_users::ActiveModel = model.into();
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(full_name) = input.full_name {
            active.nama_lengkap = Set(full_name);
        }
        if let Some(department) = input.department {
            active.departemen = Set(department);
        }
        if let Some(role) = input.role {
            active.role = Set(role);
        }

        let updated = active
            .update(&self.db)
            .await
            .map(MasterUser::from)
            .map_err(|e| map_write_err("failed to update master user", e))?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), CoreError> {
        master_users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err("failed to delete master user", e))?;

        Ok(())
    }
}
