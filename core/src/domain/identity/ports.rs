use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identity::{
        entities::MasterUser,
        value_objects::{CreateMasterUserInput, SearchMasterUsersFilter, UpdateMasterUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MasterUserRepository: Send + Sync {
    fn fetch_master_users(
        &self,
        filter: SearchMasterUsersFilter,
    ) -> impl Future<Output = Result<Vec<MasterUser>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<MasterUser>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<MasterUser>, CoreError>> + Send;

    /// Returns [`CoreError::DuplicateEntry`] on the unique email constraint.
    fn create(
        &self,
        input: CreateMasterUserInput,
    ) -> impl Future<Output = Result<MasterUser, CoreError>> + Send;

    fn update(
        &self,
        id: i32,
        input: UpdateMasterUserInput,
    ) -> impl Future<Output = Result<MasterUser, CoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait MasterUserService: Send + Sync {
    fn get_master_users(
        &self,
        filter: SearchMasterUsersFilter,
    ) -> impl Future<Output = Result<Vec<MasterUser>, CoreError>> + Send;

    fn create_master_user(
        &self,
        input: CreateMasterUserInput,
    ) -> impl Future<Output = Result<MasterUser, CoreError>> + Send;

    fn update_master_user(
        &self,
        id: i32,
        input: UpdateMasterUserInput,
    ) -> impl Future<Output = Result<MasterUser, CoreError>> + Send;

    fn delete_master_user(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
