use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    terminal::{
        entities::Terminal,
        value_objects::{CreateTerminalInput, UpdateTerminalInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait TerminalRepository: Send + Sync {
    fn fetch_terminals(&self) -> impl Future<Output = Result<Vec<Terminal>, CoreError>> + Send;

    fn get_by_id(&self, id: i32)
    -> impl Future<Output = Result<Option<Terminal>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Terminal>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateTerminalInput,
    ) -> impl Future<Output = Result<Terminal, CoreError>> + Send;

    fn update(
        &self,
        id: i32,
        input: UpdateTerminalInput,
    ) -> impl Future<Output = Result<Terminal, CoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait TerminalService: Send + Sync {
    fn get_terminals(&self) -> impl Future<Output = Result<Vec<Terminal>, CoreError>> + Send;

    fn get_terminal(&self, id: i32) -> impl Future<Output = Result<Terminal, CoreError>> + Send;

    fn create_terminal(
        &self,
        input: CreateTerminalInput,
    ) -> impl Future<Output = Result<Terminal, CoreError>> + Send;

    fn update_terminal(
        &self,
        id: i32,
        input: UpdateTerminalInput,
    ) -> impl Future<Output = Result<Terminal, CoreError>> + Send;

    fn delete_terminal(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
