use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::{
    common::entities::app_errors::{CoreError, Resource},
    terminal::{
        entities::Terminal,
        ports::TerminalRepository,
        value_objects::{CreateTerminalInput, UpdateTerminalInput},
    },
};
use crate::entity::terminals;
use crate::infrastructure::db::{map_read_err, map_write_err};

#[derive(Debug, Clone)]
pub struct PostgresTerminalRepository {
    pub db: DatabaseConnection,
}

impl PostgresTerminalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TerminalRepository for PostgresTerminalRepository {
    async fn fetch_terminals(&self) -> Result<Vec<Terminal>, CoreError> {
        let terminals = terminals::Entity::find()
            .order_by_asc(terminals::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_read_err("failed to fetch terminals", e))?
            .into_iter()
            .map(Terminal::from)
            .collect();

        Ok(terminals)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Terminal>, CoreError> {
        let terminal = terminals::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get terminal by id", e))?
            .map(Terminal::from);

        Ok(terminal)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Terminal>, CoreError> {
        let terminal = terminals::Entity::find()
            .filter(terminals::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get terminal by name", e))?
            .map(Terminal::from);

        Ok(terminal)
    }

    async fn create(&self, input: CreateTerminalInput) -> Result<Terminal, CoreError> {
        let created = terminals::Entity::insert(terminals::ActiveModel {
            name: Set(input.name),
            form_schema: Set(input.form_schema),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(Terminal::from)
        .map_err(|e| map_write_err("failed to create terminal", e))?;

        Ok(created)
    }

    async fn update(&self, id: i32, input: UpdateTerminalInput) -> Result<Terminal, CoreError> {
        let model = terminals::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to load terminal for update", e))?
            .ok_or(CoreError::NotFound(Resource::Terminal))?;

        let mut active: terminals::ActiveModel = model.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(form_schema) = input.form_schema {
            active.form_schema = Set(Some(form_schema));
        }

        let updated = active
            .update(&self.db)
            .await
            .map(Terminal::from)
            .map_err(|e| map_write_err("failed to update terminal", e))?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), CoreError> {
        terminals::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err("failed to delete terminal", e))?;

        Ok(())
    }
}
