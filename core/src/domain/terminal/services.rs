use crate::domain::{
    catalog::{
        ports::{AreaRepository, ItemRepository, LocationRepository},
        services::clean_name,
    },
    common::{
        entities::app_errors::{CoreError, Resource},
        services::Service,
    },
    health::ports::HealthCheckRepository,
    identity::ports::MasterUserRepository,
    inspection::ports::TransactionRepository,
    legacy::ports::LegacyInspectionRepository,
    stats::ports::StatsRepository,
    terminal::{
        entities::Terminal,
        ports::{TerminalRepository, TerminalService},
        value_objects::{CreateTerminalInput, UpdateTerminalInput},
    },
};

impl<L, A, I, M, TE, TX, LE, ST, H> TerminalService for Service<L, A, I, M, TE, TX, LE, ST, H>
where
    L: LocationRepository,
    A: AreaRepository,
    I: ItemRepository,
    M: MasterUserRepository,
    TE: TerminalRepository,
    TX: TransactionRepository,
    LE: LegacyInspectionRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn get_terminals(&self) -> Result<Vec<Terminal>, CoreError> {
        self.terminal_repository.fetch_terminals().await
    }

    async fn get_terminal(&self, id: i32) -> Result<Terminal, CoreError> {
        self.terminal_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Terminal))
    }

    async fn create_terminal(&self, input: CreateTerminalInput) -> Result<Terminal, CoreError> {
        let name = clean_name(&input.name)?;
        self.terminal_repository
            .create(CreateTerminalInput {
                name,
                form_schema: input.form_schema,
            })
            .await
    }

    async fn update_terminal(
        &self,
        id: i32,
        input: UpdateTerminalInput,
    ) -> Result<Terminal, CoreError> {
        self.terminal_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Terminal))?;

        let name = input.name.as_deref().map(clean_name).transpose()?;

        self.terminal_repository
            .update(
                id,
                UpdateTerminalInput {
                    name,
                    form_schema: input.form_schema,
                },
            )
            .await
    }

    async fn delete_terminal(&self, id: i32) -> Result<(), CoreError> {
        self.terminal_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Terminal))?;

        self.terminal_repository.delete(id).await
    }
}
