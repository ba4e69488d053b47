use crate::clients::{FoodClient, PersonClient};
use crate::config::Config;
use crate::food_service::FoodService;
use tracing::{error, info};

/// The food service wired to its reference collaborators.
///
/// `FoodSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the person and food stores
/// - **Dependency Wiring**: Injecting both clients into the [`FoodService`]
///
/// # Example
///
/// ```ignore
/// let system = FoodSystem::new(&Config::default());
///
/// let person_id = system.person_client.add_person(person).await?;
/// let food_id = system.service.add_food_entry(entry).await?;
///
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    /// The food service, backed by the two stores below
    pub service: FoodService<PersonClient, FoodClient>,

    /// Client for registering and looking up people
    pub person_client: PersonClient,

    /// Client for reading the food store directly
    pub food_client: FoodClient,

    /// Task handles for the running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FoodSystem {
    /// Spawns both stores and wires the service. Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (person_actor, person_client) = crate::person_actor::new(config.channel_capacity);
        let (food_actor, food_client) =
            crate::food_actor::new(config.channel_capacity, config.store_capacity);

        let person_handle = tokio::spawn(person_actor.run());
        let food_handle = tokio::spawn(food_actor.run());

        let service = FoodService::new(person_client.clone(), food_client.clone());

        Self {
            service,
            person_client,
            food_client,
            handles: vec![person_handle, food_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops every client, which closes the store mailboxes, then waits for both
    /// store tasks to finish. Clones of the clients held elsewhere keep their store
    /// alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both stores shut down cleanly
    /// - `Err(String)` if a store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.person_client);
        drop(self.food_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
