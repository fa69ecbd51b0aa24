use clap::{Args, Parser, Subcommand};
use vetclinic_core::ClientConfig;

/// Register animals and record their services at the clinic.
#[derive(Debug, Parser)]
#[command(name = "vetclinic", version)]
pub struct Cli {
    /// Origin of the clinic API. Without it, VETCLINIC_API_URL is read,
    /// then http://localhost:8000 is used.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log requests and dropped responses.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The flag wins over the environment.
    pub fn client_config(&self) -> ClientConfig {
        self.base_url
            .as_deref()
            .map(ClientConfig::new)
            .unwrap_or_else(ClientConfig::from_env)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Registered animals.
    #[command(subcommand)]
    Animals(AnimalsCommand),

    /// Service history.
    #[command(subcommand)]
    Services(ServicesCommand),
}

#[derive(Debug, Subcommand)]
pub enum AnimalsCommand {
    /// List every registered animal.
    List,
    /// Register a new animal.
    Add(AddAnimal),
    /// Show one animal with its three most recent services.
    Show { id: i64 },
}

#[derive(Debug, Args)]
pub struct AddAnimal {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub species: String,
    /// Age in years; anything that is not a number counts as 0.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub age: String,
}

#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// Full service history for an animal, newest first.
    List { animal_id: i64 },
    /// Record a service for an animal.
    Add(AddService),
}

#[derive(Debug, Args)]
pub struct AddService {
    pub animal_id: i64,
    #[arg(long = "type", default_value = "")]
    pub kind: String,
    #[arg(long, default_value = "")]
    pub description: String,
}
