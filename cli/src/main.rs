mod args;
mod render;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vetclinic_core::presenter;
use vetclinic_core::{
    AnimalsView, ClinicApi, ClinicClient, Notice, NoticeKind, ServicesView, Transport, UreqTransport,
};

use args::{AnimalsCommand, Cli, Command, ServicesCommand};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let client = ClinicClient::new(&cli.client_config());
    let transport = UreqTransport::new();

    let notices = match cli.command {
        Command::Animals(command) => run_animals(command, client, &transport),
        Command::Services(command) => run_services(command, client, &transport),
    };

    let mut failed = false;
    for n in &notices {
        failed |= n.kind == NoticeKind::Error;
        eprintln!("{}", render::notice(n));
    }
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

fn run_animals(command: AnimalsCommand, client: ClinicClient, transport: &UreqTransport) -> Vec<Notice> {
    match command {
        AnimalsCommand::List => {
            let mut view = AnimalsView::new(client);
            view.load(transport);
            print_nonempty(&render::animal_table(view.animals()));
            view.take_notices()
        }
        AnimalsCommand::Add(input) => {
            let mut view = AnimalsView::new(client);
            view.form.set_name(&input.name);
            view.form.set_species(&input.species);
            view.form.set_age_input(&input.age);
            if view.submit_with(transport).is_ok() {
                print_nonempty(&render::animal_table(view.animals()));
            }
            view.take_notices()
        }
        AnimalsCommand::Show { id } => {
            let api = ClinicApi::new(client.clone(), transport);
            let animal = match api.get_animal(id) {
                Ok(animal) => animal,
                Err(err) => {
                    return vec![Notice::error(
                        vetclinic_core::animals_view::DETAILS_FAILED,
                        presenter::describe(&err),
                    )]
                }
            };
            let mut view = AnimalsView::new(client);
            view.show_details_with(transport, animal);
            let details = view.details();
            if details.open {
                if let Some(animal) = &details.animal {
                    println!("{}", render::animal_card(animal));
                }
                println!("\nRecent services:");
                let services = details.recent_services.data().map(Vec::as_slice).unwrap_or_default();
                println!("{}", render::service_list(services, "No services recorded yet."));
            }
            view.take_notices()
        }
    }
}

fn run_services<T: Transport + ?Sized>(command: ServicesCommand, client: ClinicClient, transport: &T) -> Vec<Notice> {
    let mut view = ServicesView::new(client);
    view.load_animals(transport);
    match command {
        ServicesCommand::List { animal_id } => {
            view.select_with(transport, Some(animal_id));
        }
        ServicesCommand::Add(input) => {
            view.select_with(transport, Some(input.animal_id));
            // An unknown animal or unreachable history ends here, before a create.
            if view.services().error().is_some() {
                return view.take_notices();
            }
            view.form.set_kind(&input.kind);
            view.form.set_description(&input.description);
            if view.submit_with(transport).is_err() {
                return view.take_notices();
            }
        }
    }
    if view.services().data().is_some() {
        println!("{}", view.history_caption());
        println!(
            "{}",
            render::service_list(
                &view.sorted_services(),
                "This animal has no services recorded yet.",
            )
        );
    }
    view.take_notices()
}

fn print_nonempty(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}
