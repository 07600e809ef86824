use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
#[cfg(target_family = "windows")]
use colored::control::set_virtual_terminal;
use colored::Colorize;
use heroes::components::{Dashboard, HeroDetail, HeroSearch, HeroesView};
use heroes::routes::{History, Route};
use heroes::{
    Config, Hero, HeroService, MessageService, MessagesView, NewHero, ReqwestTransport,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "heroes", about = "Browse and edit the hero list")]
struct Cli {
    /// Heroes collection endpoint
    #[arg(long, env = "HEROES_API_BASE", default_value = heroes::api::DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds
    #[arg(long, env = "HEROES_TIMEOUT_SECS", default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all heroes
    List,
    /// Show one hero
    Get { id: u32 },
    /// Create a hero
    Add { name: String },
    /// Rename a hero
    Update { id: u32, name: String },
    /// Delete a hero
    Delete { id: u32 },
    /// Search heroes by name
    Search { term: String },
    /// Show the top heroes
    Dashboard,
    /// Open a page by path, e.g. /detail/12
    Open {
        path: String,
        /// New name to save on a detail page
        #[arg(long)]
        rename: Option<String>,
    },
}

fn print_heroes(heroes: &[Hero]) {
    for hero in heroes {
        println!("{:>4} {}", hero.id.to_string().yellow(), hero.name);
    }
}

#[tokio::main]
async fn main() -> heroes::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    #[cfg(target_family = "windows")]
    {
        if set_virtual_terminal(true).is_err() {
            eprintln!("failed to print colorfully.")
        };
    }

    let cli = Cli::parse();
    let config = Config {
        timeout: Duration::from_secs(cli.timeout),
        ..Config::default()
    }
    .with_api_base(cli.api_base);

    let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
    let messages = MessageService::new();
    let service = HeroService::new(transport, messages.clone(), &config);

    match cli.command {
        Command::List => print_heroes(&service.get_heroes().await),
        Command::Get { id } => {
            if let Some(hero) = service.get_hero(id).await {
                print_heroes(&[hero]);
            }
        }
        Command::Add { name } => {
            if let Some(hero) = service.add_hero(&NewHero::new(name.trim())).await {
                print_heroes(&[hero]);
            }
        }
        Command::Update { id, name } => {
            service.update_hero(&Hero { id, name }).await;
        }
        Command::Delete { id } => {
            service.delete_hero(id).await;
        }
        Command::Search { term } => {
            let mut search = HeroSearch::spawn(service.clone(), config.search_debounce);
            search.search(term);
            if let Some(heroes) = search.changed().await {
                print_heroes(&heroes);
            }
            search.close().await;
        }
        Command::Dashboard => open(&service, Route::Dashboard, None).await,
        Command::Open { path, rename } => match Route::parse(&path) {
            Some(route) if rename.is_some() && !route.accepts_edits() => {
                eprintln!("{}", format!("--rename only applies to /detail/<id>, not {path}").red())
            }
            Some(route) => open(&service, route, rename).await,
            None => eprintln!("{}", format!("no page at {path}").red()),
        },
    }

    for line in MessagesView::new(messages).render().lines() {
        let line = if line.contains(" failed: ") || line.starts_with("HeroDetail: ") {
            line.red()
        } else if line.starts_with("HeroService: ") {
            line.green()
        } else {
            line.bold()
        };
        println!("{line}");
    }

    Ok(())
}

async fn open(service: &HeroService, route: Route, rename: Option<String>) {
    let history = Arc::new(History::new());
    history.navigate(route.path());
    match route {
        Route::Dashboard => {
            let mut dashboard = Dashboard::new(service.clone());
            dashboard.load().await;
            print!("{}", dashboard.render());
        }
        Route::Heroes => {
            let mut view = HeroesView::new(service.clone());
            view.load().await;
            print!("{}", view.render());
        }
        Route::Detail(params) => {
            let mut detail = HeroDetail::new(service.clone(), params, history.clone());
            detail.init().await;
            if let Some(name) = rename {
                detail.set_name(name);
                detail.save().await;
            }
            print!("{}", detail.render());
        }
    }
}
