use clap::Parser;
use color_eyre::eyre::Result;
use items_daemon::console::{
    parse_command, render_edit, render_items, Command, ConsoleState, ItemsApi, ItemsClient,
    DEFAULT_BASE_URL,
};
use items_daemon::logging::init_console_logging;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Level;

/// Items Console - interactive client for the items API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ConsoleArgs {
    /// Base URL of the items API (e.g. http://127.0.0.1:3000 or http://localhost:9002/api)
    #[arg(long, env = "ITEMS_CONSOLE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log diagnostics at debug level instead of warn
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn show(state: &ConsoleState) {
    print!("{}", render_items(state));
    if let Some(edit) = render_edit(state) {
        print!("{edit}");
    }
}

/// Apply one command. Returns false when the console should exit.
async fn dispatch(state: &mut ConsoleState, api: &dyn ItemsApi, command: Command) -> bool {
    match command {
        Command::List => {
            state.load(api).await;
            show(state);
        }
        Command::Add { name, description } => {
            state.new_item.name = name;
            state.new_item.description = description;
            if !state.create(api).await {
                println!("Create failed; the form still holds your input.");
            }
            show(state);
        }
        Command::Edit { id } => {
            if state.begin_edit(&id) {
                show(state);
            } else {
                println!("No item with id {id} in the current list.");
            }
        }
        Command::Name(name) => {
            state.set_edit_name(name);
            show(state);
        }
        Command::Desc(description) => {
            state.set_edit_description(description);
            show(state);
        }
        Command::Save => {
            if state.editing().is_none() {
                println!("Nothing to save; use 'edit <id>' first.");
            } else if !state.update(api).await {
                println!("Update failed; the edit view is still open.");
            }
            show(state);
        }
        Command::Cancel => {
            state.cancel_edit();
            show(state);
        }
        Command::Remove { id } => {
            if !state.delete(api, &id).await {
                println!("Delete failed; the list was restored.");
            }
            show(state);
        }
        Command::Help => println!("{}", items_daemon::console::command::HELP),
        Command::Quit => return false,
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = ConsoleArgs::parse();
    init_console_logging(if args.verbose { Level::DEBUG } else { Level::WARN })?;

    let client = ItemsClient::new(&args.base_url)?;
    let mut state = ConsoleState::new();

    println!("Items console connected to {}", client.base_url());
    show(&state);
    state.load(&client).await;
    show(&state);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(command) => {
                if !dispatch(&mut state, &client, command).await {
                    break;
                }
            }
            Err(msg) => println!("{msg}"),
        }
    }
    Ok(())
}
