// Entry point: loads the snapshot, picks a screen, runs the TUI
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs look for related crates there and examples on each of them.

use std::env;
use std::process;

use derma::snapshot;
use derma::ui::{self, App, ListModel, WizardModel};

fn print_help() {
    println!("derma - terminal viewer for clinic records and the skin quiz");
    println!();
    println!("Usage:");
    println!("  derma <snapshot.json> [screen]");
    println!();
    println!("Screens:");
    println!("  professionals    Searchable list of practitioner accounts (default).");
    println!("  clients          Searchable list of client accounts (admin actions).");
    println!("  my-clients       A professional's client roster with quiz and care actions.");
    println!("  quiz             Step through the skin questionnaire and print the answers.");
    println!();
    println!("Options:");
    println!("  --help           Show this help message.");
    println!();
    println!("Description:");
    println!(
        "  The snapshot is a JSON export holding practitioner records, client records, and the questionnaire. Lists are filtered live as you type and paginated in fives; the quiz prints its q0..qN answer fields on stdout after a complete submission."
    );
}

fn build_app(snapshot: snapshot::Snapshot, screen: &str) -> Result<App, String> {
    match screen {
        "professionals" => Ok(App::List(ListModel::new(
            ui::ListConfig::practitioners(),
            snapshot.practitioners,
        ))),
        "clients" => Ok(App::List(ListModel::new(
            ui::ListConfig::clients_admin(),
            snapshot.clients,
        ))),
        "my-clients" => Ok(App::List(ListModel::new(
            ui::ListConfig::clients_dashboard(),
            snapshot.clients,
        ))),
        "quiz" => Ok(App::Wizard(WizardModel::new(snapshot.questions))),
        other => Err(format!(
            "unknown screen `{other}` (expected professionals, clients, my-clients, or quiz)"
        )),
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_help();
        return;
    }

    let path = &args[0];
    let screen = args.get(1).map(String::as_str).unwrap_or("professionals");

    let snapshot = match snapshot::load_file(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    let app = match build_app(snapshot, screen) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    match ui::run(app).await {
        Ok(final_app) => {
            // a completed quiz prints its serialized form fields
            if let Some(fields) = final_app.submission() {
                for (name, value) in fields {
                    println!("{name}={value}");
                }
            }
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
