use vtpacks::install::{AlwaysYes, Confirm, PackwizRefresh, RefreshRunner, SkipRefresh, StdinConfirm};
use vtpacks::{app, cli};

fn print_version() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("version") | Some("--version") | Some("-V") => {
            print_version();
            return;
        }
        Some("help") | Some("--help") | Some("-h") => {
            cli::print_help();
            return;
        }
        _ => {}
    }

    let parsed = match cli::parse_cli(&args[1..]) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("vtpacks: {e}");
            std::process::exit(2);
        }
    };

    let confirm: &dyn Confirm = if parsed.assume_yes {
        &AlwaysYes
    } else {
        &StdinConfirm
    };
    let refresh: &dyn RefreshRunner = if parsed.no_refresh {
        &SkipRefresh
    } else {
        &PackwizRefresh
    };

    if let Err(e) = app::run(&parsed.config, confirm, refresh).await {
        eprintln!("vtpacks: {e}");
        std::process::exit(1);
    }
}
