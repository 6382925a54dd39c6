// src/main.rs

use fstalk::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("fstalk error: {err:?}");
        std::process::exit(1);
    }

    // Exit explicitly: the watch loop may still be parked in a blocking read.
    match run(args).await {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
