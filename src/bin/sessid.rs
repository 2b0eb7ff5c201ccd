use sessid::cli::{self, Command};

fn main() {
    // Install global collector configured based on SESSID_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("SESSID_LOG"))
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_thread_ids(true)
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .on_thread_start(|| tracing::trace!("thread start"))
        .on_thread_stop(|| tracing::trace!("thread stop"))
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        run().await;
    })
}

async fn run() {
    if let Err(err) = run_inner().await {
        eprintln!("{}", err);
        std::process::exit(1);
    };
}

async fn run_inner() -> sessid::Result<()> {
    let cmd = cli::parse();
    match cmd.command {
        Command::Whoami(whoami) => whoami.run().await,
    }
}
