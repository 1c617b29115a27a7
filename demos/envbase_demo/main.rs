//! # envbase demo application
//!
//! A sample operational tool that showcases how to integrate
//! [envbase](https://docs.rs/envbase) into a deployment workflow. This is
//! **not** a real app — it exists purely to demonstrate and manually verify
//! envbase's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example envbase_demo -- echo
//! cargo run --example envbase_demo -- env list
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature            | How to exercise it                                              |
//! |--------------------|------------------------------------------------------------------|
//! | Compiled defaults  | `cargo run --example envbase_demo -- echo` (no `env.json` in cwd) |
//! | Injected document  | Create `env.json` in cwd, then run `echo`                        |
//! | Accessor fallbacks | Put `{"finex": true}` in `env.json` and compare `echo` output    |
//! | Strict mode        | Add an unknown key to `env.json`, run with `--strict`            |
//! | `env gen`          | `cargo run --example envbase_demo -- env gen -o env.json`        |
//! | `env get`          | `cargo run --example envbase_demo -- env get api.authzURL`       |
//! | `env list`         | `cargo run --example envbase_demo -- env list`                   |

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use envbase::{EnvArgs, Platform, PlatformBuilder};

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// envbase demo — a sample deployment tool for showcasing envbase integration.
#[derive(Parser, Debug)]
#[command(name = "envbase-demo")]
struct Cli {
    /// Path to the deployment's injected environment document.
    #[arg(long, global = true, default_value = "env.json")]
    env_file: PathBuf,

    /// Fail on unknown document keys instead of logging and dropping them.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a typed summary of the resolved platform.
    Echo,
    /// Inspect the environment document (list, get, gen).
    Env(EnvArgs),
}

// ---------------------------------------------------------------------------
// Builder helper
// ---------------------------------------------------------------------------

/// Create a [`PlatformBuilder`] wired up for the demo app.
///
/// Document source: the `--env-file` path (default `env.json` in cwd). A
/// missing file is not an error — the demo then runs on compiled defaults,
/// exactly like a deployment that injects nothing.
fn make_builder(cli: &Cli) -> PlatformBuilder {
    Platform::builder()
        .env_file(&cli.env_file)
        .strict(cli.strict)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Print the resolved platform through the typed accessors, grouped the way
/// an application consumes them. Unlike `env list` (all strings, wire keys),
/// this shows the post-parse types: numbers as numbers, flags as bools.
fn echo(platform: &Platform) {
    println!("endpoints:");
    println!("  authz        {}", platform.authz_url());
    println!("  switch       {}", platform.switch_url());
    println!("  transaction  {}", platform.transaction_url());
    println!("  ieo          {}", platform.ieo_url());
    println!("  downstream   {}", platform.downstream_url());

    println!("timers:");
    println!(
        "  auto-logout       {} min",
        platform.minutes_until_auto_logout()
    );
    println!("  alert display     {} ms", platform.ms_alert_display_time());
    println!(
        "  session check     {} ms",
        platform.session_check_interval()
    );
    println!(
        "  balances fetch    {} ms",
        platform.balances_fetch_interval()
    );
    println!(
        "  ranger reconnect  {} s",
        platform.ranger_reconnect_period()
    );

    println!("limits:");
    println!("  storage entries  {}", platform.default_storage_limit());
    println!("  order book side  {}", platform.order_book_side_limit());
    println!("  entropy step     {}", platform.password_entropy_step());

    println!("flags:");
    println!("  withCredentials       {}", platform.with_credentials());
    println!("  incrementalOrderBook  {}", platform.incremental_order_book());
    println!("  resizable grid        {}", platform.is_resizable_grid());
    println!("  draggable grid        {}", platform.is_draggable_grid());
    println!("  finex                 {}", platform.is_finex_enabled());
    println!("  landing               {}", platform.show_landing());
    println!("  sentry                {}", platform.sentry_enabled());
    println!("  username sign-up      {}", platform.is_username_enabled());

    println!("locale:");
    println!("  languages  {}", platform.languages().join(", "));
    println!("  kyc steps  {}", platform.kyc_steps().join(" -> "));

    let ga = platform.ga_tracker_key();
    if !ga.is_empty() {
        println!("analytics:");
        println!("  ga tracker  {ga}");
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();
    let builder = make_builder(&cli);

    match cli.command {
        Commands::Echo => {
            let platform = builder.load().unwrap_or_else(|e| {
                eprintln!("Failed to load environment:\n{e}");
                std::process::exit(1);
            });
            echo(&platform);
        }
        Commands::Env(args) => {
            let action = args.into_action();
            builder.handle_and_print(&action).unwrap_or_else(|e| {
                eprintln!("Environment error:\n{e}");
                std::process::exit(1);
            });
        }
    }
}
