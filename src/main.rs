use std::io::Write;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;
use truthguard_rs::app::{App, AppState, Effect, Event};
use truthguard_rs::config::{ProxyConfig, DEFAULT_PORT, DEFAULT_TIMEOUT_MS, DEFAULT_UPSTREAM_URL};
use truthguard_rs::render::render_result;
use truthguard_rs::{server, Analyzer};

#[derive(Parser)]
#[command(name = "truthguard", version, about = "Demo claim checker and search relay")]
struct Cli {
  #[command(subcommand)]
  cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
  /// Run the search relay (POST /api/search)
  Serve {
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)] port: u16,
    #[arg(long, default_value = "0.0.0.0")] host: String,
    #[arg(long, env = "SERPER_API_KEY", hide_env_values = true)] api_key: Option<String>,
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL)] upstream_url: String,
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)] upstream_timeout_ms: u64,
  },
  /// Analyze one claim and print the result
  Check {
    text: Option<String>,
    /// Use the built-in sample claim
    #[arg(long, conflicts_with = "text")] sample: bool,
    /// Print the full result as JSON
    #[arg(long)] json: bool,
    #[command(flatten)] delay: DelayArg,
  },
  /// Read claims line by line; `:sample` loads the sample, `:quit` exits
  Interactive {
    #[command(flatten)] delay: DelayArg,
  },
}

#[derive(Args)]
struct DelayArg {
  /// Simulated analysis latency
  #[arg(long = "delay-ms", default_value_t = 800)] ms: u64,
}

impl DelayArg {
  fn analyzer(&self) -> Analyzer { Analyzer::new(Duration::from_millis(self.ms)) }
}

fn main() -> Result<()> {
  dotenvy::dotenv().ok();
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  match cli.cmd {
    Cmd::Serve { port, host, api_key, upstream_url, upstream_timeout_ms } => {
      let cfg = ProxyConfig { host, port, api_key, upstream_url, timeout_ms: upstream_timeout_ms };
      tokio::runtime::Runtime::new()?.block_on(server::run_server(cfg))
    }
    // the front end stays on one thread
    Cmd::Check { text, sample, json, delay } => current_thread()?.block_on(check(text, sample, json, delay.analyzer())),
    Cmd::Interactive { delay } => current_thread()?.block_on(interactive(delay.analyzer())),
  }
}

fn current_thread() -> Result<tokio::runtime::Runtime> {
  Ok(tokio::runtime::Builder::new_current_thread().enable_all().build()?)
}

async fn check(text: Option<String>, sample: bool, json: bool, analyzer: Analyzer) -> Result<()> {
  let app = App::new(analyzer);
  let tx = app.sender();
  match text {
    _ if sample => tx.send(Event::LoadSample)?,
    Some(t) if !t.trim().is_empty() => tx.send(Event::Input(t))?,
    _ => bail!("nothing to analyze: pass a claim or --sample"),
  }
  tx.send(Event::Submit)?;

  let state: AppState = app
    .run(|_, effect| if *effect == Effect::Finished { ControlFlow::Break(()) } else { ControlFlow::Continue(()) })
    .await;
  let Some(result) = state.result else { bail!("analysis did not complete") };

  if json {
    println!("{}", serde_json::to_string_pretty(&result)?);
  } else {
    print!("{}", render_result(&result));
  }
  Ok(())
}

async fn interactive(analyzer: Analyzer) -> Result<()> {
  let app = App::new(analyzer);
  let tx = app.sender();
  let ready = Arc::new(Notify::new());

  let reader_ready = ready.clone();
  tokio::spawn(async move {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
      print!("> ");
      let _ = std::io::stdout().flush();
      let line = match lines.next_line().await {
        Ok(Some(line)) => line,
        Ok(None) => { let _ = tx.send(Event::Quit); return; }
        Err(err) => {
          tracing::error!(error = %err, "stdin read failed");
          let _ = tx.send(Event::Quit);
          return;
        }
      };
      let events = match line.trim() {
        ":quit" | ":q" => { let _ = tx.send(Event::Quit); return; }
        ":sample" => vec![Event::LoadSample, Event::Submit],
        _ => vec![Event::Input(line), Event::Submit],
      };
      for ev in events {
        if tx.send(ev).is_err() { return; }
      }
      // one Submit always ends in Finished or Ignored
      reader_ready.notified().await;
    }
  });

  println!("Enter a claim to analyze (:sample, :quit).");
  app.run(|state, effect| {
    match effect {
      Effect::Started(text) => println!("Analyzing: {text}"),
      Effect::Finished => {
        if let Some(result) = &state.result { print!("{}", render_result(result)); }
        ready.notify_one();
      }
      Effect::Ignored => ready.notify_one(),
      Effect::Edited | Effect::Exit => {}
    }
    ControlFlow::Continue(())
  }).await;
  Ok(())
}
