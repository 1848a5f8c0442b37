use std::sync::Arc;

use clap::Parser;
use techguess::session::{Advance, GameController, GameSession, QuizApi, SessionError};
use techguess::HttpQuizApi;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "techguess-play")]
#[command(about = "Play TechGuess in the terminal")]
struct Args {
    /// Server root URL
    #[arg(short, long, default_value = "http://localhost:3000")]
    server: String,

    /// Player name; prompted for when omitted
    #[arg(short, long)]
    player: Option<String>,
}

type Input = Lines<BufReader<Stdin>>;

async fn prompt(lines: &mut Input, text: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    lines.next_line().await
}

async fn play(
    controller: &GameController,
    session: &mut GameSession,
    lines: &mut Input,
) -> Result<(), SessionError> {
    loop {
        match controller.advance(session).await? {
            Advance::Reveal { index, image } => {
                let total = session.total_count().unwrap_or(0);
                println!(
                    "\n[{}/{}] Which technology has this logo? {image}",
                    index + 1,
                    total
                );

                let guess = match prompt(lines, "> ").await {
                    Ok(Some(line)) => line,
                    Ok(None) => return Ok(()),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read guess");
                        return Ok(());
                    }
                };

                let verdict = controller.submit_guess(session, &guess).await?;
                if verdict.is_correct {
                    println!("✅ Correct! It was {}.", verdict.technology_name);
                } else {
                    println!("❌ Wrong, it was {}.", verdict.technology_name);
                }
            }
            Advance::Finished { .. } => {
                println!(
                    "\n🏁 Game over, {}. Score: {}",
                    session.player_name(),
                    session.display_score()
                );
                return Ok(());
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("techguess=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let args = Args::parse();
    let mut lines = BufReader::new(io::stdin()).lines();

    let player = match args.player {
        Some(name) => name,
        None => match prompt(&mut lines, "Your name: ").await {
            Ok(line) => line.unwrap_or_default(),
            Err(e) => {
                eprintln!("❌ Failed to read player name: {e}");
                std::process::exit(1);
            }
        },
    };

    let api: Arc<dyn QuizApi> = match HttpQuizApi::new(&args.server) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let controller = GameController::new(api);
    let mut session = GameSession::new(&player);

    println!("👋 Welcome, {}!", session.player_name());

    if let Err(e) = play(&controller, &mut session, &mut lines).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
