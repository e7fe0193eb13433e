use std::sync::Arc;

use dragboard::command::Command;
use dragboard::engine::Action;
use dragboard::notify::Notifier;
use dragboard::store::{CardStore, InMemoryCardStore, PgCardStore};
use dragboard::{ActorId, Board, BoardConfig, BoardError, db, seed};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid board configuration");
            std::process::exit(2);
        }
    };

    let store: Arc<dyn CardStore> = match &config.database_url {
        Some(url) => match db::init_pool(url, config.db_max_connections).await {
            Ok(pool) => Arc::new(PgCardStore::new(pool)),
            Err(e) => {
                tracing::error!(error = %e, "database init failed");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set; using the in-memory sample board");
            Arc::new(InMemoryCardStore::with_cards(seed::sample_cards()))
        }
    };

    // Stand-in for the UI toast area.
    let (notifier, mut notices) = Notifier::channel(config.notify_queue_capacity);
    let _notices = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            tracing::warn!(code = notice.code, blocking = notice.blocking, "{}", notice.message);
        }
    });

    let mut board = Board::new(&config, store, notifier);
    if board.load().await.is_err() {
        tracing::warn!("continuing with an empty board");
    }
    print_board(&board);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        if matches!(command, Command::Quit) {
            break;
        }

        match run(&mut board, command) {
            Ok(true) => print_board(&board),
            Ok(false) => {}
            Err(e) => board.notifier().report(&e),
        }
    }

    let outcomes = board.settle().await;
    let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    tracing::info!(writes = outcomes.len(), failed, "in-flight writes settled");
}

/// Execute one command. Returns whether the board should be redrawn.
fn run(board: &mut Board, command: Command) -> Result<bool, BoardError> {
    let actions = match command {
        Command::List => return Ok(true),
        Command::Add(column) => {
            let id = board.create_card(&column)?;
            println!("created {id}");
            return Ok(true);
        }
        Command::Delete(id) => board.delete_card(&id)?,
        Command::Status(id, column) => board.set_status(&id, &column)?,
        Command::Label(id, text) => {
            let Some(mut card) = board.card(&id).cloned() else {
                return Err(BoardError::CardNotFound(id));
            };
            if !card.fields.add_label(&text) {
                return Ok(false);
            }
            board.edit_card(card)?
        }
        Command::Login(name) => {
            board.sign_in(ActorId::new(name));
            return Ok(false);
        }
        Command::Logout => {
            board.sign_out();
            return Ok(false);
        }
        Command::Drag(id) => board.drag_start(&id)?,
        Command::Over(target) => board.drag_over(&target),
        Command::Drop => board.drag_end(),
        Command::Cancel => board.drag_cancel(),
        Command::Quit => Vec::new(),
    };
    Ok(actions.contains(&Action::RenderNeeded) || actions.contains(&Action::OverlayCleared))
}

fn print_board(board: &Board) {
    let active = board.active_card().map(|card| card.id().clone());
    for view in board.column_views() {
        println!("{} ({} products)", view.column.title, view.count());
        for card in &view.cards {
            let marker = if active.as_ref() == Some(card.id()) { '*' } else { ' ' };
            println!(" {marker} [{}] {} {} {:?}", card.id(), card.fields.logo, card.fields.name, card.fields.labels);
        }
    }
}
