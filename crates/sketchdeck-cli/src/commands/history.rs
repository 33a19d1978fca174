use clap::Subcommand;
use sketchdeck_core::{HistoryDb, HistoryRecorder};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List past sessions, newest first
    List {
        /// Print the full records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one session as JSON
    Show {
        /// Session ID
        id: String,
    },
    /// Delete a session
    Delete {
        /// Session ID
        id: String,
    },
    /// Rename a session
    Rename {
        /// Session ID
        id: String,
        /// New display name
        name: String,
    },
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = HistoryDb::open()?;

    match action {
        HistoryAction::List { json } => {
            let sessions = db.load_history()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else if sessions.is_empty() {
                println!("no sessions recorded");
            } else {
                for s in &sessions {
                    println!(
                        "{}  {}  {} images  {}s/{}s  {}",
                        s.id,
                        s.created_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                        s.image_count,
                        s.interval_sec,
                        s.rest_sec,
                        s.name,
                    );
                }
            }
        }
        HistoryAction::Show { id } => {
            let session = db.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        HistoryAction::Delete { id } => {
            db.delete_history(&id)?;
            println!("deleted {id}");
        }
        HistoryAction::Rename { id, name } => {
            db.update_history_name(&id, &name)?;
            println!("renamed {id}");
        }
    }
    Ok(())
}
