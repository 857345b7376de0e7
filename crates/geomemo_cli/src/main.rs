//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `geomemo_core` linkage without any UI runtime.
//! - Drive one simulated session against an in-memory store and print the
//!   derived views.

use geomemo_core::db::open_db_in_memory;
use geomemo_core::{
    core_version, now_epoch_ms, ping, Coordinate, LocationTracker, NoteService,
    SqliteNoteRepository,
};
use std::error::Error;
use std::process::ExitCode;

const SAMPLE_NOTES: [(&str, f64, f64); 3] = [
    ("Morning coffee by the river #coffee #Thames", 51.50500, -0.09000),
    ("Street musician playing jazz #music #thames", 51.50503, -0.09004),
    ("Quiet bench in the park #parks #Coffee", 51.50800, -0.08000),
];

fn main() -> ExitCode {
    println!("geomemo_core ping={}", ping());
    println!("geomemo_core version={}", core_version());

    match run_probe() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_probe() -> Result<(), Box<dyn Error>> {
    let mut conn = open_db_in_memory()?;
    let repo = SqliteNoteRepository::try_new(&mut conn)?;
    let mut service = NoteService::new(repo);
    let mut tracker = LocationTracker::new();

    tracker.enter_simulation(None);
    for (text, lat, lng) in SAMPLE_NOTES {
        tracker.set_simulated_position(Coordinate::new(lat, lng));
        service.add_note_here(text, None, &tracker)?;
    }

    tracker.set_simulated_position(Coordinate::new(51.50501, -0.09001));
    let now = now_epoch_ms();
    let nearby = service.nearby(&tracker, now);
    println!("nearby count={}", nearby.len());
    for view in &nearby {
        println!(
            "  [{}] {} ({})",
            view.distance_label.as_deref().unwrap_or("--"),
            view.note.text,
            view.relative_time
        );
    }
    println!("trending={}", service.trending().join(" "));

    tracker.exit_simulation();
    println!("active_after_exit={:?}", tracker.active_location());
    Ok(())
}
