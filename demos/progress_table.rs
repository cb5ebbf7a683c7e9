//! Progress table demo: a ticking table redrawn in place.
//!
//! Run with `RUST_LOG=diffprint=trace` to see per-frame statistics on stderr.

use diffprint::{format_table, DiffPrinter};
use std::thread;
use std::time::Duration;

const JOBS: [&str; 4] = ["fetch index", "下载 packages", "verify 校验", "unpack"];

fn main() {
    env_logger::init();

    let mut printer = DiffPrinter::stdout();
    printer.start();

    for tick in 0..=40 {
        let mut table = vec![vec![
            "job".to_string(),
            "状态".to_string(),
            "progress".to_string(),
        ]];
        let mut done = 0;
        for (idx, job) in JOBS.iter().enumerate() {
            let pct = (tick * (idx + 2) * 2).min(100);
            if pct == 100 {
                done += 1;
                // Finished jobs drop out of the table.
                continue;
            }
            table.push(vec![
                (*job).to_string(),
                "运行中".to_string(),
                format!("[{:<20}] {pct:>3}%", "=".repeat(pct / 5)),
            ]);
        }

        let mut lines = format_table(&table, None);
        lines.push(format!("{done}/{} complete", JOBS.len()));
        printer.set_lines(&lines);

        thread::sleep(Duration::from_millis(100));
    }

    let stats = printer.stats().clone();
    printer.close();
    println!(
        "{} frames, {} rows redrawn, {} skipped, {} bytes",
        stats.frames, stats.rows_redrawn, stats.rows_skipped, stats.bytes_written
    );
}
