use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::debug_span;

use crate::readings::ReadingProvider;

use super::{AlignOutcome, Aligner};

/// Align many `(surface, reading)` pairs on a fixed pool of worker threads.
///
/// Each worker pulls the next unclaimed index, so long and short tokens
/// balance out. Results come back in input order. `workers` is clamped to
/// `1..=items.len()`.
pub fn align_batch<P, S, R>(
    aligner: &Aligner<'_, P>,
    items: &[(S, R)],
    workers: usize,
) -> io::Result<Vec<AlignOutcome>>
where
    P: ReadingProvider + ?Sized,
    S: AsRef<str> + Sync,
    R: AsRef<str> + Sync,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let workers = workers.clamp(1, items.len());
    let _span = debug_span!("align_batch", items = items.len(), workers).entered();

    let next = AtomicUsize::new(0);
    let (result_tx, result_rx) = mpsc::channel::<(usize, AlignOutcome)>();

    thread::scope(|scope| -> io::Result<()> {
        for id in 0..workers {
            let result_tx = result_tx.clone();
            let next = &next;
            thread::Builder::new()
                .name(format!("furi-align-{id}"))
                .spawn_scoped(scope, move || loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let Some((surface, reading)) = items.get(i) else {
                        break;
                    };
                    let outcome = aligner.align(surface.as_ref(), reading.as_ref());
                    if result_tx.send((i, outcome)).is_err() {
                        break;
                    }
                })?;
        }
        Ok(())
    })?;
    drop(result_tx);

    let mut slots: Vec<Option<AlignOutcome>> = vec![None; items.len()];
    for (i, outcome) in result_rx {
        slots[i] = Some(outcome);
    }
    Ok(slots.into_iter().flatten().collect())
}
