//! Background line reader feeding the quiz runner.
//!
//! Blocking line reads happen on a dedicated OS thread so the runner can
//! race the next answer against the quiz deadline. The thread is detached:
//! nothing joins or cancels it. Once the quiz ends it is abandoned, still
//! parked in its read, until the process exits.
//!
//! A tokio stdin handle is not used here because the runtime waits for
//! pending blocking reads on shutdown, which would keep the process alive
//! until the user pressed ENTER one more time.

use std::io::{self, BufRead, BufReader};
use std::thread;

use tokio::sync::mpsc;

use crate::model::normalize;

/// Start reading normalized lines from `source` on a detached thread.
///
/// The channel holds at most one line, so the reader stays at most one
/// line ahead of the runner. It is closed when the source hits end of
/// file or a read error, or when the receiver is dropped.
pub fn spawn_input_reader<R>(source: R) -> io::Result<mpsc::Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);

    thread::Builder::new()
        .name("quizclock-input".into())
        .spawn(move || read_lines(source, tx))?;

    Ok(rx)
}

/// [`spawn_input_reader`] over the process's standard input.
pub fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<String>> {
    spawn_input_reader(BufReader::new(io::stdin()))
}

fn read_lines<R: BufRead>(mut source: R, tx: mpsc::Sender<String>) {
    let mut buf = String::new();
    loop {
        buf.clear();
        match source.read_line(&mut buf) {
            Ok(0) => {
                tracing::debug!("input reached end of file, closing answer channel");
                return;
            }
            Ok(_) => {
                if tx.blocking_send(normalize(&buf)).is_err() {
                    tracing::debug!("answer channel dropped, input reader exiting");
                    return;
                }
            }
            Err(e) => {
                tracing::warn!("failed to read input: {e}");
                return;
            }
        }
    }
}
