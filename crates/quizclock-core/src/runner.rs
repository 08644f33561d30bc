//! Timed quiz runner.
//!
//! Presents problems one at a time and races each answer against a single
//! deadline that starts once, after the start gate. The deadline is global:
//! time spent on one problem is gone for the rest.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use crate::model::ProblemSet;

/// Where the runner is in a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the user to press ENTER.
    WaitingToStart,
    /// Showing problem `i` and waiting for an answer or the deadline.
    Presenting(usize),
    /// Every problem was answered before the deadline.
    Finished,
    /// The deadline elapsed first; remaining problems were abandoned.
    TimedOut,
}

impl QuizPhase {
    /// The phase that follows answering problem `idx` of `total`.
    fn after(idx: usize, total: usize) -> Self {
        if idx + 1 < total {
            QuizPhase::Presenting(idx + 1)
        } else {
            QuizPhase::Finished
        }
    }

    /// The phase entered once the start gate opens.
    fn first(total: usize) -> Self {
        if total == 0 {
            QuizPhase::Finished
        } else {
            QuizPhase::Presenting(0)
        }
    }
}

/// Running tally for one quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct QuizState {
    /// Problems answered (right or wrong).
    attempted: usize,
    /// Problems answered correctly.
    correct: usize,
}

impl QuizState {
    fn record(&mut self, correct: bool) {
        self.attempted += 1;
        if correct {
            self.correct += 1;
        }
    }
}

/// Result of a completed quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct: usize,
    pub attempted: usize,
    pub total: usize,
    /// Either [`QuizPhase::Finished`] or [`QuizPhase::TimedOut`].
    pub phase: QuizPhase,
}

impl QuizOutcome {
    pub fn timed_out(&self) -> bool {
        self.phase == QuizPhase::TimedOut
    }
}

impl fmt::Display for QuizOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You got {} out of {} correct answers.",
            self.correct, self.total
        )
    }
}

/// Drives a quiz over a problem set, writing prompts to `out`.
pub struct QuizRunner<W> {
    out: W,
    time_limit: Duration,
}

impl<W: Write> QuizRunner<W> {
    pub fn new(out: W, time_limit: Duration) -> Self {
        Self { out, time_limit }
    }

    /// Consume the runner, returning the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run the quiz to completion or timeout.
    ///
    /// A closed `answers` channel reads as an empty line, so a quiz fed from
    /// an exhausted input still walks through every problem.
    pub async fn run(
        &mut self,
        problems: &ProblemSet,
        answers: &mut mpsc::Receiver<String>,
    ) -> io::Result<QuizOutcome> {
        let total = problems.len();
        let mut state = QuizState::default();
        let mut phase = QuizPhase::WaitingToStart;
        tracing::debug!(?phase, total, "quiz ready");

        writeln!(self.out, "Press ENTER to start.")?;
        self.out.flush()?;
        let _ = answers.recv().await;

        let deadline = time::sleep(self.time_limit);
        tokio::pin!(deadline);
        tracing::debug!("deadline started: {:?}", self.time_limit);

        phase = QuizPhase::first(total);
        while let QuizPhase::Presenting(idx) = phase {
            let problem = &problems[idx];
            write!(self.out, "\n{} ", problem.prompt)?;
            self.out.flush()?;

            tokio::select! {
                line = answers.recv() => {
                    let line = line.unwrap_or_default();
                    state.record(problem.check(&line));
                    phase = QuizPhase::after(idx, total);
                }
                () = &mut deadline => {
                    writeln!(self.out, "\n\nTime's up!")?;
                    self.out.flush()?;
                    phase = QuizPhase::TimedOut;
                }
            }
            tracing::debug!(?phase, correct = state.correct, "quiz advanced");
        }

        Ok(QuizOutcome {
            correct: state.correct,
            attempted: state.attempted,
            total,
            phase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Problem;

    fn problems(rows: &[(&str, &str)]) -> ProblemSet {
        rows.iter().map(|(q, a)| Problem::new(q, a)).collect()
    }

    fn output(runner: QuizRunner<Vec<u8>>) -> String {
        String::from_utf8(runner.into_inner()).unwrap()
    }

    async fn feed(tx: &mpsc::Sender<String>, lines: &[&str]) {
        for line in lines {
            tx.send(crate::model::normalize(line)).await.unwrap();
        }
    }

    #[tokio::test]
    async fn empty_quiz_scores_zero_of_zero() {
        let (tx, mut rx) = mpsc::channel(1);
        tx.send(String::new()).await.unwrap();

        let mut runner = QuizRunner::new(Vec::new(), Duration::from_secs(30));
        let outcome = runner.run(&ProblemSet::default(), &mut rx).await.unwrap();

        assert_eq!(outcome.correct, 0);
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.attempted, 0);
        assert_eq!(outcome.phase, QuizPhase::Finished);
        assert_eq!(output(runner), "Press ENTER to start.\n");
    }

    #[tokio::test]
    async fn answers_are_matched_case_insensitively() {
        let set = problems(&[("Capital of France?", "Paris"), ("2+2", "4")]);
        let (tx, mut rx) = mpsc::channel(1);
        let feeder = tokio::spawn(async move {
            feed(&tx, &["", "  PARIS ", "4"]).await;
            tx
        });

        let mut runner = QuizRunner::new(Vec::new(), Duration::from_secs(30));
        let outcome = runner.run(&set, &mut rx).await.unwrap();
        let _tx = feeder.await.unwrap();

        assert_eq!(outcome.correct, 2);
        assert_eq!(outcome.attempted, 2);
        assert!(!outcome.timed_out());
        assert_eq!(outcome.to_string(), "You got 2 out of 2 correct answers.");

        let out = output(runner);
        assert!(out.contains("\nCapital of France? "));
        assert!(out.contains("\n2+2 "));
        assert!(!out.contains("Time's up!"));
    }

    #[tokio::test]
    async fn wrong_answers_still_advance() {
        let set = problems(&[("5+5", "10"), ("1+1", "2"), ("3+3", "6")]);
        let (tx, mut rx) = mpsc::channel(1);
        let feeder = tokio::spawn(async move {
            feed(&tx, &["", "11", "2", "seven"]).await;
            tx
        });

        let mut runner = QuizRunner::new(Vec::new(), Duration::from_secs(30));
        let outcome = runner.run(&set, &mut rx).await.unwrap();
        let _tx = feeder.await.unwrap();

        assert_eq!(outcome.correct, 1);
        assert_eq!(outcome.attempted, 3);
        assert_eq!(outcome.phase, QuizPhase::Finished);
    }

    #[tokio::test]
    async fn closed_input_counts_as_empty_answers() {
        let set = problems(&[("blank", ""), ("5+5", "10")]);
        let (tx, mut rx) = mpsc::channel::<String>(1);
        drop(tx);

        let mut runner = QuizRunner::new(Vec::new(), Duration::from_secs(30));
        let outcome = runner.run(&set, &mut rx).await.unwrap();

        assert_eq!(outcome.correct, 1);
        assert_eq!(outcome.attempted, 2);
        assert_eq!(outcome.phase, QuizPhase::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_stops_quiz_with_partial_score() {
        let set = problems(&[("5+5", "10"), ("1+1", "2"), ("3+3", "6")]);
        let (tx, mut rx) = mpsc::channel(1);
        // Start, answer the first problem, then go quiet with the channel open.
        let feeder = tokio::spawn(async move {
            feed(&tx, &["", "10"]).await;
            tx
        });

        let mut runner = QuizRunner::new(Vec::new(), Duration::from_secs(30));
        let outcome = runner.run(&set, &mut rx).await.unwrap();
        let _tx = feeder.await.unwrap();

        assert_eq!(outcome.correct, 1);
        assert_eq!(outcome.attempted, 1);
        assert_eq!(outcome.total, 3);
        assert!(outcome.timed_out());

        let out = output(runner);
        assert!(out.contains("\n1+1 "));
        assert!(!out.contains("3+3"));
        assert!(out.ends_with("\n\nTime's up!\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_is_not_reset_per_problem() {
        let set = problems(&[("q1", "a"), ("q2", "b"), ("q3", "c")]);
        let (tx, mut rx) = mpsc::channel(1);
        let feeder = tokio::spawn(async move {
            tx.send(String::new()).await.unwrap();
            // 20s on the first problem and 20s on the second overruns 30s.
            time::sleep(Duration::from_secs(20)).await;
            tx.send("a".into()).await.unwrap();
            time::sleep(Duration::from_secs(20)).await;
            let _ = tx.send("b".into()).await;
            tx
        });

        let mut runner = QuizRunner::new(Vec::new(), Duration::from_secs(30));
        let outcome = runner.run(&set, &mut rx).await.unwrap();
        drop(rx);
        let _tx = feeder.await.unwrap();

        assert_eq!(outcome.correct, 1);
        assert!(outcome.timed_out());
        assert!(!output(runner).contains("q3"));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_starts_after_start_gate() {
        let set = problems(&[("q1", "a")]);
        let (tx, mut rx) = mpsc::channel(1);
        let feeder = tokio::spawn(async move {
            // Dawdling before ENTER does not eat into the time limit.
            time::sleep(Duration::from_secs(60)).await;
            tx.send(String::new()).await.unwrap();
            time::sleep(Duration::from_secs(5)).await;
            tx.send("A".into()).await.unwrap();
            tx
        });

        let mut runner = QuizRunner::new(Vec::new(), Duration::from_secs(10));
        let outcome = runner.run(&set, &mut rx).await.unwrap();
        let _tx = feeder.await.unwrap();

        assert_eq!(outcome.correct, 1);
        assert_eq!(outcome.phase, QuizPhase::Finished);
    }

    #[test]
    fn phase_transitions() {
        assert_eq!(QuizPhase::first(0), QuizPhase::Finished);
        assert_eq!(QuizPhase::first(3), QuizPhase::Presenting(0));
        assert_eq!(QuizPhase::after(0, 3), QuizPhase::Presenting(1));
        assert_eq!(QuizPhase::after(2, 3), QuizPhase::Finished);
    }
}
