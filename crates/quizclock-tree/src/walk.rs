//! Channel-driven tree walks.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::tree::Tree;

/// Send every value of `tree` in order on `tx`, then close the channel.
///
/// Stops early if the receiver has been dropped.
pub async fn walk(tree: Arc<Tree>, tx: mpsc::Sender<i64>) {
    for value in tree.iter() {
        if tx.send(value).await.is_err() {
            tracing::trace!("walk receiver dropped, stopping early");
            return;
        }
    }
    // `tx` drops here, which closes the channel.
}

/// Run [`walk`] on its own task and return the receiving end.
pub fn spawn_walk(tree: Arc<Tree>) -> mpsc::Receiver<i64> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(walk(tree, tx));
    rx
}

/// Whether `t1` and `t2` hold the same in-order sequence of values.
///
/// Both trees are walked concurrently and compared pair by pair; the first
/// mismatch, or one walk ending before the other, decides `false`.
pub async fn same(t1: Arc<Tree>, t2: Arc<Tree>) -> bool {
    let mut rx1 = spawn_walk(t1);
    let mut rx2 = spawn_walk(t2);

    loop {
        match tokio::join!(rx1.recv(), rx2.recv()) {
            (Some(a), Some(b)) if a == b => continue,
            (None, None) => return true,
            (a, b) => {
                tracing::debug!(?a, ?b, "walks diverged");
                return false;
            }
        }
    }
}
