//! Spreading the search over worker threads
//!
//! Each top level candidate is an independent task. Tasks go to the workers
//! through a bounded queue, and each task's lines come back through a second
//! bounded queue. Everything the workers read is built before the first task
//! is sent and is never written again, so nothing is locked.

use crate::prelude::*;
use crate::search::{Base, Search};
use crossbeam::channel::{bounded, Receiver, Select, Sender};

/// One top level branch : a single word, and the words that may follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task<'a> {
    /// the first word
    pub base: Base<'a>,
    /// candidates strictly after the first word
    pub remaining: &'a [String],
}

impl<'a> Task<'a> {
    /// One task per candidate, in candidate order
    pub fn all(words: &'a [String]) -> impl Iterator<Item = Self> + 'a {
        words
            .iter()
            .enumerate()
            .map(move |(i, w)| Self { base: Base::new(w), remaining: &words[i + 1..] })
    }
}

impl<'a> Search<'a> {
    /// Run one task to completion
    pub fn run_task(&self, task: Task<'a>) -> Vec<String> {
        self.run(task.base, task.remaining)
    }
}

fn worker<'a>(
    id: usize,
    search: Search<'a>,
    tasks: Receiver<Task<'a>>,
    results: Sender<Vec<String>>,
) {
    let mut done = 0usize;
    for task in tasks.iter() {
        let found = search.run_task(task);
        if results.send(found).is_err() {
            break;
        }
        done += 1;
    }
    debug!("worker {} finished {} tasks", id, done);
}

/// Queue `task`, taking in results while the task queue is full.
/// Returns false if the workers are gone.
fn submit<'a>(
    tasks: &Sender<Task<'a>>,
    results: &Receiver<Vec<String>>,
    task: Task<'a>,
    ret: &mut Vec<String>,
    pending: &mut usize,
) -> bool {
    loop {
        let mut sel = Select::new();
        let send_op = sel.send(tasks);
        sel.recv(results);
        let oper = sel.select();
        if oper.index() == send_op {
            return oper.send(tasks, task).is_ok();
        }
        match oper.recv(results) {
            Ok(batch) => {
                ret.extend(batch);
                *pending -= 1;
            }
            Err(_) => return false,
        }
    }
}

/// Run every task of `search` on `parallelism` threads.
/// The order of the returned lines is not defined.
pub fn solve(search: &Search<'_>, parallelism: usize) -> Vec<String> {
    let parallelism = parallelism.max(1);
    let (task_tx, task_rx) = bounded(parallelism);
    let (result_tx, result_rx) = bounded(parallelism);
    let mut ret = Vec::new();

    let outcome = crossbeam::scope(|scope| {
        for id in 0..parallelism {
            let tasks = task_rx.clone();
            let results = result_tx.clone();
            let search = *search;
            scope.spawn(move |_| worker(id, search, tasks, results));
        }
        drop(task_rx);
        drop(result_tx);

        let mut pending = 0usize;
        let mut sent = 0usize;
        for task in Task::all(search.candidates()) {
            if !submit(&task_tx, &result_rx, task, &mut ret, &mut pending) {
                warn!("workers exited early");
                break;
            }
            pending += 1;
            sent += 1;
            while let Ok(batch) = result_rx.try_recv() {
                ret.extend(batch);
                pending -= 1;
            }
        }
        drop(task_tx);
        info!("{} tasks sent to {} workers", sent, parallelism);

        while pending > 0 {
            match result_rx.recv() {
                Ok(batch) => {
                    ret.extend(batch);
                    pending -= 1;
                }
                Err(_) => break,
            }
        }
    });
    if let Err(e) = outcome {
        std::panic::resume_unwind(e);
    }
    ret
}
