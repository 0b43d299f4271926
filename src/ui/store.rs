//! Store: owns the root scene state and serializes every intent through it.
//!
//! UI intents and external events share one unbounded channel and are reduced
//! one at a time, in arrival order, to completion. Views read snapshots
//! through a [`StateHandle`] and never mutate state directly.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::config::StoreConfig;
use crate::ui::mvi::{Command, Intent, Reducer};
use crate::ui::route::Diagnostic;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store has been dropped")]
    Closed,

    #[error("Follow-up limit of {limit} reached, dropped {dropped} intents")]
    FollowUpLimit { limit: usize, dropped: usize },
}

/// Read-only view of the store's state.
pub struct StateHandle<S> {
    inner: Arc<RwLock<S>>,
}

impl<S> Clone for StateHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Clone> StateHandle<S> {
    pub fn snapshot(&self) -> S {
        self.inner.read().clone()
    }

    /// Borrow the current state without cloning it.
    pub fn read<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.inner.read())
    }
}

/// Read-only view of the diagnostics reducers have reported, oldest first.
#[derive(Clone, Default)]
pub struct DiagnosticLog {
    inner: Arc<RwLock<VecDeque<Diagnostic>>>,
}

impl DiagnosticLog {
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.inner.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    fn push(&self, diagnostic: Diagnostic, capacity: usize) {
        let mut log = self.inner.write();
        if log.len() >= capacity {
            log.pop_front();
        }
        log.push_back(diagnostic);
    }
}

/// Enqueues intents into a store's serial stream.
pub struct StoreSender<I> {
    tx: mpsc::UnboundedSender<I>,
}

impl<I> Clone for StoreSender<I> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<I: Intent> StoreSender<I> {
    pub fn send(&self, intent: I) -> Result<(), StoreError> {
        self.tx.send(intent).map_err(|_| StoreError::Closed)
    }

    /// Sender for a child view: wraps every child intent with `embed`.
    pub fn scope<C: 'static>(
        &self,
        embed: impl Fn(C) -> I + Send + Sync + 'static,
    ) -> ScopedSender<C, I> {
        ScopedSender {
            root: self.clone(),
            embed: Arc::new(embed),
        }
    }
}

/// Sender handed to a child view.
///
/// The wrapping is fixed when the scope is created, so a view that keeps its
/// sender after the parent's route changed keeps addressing the old case.
pub struct ScopedSender<C, I> {
    root: StoreSender<I>,
    embed: Arc<dyn Fn(C) -> I + Send + Sync>,
}

impl<C, I> Clone for ScopedSender<C, I> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            embed: Arc::clone(&self.embed),
        }
    }
}

impl<C: 'static, I: Intent> ScopedSender<C, I> {
    pub fn send(&self, intent: C) -> Result<(), StoreError> {
        self.root.send((self.embed)(intent))
    }

    /// Scope further down, e.g. from an intermediate view to its leaf.
    pub fn scope<D: 'static>(
        &self,
        embed: impl Fn(D) -> C + Send + Sync + 'static,
    ) -> ScopedSender<D, I> {
        let outer = Arc::clone(&self.embed);
        ScopedSender {
            root: self.root.clone(),
            embed: Arc::new(move |intent| outer(embed(intent))),
        }
    }
}

pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    tx: mpsc::UnboundedSender<R::Intent>,
    rx: mpsc::UnboundedReceiver<R::Intent>,
    revision: watch::Sender<u64>,
    diagnostics: DiagnosticLog,
    config: StoreConfig,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State, config: StoreConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(initial)),
            tx,
            rx,
            revision,
            diagnostics: DiagnosticLog::default(),
            config,
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> StateHandle<R::State> {
        StateHandle {
            inner: Arc::clone(&self.state),
        }
    }

    pub fn snapshot(&self) -> R::State {
        self.state.read().clone()
    }

    pub fn sender(&self) -> StoreSender<R::Intent> {
        StoreSender {
            tx: self.tx.clone(),
        }
    }

    /// Revision counter, bumped after every intent that changed the state.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Diagnostics reported by reducers, oldest first.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.snapshot()
    }

    /// Handle on the diagnostic log that stays current as the store runs.
    pub fn diagnostic_log(&self) -> DiagnosticLog {
        self.diagnostics.clone()
    }

    /// Reduce `intent` and every follow-up it schedules, synchronously.
    ///
    /// Follow-ups are queued behind the intent that produced them. Once
    /// `max_follow_ups` have been processed the rest are dropped and
    /// [`StoreError::FollowUpLimit`] is returned; the state keeps every
    /// reduction made before that point.
    pub fn send(&mut self, intent: R::Intent) -> Result<(), StoreError> {
        let limit = self.config.max_follow_ups;
        let mut queue = VecDeque::from([intent]);
        let mut follow_ups = 0usize;
        let mut dropped = 0usize;
        let mut changed = false;

        while let Some(intent) = queue.pop_front() {
            tracing::debug!(?intent, "reducing");
            let effect = {
                let mut state = self.state.write();
                let before = state.clone();
                let effect = R::reduce(&mut state, intent);
                changed |= *state != before;
                effect
            };

            for command in effect.into_commands() {
                match command {
                    Command::Send(next) if follow_ups < limit => {
                        follow_ups += 1;
                        queue.push_back(next);
                    }
                    Command::Send(next) => {
                        tracing::warn!(
                            intent = ?next,
                            limit,
                            "follow-up limit reached, dropping intent"
                        );
                        dropped += 1;
                    }
                    Command::Report(diagnostic) => {
                        self.diagnostics.push(diagnostic, self.config.diagnostics_capacity)
                    }
                }
            }
        }

        if changed {
            self.revision.send_modify(|revision| *revision += 1);
        }

        if dropped > 0 {
            return Err(StoreError::FollowUpLimit { limit, dropped });
        }
        Ok(())
    }

    /// Reduce everything already waiting in the channel. Returns how many
    /// intents were taken off it.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(intent) = self.rx.try_recv() {
            self.dispatch_logged(intent);
            processed += 1;
        }
        processed
    }

    /// Reduce intents as they arrive, calling `observer` with the state after
    /// each one. The store keeps a sender of its own, so this only returns
    /// when the surrounding task stops polling it.
    pub async fn run(&mut self, mut observer: impl FnMut(&R::State)) {
        while let Some(intent) = self.rx.recv().await {
            self.dispatch_logged(intent);
            observer(&self.state.read());
        }
    }

    fn dispatch_logged(&mut self, intent: R::Intent) {
        if let Err(err) = self.send(intent) {
            tracing::error!(error = %err, "dispatch incomplete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Effect, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: u32,
    }

    impl UiState for Counter {}

    #[derive(Debug)]
    enum CounterIntent {
        Add(u32),
        /// Schedules `n` more `Countdown`s, one at a time.
        Countdown(u32),
    }

    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: &mut Counter, intent: CounterIntent) -> Effect<CounterIntent> {
            match intent {
                CounterIntent::Add(n) => {
                    state.value += n;
                    Effect::none()
                }
                CounterIntent::Countdown(0) => Effect::none(),
                CounterIntent::Countdown(n) => {
                    state.value += 1;
                    Effect::send(CounterIntent::Countdown(n - 1))
                }
            }
        }
    }

    fn store(max_follow_ups: usize) -> Store<CounterReducer> {
        Store::new(
            Counter::default(),
            StoreConfig {
                max_follow_ups,
                diagnostics_capacity: 4,
            },
        )
    }

    #[test]
    fn follow_ups_run_in_order() {
        let mut store = store(16);
        store.send(CounterIntent::Countdown(3)).unwrap();
        assert_eq!(store.snapshot().value, 3);
    }

    #[test]
    fn follow_up_limit_stops_feedback() {
        let mut store = store(2);
        let err = store.send(CounterIntent::Countdown(10)).unwrap_err();
        assert_eq!(err, StoreError::FollowUpLimit { limit: 2, dropped: 1 });
        assert_eq!(store.snapshot().value, 3);
    }

    #[test]
    fn pending_intents_are_processed_in_arrival_order() {
        let mut store = store(16);
        let sender = store.sender();
        sender.send(CounterIntent::Add(1)).unwrap();
        sender.send(CounterIntent::Add(10)).unwrap();
        assert_eq!(store.process_pending(), 2);
        assert_eq!(store.snapshot().value, 11);
        assert_eq!(store.process_pending(), 0);
    }

    #[test]
    fn revision_only_moves_on_change() {
        let mut store = store(16);
        let revision = store.subscribe();
        store.send(CounterIntent::Add(0)).unwrap();
        assert_eq!(*revision.borrow(), 0);
        store.send(CounterIntent::Add(2)).unwrap();
        assert_eq!(*revision.borrow(), 1);
    }

    #[test]
    fn state_handle_sees_updates() {
        let mut store = store(16);
        let handle = store.state();
        store.send(CounterIntent::Add(5)).unwrap();
        assert_eq!(handle.read(|s| s.value), 5);
        assert_eq!(handle.snapshot(), Counter { value: 5 });
    }

    #[test]
    fn diagnostics_are_capped() {
        let store = store(16);
        let log = store.diagnostic_log();
        for n in 0..6 {
            log.push(
                Diagnostic::StaleRoute {
                    scene: "test",
                    active: None,
                    addressed: n.to_string(),
                },
                store.config.diagnostics_capacity,
            );
        }
        let kept: Vec<_> = store
            .diagnostics()
            .into_iter()
            .map(|d| match d {
                Diagnostic::StaleRoute { addressed, .. } => addressed,
            })
            .collect();
        assert_eq!(kept, vec!["2", "3", "4", "5"]);
        assert_eq!(log.len(), 4);
    }
}
