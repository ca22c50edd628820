//! Difficulty Search Use Case
//!
//! Brute-force loop: draw a nonce, hash `label ∥ nonce`, stop on the first
//! digest that meets the difficulty. Attempts are independent, so there is
//! nothing to memoize or prune.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::rngs::ThreadRng;

use crate::application::config::PowConfig;
use crate::domain::entities::Solution;
use crate::domain::nonce_source::{NonceSource, RngNonceSource};
use crate::domain::services::{compute_candidate_digest, meets_difficulty};
use crate::domain::value_objects::{Difficulty, Label};
use crate::error::{PowError, PowResult};

/// Caller-owned stop signal for a running search
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Difficulty Search Use Case
pub struct DifficultySearch<S = RngNonceSource<ThreadRng>>
where
    S: NonceSource,
{
    source: S,
    config: PowConfig,
}

impl DifficultySearch<RngNonceSource<ThreadRng>> {
    pub fn new(config: PowConfig) -> Self {
        Self::with_source(RngNonceSource::os(), config)
    }
}

impl<S> DifficultySearch<S>
where
    S: NonceSource,
{
    pub fn with_source(source: S, config: PowConfig) -> Self {
        Self { source, config }
    }

    /// Block until a nonce meeting `difficulty` is found
    ///
    /// There is no attempt cap. Callers must keep `difficulty` within
    /// practical reach (see [`Difficulty::PRACTICAL_MAX`]).
    pub fn search(&mut self, label: &Label, difficulty: Difficulty) -> Solution {
        match self.run(label, difficulty, |_| Ok::<(), Infallible>(())) {
            Ok(solution) => solution,
            Err(never) => match never {},
        }
    }

    /// Same loop, but gives up with [`PowError::Cancelled`] once `cancel` is set
    pub fn search_cancellable(
        &mut self,
        label: &Label,
        difficulty: Difficulty,
        cancel: &CancelFlag,
    ) -> PowResult<Solution> {
        self.run(label, difficulty, |attempts| {
            if cancel.is_cancelled() {
                Err(PowError::Cancelled { attempts })
            } else {
                Ok(())
            }
        })
    }

    fn run<E>(
        &mut self,
        label: &Label,
        difficulty: Difficulty,
        mut before_attempt: impl FnMut(u64) -> Result<(), E>,
    ) -> Result<Solution, E> {
        if !difficulty.is_practical() {
            tracing::warn!(
                difficulty = difficulty.leading_zeros(),
                expected_attempts = difficulty.expected_attempts(),
                "Difficulty beyond practical reach, search may not finish"
            );
        }
        tracing::debug!(
            difficulty = difficulty.leading_zeros(),
            label_len = label.len(),
            "Starting difficulty search"
        );

        let start = Instant::now();
        let mut attempts: u64 = 0;

        loop {
            before_attempt(attempts)?;

            let nonce = self.source.next_nonce();
            let digest = compute_candidate_digest(label, &nonce);
            attempts += 1;

            if meets_difficulty(&digest, difficulty) {
                let elapsed = start.elapsed();
                tracing::info!(
                    difficulty = difficulty.leading_zeros(),
                    nonce = %nonce,
                    digest = %digest,
                    attempts,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Difficulty search solved"
                );
                return Ok(Solution::new(nonce, digest, difficulty, attempts, elapsed));
            }

            if self.config.should_report(attempts) {
                tracing::debug!(
                    attempts,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Difficulty search progress"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Nonce;

    #[test]
    fn test_cancel_before_first_attempt() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let mut search = DifficultySearch::new(PowConfig::quiet());
        let result = search.search_cancellable(
            &Label::from("Derrick"),
            Difficulty::new(64).unwrap(),
            &cancel,
        );
        assert!(matches!(result, Err(PowError::Cancelled { attempts: 0 })));
    }

    #[test]
    fn test_cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let other = flag.clone();
        assert!(!other.is_cancelled());
        flag.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_search_counts_attempts() {
        let hit: Nonce = "00000000-0000-4000-8000-00000000002e".parse().unwrap();
        let miss: Nonce = "00000000-0000-4000-8000-000000000000".parse().unwrap();
        let mut script = vec![hit, miss, miss].into_iter();
        let source = move || script.next_back().unwrap();
        let mut search = DifficultySearch::with_source(source, PowConfig::quiet());
        let solution = search.search(&Label::from("Derrick"), Difficulty::new(2).unwrap());
        assert_eq!(solution.attempts, 3);
        assert_eq!(solution.nonce, hit);
    }
}
