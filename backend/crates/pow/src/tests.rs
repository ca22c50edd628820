//! Unit tests for PoW crate
//! Target: every search property exercised with live and scripted nonces

#[cfg(test)]
mod search_tests {
    use crate::application::config::PowConfig;
    use crate::application::search::DifficultySearch;
    use crate::domain::nonce_source::{NonceSource, RngNonceSource};
    use crate::domain::services::*;
    use crate::domain::value_objects::*;
    use platform::crypto::is_sha256_hex;

    fn nonce(s: &str) -> Nonce {
        s.parse().unwrap()
    }

    #[test]
    fn test_search_meets_every_small_difficulty() {
        let label = Label::from("Derrick");
        let mut search = DifficultySearch::new(PowConfig::quiet());
        for k in 0..=5 {
            let difficulty = Difficulty::new(k).unwrap();
            let solution = search.search(&label, difficulty);
            assert!(solution.digest.as_str().starts_with(&"0".repeat(k)));
            assert!(solution.attempts >= 1);
            assert_eq!(solution.difficulty, difficulty);
        }
    }

    #[test]
    fn test_search_with_empty_label() {
        let solution = crate::search(&Label::default(), Difficulty::new(2).unwrap());
        assert!(solution.digest.as_str().starts_with("00"));
        let recomputed = compute_digest(solution.nonce.to_text().as_bytes());
        assert_eq!(recomputed, solution.digest);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let label = Label::from("Derrick");
        let n = nonce("00000000-0000-4000-8000-000000000001");
        let first = compute_candidate_digest(&label, &n);
        let second = compute_candidate_digest(&label, &n);
        assert_eq!(first, second);
        assert_eq!(
            first.as_str(),
            "2ebe42382da9cc7d1b3db048665fff11e42aa18ef7efe0ebc67b6971b2205784"
        );
    }

    #[test]
    fn test_digest_shape_for_many_nonces() {
        let label = Label::from("Derrick");
        let mut source = RngNonceSource::seeded(42);
        for _ in 0..256 {
            let digest = compute_candidate_digest(&label, &source.next_nonce());
            assert!(is_sha256_hex(digest.as_str()), "bad digest {digest}");
        }
    }

    #[test]
    fn test_scripted_source_stops_at_first_match() {
        let label = Label::from("Derrick");
        let misses = [
            nonce("00000000-0000-4000-8000-000000000000"),
            nonce("00000000-0000-4000-8000-000000000001"),
            nonce("00000000-0000-4000-8000-000000000002"),
        ];
        // Two qualifying nonces: the search must return the earlier one.
        let first_hit = nonce("00000000-0000-4000-8000-00000000002e");
        let later_hit = nonce("00000000-0000-4000-8000-000000002b5a");

        let mut script = misses
            .iter()
            .copied()
            .chain([first_hit, later_hit])
            .collect::<Vec<_>>()
            .into_iter();
        let mut drawn = 0u64;
        let source = move || {
            drawn += 1;
            script
                .next()
                .unwrap_or_else(|| panic!("source drained after {drawn} draws"))
        };

        let mut search = DifficultySearch::with_source(source, PowConfig::quiet());
        let solution = search.search(&label, Difficulty::new(2).unwrap());

        assert_eq!(solution.nonce, first_hit);
        assert_eq!(solution.attempts, 4);
        assert_eq!(
            solution.digest.as_str(),
            "007154e24c55549ac10065d1b176741b25925a6cae25bb886a0f26dbdb759762"
        );
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let label = Label::from("Derrick");
        let difficulty = Difficulty::new(2).unwrap();
        let a = DifficultySearch::with_source(RngNonceSource::seeded(9), PowConfig::quiet())
            .search(&label, difficulty);
        let b = DifficultySearch::with_source(RngNonceSource::seeded(9), PowConfig::quiet())
            .search(&label, difficulty);
        assert_eq!(a.nonce, b.nonce);
        assert_eq!(a.digest, b.digest);
        assert_eq!(a.attempts, b.attempts);
    }

    #[test]
    fn test_solution_payload_rehashes_to_digest() {
        let label = Label::from("Derrick");
        let solution = crate::search(&label, Difficulty::new(3).unwrap());
        let payload = solution.payload(&label);
        assert_eq!(digest_payload(&payload), solution.digest);
        assert!(verify_solution(&label, &solution.nonce, solution.difficulty));
    }

    #[test]
    fn test_derrick_difficulty_four() {
        let label = Label::from("Derrick");
        let solution = crate::search(&label, Difficulty::new(4).unwrap());
        assert!(solution.digest.as_str().starts_with("0000"));
        let payload = solution.payload(&label);
        assert!(payload.as_bytes().starts_with(b"Derrick"));
        assert_eq!(payload.as_bytes().len(), "Derrick".len() + NONCE_TEXT_LEN);
    }
}

#[cfg(test)]
mod task_tests {
    use crate::application::config::PowConfig;
    use crate::application::search_task::{spawn_search, spawn_search_with};
    use crate::domain::value_objects::*;
    use crate::error::PowError;

    #[tokio::test]
    async fn test_spawned_search_completes() {
        let handle = spawn_search(
            Label::from("Derrick"),
            Difficulty::new(3).unwrap(),
            PowConfig::quiet(),
        );
        let solution = handle.join().await.unwrap();
        assert!(solution.digest.as_str().starts_with("000"));
    }

    #[tokio::test]
    async fn test_spawned_search_can_be_cancelled() {
        // A source that never yields a qualifying nonce for difficulty 64
        let miss: Nonce = "00000000-0000-4000-8000-000000000000".parse().unwrap();
        let handle = spawn_search_with(
            Label::from("Derrick"),
            Difficulty::new(64).unwrap(),
            PowConfig::quiet(),
            move || move || miss,
        );
        handle.cancel();
        let result = handle.join().await;
        assert!(matches!(result, Err(PowError::Cancelled { .. })));
    }

    #[tokio::test]
    async fn test_cancel_flag_from_handle_stops_search() {
        let miss: Nonce = "00000000-0000-4000-8000-000000000000".parse().unwrap();
        let handle = spawn_search_with(
            Label::from("Derrick"),
            Difficulty::new(64).unwrap(),
            PowConfig::quiet(),
            move || move || miss,
        );
        let flag = handle.cancel_flag();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(!handle.is_finished());
        flag.cancel();
        match handle.join().await {
            Err(PowError::Cancelled { attempts }) => assert!(attempts > 0),
            other => panic!("expected cancellation, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod report_tests {
    use crate::domain::entities::Solution;
    use crate::domain::value_objects::*;
    use crate::presentation::dto::SolutionReport;
    use std::time::Duration;

    fn fixture() -> Solution {
        Solution::new(
            "00000000-0000-4000-8000-000000002b5a".parse().unwrap(),
            HexDigest::parse("0000a5db26f7228f5aa75f0660f93d5fedfa6e63c5c271147b5a92d263d90b90")
                .unwrap(),
            Difficulty::new(4).unwrap(),
            11098,
            Duration::from_millis(1234),
        )
    }

    #[test]
    fn test_report_json_is_camel_case() {
        let report = SolutionReport::from(&fixture());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["difficulty"], 4);
        assert_eq!(json["nonce"], "00000000-0000-4000-8000-000000002b5a");
        assert_eq!(json["attempts"], 11098);
        assert!(json.get("elapsedSecs").is_some());
        assert!(json.get("foundAt").is_some());
    }

    #[test]
    fn test_report_display() {
        let text = SolutionReport::from(&fixture()).to_string();
        assert!(text.starts_with("4 leading zeros:"));
        assert!(text.contains("Digest: 0000a5db"));
        assert!(text.contains("Elapsed: 1.2340 s"));
    }

    #[test]
    fn test_into_parts() {
        let (nonce, digest, elapsed) = fixture().into_parts();
        assert_eq!(nonce.to_text(), "00000000-0000-4000-8000-000000002b5a");
        assert_eq!(digest.leading_zeros(), 4);
        assert_eq!(elapsed, Duration::from_millis(1234));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::domain::value_objects::Difficulty;
    use crate::error::PowError;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_error_display() {
        let err = Difficulty::new(70).unwrap_err();
        assert!(err.to_string().contains("70"));
        assert!(
            PowError::Cancelled { attempts: 12 }
                .to_string()
                .contains("cancelled")
        );
        assert!(PowError::TaskFailed("panic".into()).to_string().contains("panic"));
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            Difficulty::new(65).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            "zzz".parse::<crate::Nonce>().unwrap_err().kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            PowError::Cancelled { attempts: 0 }.kind(),
            ErrorKind::Cancelled
        );
        assert_eq!(PowError::TaskFailed(String::new()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_into_app_error() {
        let app: AppError = PowError::Cancelled { attempts: 3 }.into();
        assert_eq!(app.kind(), ErrorKind::Cancelled);
        assert_eq!(app.exit_code(), 130);
        assert!(std::error::Error::source(&app).is_some());
    }
}
