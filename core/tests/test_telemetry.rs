#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use qrgif_core::frame;
    use qrgif_core::telemetry::{ratio_pct, FrameStats, Stage, StageTimes, TelemetrySnapshot, TelemetryTimer};

    fn make_stats() -> FrameStats {
        FrameStats::new(1000, 454, 3)
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        timer.stage_times.add(Stage::Read, Duration::from_millis(5));
        timer.stage_times.add(Stage::Write, Duration::from_millis(10));
        timer
    }

    #[test]
    fn ratio_is_compressed_over_raw_in_percent() {
        assert_eq!(ratio_pct(1000, 454), 45.4);
        assert_eq!(ratio_pct(3, 1), 33.33);
        assert_eq!(ratio_pct(2, 10), 500.0);
        assert_eq!(ratio_pct(0, 10), 0.0);
    }

    #[test]
    fn stats_derive_total_from_frame_count() {
        let stats = make_stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.ratio_pct, 45.4);
        assert_eq!(stats.qr_version, None);
        assert_eq!(stats.with_qr_version(18).qr_version, Some(18));
    }

    #[test]
    fn summary_lines() {
        let stats = make_stats().with_qr_version(18);
        assert_eq!(
            stats.to_string(),
            "QR Gif\nVersion 18\nBytes 454 / 1000 : 45.4%\nWait for #2"
        );
        assert!(make_stats().to_string().contains("Version n/a"));
    }

    #[test]
    fn framer_stats_match_summary() {
        let framed = frame(b"{}").unwrap();
        let text = framed.stats.to_string();
        assert!(text.starts_with("QR Gif\n"));
        assert!(text.ends_with("Wait for #0"));
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        assert!(times.is_empty());
        times.add(Stage::Render, Duration::from_millis(3));
        times.add(Stage::Render, Duration::from_millis(4));
        times.add(Stage::Write, Duration::from_millis(1));

        assert_eq!(times.get(Stage::Render), Duration::from_millis(7));
        assert_eq!(times.get(Stage::Decode), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_millis(8));
        assert!((times.get_ms(Stage::Write) - 1.0).abs() < 1e-9);

        // Ordered by stage.
        let stages: Vec<Stage> = times.iter().map(|(s, _)| s).collect();
        assert_eq!(stages, vec![Stage::Render, Stage::Write]);
    }

    #[test]
    fn timer_charges_closure_to_stage() {
        let mut timer = TelemetryTimer::new();
        let value = timer.time(Stage::Frame, || {
            std::thread::sleep(Duration::from_millis(2));
            42
        });
        assert_eq!(value, 42);
        assert!(timer.stage_times.get(Stage::Frame) >= Duration::from_millis(2));
        assert!(timer.elapsed() >= timer.stage_times.total());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = TelemetrySnapshot::from(&make_stats(), &make_timer());
        let json = snapshot.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["raw_size"], 1000);
        assert_eq!(value["stats"]["comp_size"], 454);
        assert_eq!(value["stats"]["total"], 2);
        assert!(value["stats"]["qr_version"].is_null());
        assert!(value["stage_times"]["times"]["read"].is_object());

        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn stage_display_is_lowercase() {
        assert_eq!(Stage::Decompress.to_string(), "decompress");
        assert_eq!(Stage::Read.to_string(), "read");
    }
}
