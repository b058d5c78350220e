// Reassembly from frame texts, batch and incremental.
//
// * missing / duplicated / foreign frames
// * corrupted size header
// * collector progress, repeats and conflicts

#[cfg(test)]
mod tests {
    use qrgif_core::compression::CompressionError;
    use qrgif_core::framing::{decode_frame, encode_frame, Frame, FrameError};
    use qrgif_core::reassembly::{reassemble, reassemble_frames, Accepted, Collector, ReassemblyError};
    use qrgif_core::frame;

    fn noise(len: usize, seed: u64) -> Vec<u8> {
        let mut s = seed | 1;
        (0..len)
            .map(|_| {
                s ^= s << 13;
                s ^= s >> 7;
                s ^= s << 17;
                (s >> 24) as u8
            })
            .collect()
    }

    /// Payload and its frame texts; at least four frames.
    fn multi_frame() -> (Vec<u8>, Vec<String>) {
        let payload = noise(1000, 42);
        let texts = frame(&payload).unwrap().texts().unwrap();
        assert!(texts.len() >= 4);
        (payload, texts)
    }

    // ## Batch

    #[test]
    fn any_order_reassembles() {
        let (payload, mut texts) = multi_frame();
        texts.rotate_left(2);
        texts.swap(0, 1);
        assert_eq!(reassemble(&texts).unwrap(), payload);
    }

    #[test]
    fn removing_any_single_frame_is_incomplete() {
        let (_, texts) = multi_frame();
        let total = (texts.len() - 1) as u8;
        for drop in 0..texts.len() {
            let partial: Vec<&String> = texts
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != drop)
                .map(|(_, t)| t)
                .collect();
            match reassemble(&partial) {
                Err(ReassemblyError::Incomplete { total: t, missing }) => {
                    assert_eq!(t, total);
                    assert_eq!(missing, vec![drop as u8]);
                }
                other => panic!("dropping {} gave {:?}", drop, other),
            }
        }
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let (_, mut texts) = multi_frame();
        texts.push(texts[1].clone());
        assert!(matches!(
            reassemble(&texts),
            Err(ReassemblyError::DuplicateIndex { index: 1 })
        ));
    }

    #[test]
    fn foreign_total_is_rejected() {
        let (_, mut texts) = multi_frame();
        let foreign = frame(b"{}").unwrap().texts().unwrap();
        texts.push(foreign[0].clone());
        assert!(matches!(
            reassemble(&texts),
            Err(ReassemblyError::TotalMismatch { found: 0, .. })
        ));
    }

    #[test]
    fn no_frames_is_an_error() {
        let none: [&str; 0] = [];
        assert!(matches!(reassemble(&none), Err(ReassemblyError::NoFrames)));
    }

    #[test]
    fn bad_text_is_a_frame_error() {
        assert!(matches!(
            reassemble(&["%%%"]),
            Err(ReassemblyError::Frame(FrameError::InvalidBase64(_)))
        ));
    }

    #[test]
    fn corrupted_size_header_is_detected() {
        let (payload, texts) = multi_frame();
        let mut frames: Vec<Frame> = texts.iter().map(|t| decode_frame(t).unwrap()).collect();

        // The size header lives in the first four chunk bytes of frame 0.
        let declared = payload.len() as u32 + 3;
        frames[0].chunk[..4].copy_from_slice(&declared.to_le_bytes());

        match reassemble_frames(&frames) {
            Err(ReassemblyError::Compression(CompressionError::LengthMismatch { declared: d, actual })) => {
                assert_eq!(d, payload.len() + 3);
                assert_eq!(actual, payload.len());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn hand_built_index_past_total_is_rejected() {
        let frames = vec![Frame::new(0, 0, vec![1]), Frame::new(0, 4, vec![2])];
        assert!(matches!(
            reassemble_frames(&frames),
            Err(ReassemblyError::Frame(FrameError::IndexOutOfRange { index: 4, total: 0 }))
        ));
    }

    #[test]
    fn hand_built_empty_chunk_is_rejected() {
        let frames = vec![Frame::new(1, 0, vec![1]), Frame::new(1, 1, Vec::new())];
        assert!(matches!(
            reassemble_frames(&frames),
            Err(ReassemblyError::Frame(FrameError::EmptyChunk { index: 1 }))
        ));
    }

    // ## Collector

    #[test]
    fn collector_handles_repeats_in_any_order() {
        let (payload, texts) = multi_frame();
        let mut c = Collector::new();

        assert_eq!(c.total(), None);
        assert!(c.missing().is_empty());
        assert!(!c.is_complete());

        // Scan back to front, each code twice.
        for text in texts.iter().rev() {
            assert!(matches!(c.accept(text).unwrap(), Accepted::New { .. }));
            assert!(matches!(c.accept(text).unwrap(), Accepted::Repeat { .. }));
        }

        assert!(c.is_complete());
        assert_eq!(c.received(), texts.len());
        assert_eq!(c.expected(), Some(texts.len()));
        assert_eq!(c.finish().unwrap(), payload);
    }

    #[test]
    fn collector_reports_remaining() {
        let (_, texts) = multi_frame();
        let mut c = Collector::new();
        match c.accept(&texts[0]).unwrap() {
            Accepted::New { index, remaining } => {
                assert_eq!(index, 0);
                assert_eq!(remaining, texts.len() - 1);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn progress_map_marks_received() {
        let (_, texts) = multi_frame();
        let mut c = Collector::new();
        c.accept(&texts[0]).unwrap();
        c.accept(&texts[2]).unwrap();

        let map = c.progress_map();
        assert_eq!(map.len(), texts.len());
        assert!(map.starts_with("#.#"));
        assert_eq!(map.matches('#').count(), 2);

        let expected_missing: Vec<u8> = (0..texts.len() as u8).filter(|i| *i != 0 && *i != 2).collect();
        assert_eq!(c.missing(), expected_missing);
    }

    #[test]
    fn collector_finish_incomplete() {
        let (_, texts) = multi_frame();
        let mut c = Collector::new();
        for t in texts.iter().skip(1) {
            c.accept(t).unwrap();
        }
        let err = c.finish().unwrap_err();
        assert_eq!(err.missing(), Some(&[0u8][..]));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn collector_finish_without_frames() {
        assert!(matches!(Collector::new().finish(), Err(ReassemblyError::NoFrames)));
    }

    #[test]
    fn collector_rejects_mixed_payloads() {
        let (_, texts) = multi_frame();
        let mut c = Collector::new();
        c.accept(&texts[0]).unwrap();

        let other = frame(b"{\"other\":true}").unwrap().texts().unwrap();
        assert!(matches!(
            c.accept(&other[0]),
            Err(ReassemblyError::TotalMismatch { found: 0, .. })
        ));
    }

    #[test]
    fn collector_rejects_conflicting_chunk() {
        let (_, texts) = multi_frame();
        let mut c = Collector::new();
        c.accept(&texts[1]).unwrap();

        let mut forged = decode_frame(&texts[1]).unwrap();
        forged.chunk[0] ^= 0xff;
        let forged = encode_frame(&forged).unwrap();
        assert!(matches!(
            c.accept(&forged),
            Err(ReassemblyError::ConflictingChunk { index: 1 })
        ));
        // The original is still accepted as a repeat.
        assert!(matches!(c.accept(&texts[1]).unwrap(), Accepted::Repeat { index: 1 }));
    }

    #[test]
    fn collector_state_survives_rejected_frame() {
        let (payload, texts) = multi_frame();
        let mut c = Collector::new();
        assert!(c.accept("garbage!").is_err());
        for t in &texts {
            c.accept(t).unwrap();
        }
        assert_eq!(c.finish().unwrap(), payload);
    }

    #[test]
    fn invalid_first_frame_does_not_fix_total() {
        let (payload, texts) = multi_frame();
        let mut c = Collector::new();

        assert!(matches!(
            c.accept_frame(Frame::new(0, 5, vec![1])),
            Err(ReassemblyError::Frame(FrameError::IndexOutOfRange { index: 5, total: 0 }))
        ));
        assert!(matches!(
            c.accept_frame(Frame::new(0, 0, Vec::new())),
            Err(ReassemblyError::Frame(FrameError::EmptyChunk { index: 0 }))
        ));
        assert_eq!(c.total(), None);
        assert_eq!(c.progress_map(), "");

        for t in &texts {
            c.accept(t).unwrap();
        }
        assert_eq!(c.finish().unwrap(), payload);
    }

    #[test]
    fn empty_chunk_is_rejected_mid_set() {
        let (_, texts) = multi_frame();
        let mut c = Collector::new();
        c.accept(&texts[0]).unwrap();

        let total = (texts.len() - 1) as u8;
        assert!(matches!(
            c.accept_frame(Frame::new(total, 1, Vec::new())),
            Err(ReassemblyError::Frame(FrameError::EmptyChunk { index: 1 }))
        ));
        assert_eq!(c.received(), 1);
        assert_eq!(c.missing().first(), Some(&1));
    }
}
