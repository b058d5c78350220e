// Covers the header-prefixed zlib codec:
//
// * header layout (raw size, little-endian, first 4 bytes)
// * round trip through the factory functions
// * size-header validation on the way back

#[cfg(test)]
mod tests {
    use qrgif_core::compression::{create_compressor, create_decompressor, CompressionError};

    fn compress(input: &[u8], level: u32) -> Vec<u8> {
        let mut c = create_compressor(level).unwrap();
        let mut out = Vec::new();
        c.compress(input, &mut out).unwrap();
        out
    }

    fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut d = create_decompressor().unwrap();
        let mut out = Vec::new();
        d.decompress(input, &mut out)?;
        Ok(out)
    }

    #[test]
    fn header_is_raw_size_le() {
        let input = vec![b'a'; 0x0102];
        let out = compress(&input, 9);
        assert_eq!(&out[..4], &[0x02, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn body_is_a_zlib_stream() {
        let out = compress(br#"{"a":1}"#, 9);
        let (cmf, flg) = (out[4], out[5]);
        assert_eq!(cmf, 0x78, "deflate, 32K window");
        assert_eq!((u16::from(cmf) * 256 + u16::from(flg)) % 31, 0, "FCHECK");
    }

    #[test]
    fn roundtrip_all_levels() {
        let input = br#"{"tags":["boot","net","can"],"ids":[1,2,3]}"#.repeat(20);
        for level in 0..=9 {
            let out = compress(&input, level);
            assert_eq!(decompress(&out).unwrap(), input, "level {level}");
        }
    }

    #[test]
    fn higher_level_is_not_larger() {
        let input = br#"{"key":"value"}"#.repeat(200);
        assert!(compress(&input, 9).len() <= compress(&input, 1).len());
    }

    #[test]
    fn invalid_level_is_rejected() {
        assert!(matches!(
            create_compressor(10),
            Err(CompressionError::InvalidLevel { level: 10 })
        ));
    }

    #[test]
    fn short_buffer_is_truncated() {
        assert!(matches!(
            decompress(&[1, 0, 0]),
            Err(CompressionError::Truncated { have: 3, need: 4 })
        ));
    }

    #[test]
    fn declared_size_too_large_is_mismatch() {
        let input = b"hello hello hello";
        let mut out = compress(input, 9);
        out[0] += 1;
        match decompress(&out) {
            Err(CompressionError::LengthMismatch { declared, actual }) => {
                assert_eq!(declared, input.len() + 1);
                assert_eq!(actual, input.len());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn declared_size_too_small_is_mismatch() {
        let input = b"hello hello hello";
        let mut out = compress(input, 9);
        out[0] -= 1;
        assert!(matches!(
            decompress(&out),
            Err(CompressionError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn huge_declared_size_does_not_preallocate() {
        let mut out = compress(b"{}", 9);
        out[..4].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            decompress(&out),
            Err(CompressionError::LengthMismatch { actual: 2, .. })
        ));
    }

    #[test]
    fn garbage_body_fails_in_codec() {
        let buf = [2, 0, 0, 0, 0xde, 0xad, 0xbe, 0xef];
        assert!(matches!(
            decompress(&buf),
            Err(CompressionError::CodecProcessFailed { .. })
        ));
    }
}
