#![no_main]
use libfuzzer_sys::fuzz_target;
use pixelbmp::*;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First 4 bytes pick the dimensions (signed, so negatives get exercised).
    let width = i16::from_le_bytes([data[0], data[1]]) as i32;
    let height = i16::from_le_bytes([data[2], data[3]]) as i32;
    let pixels = &data[4..];

    // Must never panic, whatever the dimensions
    let Ok(out) = encode_bmp(pixels, width, height) else {
        return;
    };

    assert_eq!(out.len(), bmp::HEADER_LEN + pixels.len());
    assert_eq!(&out[..2], b"BM");
    assert_eq!(
        u32::from_le_bytes([out[2], out[3], out[4], out[5]]) as usize,
        out.len()
    );

    // Every source row lands mirrored vertically
    let row = width as usize * 4;
    let h = height as usize;
    for r in 0..h {
        assert_eq!(
            &pixels[r * row..][..row],
            &out[bmp::HEADER_LEN + (h - 1 - r) * row..][..row]
        );
    }
});
