//! Roundtrip and bit-exactness tests for the LIMG codec.

use limg::{Grid, ImageInfo, PixelFormat, Unstoppable};

fn checkerboard(w: usize, h: usize) -> Vec<Vec<u8>> {
    (0..h)
        .map(|y| (0..w).map(|x| ((x + y) % 2) as u8).collect())
        .collect()
}

#[test]
fn bw_roundtrip() {
    let rows = checkerboard(8, 6);
    let grid = Grid::from_rows(&rows, PixelFormat::BlackAndWhite).unwrap();

    let encoded = limg::encode(&grid, Unstoppable).unwrap();
    let decoded = limg::decode(&encoded, Unstoppable).unwrap();

    assert_eq!(decoded, grid);
    assert_eq!(decoded.width(), 8);
    assert_eq!(decoded.height(), 6);
    assert_eq!(decoded.format(), PixelFormat::BlackAndWhite);
}

#[test]
fn nonsquare_dimensions_unswapped() {
    // width=3, height=5 — catches any width/height ordering slip in the header
    let rows = checkerboard(3, 5);
    let grid = Grid::from_rows(&rows, PixelFormat::BlackAndWhite).unwrap();

    let encoded = limg::encode(&grid, Unstoppable).unwrap();
    assert_eq!(&encoded[4..6], &[0, 3], "width field");
    assert_eq!(&encoded[6..8], &[0, 5], "height field");

    let decoded = limg::decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 5);
    for y in 0..5 {
        for x in 0..3 {
            assert_eq!(decoded.get(y, x), Some(((x + y) % 2) as u8));
        }
    }
}

#[test]
fn bit_exact_1x8() {
    let grid = Grid::from_rows(&[[1u8, 0, 1, 1, 0, 0, 1, 0]], PixelFormat::BlackAndWhite).unwrap();
    let encoded = limg::encode(&grid, Unstoppable).unwrap();
    // "LIMG", width=8, height=1, tag=0, one payload byte, no padding byte
    assert_eq!(encoded, [b'L', b'I', b'M', b'G', 0, 8, 0, 1, 0, 0xB2]);
}

#[test]
fn single_pixel_padded_to_full_byte() {
    let grid = Grid::from_rows(&[[1u8]], PixelFormat::BlackAndWhite).unwrap();
    let encoded = limg::encode(&grid, Unstoppable).unwrap();
    // 1 real bit + 7 zero padding bits
    assert_eq!(encoded, [b'L', b'I', b'M', b'G', 0, 1, 0, 1, 0, 0x80]);
}

#[test]
fn rows_pack_without_inter_pixel_padding() {
    // 3x3 = 9 bits: rows 111 000 101 -> 0b1110_0010 0b1000_0000
    let grid =
        Grid::from_rows(&[[1u8, 1, 1], [0, 0, 0], [1, 0, 1]], PixelFormat::BlackAndWhite).unwrap();
    let encoded = limg::encode(&grid, Unstoppable).unwrap();
    assert_eq!(&encoded[9..], &[0b1110_0010, 0b1000_0000]);

    let decoded = limg::decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn construction_and_encoding_are_idempotent() {
    let rows = checkerboard(5, 4);
    let a = Grid::from_rows(&rows, PixelFormat::BlackAndWhite).unwrap();
    let b = Grid::from_rows(&rows, PixelFormat::BlackAndWhite).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        limg::encode(&a, Unstoppable).unwrap(),
        limg::encode(&b, Unstoppable).unwrap()
    );
}

#[test]
fn trailing_bytes_are_ignored() {
    let grid = Grid::from_rows(&[[1u8, 0], [0, 1]], PixelFormat::BlackAndWhite).unwrap();
    let mut encoded = limg::encode(&grid, Unstoppable).unwrap();
    encoded.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    let decoded = limg::decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn info_probe_matches_decode() {
    let grid = Grid::from_rows(&checkerboard(7, 2), PixelFormat::BlackAndWhite).unwrap();
    let encoded = limg::encode(&grid, Unstoppable).unwrap();

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 7);
    assert_eq!(info.height, 2);
    assert_eq!(info.format, PixelFormat::BlackAndWhite);

    let decoded = limg::decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), info.width as usize);
    assert_eq!(decoded.height(), info.height as usize);
}

#[test]
fn display_rows_stringify_every_cell() {
    let grid = Grid::from_rows(&[[1u8, 0], [0, 1]], PixelFormat::BlackAndWhite).unwrap();
    assert_eq!(
        grid.to_display_rows(),
        vec![vec!["1".to_string(), "0".to_string()], vec![
            "0".to_string(),
            "1".to_string()
        ]]
    );
}
