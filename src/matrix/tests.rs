// src/matrix/tests.rs

use super::*;

/// 0..=16: one spare element in front of a 4x4 window holding 1..=16.
fn offset_4x4() -> Vec<u8> {
    (0..=16).collect()
}

fn grid(edge_len: usize) -> Vec<u32> {
    (0..(edge_len * edge_len) as u32).collect()
}

#[test]
fn transpose_window_at_offset() {
    let mut buf = offset_4x4();
    transpose(&mut buf, 4, 1);
    assert_eq!(buf, vec![0, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15, 4, 8, 12, 16]);
}

#[test]
fn flip_up_down_window_at_offset() {
    let mut buf = offset_4x4();
    flip_up_down(&mut buf, 4, 1);
    assert_eq!(buf, vec![0, 13, 14, 15, 16, 9, 10, 11, 12, 5, 6, 7, 8, 1, 2, 3, 4]);
}

#[test]
fn flip_left_right_window_at_offset() {
    let mut buf = offset_4x4();
    flip_left_right(&mut buf, 4, 1);
    assert_eq!(buf, vec![0, 4, 3, 2, 1, 8, 7, 6, 5, 12, 11, 10, 9, 16, 15, 14, 13]);
}

#[test]
fn rotate_window_at_offset() {
    let cases = [
        (Rotation::Rotate0, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]),
        (Rotation::Rotate90, vec![0, 13, 9, 5, 1, 14, 10, 6, 2, 15, 11, 7, 3, 16, 12, 8, 4]),
        (Rotation::Rotate180, vec![0, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]),
        (Rotation::Rotate270, vec![0, 4, 8, 12, 16, 3, 7, 11, 15, 2, 6, 10, 14, 1, 5, 9, 13]),
    ];
    for (rotation, expected) in cases {
        let mut buf = offset_4x4();
        rotate(&mut buf, 4, 1, rotation);
        assert_eq!(buf, expected, "{:?}", rotation);
    }
}

#[test]
fn rotate0_is_identity_even_on_short_buffers() {
    let mut buf = vec![1, 2, 3];
    rotate(&mut buf, 8, 0, Rotation::Rotate0);
    assert_eq!(buf, vec![1, 2, 3]);
}

#[test]
fn four_quarter_turns_restore_the_buffer() {
    for edge_len in [1, 2, 3, 4, 5, 8] {
        let original = grid(edge_len);
        let mut buf = original.clone();
        for _ in 0..4 {
            rotate(&mut buf, edge_len, 0, Rotation::Rotate90);
        }
        assert_eq!(buf, original, "edge_len {}", edge_len);
    }
}

#[test]
fn larger_rotations_equal_repeated_quarter_turns() {
    for edge_len in [2, 3, 4, 7, 8] {
        let original = grid(edge_len);

        let mut twice = original.clone();
        rotate(&mut twice, edge_len, 0, Rotation::Rotate90);
        rotate(&mut twice, edge_len, 0, Rotation::Rotate90);
        let mut half = original.clone();
        rotate(&mut half, edge_len, 0, Rotation::Rotate180);
        assert_eq!(half, twice, "180 vs 2x90, edge_len {}", edge_len);

        let mut thrice = twice.clone();
        rotate(&mut thrice, edge_len, 0, Rotation::Rotate90);
        let mut three_quarters = original.clone();
        rotate(&mut three_quarters, edge_len, 0, Rotation::Rotate270);
        assert_eq!(three_quarters, thrice, "270 vs 3x90, edge_len {}", edge_len);
    }
}

#[test]
fn flips_and_transpose_are_involutions() {
    type Op = fn(&mut [u32], usize, usize);
    let ops: [(&str, Op); 3] = [
        ("transpose", transpose),
        ("flip_up_down", flip_up_down),
        ("flip_left_right", flip_left_right),
    ];
    for edge_len in [1, 3, 4, 8] {
        for (name, op) in ops {
            let original = grid(edge_len);
            let mut buf = original.clone();
            op(&mut buf, edge_len, 0);
            op(&mut buf, edge_len, 0);
            assert_eq!(buf, original, "{} twice, edge_len {}", name, edge_len);
        }
    }
}

#[test]
fn transpose_keeps_the_diagonal() {
    let edge_len = 5;
    let start = 3;
    let mut buf: Vec<u32> = (0..(start + edge_len * edge_len) as u32).collect();
    let before = buf.clone();
    transpose(&mut buf, edge_len, start);
    for i in 0..edge_len {
        let idx = start + i * edge_len + i;
        assert_eq!(buf[idx], before[idx]);
    }
}

#[test]
fn odd_flip_leaves_middle_row_and_column() {
    let mut buf = grid(3);
    flip_up_down(&mut buf, 3, 0);
    assert_eq!(&buf[3..6], &[3, 4, 5]);

    let mut buf = grid(3);
    flip_left_right(&mut buf, 3, 0);
    assert_eq!([buf[1], buf[4], buf[7]], [1, 4, 7]);
}

#[test]
fn transforms_only_touch_their_window() {
    let mut buf: Vec<u32> = (0..40).collect();
    rotate(&mut buf, 4, 10, Rotation::Rotate90);
    assert!(buf[..10].iter().copied().eq(0..10));
    assert!(buf[26..].iter().copied().eq(26..40));
}

#[test]
fn works_for_non_numeric_elements() {
    let mut buf = vec!["a", "b", "c", "d"];
    rotate(&mut buf, 2, 0, Rotation::Rotate90);
    assert_eq!(buf, vec!["c", "a", "d", "b"]);
}

#[test]
#[should_panic(expected = "does not fit")]
fn window_past_the_end_panics() {
    let mut buf = vec![0u8; 16];
    transpose(&mut buf, 4, 1);
}

#[test]
#[should_panic(expected = "does not fit")]
fn rotate180_past_the_end_panics() {
    let mut buf = vec![0u8; 10];
    rotate(&mut buf, 4, 0, Rotation::Rotate180);
}

#[test]
fn for_each_window_visits_every_glyph() {
    let mut buf: Vec<u32> = (0..8).collect();
    for_each_window(&mut buf, 2, transpose);
    assert_eq!(buf, vec![0, 2, 1, 3, 4, 6, 5, 7]);
}

#[test]
fn rotation_composition() {
    assert_eq!(Rotation::Rotate90.then(Rotation::Rotate270), Rotation::Rotate0);
    assert_eq!(Rotation::Rotate180.then(Rotation::Rotate270), Rotation::Rotate90);
    assert_eq!(Rotation::from_quarter_turns(7), Rotation::Rotate270);
    assert_eq!(Rotation::default(), Rotation::Rotate0);
}

#[test]
fn populate_fills_everything() {
    let mut buf = vec![0u8; 5];
    populate(&mut buf, 9);
    assert_eq!(buf, vec![9; 5]);
}
