// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use cuon_matrix::{Matrix4, Vector3, Vector4};

const EPS: f32 = 1e-5;

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
];

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

/// Row-by-column product written from the textbook definition.
fn naive_product(a: &Matrix4, b: &Matrix4) -> [f32; 16] {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[col * 4 + row] = (0..4).map(|k| a.get(row, k) * b.get(k, col)).sum();
        }
    }
    out
}

fn sample() -> Matrix4 {
    Matrix4::from([
        1.0, 2.0, 3.0, 4.0, // col 0
        5.0, 6.0, 7.0, 8.0, // col 1
        9.0, 10.0, 11.0, 12.0, // col 2
        13.0, 14.0, 15.0, 16.0, // col 3
    ])
}

#[test]
fn default_and_identity_agree() {
    assert_eq!(Matrix4::default().to_array(), IDENTITY);
    assert_eq!(Matrix4::identity().to_array(), IDENTITY);
    let mut m = sample();
    assert_eq!(m.set_identity().to_array(), IDENTITY);
}

#[test]
fn copies_do_not_alias() {
    let src = sample();
    let mut copy = src;
    copy[0] = -1.0;
    assert_eq!(src[0], 1.0);

    let mut dst = Matrix4::identity();
    dst.set(&src);
    assert_eq!(dst, src);
    dst[5] = 0.0;
    assert_eq!(src[5], 6.0);
}

#[test]
fn element_layout_is_column_major() {
    let m = sample();
    // row 0, column 3 is the fourth column's first element
    assert_eq!(m.get(0, 3), 13.0);
    assert_eq!(m.get(3, 0), 4.0);
    assert_eq!(m.as_bytes().len(), 64);
    assert_eq!(&m.as_bytes()[..4], &1.0_f32.to_ne_bytes());
    assert_eq!(&m.as_bytes()[48..52], &13.0_f32.to_ne_bytes());
}

#[test]
fn concat_with_identity_is_noop() {
    let mut m = sample();
    m.concat(&Matrix4::identity());
    assert_eq!(m, sample());

    let mut id = Matrix4::identity();
    id.concat(&sample());
    assert_eq!(id, sample());
}

#[test]
fn concat_matches_naive_product() {
    let a = sample();
    let mut b = Matrix4::identity();
    b.set_rotate(30.0, 1.0, 2.0, 3.0).translate(1.0, -2.0, 0.5);
    let mut out = a;
    out.concat(&b);
    approx_eq16(out.to_array(), naive_product(&a, &b));
}

#[test]
fn multiply_is_an_alias_of_concat() {
    let mut b = Matrix4::identity();
    b.set_scale(2.0, 3.0, 4.0);
    let mut via_concat = sample();
    via_concat.concat(&b);
    let mut via_multiply = sample();
    via_multiply.multiply(&b);
    assert_eq!(via_concat, via_multiply);
}

#[test]
fn square_matches_manual_square() {
    let mut m = sample();
    m.square();
    approx_eq16(m.to_array(), naive_product(&sample(), &sample()));
    // first column of the square, computed by hand
    assert_eq!(&m.to_array()[..4], &[90.0, 100.0, 110.0, 120.0]);
}

#[test]
fn operators_match_methods() {
    let mut s = Matrix4::identity();
    s.set_scale(2.0, 3.0, 4.0);
    let a = sample();

    let mut expected = a;
    expected.concat(&s);
    assert_eq!(a * s, expected);

    let mut c = a;
    c *= s;
    assert_eq!(c, expected);
    let mut d = a;
    d *= &s;
    assert_eq!(d, expected);

    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(a * v, a.multiply_vector3(&v));
    let w = Vector4::new(1.0, 2.0, 3.0, 1.0);
    assert_eq!(a * w, a.multiply_vector4(&w));
}

#[test]
fn scale_then_multiply_vector3() {
    let mut m = Matrix4::identity();
    m.set_scale(2.0, 3.0, 4.0);
    let v = m.multiply_vector3(&Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(v.to_array(), [2.0, 3.0, 4.0]);
}

#[test]
fn multiply_vector3_applies_translation_and_ignores_w_row() {
    let mut m = Matrix4::identity();
    m.set_translate(5.0, -3.0, 2.0);
    m[3] = 7.0; // row 3 would only matter for a homogeneous divide
    let p = Vector3::new(2.0, 4.0, -1.0);
    assert_eq!(m.multiply_vector3(&p).to_array(), [7.0, 1.0, 1.0]);
    assert_eq!(p.to_array(), [2.0, 4.0, -1.0]);
}

#[test]
fn multiply_vector4_uses_all_rows() {
    let m = sample();
    let v = m.multiply_vector4(&Vector4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(v.to_array(), [14.0, 16.0, 18.0, 20.0]);
    let dir = m.multiply_vector4(&Vector4::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(dir.to_array(), [5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let mut m = sample();
    m.transpose();
    assert_eq!(
        m.to_array(),
        [
            1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0,
            16.0,
        ]
    );
    m.transpose();
    assert_eq!(m, sample());
}
