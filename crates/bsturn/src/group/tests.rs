use super::*;
use crate::error::BsError;
use crate::word::{inverse, t_exp, tighten, Letter, Word};
use proptest::prelude::*;

fn w(s: &str) -> Word {
    s.parse().unwrap()
}

fn bs(m: i64, l: i64) -> GroupParams {
    GroupParams::new(m, l).unwrap()
}

fn word_strategy() -> impl Strategy<Value = Word> {
    proptest::collection::vec(
        prop_oneof![
            Just(Letter::A),
            Just(Letter::AInv),
            Just(Letter::T),
            Just(Letter::TInv)
        ],
        0..14,
    )
    .prop_map(Word::from_letters)
}

fn params_strategy() -> impl Strategy<Value = GroupParams> {
    (
        prop_oneof![-3i64..=-1, 1i64..=4],
        prop_oneof![-3i64..=-1, 1i64..=5],
    )
        .prop_map(|(m, l)| bs(m, l))
}

/// Every a-block directly before a t-letter is shorter than that letter's modulus.
fn blocks_bounded(g: &Word, p: GroupParams) -> bool {
    let mut run = 0usize;
    for &x in g.letters() {
        if x.is_a() {
            run += 1;
            continue;
        }
        if run >= p.moduli(x).0 {
            return false;
        }
        run = 0;
    }
    true
}

#[test]
fn zero_parameters_are_rejected() {
    assert_eq!(
        GroupParams::new(0, 3),
        Err(BsError::ZeroParameter { m: 0, l: 3 })
    );
    assert!(GroupParams::new(2, 0).is_err());
    assert!(GroupParams::new(-2, 3).is_ok());
}

#[test]
fn moduli_follow_t_sign() {
    let p = bs(2, -3);
    assert_eq!(p.moduli(Letter::T), (3, 2));
    assert_eq!(p.moduli(Letter::TInv), (2, 3));
    assert!(p.swap_sign());
    assert_eq!(p.moved(Letter::A), Letter::AInv);
    assert_eq!(p.max_abs(), 3);
    assert!(!bs(-2, -3).swap_sign());
}

#[test]
fn normal_form_known_values() {
    let cases = [
        ("aaatAAA", 2, 1, "taaa"),
        ("aaatAAA", 1, 2, "atAA"),
        ("aat", 2, 3, "aat"),
        ("aaaT", 2, 3, "aTaaa"),
        ("aaaaT", 2, -3, "TAAAAAA"),
        ("tAAtaaT", 2, 3, "ta"),
        ("atAAATa", 2, 3, "atATAA"),
        ("aatAAAtaT", 3, 2, "ttaT"),
        ("", 2, 3, ""),
        ("aaaa", 2, 3, "aaaa"),
        ("TaatAA", 1, 2, "A"),
        ("aataT", 1, 1, "aaa"),
        ("aaTaat", 2, 3, "Taataa"),
        ("AAAtAAT", -2, 3, ""),
    ];
    for (g, m, l, want) in cases {
        assert_eq!(
            normal_form(&w(g), bs(m, l)).to_string(),
            want,
            "normal_form({g}, {m}, {l})"
        );
    }
}

#[test]
fn normal_form_bounds_blocks_in_example() {
    let p = bs(2, 1);
    let nf = normal_form(&w("aaatAAA"), p);
    assert_eq!(tighten(&nf), nf);
    assert!(blocks_bounded(&nf, p));
}

#[test]
fn normal_form_handles_long_exponents_without_recursion() {
    let g = Word::power(Letter::A, 4000).concat(&w("t"));
    let nf = normal_form(&g, bs(3, 1));
    assert_eq!(nf.first(), Some(Letter::T));
    assert_eq!(nf.len(), 1 + 12000);
}

#[test]
fn cyclic_normal_known_values() {
    let cases = [
        ("taTA", 2, 3, "taTA"),
        ("aatAATaa", 2, 3, "a"),
        ("tAAATaa", 2, 3, "tATA"),
        ("taaTA", 1, 2, "aaa"),
        ("tataTATA", 2, 4, "tataTATA"),
        ("ataT", 2, 1, "aaa"),
        ("aataaT", 2, 3, "aaaaa"),
        ("TaataA", 2, 2, "aa"),
    ];
    for (g, m, l, want) in cases {
        assert_eq!(
            cyclic_normal(&w(g), bs(m, l)).to_string(),
            want,
            "cyclic_normal({g}, {m}, {l})"
        );
    }
}

#[test]
fn cyclic_normal_cancels_letters_appended_by_the_last_move() {
    let cn = cyclic_normal(&w("tAaATaaTtaA"), bs(-3, -2));
    assert_eq!(cn.to_string(), "aa");
    assert_eq!(tighten(&cn), cn);
}

#[test]
fn cyclic_normal_of_trivial_element_is_empty() {
    assert!(cyclic_normal(&w(""), bs(2, 3)).is_empty());
    assert!(cyclic_normal(&w("atAT"), bs(1, 1)).is_empty());
}

#[test]
fn alternation_examples() {
    assert!(is_alternating(&w("taTA")));
    assert!(is_alternating(&w("taTAtaTA")));
    assert!(is_alternating(&w("aa")));
    assert!(is_alternating(&w("")));
    assert!(!is_alternating(&w("tAtA")));
    assert!(!is_alternating(&w("tTaa")));
    assert!(!is_alternating(&w("ttaTT")));
    assert!(!is_alternating(&w("tataTT")));
    assert!(!is_alternating(&w("taTaTAtA")));
}

#[test]
fn extremal_surface_examples() {
    let cases = [
        ("taTA", 2, 3, false),
        ("taaTAAA", 2, 3, true),
        ("taaaTAA", 2, 3, false),
        ("TaatAAA", 2, 3, false),
        ("taaTAAAtaTA", 2, 3, false),
        ("tAATaaa", 2, 3, true),
        ("taaTAAA", -2, 3, false),
    ];
    for (g, m, l, want) in cases {
        assert_eq!(
            has_extremal_surface(&w(g), bs(m, l)),
            want,
            "has_extremal_surface({g}, {m}, {l})"
        );
    }
    assert!(!has_extremal_surface(&w("aaa"), bs(2, 3)));
}

/// Tight, cyclically reduced, and ending in `t^{±1} a^k` with a single-case
/// a-run whenever a t-letter is present.
fn cyclic_shape_holds(cn: &Word) -> bool {
    if tighten(cn) != *cn {
        return false;
    }
    let xs = cn.letters();
    if let (Some(&first), Some(&last)) = (xs.first(), xs.last()) {
        if xs.len() >= 2 && first == last.inverse() {
            return false;
        }
    }
    match xs.iter().rposition(|x| x.is_t()) {
        Some(i) => xs[i + 1..].windows(2).all(|p| p[0] == p[1]),
        None => true,
    }
}

proptest! {
    #[test]
    fn cyclic_normal_is_tight_reduced_and_ends_in_one_term(g in word_strategy(), p in params_strategy()) {
        let cn = cyclic_normal(&g, p);
        prop_assert!(cyclic_shape_holds(&cn), "cyclic_normal({}) = {}", g, cn);
    }

    #[test]
    fn cyclic_normal_preserves_t_exponent(g in word_strategy(), p in params_strategy()) {
        prop_assert_eq!(t_exp(&cyclic_normal(&g, p)), t_exp(&g));
    }

    #[test]
    fn normal_form_is_idempotent(g in word_strategy(), p in params_strategy()) {
        let nf = normal_form(&g, p);
        prop_assert_eq!(normal_form(&nf, p), nf);
    }

    #[test]
    fn normal_form_is_tight_and_bounded(g in word_strategy(), p in params_strategy()) {
        let nf = normal_form(&g, p);
        prop_assert_eq!(tighten(&nf), nf.clone());
        prop_assert!(blocks_bounded(&nf, p));
    }

    #[test]
    fn normal_form_preserves_t_exponent(g in word_strategy(), p in params_strategy()) {
        prop_assert_eq!(t_exp(&normal_form(&g, p)), t_exp(&g));
    }

    #[test]
    fn word_times_inverse_normalizes_to_identity(g in word_strategy(), p in params_strategy()) {
        prop_assert!(normal_form(&g.concat(&inverse(&g)), p).is_empty());
    }

    #[test]
    fn bs11_normal_form_pushes_every_a_to_the_end(g in word_strategy()) {
        let nf = normal_form(&g, bs(1, 1));
        let first_a = nf.letters().iter().position(|x| x.is_a()).unwrap_or(nf.len());
        prop_assert!(nf.letters()[first_a..].iter().all(|x| x.is_a()));
    }

    #[test]
    fn nonzero_t_exponent_never_alternates(g in word_strategy()) {
        if t_exp(&g) != 0 {
            prop_assert!(!is_alternating(&g));
        }
    }

    #[test]
    fn words_without_t_alternate(n in 0usize..10, upper in any::<bool>()) {
        let x = if upper { Letter::AInv } else { Letter::A };
        prop_assert!(is_alternating(&Word::power(x, n)));
    }
}
