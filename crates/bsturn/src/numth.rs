//! Number-theory collaborators: gcd and weak compositions.
//!
//! `integer_vectors(n, k)` enumerates every non-negative integer vector of
//! length `k` summing to `n`, in reverse lexicographic order:
//! `[n,0,..,0]` first, `[0,..,0,n]` last. The count is C(n+k−1, k−1).

/// Non-negative greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a as i64
}

/// Iterator over weak compositions of `total` into `len` parts.
#[derive(Clone, Debug)]
pub struct IntegerVectors {
    next: Option<Vec<u32>>,
}

/// All non-negative integer vectors of length `len` summing to `total`.
pub fn integer_vectors(total: u32, len: usize) -> IntegerVectors {
    let next = match len {
        0 if total == 0 => Some(Vec::new()),
        0 => None,
        _ => {
            let mut v = vec![0; len];
            v[0] = total;
            Some(v)
        }
    };
    IntegerVectors { next }
}

impl Iterator for IntegerVectors {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next.take()?;
        let k = cur.len();
        // Successor: decrement the rightmost positive entry left of the last
        // slot and pour everything to its right into the slot after it.
        if k >= 2 {
            if let Some(i) = (0..k - 1).rev().find(|&i| cur[i] > 0) {
                let mut succ = cur.clone();
                let tail: u32 = succ[i + 1..].iter().sum();
                succ[i] -= 1;
                for x in succ[i + 1..].iter_mut() {
                    *x = 0;
                }
                succ[i + 1] = tail + 1;
                self.next = Some(succ);
            }
        }
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binom(n: u64, k: u64) -> u64 {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(5, -1), 1);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn integer_vectors_order_and_content() {
        let all: Vec<Vec<u32>> = integer_vectors(2, 3).collect();
        assert_eq!(
            all,
            vec![
                vec![2, 0, 0],
                vec![1, 1, 0],
                vec![1, 0, 1],
                vec![0, 2, 0],
                vec![0, 1, 1],
                vec![0, 0, 2],
            ]
        );
    }

    #[test]
    fn integer_vectors_counts() {
        for n in 0..6u32 {
            for k in 1..5usize {
                let got = integer_vectors(n, k).count() as u64;
                assert_eq!(got, binom(n as u64 + k as u64 - 1, k as u64 - 1));
                assert!(integer_vectors(n, k).all(|v| v.iter().sum::<u32>() == n));
            }
        }
    }

    #[test]
    fn integer_vectors_degenerate_lengths() {
        assert_eq!(integer_vectors(0, 0).collect::<Vec<_>>(), vec![Vec::<u32>::new()]);
        assert_eq!(integer_vectors(3, 0).count(), 0);
        assert_eq!(integer_vectors(3, 1).collect::<Vec<_>>(), vec![vec![3]]);
    }
}
