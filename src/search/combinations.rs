//! Lazy k-combination generator.
//!
//! Yields index combinations of `0..n` in lexicographic order, one at a
//! time, without materializing the sequence. Combinations are at most five
//! wide, so each one is a small `Copy` value.

/// Widest combination the generator produces.
pub const MAX_K: usize = 5;

/// Binomial coefficient C(n, k).
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        // Exact at every step: the running product is C(n, i + 1).
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}

/// One combination: up to `MAX_K` ascending indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    indices: [u8; MAX_K],
    len: u8,
}

impl Combo {
    /// The indices, ascending.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices[..self.len as usize]
    }

    /// Number of indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Check if this is the empty combination.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Iterator over all k-combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    current: [u8; MAX_K],
    started: bool,
    done: bool,
}

impl Combinations {
    /// Create a generator for C(n, k) combinations.
    ///
    /// # Panics
    /// Panics if `k > MAX_K` or `n > u8::MAX`.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(k <= MAX_K, "combination width {} exceeds {}", k, MAX_K);
        assert!(n <= u8::MAX as usize, "pool size {} too large", n);
        let mut generator = Self {
            n,
            k,
            current: [0; MAX_K],
            started: false,
            done: false,
        };
        generator.reset();
        generator
    }

    /// Restart from the first combination.
    pub fn reset(&mut self) {
        for (i, slot) in self.current.iter_mut().enumerate() {
            *slot = i as u8;
        }
        self.started = false;
        self.done = self.k > self.n;
    }

    /// Total number of combinations this generator yields.
    pub fn count_total(&self) -> u64 {
        binomial(self.n, self.k)
    }

    fn advance(&mut self) -> bool {
        let (n, k) = (self.n, self.k);
        // Rightmost slot that has not reached its final value.
        let Some(i) = (0..k).rev().find(|&i| (self.current[i] as usize) < n - k + i) else {
            return false;
        };
        self.current[i] += 1;
        for j in i + 1..k {
            self.current[j] = self.current[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Combo;

    fn next(&mut self) -> Option<Combo> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(Combo {
            indices: self.current,
            len: self.k as u8,
        })
    }
}
