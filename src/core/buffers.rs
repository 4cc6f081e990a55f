//! Input and output buffers for one benchmark run
//!
//! Both are boxed fixed-length arrays owned by the driver and lent out by
//! exclusive reference to whatever fills them.

use rand::Rng;

use crate::approx::InvSqrt;

/// Paired input/output buffers of length `N`
#[derive(Debug)]
pub struct SampleBuffers<const N: usize> {
    input: Box<[f32; N]>,
    output: Box<[f32; N]>,
}

impl<const N: usize> SampleBuffers<N> {
    /// Zeroed buffers
    pub fn new() -> Self {
        Self {
            input: zeroed(),
            output: zeroed(),
        }
    }

    /// Buffers over fixed inputs, output zeroed
    pub fn from_input(input: [f32; N]) -> Self {
        Self {
            input: Box::new(input),
            output: zeroed(),
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn input(&self) -> &[f32; N] {
        &self.input
    }

    pub fn output(&self) -> &[f32; N] {
        &self.output
    }

    /// Fill the input with `(random % 100) + 0.01` and zero the output.
    ///
    /// Every input lands in [0.01, 99.01).
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        for (input, output) in self.input.iter_mut().zip(self.output.iter_mut()) {
            *input = ((rng.gen::<u32>() % 100) as f64 + 0.01) as f32;
            *output = 0.0;
        }
    }

    /// Overwrite every output slot with `method` applied to its input
    #[inline]
    pub fn apply<M: InvSqrt + ?Sized>(&mut self, method: &M) {
        for (output, &input) in self.output.iter_mut().zip(self.input.iter()) {
            *output = method.inv_sqrt(input);
        }
    }
}

impl<const N: usize> Clone for SampleBuffers<N> {
    fn clone(&self) -> Self {
        let mut input = zeroed::<N>();
        let mut output = zeroed::<N>();
        input.copy_from_slice(&self.input[..]);
        output.copy_from_slice(&self.output[..]);
        Self { input, output }
    }
}

impl<const N: usize> Default for SampleBuffers<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Zeroed array allocated straight on the heap, never staged on the stack
fn zeroed<const N: usize>() -> Box<[f32; N]> {
    // The slice has exactly N elements, so the conversion cannot fail.
    vec![0.0f32; N]
        .into_boxed_slice()
        .try_into()
        .unwrap_or_else(|_| unreachable!())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::Exact;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn regenerate_stays_in_range_and_zeroes_output() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buffers = SampleBuffers::<512>::new();
        buffers.apply(&Exact);
        buffers.regenerate(&mut rng);

        for &x in buffers.input().iter() {
            assert!(x >= 0.01 && x < 99.02, "out of range: {}", x);
            let whole = (x - 0.01).round();
            assert!((x - 0.01 - whole).abs() < 1e-4, "not an integer offset: {}", x);
        }
        assert!(buffers.output().iter().all(|&y| y == 0.0));
    }

    #[test]
    fn regenerate_changes_inputs() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut buffers = SampleBuffers::<256>::new();
        buffers.regenerate(&mut rng);
        let first = *buffers.input();
        buffers.regenerate(&mut rng);
        assert_ne!(&first, buffers.input());
    }

    #[test]
    fn apply_fills_every_slot() {
        let mut buffers = SampleBuffers::from_input([1.0, 4.0, 16.0, 64.0]);
        buffers.apply(&Exact);
        assert_eq!(buffers.output(), &[1.0, 0.5, 0.25, 0.125]);
        assert_eq!(buffers.len(), 4);
        assert!(!buffers.is_empty());
    }

    #[test]
    fn large_buffers_never_touch_a_small_stack() {
        // 4 MiB per buffer on a thread with a 64 KiB stack.
        const LARGE: usize = 1 << 20;
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(|| {
                let buffers = SampleBuffers::<LARGE>::new();
                let copy = buffers.clone();
                (copy.len(), copy.output().iter().all(|&y| y == 0.0))
            })
            .unwrap();
        assert_eq!(handle.join().unwrap(), (LARGE, true));
    }
}
