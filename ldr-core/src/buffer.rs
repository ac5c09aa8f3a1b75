//! Fixed-Size Moving-Average Buffer for Illuminance Smoothing
//!
//! ## Overview
//!
//! Photocell readings flicker with mains lighting and ADC noise. This module
//! smooths them with an unweighted moving average over the last `capacity`
//! samples, using a ring buffer whose storage is fixed at compile time through
//! const generics.
//!
//! ## Phases
//!
//! ```text
//!            push (len < capacity - 1)
//!              ┌──────┐
//!              ▼      │
//!  new ──▶ ┌─────────┐ │  push (last free slot)   ┌────────┐
//!          │ Filling │─┴─────────────────────────▶│ Steady │◀─┐ push
//!          └─────────┘                            └────────┘──┘
//!               ▲                                      │
//!               └────────────── reset() ───────────────┘
//!
//!  new(0) ──▶ Disabled   (terminal: samples pass through unchanged)
//! ```
//!
//! - **Filling**: the average is taken over the samples written so far, so the
//!   first reading is reported as-is instead of being dragged toward zero.
//! - **Steady**: every push evicts the oldest sample and the average is taken
//!   over the full capacity.
//!
//! ## Memory Layout
//!
//! History lives in a `heapless::Vec<f32, N>`. Its length doubles as the count
//! of samples written, so no sentinel value is needed to mark empty slots:
//!
//! ```text
//! SmoothingBuffer<5>, capacity 3, after pushing 10, 20, 30, 40:
//! ┌────┬────┬────┬───┬───┐
//! │ 40 │ 20 │ 30 │   │   │   history.len() = 3, sum = 90
//! └────┴────┴────┴───┴───┘
//!         ↑
//!         └── next = 1 (oldest sample, evicted by the next push)
//!
//! Total size = 4 * N + 3 * size_of::<usize>() + 8 bytes
//! ```
//!
//! The running sum makes every push O(1) regardless of capacity. It is kept
//! in `f64` and recomputed from the stored samples each time the write index
//! wraps, so evicting a huge reading (raw code 1 on a grounded divider is
//! tens of millions of lux) leaves no lasting error.
//!
//! ## Usage Example
//!
//! ```rust
//! use ldr_core::buffer::SmoothingBuffer;
//!
//! let mut smoothing: SmoothingBuffer<8> = SmoothingBuffer::new(3);
//!
//! assert_eq!(smoothing.push(10.0), 10.0);
//! assert_eq!(smoothing.push(20.0), 15.0);
//! assert_eq!(smoothing.push(30.0), 20.0);
//! assert_eq!(smoothing.push(40.0), 30.0); // 10 evicted
//! ```

use heapless::Vec;

/// Where a buffer is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingPhase {
    /// Capacity zero: samples pass through unchanged
    Disabled,
    /// Fewer than `capacity` samples written since the last reset
    Filling,
    /// Every slot written at least once
    Steady,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SmoothingPhase {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Disabled => defmt::write!(fmt, "Disabled"),
            Self::Filling => defmt::write!(fmt, "Filling"),
            Self::Steady => defmt::write!(fmt, "Steady"),
        }
    }
}

/// Fixed-size moving-average buffer
///
/// ## Type Parameter
///
/// - `N`: Structural maximum number of samples. The configured capacity may
///   be anything in `0..=N`.
///
/// ## Internal Invariants
///
/// - `capacity <= N`
/// - `history.len() <= capacity`
/// - `sum` equals the sum of `history`, recomputed from scratch once per lap
///   so rounding left behind by a large evicted sample does not accumulate
/// - `next < capacity` whenever `capacity > 0`
/// - While Filling, `next == history.len()`
///
/// ## Thread Safety
///
/// This type is not thread-safe. If an interrupt handler and the main loop
/// both push, wrap it in a critical-section mutex.
#[derive(Debug, Clone)]
pub struct SmoothingBuffer<const N: usize> {
    /// Samples written, in slot order (not chronological once Steady)
    history: Vec<f32, N>,

    /// Configured window size
    capacity: usize,

    /// Slot the next push writes
    next: usize,

    /// Running sum of `history`, resynchronised each time `next` wraps
    sum: f64,
}

impl<const N: usize> SmoothingBuffer<N> {
    /// Creates an empty buffer averaging over `capacity` samples
    ///
    /// A capacity above `N` is clamped to `N`. A capacity of zero disables
    /// smoothing for the lifetime of the buffer.
    pub fn new(capacity: usize) -> Self {
        if capacity > N {
            log_warn!("Smoothing history {} clamped to {}", capacity, N);
        }

        Self {
            history: Vec::new(),
            capacity: capacity.min(N),
            next: 0,
            sum: 0.0,
        }
    }

    /// Adds a sample and returns the current moving average
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use ldr_core::buffer::SmoothingBuffer;
    /// let mut buf = SmoothingBuffer::<4>::new(2);
    ///
    /// assert_eq!(buf.push(5.0), 5.0);
    /// assert_eq!(buf.push(7.0), 6.0);
    ///
    /// // Third push evicts the first
    /// assert_eq!(buf.push(9.0), 8.0);
    /// ```
    ///
    /// A non-finite sample is averaged like any other, so the result is
    /// non-finite while it is in the window. Evicting an infinite sample
    /// leaves the average NaN until the write index next wraps and the sum is
    /// recomputed.
    pub fn push(&mut self, sample: f32) -> f32 {
        if self.capacity == 0 {
            return sample;
        }

        if self.history.len() < self.capacity {
            let pushed = self.history.push(sample);
            debug_assert!(pushed.is_ok(), "capacity <= N leaves room while Filling");
            self.sum += f64::from(sample);

            let written = self.history.len();
            self.next = if written == self.capacity { 0 } else { written };

            return (self.sum / written as f64) as f32;
        }

        let slot = &mut self.history[self.next];
        self.sum -= f64::from(*slot);
        *slot = sample;
        self.sum += f64::from(sample);

        self.next = (self.next + 1) % self.capacity;
        if self.next == 0 {
            self.resync();
        }

        (self.sum / self.capacity as f64) as f32
    }

    /// Recompute the running sum from the stored samples
    ///
    /// Clears drift and any NaN left by evicting an infinite sample.
    fn resync(&mut self) {
        self.sum = self.history.iter().copied().map(f64::from).sum();
    }

    /// Current moving average without adding a sample
    ///
    /// `None` until the first push, and always `None` when disabled.
    pub fn average(&self) -> Option<f32> {
        if self.history.is_empty() {
            return None;
        }

        Some((self.sum / self.history.len() as f64) as f32)
    }

    /// Configured window size
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently averaged over
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if no sample has been pushed since the last reset
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Check if every slot has been written at least once
    pub fn is_filled(&self) -> bool {
        self.capacity > 0 && self.history.len() == self.capacity
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SmoothingPhase {
        if self.capacity == 0 {
            SmoothingPhase::Disabled
        } else if self.is_filled() {
            SmoothingPhase::Steady
        } else {
            SmoothingPhase::Filling
        }
    }

    /// Drop all samples and return to Filling
    ///
    /// The capacity is kept, so a disabled buffer stays disabled.
    pub fn reset(&mut self) {
        self.history.clear();
        self.next = 0;
        self.sum = 0.0;
        log_debug!("Smoothing history reset (capacity {})", self.capacity);
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> SmoothingBufferIter<'_, N> {
        SmoothingBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Gets a sample by its logical index (0 = oldest, len-1 = newest)
    ///
    /// While Filling, logical and slot indices match. Once Steady the oldest
    /// sample sits at `next`:
    ///
    /// ```text
    /// Slots:    [D, E, A, B, C]  (next = 2)
    /// Logical:  [A, B, C, D, E]
    ///
    /// logical[i] = slots[(next + i) % capacity]
    /// ```
    fn get(&self, index: usize) -> Option<f32> {
        if index >= self.history.len() {
            return None;
        }

        let slot = if self.is_filled() {
            (self.next + index) % self.capacity
        } else {
            index
        };

        self.history.get(slot).copied()
    }
}

/// Iterator over smoothing history, oldest first
pub struct SmoothingBufferIter<'a, const N: usize> {
    buffer: &'a SmoothingBuffer<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for SmoothingBufferIter<'a, N> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.buffer.get(self.index)?;
        self.index += 1;
        Some(sample)
    }
}
