use log::{debug, trace, warn};
use num_traits::{Num, NumCast};

use crate::error::{Error, Result};

/// Minimum and maximum cover every sample added since the count was last
/// zero, not only the samples still in the window.
#[derive(Debug, Clone)]
pub struct RunningAverage<T> {
    values: Box<[T]>,
    index: usize,
    count: usize,
    sum: T,
    // only meaningful while count > 0
    min: T,
    max: T,
}

impl<T> RunningAverage<T>
where
    T: Copy + Num + NumCast + PartialOrd,
{
    /// Never fails. When [`try_new`](Self::try_new) would, the average is
    /// disabled instead: `add` does nothing and every query returns `None`.
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap_or_else(|e| {
            warn!("Running average of {capacity} samples is disabled: {e}");
            Self::with_values(Box::default())
        })
    }

    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        // the count divides the sum, so it has to be representable as T
        if T::from(capacity).is_none() {
            return Err(Error::CapacityOutOfRange(capacity));
        }
        let mut values = Vec::new();
        values.try_reserve_exact(capacity)?;
        values.resize(capacity, T::zero());
        debug!("Allocated running average of {capacity} samples");
        Ok(Self::with_values(values.into_boxed_slice()))
    }

    fn with_values(values: Box<[T]>) -> Self {
        let mut avg = Self {
            values,
            index: 0,
            count: 0,
            sum: T::zero(),
            min: T::zero(),
            max: T::zero(),
        };
        avg.clear();
        avg
    }

    pub fn clear(&mut self) {
        self.count = 0;
        self.index = 0;
        self.sum = T::zero();
        // zeroed slots can be subtracted in `add` without checking whether
        // they were ever written
        self.values.fill(T::zero());
    }

    pub fn add(&mut self, value: T) {
        if self.is_disabled() {
            return;
        }
        trace!("Adding sample at slot {}", self.index);

        self.sum = self.sum - self.values[self.index] + value;
        self.values[self.index] = value;
        self.index += 1;
        if self.index == self.values.len() {
            self.index = 0;
        }

        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }

        if self.count < self.values.len() {
            self.count += 1;
        }
    }

    pub fn fill(&mut self, value: T, repeat: usize) {
        debug!(
            "Filling running average of {} samples with {repeat} repeats",
            self.capacity()
        );
        self.clear();
        for _ in 0..repeat {
            self.add(value);
        }
    }

    pub fn average(&self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / T::from(self.count)?)
    }

    pub fn min(&self) -> Option<T> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<T> {
        (self.count > 0).then_some(self.max)
    }

    /// Slots are physical storage positions: once the buffer has wrapped,
    /// slot 0 is not the oldest sample.
    pub fn element(&self, index: usize) -> Option<T> {
        (index < self.count).then(|| self.values[index])
    }

    pub fn sum(&self) -> T {
        self.sum
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        !self.is_disabled() && self.count == self.values.len()
    }

    pub fn is_disabled(&self) -> bool {
        self.values.is_empty()
    }
}
