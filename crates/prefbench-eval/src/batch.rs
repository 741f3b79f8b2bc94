use prefbench_core::error::{BenchError, Result};

/// Iterator over fixed-size, contiguous batches of an underlying iterator.
///
/// Every batch holds `batch_size` items except possibly the last one.
#[derive(Debug, Clone)]
pub struct BatchIter<I> {
    inner: I,
    batch_size: usize,
}

/// Split `items` into batches of `batch_size`, preserving order.
pub fn batch_iter<I: IntoIterator>(items: I, batch_size: usize) -> Result<BatchIter<I::IntoIter>> {
    if batch_size == 0 {
        return Err(BenchError::InvalidArgument(
            "batch_size must be positive".into(),
        ));
    }
    Ok(BatchIter {
        inner: items.into_iter(),
        batch_size,
    })
}

impl<I: Iterator> Iterator for BatchIter<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<_> = self.inner.by_ref().take(self.batch_size).collect();
        if batch.is_empty() { None } else { Some(batch) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.batch_size),
            upper.map(|n| n.div_ceil(self.batch_size)),
        )
    }
}
