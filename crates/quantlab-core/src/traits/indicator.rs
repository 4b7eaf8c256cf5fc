//! Indicator trait definition.

/// Trait for technical indicators with index-aligned output.
///
/// The output vector has the same length as the input; positions where
/// the trailing window has not yet filled are `None`. Alignment keeps
/// indicator values addressable by bar index, which is what signal
/// generation needs.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Option<Self::Output>>;

    /// Get the window length.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WindowSum {
        period: usize,
    }

    impl Indicator for WindowSum {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
            data.iter()
                .enumerate()
                .map(|(i, _)| {
                    if i + 1 < self.period {
                        None
                    } else {
                        Some(data[i + 1 - self.period..=i].iter().sum())
                    }
                })
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "window-sum"
        }
    }

    #[test]
    fn test_output_is_aligned_with_input() {
        let indicator = WindowSum { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        assert_eq!(result[2], Some(6.0));
        assert_eq!(result[4], Some(12.0));
    }
}
