use crate::core::catalog::Catalog;
use crate::core::{Item, RandomSource};
use crate::utils::error::{DrawError, Result};

/// Weighted draws over a [`Catalog`], with replacement.
///
/// Item `i` is selected with probability `weight_i / total_weight`. The
/// sampler owns its random source.
pub struct Sampler<R: RandomSource> {
    catalog: Catalog,
    rng: R,
}

impl<R: RandomSource> Sampler<R> {
    pub fn new(catalog: Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// Draws one item using a cumulative-weight scan over the catalog order.
    pub fn draw(&mut self) -> Result<&Item> {
        let total = self.catalog.total_weight();
        if total == 0 {
            return Err(DrawError::SamplingInvariantViolation {
                message: format!(
                    "total weight is 0 across {} items",
                    self.catalog.len()
                ),
            });
        }

        let roll = self.rng.next_int(total).saturating_add(1);
        let mut cumulative = 0u64;
        for item in self.catalog.iter() {
            cumulative += u64::from(item.weight);
            if roll <= cumulative {
                return Ok(item);
            }
        }

        // Only reachable when the random source breaks its [0, bound) contract.
        Err(DrawError::SamplingInvariantViolation {
            message: format!("roll {} exceeds total weight {}", roll, total),
        })
    }
}
