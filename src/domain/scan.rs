//! Single-pass scans over flat sequences.

use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Length of the longest contiguous run of `true` values.
///
/// Empty and all-`false` sequences yield 0; an all-`true` sequence yields its length.
#[instrument(level = "trace", skip(flags), fields(len = flags.len()))]
pub fn longest_run(flags: &[bool]) -> usize {
    let mut best = 0;
    let mut current = 0;

    for &flag in flags {
        if flag {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }

    trace!(best, "longest run");
    best
}

/// Largest sum of `k` consecutive elements, computed with a sliding window.
///
/// A window of size 0 sums to 0. Sums are accumulated in `i128`, so intermediate
/// windows may exceed `i64`; only the result has to fit.
///
/// # Errors
/// [`DomainError::InvalidWindow`] if `k > nums.len()`,
/// [`DomainError::SumOverflow`] if the largest window sum does not fit into `i64`.
#[instrument(level = "trace", skip(nums), fields(len = nums.len()))]
pub fn largest_window_sum(nums: &[i64], k: usize) -> DomainResult<i64> {
    if k > nums.len() {
        return Err(DomainError::InvalidWindow {
            size: k,
            len: nums.len(),
        });
    }
    if k == 0 {
        return Ok(0);
    }

    let mut sum: i128 = nums[..k].iter().map(|&n| i128::from(n)).sum();
    let mut best = sum;
    for (&leaving, &entering) in nums.iter().zip(&nums[k..]) {
        sum += i128::from(entering);
        sum -= i128::from(leaving);
        best = best.max(sum);
    }

    trace!(%best, "largest window sum");
    i64::try_from(best).map_err(|_| DomainError::SumOverflow { size: k })
}

/// Interprets `bits` (most significant first) as an unsigned integer.
///
/// Leading zeros are ignored, so only significant bits count against the 64-bit limit.
///
/// # Errors
/// [`DomainError::Overflow`] if more than 64 significant bits remain.
pub fn bits_to_decimal(bits: &[bool]) -> DomainResult<u64> {
    let significant = match bits.iter().position(|&b| b) {
        Some(first_one) => &bits[first_one..],
        None => return Ok(0),
    };
    if significant.len() > u64::BITS as usize {
        return Err(DomainError::Overflow {
            bits: significant.len(),
        });
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)))
}
