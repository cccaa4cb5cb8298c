//! Capacity bookkeeping shared by [`ArgList`](crate::ArgList) and
//! [`DocRegistry`](crate::DocRegistry).
//!
//! Both containers track a logical capacity next to their `Vec` and grow it by
//! doubling. Reservations go through `try_reserve_exact` so an exhausted
//! allocator surfaces as [`DocError::AllocationFailure`] instead of aborting.

use crate::errors::{Container, DocError};

/// Capacity after one doubling step. An empty buffer grows to a single slot.
pub(crate) const fn doubled(capacity: usize) -> usize {
    if capacity == 0 {
        1
    } else {
        capacity.saturating_mul(2)
    }
}

/// Allocate a buffer with room for exactly `capacity` items.
pub(crate) fn reserve_initial<T>(
    container: Container,
    capacity: usize,
) -> Result<Vec<T>, DocError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity).map_err(|error| {
        tracing::warn!(%container, requested = capacity, %error, "initial reservation failed");
        DocError::AllocationFailure {
            container,
            requested: capacity,
        }
    })?;
    Ok(buf)
}

/// Make room for one more item in `buf`.
///
/// Doubles `capacity` when the buffer is full, clamped to `ceiling` when one
/// is set. Once `ceiling` items are stored every further slot is refused.
/// On error neither `buf` nor `capacity` is modified.
pub(crate) fn reserve_slot<T>(
    buf: &mut Vec<T>,
    capacity: &mut usize,
    ceiling: Option<usize>,
    container: Container,
) -> Result<(), DocError> {
    let len = buf.len();
    if let Some(max) = ceiling
        && len >= max
    {
        tracing::warn!(%container, max, "capacity ceiling reached");
        return Err(DocError::AllocationFailure {
            container,
            requested: len + 1,
        });
    }
    if len < *capacity {
        return Ok(());
    }

    let next = doubled(*capacity);
    let requested = ceiling.map_or(next, |max| next.min(max));
    buf.try_reserve_exact(requested - len).map_err(|error| {
        tracing::warn!(%container, requested, %error, "buffer growth failed");
        DocError::AllocationFailure {
            container,
            requested,
        }
    })?;

    tracing::debug!(%container, from = *capacity, to = requested, "grew buffer");
    *capacity = requested;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(3, 6)]
    #[case(64, 128)]
    #[case(usize::MAX, usize::MAX)]
    fn doubling_schedule(#[case] capacity: usize, #[case] expected: usize) {
        assert_eq!(doubled(capacity), expected);
    }

    #[test]
    fn slot_available_without_growth() {
        let mut buf: Vec<u8> = reserve_initial(Container::ArgList, 4).unwrap();
        let mut capacity = 4;
        buf.push(1);
        reserve_slot(&mut buf, &mut capacity, None, Container::ArgList).unwrap();
        assert_eq!(capacity, 4);
    }

    #[test]
    fn full_buffer_doubles() {
        let mut buf: Vec<u8> = reserve_initial(Container::Registry, 2).unwrap();
        let mut capacity = 2;
        buf.extend([1, 2]);
        reserve_slot(&mut buf, &mut capacity, None, Container::Registry).unwrap();
        assert_eq!(capacity, 4);
        assert!(buf.capacity() >= 4);
    }

    #[test]
    fn zero_capacity_grows_to_one() {
        let mut buf: Vec<u8> = reserve_initial(Container::ArgList, 0).unwrap();
        let mut capacity = 0;
        reserve_slot(&mut buf, &mut capacity, None, Container::ArgList).unwrap();
        assert_eq!(capacity, 1);
    }

    #[test]
    fn growth_is_clamped_to_ceiling() {
        let mut buf: Vec<u8> = reserve_initial(Container::ArgList, 4).unwrap();
        let mut capacity = 4;
        buf.extend([1, 2, 3, 4]);
        reserve_slot(&mut buf, &mut capacity, Some(5), Container::ArgList).unwrap();
        assert_eq!(capacity, 5);
    }

    #[test]
    fn ceiling_refuses_further_slots() {
        let mut buf: Vec<u8> = reserve_initial(Container::Registry, 8).unwrap();
        let mut capacity = 8;
        buf.extend([1, 2]);
        let error = reserve_slot(&mut buf, &mut capacity, Some(2), Container::Registry)
            .expect_err("ceiling of two is already reached");
        assert_eq!(
            error,
            DocError::AllocationFailure {
                container: Container::Registry,
                requested: 3,
            }
        );
        assert_eq!(capacity, 8);
        assert_eq!(buf, [1, 2]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn allocator_refusal_during_growth_is_reported() {
        type Huge = [u8; 1 << 46];
        let mut buf: Vec<Huge> = Vec::new();
        let mut capacity = 0;
        let error = reserve_slot(&mut buf, &mut capacity, None, Container::ArgList)
            .expect_err("a 4 EiB slot cannot be allocated");
        assert_eq!(
            error,
            DocError::AllocationFailure {
                container: Container::ArgList,
                requested: 1,
            }
        );
        assert_eq!(capacity, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn oversized_initial_reservation_fails() {
        let result = reserve_initial::<u64>(Container::Registry, usize::MAX);
        assert_eq!(
            result.unwrap_err(),
            DocError::AllocationFailure {
                container: Container::Registry,
                requested: usize::MAX,
            }
        );
    }
}
