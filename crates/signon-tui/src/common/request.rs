/// Identifier for one in-flight network request.
///
/// Result events carry the id they were issued with; the reducer drops any
/// result whose id no longer matches the latest issued id for that
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Monotonic request id generator, owned by the reducer state.
#[derive(Debug, Default)]
pub struct RequestSeq {
    next: u64,
}

impl RequestSeq {
    pub fn next_id(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        let mut seq = RequestSeq::default();
        let a = seq.next_id();
        let b = seq.next_id();
        assert_ne!(a, b);
    }
}
