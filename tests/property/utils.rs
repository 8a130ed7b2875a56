use proptest::prelude::*;

/// Argument sequences for a `(String, i32)` operation, including the empty
/// sequence and repeated values.
pub fn arg_pairs() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec(("[a-z]{0,8}", any::<i32>()), 0..32)
}
