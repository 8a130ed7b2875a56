use mockbase::{CallRef, Mock, Mockable};
use proptest::prelude::*;

use crate::utils::arg_pairs;

proptest! {
    #[test]
    fn test_history_preserves_order_and_sequence(args in arg_pairs()) {
        let mock = Mock::new();
        let site: CallRef<(String, i32), ()> = CallRef::new("op");
        for pair in &args {
            mock.invoke_unit(&site, pair.clone());
        }

        let calls = mock.invocations(&site);
        prop_assert_eq!(calls.len(), args.len());
        for (i, call) in calls.iter().enumerate() {
            prop_assert_eq!(call.sequence, i);
            prop_assert_eq!(&call.arguments, &args[i]);
        }
    }

    #[test]
    fn test_exact_count_matches_only_the_true_count(args in arg_pairs(), probe in 0usize..40) {
        let mock = Mock::new();
        let site: CallRef<(String, i32), ()> = CallRef::new("op");
        for pair in &args {
            mock.invoke_unit(&site, pair.clone());
        }

        prop_assert_eq!(mock.has_invoked(&site), !args.is_empty());
        prop_assert_eq!(mock.has_invoked_exactly(&site, probe), probe == args.len());
        prop_assert!(mock.has_invoked_exactly(&site, args.len()));
    }

    #[test]
    fn test_reset_isolates_operations(first in arg_pairs(), second in arg_pairs()) {
        let mock = Mock::new();
        let kept: CallRef<(String, i32), ()> = CallRef::new("kept");
        let cleared: CallRef<(String, i32), ()> = CallRef::new("cleared");
        for pair in &first {
            mock.invoke_unit(&kept, pair.clone());
        }
        for pair in &second {
            mock.invoke_unit(&cleared, pair.clone());
        }

        mock.reset_invocations_for(&cleared);
        prop_assert_eq!(mock.invocations(&kept).len(), first.len());
        prop_assert!(!mock.has_invoked(&cleared));

        // Sequences restart after a reset.
        mock.invoke_unit(&cleared, ("again".to_string(), 0));
        prop_assert_eq!(mock.invocations(&cleared)[0].sequence, 0);
    }
}
