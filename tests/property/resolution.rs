use mockbase::{CallRef, Mock, Mockable};
use proptest::prelude::*;

use crate::utils::arg_pairs;

proptest! {
    #[test]
    fn test_provider_receives_each_argument_pair(args in arg_pairs()) {
        let mock = Mock::new();
        let site: CallRef<(String, i32), String> = CallRef::new("combine");
        mock.register(&site, |(text, n)| format!("{text}/{n}"));

        for pair in &args {
            let expected = format!("{}/{}", pair.0, pair.1);
            prop_assert_eq!(mock.invoke(&site, pair.clone()), expected);
        }
        prop_assert_eq!(mock.invocations(&site).len(), args.len());
    }

    #[test]
    fn test_last_registration_wins_for_any_chain(
        factors in prop::collection::vec(-1000i64..1000, 1..16),
        input in -1000i64..1000,
    ) {
        let mock = Mock::new();
        let site: CallRef<i64, i64> = CallRef::new("scaled");
        for factor in &factors {
            let factor = *factor;
            mock.register(&site, move |n| n * factor);
        }

        let last = factors[factors.len() - 1];
        prop_assert_eq!(mock.invoke(&site, input), input * last);
    }

    #[test]
    fn test_unregistered_fallback_echoes_caller_value(
        value in any::<i32>(),
        arg in "[a-z]{0,8}",
    ) {
        let mock = Mock::new();
        let site: CallRef<String, i32> = CallRef::new("fallback");

        prop_assert_eq!(mock.invoke_or(&site, arg.clone(), value), value);
        prop_assert_eq!(mock.invocations(&site)[0].arguments.clone(), arg);
    }
}
