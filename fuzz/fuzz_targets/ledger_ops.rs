#![no_main]

use libfuzzer_sys::fuzz_target;
use mockbase::{CallRef, Mock, Mockable};

// Drives arbitrary record/reset sequences through one mock and checks the
// ledger against a simple counting model.
fuzz_target!(|data: &[u8]| {
    let mock = Mock::new();
    let first: CallRef<u8, ()> = CallRef::new("first");
    let second: CallRef<u8, ()> = CallRef::new("second");
    let mut first_count = 0usize;
    let mut second_count = 0usize;

    for byte in data {
        match byte % 5 {
            0 => {
                mock.invoke_unit(&first, *byte);
                first_count += 1;
            }
            1 => {
                mock.invoke_unit(&second, *byte);
                second_count += 1;
            }
            2 => {
                mock.reset_invocations_for(&first);
                first_count = 0;
            }
            3 => {
                mock.reset_invocations_for(&second);
                second_count = 0;
            }
            _ => {
                mock.reset_invocations();
                first_count = 0;
                second_count = 0;
            }
        }
        assert!(mock.has_invoked_exactly(&first, first_count));
        assert!(mock.has_invoked_exactly(&second, second_count));
    }

    let calls = mock.invocations(&first);
    assert_eq!(calls.len(), first_count);
    for (i, call) in calls.iter().enumerate() {
        assert_eq!(call.sequence, i);
    }
});
