//! Panic hook chaining. Panic hooks are process-global, so this lives in its
//! own test binary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cwm::terminal::install_panic_hook;

#[test]
fn panic_hook_restores_then_runs_previous_hook() {
    let previous_ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&previous_ran);
    std::panic::set_hook(Box::new(move |_| flag.store(true, Ordering::SeqCst)));

    install_panic_hook();
    let result = std::panic::catch_unwind(|| panic!("boom"));

    let _ = std::panic::take_hook();
    assert!(result.is_err());
    assert!(previous_ran.load(Ordering::SeqCst));
}
