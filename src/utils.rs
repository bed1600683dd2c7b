pub fn set_panic_hook() {
    // Routes panic messages to console.error instead of an opaque
    // "unreachable executed" trap. Only present with the
    // `console_error_panic_hook` feature, which is on by default.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
