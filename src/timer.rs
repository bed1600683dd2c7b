// Scope guard around console.time / console.timeEnd. A guard without a label
// touches nothing, so callers can leave profiling switched off for free.

use web_sys::console;

pub struct Timer<'a> {
    label: Option<&'a str>,
}

impl<'a> Timer<'a> {
    pub fn start(label: Option<&'a str>) -> Timer<'a> {
        if let Some(label) = label {
            console::time_with_label(label);
        }
        Timer { label }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        if let Some(label) = self.label {
            console::time_end_with_label(label);
        }
    }
}
