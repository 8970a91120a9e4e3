/// Receives the entered text after every accepted keystroke.
///
/// The text is the unmasked passcode. Hosts that log it should log its
/// length only.
pub trait PasscodeObserver {
    fn on_key_pressed(&mut self, text: &str);
}

impl<F> PasscodeObserver for F
where
    F: FnMut(&str),
{
    fn on_key_pressed(&mut self, text: &str) {
        self(text)
    }
}
