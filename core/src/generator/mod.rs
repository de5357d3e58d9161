use crate::*;
pub use random::*;

mod random;

/// Supplies tile colors while a board is being dealt.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

impl<F: FnMut() -> Color> ColorSource for F {
    fn next_color(&mut self) -> Color {
        self()
    }
}
