/// A tangent arc rounding the corner between the elements before and after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fillet {
    pub radius: f64,
}

impl Fillet {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}
