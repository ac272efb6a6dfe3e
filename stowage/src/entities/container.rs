/// A container in which [`Item`](crate::entities::Item)'s can be loaded.
/// Immutable input to the packing service.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub id: usize,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(id: usize, length: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            length,
            width,
            height,
        }
    }

    /// The interior volume of the container.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}
