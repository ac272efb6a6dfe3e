use crate::entities::Container;
use crate::util::EPS;

/// Advancing placement cursor shared by the shelf-style heuristics.
///
/// Units fill a row along the length axis, rows advance along the width
/// axis, layers stack along the height axis. The cursor never revisits
/// space it has passed.
#[derive(Debug, Default)]
pub(crate) struct ShelfCursor {
    x: f64,
    y: f64,
    z: f64,
    /// Widest unit in the current row
    row_width: f64,
    /// Tallest unit in the current layer
    layer_height: f64,
}

/// A feasible position for one unit, together with the row/layer
/// bookkeeping that committing it entails.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fit {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    row_width: f64,
    layer_height: f64,
}

impl ShelfCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where a unit with oriented dimensions `(l, w, h)` would land,
    /// or `None` if no space remains for it.
    pub fn probe(&self, container: &Container, l: f64, w: f64, h: f64) -> Option<Fit> {
        let (mut x, mut y, mut z) = (self.x, self.y, self.z);
        let (mut row_width, mut layer_height) = (self.row_width, self.layer_height);

        if x + l > container.length + EPS {
            //unit does not fit in the current row, start a new one
            x = 0.0;
            y += row_width;
            row_width = 0.0;
        }
        if y + w > container.width + EPS {
            //row does not fit in the current layer, start a new one
            x = 0.0;
            y = 0.0;
            z += layer_height;
            row_width = 0.0;
            layer_height = 0.0;
        }

        let fits = x + l <= container.length + EPS
            && y + w <= container.width + EPS
            && z + h <= container.height + EPS;

        fits.then_some(Fit {
            x,
            y,
            z,
            row_width: row_width.max(w),
            layer_height: layer_height.max(h),
        })
    }

    /// Advances the cursor past a unit of oriented length `l` placed at `fit`.
    pub fn commit(&mut self, fit: Fit, l: f64) {
        self.x = fit.x + l;
        self.y = fit.y;
        self.z = fit.z;
        self.row_width = fit.row_width;
        self.layer_height = fit.layer_height;
    }
}
