// Grid overlay drawn over the camera view
pub const GRID_SIZES: [u32; 6] = [2, 3, 4, 5, 6, 8];
pub const DEFAULT_GRID_SIZE: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOverlay {
    pub visible: bool,
    /// Cells per side.
    pub size: u32,
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self {
            visible: false,
            size: DEFAULT_GRID_SIZE,
        }
    }
}

impl GridOverlay {
    /// Picking a size always shows the grid. Sizes outside the menu are ignored.
    pub fn select_size(&mut self, size: u32) {
        if GRID_SIZES.contains(&size) {
            self.size = size;
            self.visible = true;
        }
    }

    /// Remembered size from a previous visit; the grid stays hidden.
    pub fn restore(&mut self, size: u32) {
        if GRID_SIZES.contains(&size) {
            self.size = size;
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn cell_percent(&self) -> f64 {
        100.0 / self.size.max(1) as f64
    }

    pub fn label(&self) -> String {
        if self.visible {
            format!("{}×{}", self.size, self.size)
        } else {
            "Grid".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_shows_and_toggle_keeps_size() {
        let mut g = GridOverlay::default();
        assert_eq!(g.label(), "Grid");
        g.select_size(3);
        assert!(g.visible);
        assert_eq!(g.label(), "3×3");
        g.toggle();
        assert!(!g.visible);
        assert_eq!(g.size, 3);
        assert_eq!(g.label(), "Grid");
        g.toggle();
        assert_eq!(g.label(), "3×3");
    }

    #[test]
    fn unknown_sizes_are_ignored() {
        let mut g = GridOverlay::default();
        g.select_size(0);
        g.select_size(7);
        g.restore(9);
        assert_eq!(g, GridOverlay::default());
        g.restore(6);
        assert_eq!((g.size, g.visible), (6, false));
    }

    #[test]
    fn cell_percent_divides_view() {
        let mut g = GridOverlay::default();
        assert_eq!(g.cell_percent(), 25.0);
        g.select_size(5);
        assert_eq!(g.cell_percent(), 20.0);
    }
}
