use super::Rect;

/// One horizontal row of placed rectangles
#[derive(Debug, Clone, Copy)]
struct Shelf {
    y: u32,
    height: u32,
    /// Right edge of the last rectangle on this shelf
    cursor: u32,
}

/// First-fit shelf packer over a fixed working width and a growing height
///
/// Rectangles are expected in decreasing height order; a shelf only accepts
/// rectangles no taller than its first one. `padding` separates neighbours on
/// a shelf and consecutive shelves, but is never added after the last
/// rectangle, so [`used_width`](Self::used_width) and
/// [`used_height`](Self::used_height) are a tight bounding box.
pub struct ShelfPacker {
    working_width: u32,
    padding: u32,
    shelves: Vec<Shelf>,
    used_width: u32,
    placed_area: u64,
}

impl ShelfPacker {
    pub fn new(working_width: u32, padding: u32) -> Self {
        Self {
            working_width,
            padding,
            shelves: Vec::new(),
            used_width: 0,
            placed_area: 0,
        }
    }

    /// Place a rectangle in the first shelf with room, or on a new shelf
    ///
    /// Returns `None` when `width` exceeds the working width or a new shelf
    /// would run past `u32::MAX`.
    pub fn insert(&mut self, width: u32, height: u32) -> Option<Rect> {
        if width > self.working_width {
            return None;
        }

        let rect = match self.find_in_shelves(width, height) {
            Some((index, x)) => {
                let shelf = &mut self.shelves[index];
                shelf.cursor = x + width;
                Rect::new(x, shelf.y, width, height)
            }
            None => {
                let y = self.shelves.last().map_or(0, |s| {
                    s.y.saturating_add(s.height).saturating_add(self.padding)
                });
                y.checked_add(height)?;
                self.shelves.push(Shelf {
                    y,
                    height,
                    cursor: width,
                });
                Rect::new(0, y, width, height)
            }
        };

        self.used_width = self.used_width.max(rect.right());
        self.placed_area += rect.area();
        Some(rect)
    }

    fn find_in_shelves(&self, width: u32, height: u32) -> Option<(usize, u32)> {
        self.shelves.iter().enumerate().find_map(|(i, shelf)| {
            let x = shelf.cursor.saturating_add(self.padding);
            let fits = x
                .checked_add(width)
                .is_some_and(|right| right <= self.working_width);
            (height <= shelf.height && fits).then_some((i, x))
        })
    }

    /// Rightmost edge of any placed rectangle
    pub fn used_width(&self) -> u32 {
        self.used_width
    }

    /// Bottom edge of the last shelf
    pub fn used_height(&self) -> u32 {
        self.shelves.last().map_or(0, |s| s.y + s.height)
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    /// Placed area over the used bounding box (0.0 to 1.0)
    pub fn occupancy(&self) -> f64 {
        let total = u64::from(self.used_width) * u64::from(self.used_height());
        if total == 0 {
            return 0.0;
        }
        self.placed_area as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_insert() {
        let mut packer = ShelfPacker::new(100, 0);
        let rect = packer.insert(50, 30).unwrap();

        assert_eq!(rect, Rect::new(0, 0, 50, 30));
        assert_eq!(packer.used_width(), 50);
        assert_eq!(packer.used_height(), 30);
    }

    #[test]
    fn test_fills_row_then_opens_shelf() {
        let mut packer = ShelfPacker::new(100, 0);

        let r1 = packer.insert(50, 50).unwrap();
        let r2 = packer.insert(50, 40).unwrap();
        let r3 = packer.insert(30, 30).unwrap();

        assert_eq!(r1, Rect::new(0, 0, 50, 50));
        assert_eq!(r2, Rect::new(50, 0, 50, 40));
        assert_eq!(r3, Rect::new(0, 50, 30, 30));
        assert_eq!(packer.shelf_count(), 2);
        assert_eq!(packer.used_height(), 80);
    }

    #[test]
    fn test_first_fit_reuses_earlier_shelf() {
        let mut packer = ShelfPacker::new(100, 0);

        packer.insert(70, 50).unwrap();
        packer.insert(60, 40).unwrap(); // too wide for shelf 0, opens shelf 1
        let r = packer.insert(30, 20).unwrap(); // fits back in shelf 0

        assert_eq!(r, Rect::new(70, 0, 30, 20));
        assert_eq!(packer.shelf_count(), 2);
    }

    #[test]
    fn test_padding_between_but_not_after() {
        let mut packer = ShelfPacker::new(25, 2);

        let r1 = packer.insert(10, 10).unwrap();
        let r2 = packer.insert(10, 10).unwrap();
        let r3 = packer.insert(10, 10).unwrap();

        assert_eq!(r1, Rect::new(0, 0, 10, 10));
        assert_eq!(r2, Rect::new(12, 0, 10, 10));
        assert_eq!(r3, Rect::new(0, 12, 10, 10));
        assert_eq!(packer.used_width(), 22);
        assert_eq!(packer.used_height(), 22);
    }

    #[test]
    fn test_too_wide() {
        let mut packer = ShelfPacker::new(100, 0);
        assert!(packer.insert(101, 10).is_none());
        assert!(packer.insert(100, 10).is_some());
    }

    #[test]
    fn test_padding_saturates_instead_of_wrapping() {
        let mut packer = ShelfPacker::new(u32::MAX, u32::MAX);

        assert_eq!(packer.insert(10, 10), Some(Rect::new(0, 0, 10, 10)));
        assert_eq!(packer.insert(10, 10), None);
        assert_eq!(packer.shelf_count(), 1);
    }

    #[test]
    fn test_placements_never_overlap() {
        let mut packer = ShelfPacker::new(64, 1);
        let sizes = [(30, 30), (30, 28), (20, 20), (40, 12), (10, 10), (64, 5), (3, 3)];

        let rects: Vec<Rect> = sizes
            .iter()
            .map(|&(w, h)| packer.insert(w, h).unwrap())
            .collect();

        for (i, a) in rects.iter().enumerate() {
            assert!(a.fits_within(packer.used_width(), packer.used_height()));
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_occupancy_full_row() {
        let mut packer = ShelfPacker::new(100, 0);
        packer.insert(50, 50).unwrap();
        packer.insert(50, 50).unwrap();

        let occupancy = packer.occupancy();
        assert!(
            (occupancy - 1.0).abs() < 0.01,
            "Expected occupancy ~1.0, got {}",
            occupancy
        );
    }

    #[test]
    fn test_occupancy_empty() {
        let packer = ShelfPacker::new(100, 0);
        assert_eq!(packer.occupancy(), 0.0);
    }
}
