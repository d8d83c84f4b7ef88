use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands paint in insertion order. `clear()` keeps the allocation, so a list
/// reused across frames stops allocating once warmed up.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates commands in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{Stroke, TriangleCmd};

    #[test]
    fn keeps_insertion_order() {
        let mut dl = DrawList::new();
        dl.push_point(Vec2::new(1.0, 1.0), 1.0, Color::black());
        dl.push_triangle(
            [Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            None,
            Some(Stroke::new(1.0, Color::black())),
        );
        dl.push_point(Vec2::new(2.0, 2.0), 1.0, Color::black());

        let kinds: Vec<&str> = dl
            .iter()
            .map(|c| match c {
                DrawCmd::Point(_) => "point",
                DrawCmd::Triangle(_) => "triangle",
            })
            .collect();
        assert_eq!(kinds, ["point", "triangle", "point"]);
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut dl = DrawList::new();
        for i in 0..100 {
            dl.push_point(Vec2::new(i as f32, 0.0), 1.0, Color::white());
        }
        let cap = dl.items.capacity();
        dl.clear();
        assert!(dl.is_empty());
        assert_eq!(dl.items.capacity(), cap);
    }

    #[test]
    fn triangle_payload_roundtrips() {
        let mut dl = DrawList::new();
        let pts = [Vec2::zero(), Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0)];
        dl.push_triangle(pts, Some(Color::white()), None);
        assert_eq!(
            dl.items(),
            &[DrawCmd::Triangle(TriangleCmd::new(pts, Some(Color::white()), None))]
        );
    }
}
