#![forbid(unsafe_code)]

//! Stack layers: horizontal, vertical, and overlay composition.

use crate::{Composite, Layer, LayerRef, child_heights, child_widths, render_stack};
use std::rc::Rc;
use trellis_layout::{Size, alloc_fair, alloc_max, size};
use trellis_render::{Canvas, View};

/// Children laid end-to-end left to right.
pub struct Row {
    children: Vec<LayerRef>,
}

/// Children stacked top to bottom.
pub struct Column {
    children: Vec<LayerRef>,
}

/// Children painted over each other at a shared origin.
///
/// Later children paint after (and therefore over) earlier ones; sequence
/// position is the z-order.
pub struct Overlay {
    children: Vec<LayerRef>,
}

/// A horizontal stack.
pub fn row(children: Vec<LayerRef>) -> Rc<Row> {
    Rc::new(Row { children })
}

/// A vertical stack.
pub fn column(children: Vec<LayerRef>) -> Rc<Column> {
    Rc::new(Column { children })
}

/// An overlay stack.
pub fn overlay(children: Vec<LayerRef>) -> Rc<Overlay> {
    Rc::new(Overlay { children })
}

impl Layer for Row {
    fn width(&self) -> Size {
        size::sum(self.children.iter().map(|c| c.width()))
    }

    fn height(&self) -> Size {
        size::max(self.children.iter().map(|c| c.height()))
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        render_stack(self, canvas);
    }

    fn invalidate(&self) {
        for child in &self.children {
            child.invalidate();
        }
    }
}

impl Composite for Row {
    fn children(&self) -> &[LayerRef] {
        &self.children
    }

    fn alloc_sizes(&self, width: u16, height: u16) -> (Vec<u16>, Vec<u16>) {
        (
            alloc_fair(width, &child_widths(&self.children)),
            alloc_max(height, &child_heights(&self.children)),
        )
    }

    fn render_alloc(&self, canvas: &mut dyn Canvas, widths: &[u16], heights: &[u16]) {
        let mut x = 0u16;
        for (i, child) in self.children.iter().enumerate() {
            let mut sub = View::new(&mut *canvas, x, 0, widths[i], heights[i]);
            child.render(&mut sub);
            x = x.saturating_add(widths[i]);
        }
    }
}

impl Layer for Column {
    fn width(&self) -> Size {
        size::max(self.children.iter().map(|c| c.width()))
    }

    fn height(&self) -> Size {
        size::sum(self.children.iter().map(|c| c.height()))
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        render_stack(self, canvas);
    }

    fn invalidate(&self) {
        for child in &self.children {
            child.invalidate();
        }
    }
}

impl Composite for Column {
    fn children(&self) -> &[LayerRef] {
        &self.children
    }

    fn alloc_sizes(&self, width: u16, height: u16) -> (Vec<u16>, Vec<u16>) {
        (
            alloc_max(width, &child_widths(&self.children)),
            alloc_fair(height, &child_heights(&self.children)),
        )
    }

    fn render_alloc(&self, canvas: &mut dyn Canvas, widths: &[u16], heights: &[u16]) {
        let mut y = 0u16;
        for (i, child) in self.children.iter().enumerate() {
            let mut sub = View::new(&mut *canvas, 0, y, widths[i], heights[i]);
            child.render(&mut sub);
            y = y.saturating_add(heights[i]);
        }
    }
}

impl Layer for Overlay {
    fn width(&self) -> Size {
        size::max(self.children.iter().map(|c| c.width()))
    }

    fn height(&self) -> Size {
        size::max(self.children.iter().map(|c| c.height()))
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        render_stack(self, canvas);
    }

    fn invalidate(&self) {
        for child in &self.children {
            child.invalidate();
        }
    }
}

impl Composite for Overlay {
    fn children(&self) -> &[LayerRef] {
        &self.children
    }

    fn alloc_sizes(&self, width: u16, height: u16) -> (Vec<u16>, Vec<u16>) {
        (
            alloc_max(width, &child_widths(&self.children)),
            alloc_max(height, &child_heights(&self.children)),
        )
    }

    fn render_alloc(&self, canvas: &mut dyn Canvas, widths: &[u16], heights: &[u16]) {
        for (i, child) in self.children.iter().enumerate() {
            let mut sub = View::new(&mut *canvas, 0, 0, widths[i], heights[i]);
            child.render(&mut sub);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{column, overlay, row};
    use crate::leaf::{fill, text};
    use crate::{Layer, LayerRef, sized};
    use trellis_layout::Size;
    use trellis_render::TextCanvas;

    #[test]
    fn row_aggregates_sizes() {
        let stack = row(vec![
            sized(3, 1, fill('a')),
            sized(4, 2, fill('b')),
        ]);
        assert_eq!(stack.width(), Size::Fixed(7));
        assert_eq!(stack.height(), Size::Fixed(2));
    }

    #[test]
    fn column_aggregates_sizes() {
        let stack = column(vec![
            sized(3, 1, fill('a')),
            sized(4, 2, fill('b')),
        ]);
        assert_eq!(stack.width(), Size::Fixed(4));
        assert_eq!(stack.height(), Size::Fixed(3));
    }

    #[test]
    fn row_places_children_left_to_right() {
        let stack = row(vec![
            sized(2, 1, fill('a')),
            sized(3, 1, fill('b')),
        ]);
        let mut grid = TextCanvas::new(8, 1);
        stack.render(&mut grid);
        assert_eq!(grid.to_string(), "aabbb   \n");
    }

    #[test]
    fn column_places_children_top_to_bottom() {
        let stack = column(vec![
            sized(2, 1, fill('a')),
            sized(2, 2, fill('b')),
        ]);
        let mut grid = TextCanvas::new(2, 4);
        stack.render(&mut grid);
        assert_eq!(grid.to_string(), "aa\nbb\nbb\n  \n");
    }

    #[test]
    fn row_cross_axis_is_independent() {
        let stack = row(vec![
            sized(2, 1, fill('a')),
            sized(2, 3, fill('b')),
        ]);
        let mut grid = TextCanvas::new(4, 3);
        stack.render(&mut grid);
        assert_eq!(grid.to_string(), "aabb\n  bb\n  bb\n");
    }

    #[test]
    fn overlay_last_child_paints_over() {
        let stack = overlay(vec![
            sized(3, 1, fill('a')),
            sized(2, 1, fill('b')),
        ]);
        let mut grid = TextCanvas::new(3, 1);
        stack.render(&mut grid);
        assert_eq!(grid.to_string(), "bba\n");
    }

    #[test]
    fn nested_stacks_compose() {
        let inner: LayerRef = column(vec![
            sized(2, 1, fill('x')),
            sized(2, 1, fill('y')),
        ]);
        let stack = row(vec![sized(1, 2, fill('|')), inner]);
        let mut grid = TextCanvas::new(3, 2);
        stack.render(&mut grid);
        assert_eq!(grid.to_string(), "|xx\n|yy\n");
    }

    #[test]
    fn empty_stack_renders_nothing() {
        let stack = row(vec![]);
        let mut grid = TextCanvas::new(3, 1);
        stack.render(&mut grid);
        assert_eq!(grid.to_string(), "   \n");
        assert_eq!(stack.width(), Size::Fixed(0));
    }

    #[test]
    fn text_in_a_column_keeps_its_block_extent() {
        let stack = column(vec![text("ab\ncd"), sized(2, 1, fill('-'))]);
        let mut grid = TextCanvas::new(2, 3);
        stack.render(&mut grid);
        assert_eq!(grid.to_string(), "ab\ncd\n--\n");
    }
}
