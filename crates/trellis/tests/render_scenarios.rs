//! End-to-end render scenarios against the in-memory canvas.

use trellis::prelude::*;
use trellis::{Size, constrain};

fn snapshot(layer: &dyn Layer, width: u16, height: u16) -> String {
    let mut grid = TextCanvas::new(width, height);
    layer.render(&mut grid);
    grid.to_string()
}

#[test]
fn three_fixed_children_pack_left() {
    let stack = row(vec![
        sized(5, 1, fill('a')),
        sized(5, 1, fill('b')),
        sized(5, 1, fill('c')),
    ]);
    assert_eq!(
        snapshot(stack.as_ref(), 20, 1),
        "aaaaabbbbbccccc     \n"
    );
}

#[test]
fn fixed_then_unbounded_split_a_column() {
    let stack = column(vec![sized(-1, 3, fill('a')), fill('b')]);
    let mut expected = String::new();
    expected.push_str("aa\naa\naa\n");
    expected.push_str("bb\nbb\nbb\nbb\nbb\nbb\nbb\n");
    assert_eq!(snapshot(stack.as_ref(), 2, 10), expected);
}

#[test]
fn bounded_minimum_yields_to_unbounded_neighbor() {
    let stack = row(vec![
        constrain(Some(Size::bounded(2, 4)), Some(Size::Fixed(1)), fill('a')),
        sized(-1, 1, fill('b')),
    ]);
    assert_eq!(snapshot(stack.as_ref(), 3, 1), "aab\n");
}

#[test]
fn hidden_tab_renders_blank() {
    let tab = Tab::new();
    tab.set_children(vec![sized(3, 1, fill('a'))]);
    let mut grid = TextCanvas::new(4, 2);
    grid.draw_text(0, 0, "####", Attr::DEFAULT, Attr::DEFAULT);
    grid.draw_text(0, 1, "####", Attr::DEFAULT, Attr::DEFAULT);
    tab.render(&mut grid);
    assert_eq!(grid.to_string(), "    \n    \n");
}

#[test]
fn selected_tab_matches_standalone_child() {
    let child = sized(3, 1, fill('a'));
    let tab = Tab::new();
    tab.set_children(vec![child.clone(), sized(2, 1, fill('b'))]);
    tab.show_index(0);

    let via_tab = snapshot(tab.as_ref(), 5, 2);
    let standalone = snapshot(child.as_ref(), 5, 2);
    assert_eq!(via_tab, standalone);
}

#[test]
fn border_frames_and_preserves_the_interior() {
    let content = text("abc\nde");
    let standalone = snapshot(content.as_ref(), 3, 2);

    let framed = border('-', '|', content);
    assert_eq!(framed.width(), Size::Fixed(5));
    assert_eq!(framed.height(), Size::Fixed(4));
    let rendered = snapshot(framed.as_ref(), 5, 4);
    let rows: Vec<&str> = rendered.lines().collect();

    assert_eq!(rows[0], "|---|");
    assert_eq!(rows[3], "|---|");
    for row in &rows[1..3] {
        assert!(row.starts_with('|') && row.ends_with('|'));
    }

    let interior: String = rows[1..3]
        .iter()
        .map(|row| format!("{}\n", &row[1..4]))
        .collect();
    assert_eq!(interior, standalone);
}

#[test]
fn rendering_twice_is_idempotent() {
    let tree = border(
        '-',
        '|',
        row(vec![
            sized(3, -1, fill('*')),
            column(vec![sized(-1, 1, text_line("hi")), fill('.')]) as LayerRef,
        ]),
    );
    let first = snapshot(tree.as_ref(), 10, 5);
    let second = snapshot(tree.as_ref(), 10, 5);
    assert_eq!(first, second);
    assert_eq!(
        first,
        "|--------|\n|***hi   |\n|***.....|\n|***.....|\n|--------|\n"
    );
}

#[test]
fn rendering_twice_is_idempotent_with_memoization() {
    let cached = memoized(row(vec![
        sized(3, -1, fill('*')),
        column(vec![sized(-1, 1, text_line("hi")), fill('.')]) as LayerRef,
    ]));
    let first = snapshot(cached.as_ref(), 8, 3);
    let second = snapshot(cached.as_ref(), 8, 3);
    assert_eq!(first, second);
    assert_eq!(first, "***hi   \n***.....\n***.....\n");
}

#[test]
fn invalidation_recomputes_for_a_new_extent() {
    let cached = memoized(row(vec![sized(3, 1, fill('a')), sized(-1, 1, fill('b'))]));
    prewarm(cached.as_ref(), 6, 1);
    assert_eq!(snapshot(cached.as_ref(), 6, 1), "aaabbb\n");

    // Stale reuse at a different extent is the documented behavior...
    assert_eq!(snapshot(cached.as_ref(), 8, 1), "aaabbb  \n");

    // ...and invalidation picks up the new extent.
    cached.invalidate();
    assert_eq!(snapshot(cached.as_ref(), 8, 1), "aaabbbbb\n");
}

#[test]
fn overlay_composes_with_alignment() {
    let tree = overlay(vec![
        fill('.'),
        align_bottom_right(sized(3, 1, fill('x'))),
    ]);
    assert_eq!(
        snapshot(tree.as_ref(), 6, 3),
        "......\n......\n...xxx\n"
    );
}

#[test]
fn color_defaults_do_not_disturb_glyphs() {
    let tree = with_color(Attr::GREEN, Attr::BLACK, sized(3, 1, fill('g')));
    assert_eq!(snapshot(tree.as_ref(), 3, 1), "ggg\n");
}

#[test]
fn deep_nesting_keeps_offsets_cumulative() {
    let inner = row(vec![sized(1, 1, fill('1')), sized(1, 1, fill('2'))]);
    let tree = column(vec![
        sized(-1, 1, fill('-')),
        row(vec![sized(2, 1, fill('|')), inner as LayerRef]) as LayerRef,
    ]);
    assert_eq!(snapshot(tree.as_ref(), 4, 2), "----\n||12\n");
}
